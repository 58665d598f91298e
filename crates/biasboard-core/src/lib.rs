//! Core types and trait definitions for the Biasboard report registry.
//!
//! Domain records, the moderation queue types, and the [`store::BiasStore`]
//! trait live here, free of HTTP and database dependencies. The storage and
//! API crates both build on this one.

// Native `async fn` in traits; silence the advisory lint about `Send`
// bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod error;
pub mod record;
pub mod store;
pub mod submission;
pub mod user;

pub use error::{Error, Result};
