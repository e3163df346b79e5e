//! # tavern-client
//!
//! Typed client for the Tavern campaign server.
//!
//! - [`ApiClient`]: reqwest-based REST client; one method per endpoint,
//!   explicit [`Credentials`] on every call
//! - [`resolver`]: (game, type, id) → [`EntityQuery`] with exhaustive
//!   per-type dispatch through [`EntitySource`]
//! - [`QueryCache`]: type-erased cache with per-key request coalescing
//! - [`CachedClient`]: reads through the cache, writes with invalidation

pub mod cache;
pub mod cache_key;
pub mod resolver;

mod cached;
mod client;
mod credentials;
mod entities;
mod error;
mod games;
mod http;
mod links;

pub use cache::QueryCache;
pub use cache_key::CacheKey;
pub use cached::CachedClient;
pub use client::ApiClient;
pub use credentials::Credentials;
pub use entities::EntitySource;
pub use error::ApiError;
pub use links::EntityRef;
pub use resolver::{EntityQuery, resolve, resolve_tag};
