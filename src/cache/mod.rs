//! Caching for upstream API payloads.
//!
//! A single `MemoryCache` instance is shared by every request handler in
//! the process; each endpoint reads through it with its own TTL.

pub mod memory_cache;

pub use memory_cache::MemoryCache;
