//! Caching infrastructure for the service layer.
//!
//! A cache is a set of named groups, each a map from record key to JSON
//! value. Redis backs it in deployments; [`MemoryCacheService`] stands in
//! when Redis is disabled.

mod cache_interface;
pub mod cache_keys;
mod memory_cache;
mod redis_cache;

pub use cache_interface::{CacheExt, CacheInterface};
pub use cache_keys::CacheGroup;
pub use memory_cache::MemoryCacheService;
pub use redis_cache::RedisCacheService;

#[cfg(test)]
pub use cache_interface::MockCacheInterface;
