mod cache_aside;

pub use cache_aside::CacheAsideResolver;
