//! Relief API Application Layer
//!
//! Ports describe what the core needs from the outside world (cache store,
//! record stores, enrichment providers, clock). Services and use cases hold
//! the orchestration, most importantly the cache-aside resolver.
pub mod ports;
pub mod services;
pub mod use_cases;
