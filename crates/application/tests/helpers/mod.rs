#![allow(dead_code)]

mod mock_providers;
mod mock_repositories;

pub use mock_providers::*;
pub use mock_repositories::*;
