pub mod providers;
pub mod repositories;
pub mod use_cases;

pub use providers::Providers;
pub use repositories::Repositories;
pub use use_cases::UseCases;
