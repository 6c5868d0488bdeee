mod create_disaster;
mod delete_disaster;
mod get_disasters;
mod update_disaster;

pub use create_disaster::CreateDisasterUseCase;
pub use delete_disaster::DeleteDisasterUseCase;
pub use get_disasters::GetDisastersUseCase;
pub use update_disaster::UpdateDisasterUseCase;
