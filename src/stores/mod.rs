// Stores layer - Data access and repository pattern
pub mod credential_store;
pub mod progress_store;

pub use credential_store::CredentialStore;
pub use progress_store::ProgressStore;
