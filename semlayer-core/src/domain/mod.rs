pub mod dataset;
pub mod error;
pub mod semantic;

// Re-exports pratiques pour simplifier les imports ailleurs
pub use error::DomainError;
