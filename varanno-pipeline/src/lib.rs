pub mod analyzer;
pub mod contract;
pub mod errors;
pub mod structure;

// re-exports
pub use analyzer::Analyzer;
pub use contract::{finalize, sanitize};
pub use errors::ContractError;
pub use structure::{StructurePredictor, UniformPredictor};
