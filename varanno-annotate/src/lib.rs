pub mod join;
pub mod protein;

// re-exports
pub use join::join_annotations;
pub use protein::build_protein_target;
