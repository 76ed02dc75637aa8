//! varanno: a demo genomics annotation pipeline.
//!
//! Joins user-supplied variants against static reference catalogs (trait
//! catalog, protein-coordinate map, PGS weights, amino-acid windows) and
//! produces an annotated, contract-sanitized report. Educational use only;
//! nothing here is real statistical genetics.

#[cfg(feature = "annotate")]
pub use varanno_annotate as annotate;
#[cfg(feature = "catalog")]
pub use varanno_catalog as catalog;
#[cfg(feature = "core")]
pub use varanno_core as core;
#[cfg(feature = "pipeline")]
pub use varanno_pipeline as pipeline;
#[cfg(feature = "scoring")]
pub use varanno_scoring as scoring;
