pub mod config;
pub mod pgs;
pub mod protein;
pub mod result;
pub mod structure;
pub mod traits;
pub mod variant;

// re-export for cleaner imports
pub use self::config::AnalysisConfig;
pub use self::pgs::PgsScore;
pub use self::protein::{ProteinResidue, ProteinTarget};
pub use self::result::AnalysisResult;
pub use self::structure::{StructureDelta, StructureProbs, StructureShift, StructureWindow};
pub use self::traits::{CoverageStatus, TraitCoverageRow};
pub use self::variant::{AnnotatedVariant, Variant, VariantLinks};
