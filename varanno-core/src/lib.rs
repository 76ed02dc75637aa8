pub mod genotype;
pub mod links;
pub mod models;

// re-export for cleaner imports
pub use self::models::{
    AnalysisConfig, AnalysisResult, AnnotatedVariant, CoverageStatus, PgsScore, ProteinResidue,
    ProteinTarget, StructureDelta, StructureProbs, StructureShift, StructureWindow,
    TraitCoverageRow, Variant, VariantLinks,
};
