use serde::{Deserialize, Serialize};

/// Whether a cataloged trait variant has a counterpart in the user's data.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoverageStatus {
    Covered,
    Missing,
}

///
/// One row of the trait-coverage report: a trait-catalog entry joined
/// against the user's variant set.
///
/// Invariant: `status` is `Covered` iff the user's set contains the rsid,
/// and `your_genotype` is `None` iff the status is `Missing`.
///
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct TraitCoverageRow {
    #[serde(rename = "trait")]
    pub trait_name: String,
    pub rsid: String,
    pub effect_allele: String,
    pub your_genotype: Option<String>,
    pub status: CoverageStatus,
    pub source_url: Option<String>,
}
