use serde::{Deserialize, Serialize};

///
/// Configuration for one pipeline run.
///
/// Defaults match the demo API: traits and protein targeting on, PGS off,
/// no preferred rsid.
///
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub run_traits: bool,
    pub run_protein: bool,
    pub run_pgs: bool,
    pub target_rsid: Option<String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            run_traits: true,
            run_protein: true,
            run_pgs: false,
            target_rsid: None,
        }
    }
}
