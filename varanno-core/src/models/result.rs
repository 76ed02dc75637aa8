use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::pgs::PgsScore;
use super::protein::ProteinTarget;
use super::traits::TraitCoverageRow;
use super::variant::AnnotatedVariant;

///
/// The assembled, pre-sanitization result of one pipeline run.
///
/// Request-local: produced fresh per run, never persisted or shared.
/// Degradation of any stage shows up only in `notes`, never as an error.
///
#[derive(PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub variants: Vec<AnnotatedVariant>,
    pub traits: Vec<TraitCoverageRow>,
    pub protein: Option<ProteinTarget>,
    pub pgs: Option<BTreeMap<String, PgsScore>>,
    pub notes: Vec<String>,
}
