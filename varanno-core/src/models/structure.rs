use serde::{Deserialize, Serialize};

/// Secondary-structure class probabilities for one sequence, plus the
/// model's confidence. All values are in `[0, 1]`.
#[derive(PartialEq, Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StructureProbs {
    pub helix: f64,
    pub sheet: f64,
    pub coil: f64,
    pub confidence: f64,
}

/// Per-class probability shift between the mutant and wild-type sequences.
#[derive(PartialEq, Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StructureShift {
    pub helix: f64,
    pub sheet: f64,
    pub coil: f64,
}

/// The amino-acid window the prediction was made over.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StructureWindow {
    pub center: usize,
    pub length: usize,
}

///
/// Call contract of the secondary-structure black box: probabilities for
/// the wild-type and mutant windows and their per-class delta.
///
#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct StructureDelta {
    pub window: StructureWindow,
    pub wt: StructureProbs,
    #[serde(rename = "mut")]
    pub mutant: StructureProbs,
    pub delta: StructureShift,
}
