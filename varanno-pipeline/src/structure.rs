//! Call contract of the secondary-structure black box.
//!
//! The pipeline treats the predictor as an external capability behind one
//! interface: a pair of equal-length amino-acid windows in, per-class
//! probabilities plus confidence out. The real model lives outside this
//! crate; [`UniformPredictor`] is the built-in fallback so the pipeline
//! runs without one.

use anyhow::Result;

use varanno_core::models::{StructureDelta, StructureProbs, StructureShift, StructureWindow};

pub trait StructurePredictor: Send + Sync {
    ///
    /// Predict the secondary-structure delta between a wild-type and a
    /// mutant window. All returned probabilities must be in `[0, 1]`.
    ///
    fn predict(&self, wt_seq: &str, mut_seq: &str) -> Result<StructureDelta>;
}

/// Fallback predictor: uniform class probabilities at low confidence.
#[derive(Debug, Default, Clone, Copy)]
pub struct UniformPredictor;

impl UniformPredictor {
    const UNIFORM: StructureProbs = StructureProbs {
        helix: 1.0 / 3.0,
        sheet: 1.0 / 3.0,
        coil: 1.0 / 3.0,
        confidence: 0.1,
    };
}

impl StructurePredictor for UniformPredictor {
    fn predict(&self, wt_seq: &str, _mut_seq: &str) -> Result<StructureDelta> {
        Ok(StructureDelta {
            window: StructureWindow {
                center: wt_seq.len() / 2,
                length: wt_seq.len(),
            },
            wt: Self::UNIFORM,
            mutant: Self::UNIFORM,
            delta: StructureShift {
                helix: 0.0,
                sheet: 0.0,
                coil: 0.0,
            },
        })
    }
}
