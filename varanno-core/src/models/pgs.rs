use serde::{Deserialize, Serialize};

///
/// Summary of one polygenic score: z-score against the demo reference
/// distribution and the matching percentile.
///
#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct PgsScore {
    pub z: f64,
    pub percentile: u8,
    pub pgs_id: String,
    pub note: String,
}
