use serde::{Deserialize, Serialize};

use super::structure::StructureDelta;

/// One mapped residue of the selected protein.
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct ProteinResidue {
    pub rsid: String,
    pub index: u32,
    pub protein_change: Option<String>,
}

///
/// The protein highlight block: one uniprot entry, its AlphaFold model URL,
/// and the residues backed by both the catalog and the user's variants.
///
/// `ss` carries the secondary-structure delta prediction when the pipeline
/// could run it; it is omitted from serialized output otherwise.
///
#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct ProteinTarget {
    pub uniprot: String,
    pub alphafold_cif_url: String,
    pub residues: Vec<ProteinResidue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ss: Option<StructureDelta>,
}
