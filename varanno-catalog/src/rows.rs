//! Typed rows of the four static reference tables. All are plain records
//! deserialized once at load time and read-only afterwards.

use serde::{Deserialize, Serialize};

/// One trait-catalog entry. Several rows may share an rsid.
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct TraitRow {
    #[serde(rename = "trait")]
    pub trait_name: String,
    pub rsid: String,
    pub effect_allele: String,
    pub source_url: Option<String>,
}

/// One protein-coordinate mapping. Several rows may share a uniprot id
/// (multiple residues per protein); lookup is by rsid.
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct ProteinMapRow {
    pub rsid: String,
    pub uniprot: String,
    pub alphafold_cif_url: String,
    pub residue_index: u32,
    pub protein_change: Option<String>,
}

/// One polygenic-score weight.
#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct PgsWeightRow {
    pub rsid: String,
    pub effect_allele: String,
    pub weight: f64,
}

/// Fixed-length amino-acid window around a variant's residue, keyed by
/// rsid in `aa_windows.json`.
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct AaWindow {
    pub wt_seq: String,
    pub mut_seq: String,
    pub center_index: usize,
}
