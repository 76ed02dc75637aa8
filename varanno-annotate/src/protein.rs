//! Protein target selection over the protein-coordinate map.

use std::collections::HashSet;

use varanno_catalog::Catalog;
use varanno_core::models::{ProteinResidue, ProteinTarget, Variant};

/// Note emitted when no catalog rsid intersects the user's variants.
pub const NO_PROTEIN_MAPPED: &str = "no_protein_mapped";

///
/// Select the protein target for a variant set.
///
/// If `preferred_rsid` is present in both the user's variants and the
/// catalog it determines the protein; otherwise the first catalog row whose
/// rsid intersects the variant set does. The residue list is restricted to
/// rsids present in both sources, for the chosen uniprot, in catalog order.
/// O(N + M) for N variants and M protein rows.
///
pub fn build_protein_target(
    variants: &[Variant],
    catalog: &Catalog,
    preferred_rsid: Option<&str>,
) -> (Option<ProteinTarget>, Vec<String>) {
    let user_rsids: HashSet<&str> = variants.iter().map(|v| v.rsid.as_str()).collect();

    let chosen = preferred_rsid
        .filter(|rsid| user_rsids.contains(rsid))
        .and_then(|rsid| catalog.protein_rows_for(rsid).next())
        .or_else(|| {
            catalog
                .protein_rows()
                .iter()
                .find(|row| user_rsids.contains(row.rsid.as_str()))
        });

    let Some(chosen) = chosen else {
        return (None, vec![NO_PROTEIN_MAPPED.to_string()]);
    };

    let residues: Vec<ProteinResidue> = catalog
        .protein_rows()
        .iter()
        .filter(|row| row.uniprot == chosen.uniprot && user_rsids.contains(row.rsid.as_str()))
        .map(|row| ProteinResidue {
            rsid: row.rsid.clone(),
            index: row.residue_index,
            protein_change: row.protein_change.clone(),
        })
        .collect();

    let target = ProteinTarget {
        uniprot: chosen.uniprot.clone(),
        alphafold_cif_url: chosen.alphafold_cif_url.clone(),
        residues,
        ss: None,
    };
    (Some(target), Vec::new())
}
