//! Variant/trait join: derived reference links per variant plus a
//! coverage row per trait-catalog entry.

use std::collections::HashMap;

use varanno_catalog::Catalog;
use varanno_core::models::{AnnotatedVariant, CoverageStatus, TraitCoverageRow, Variant};

///
/// Annotate the input variants and join them against the trait catalog.
///
/// Every input variant yields an [AnnotatedVariant]; every trait-catalog
/// row yields a [TraitCoverageRow] in catalog order, `Covered` iff the
/// user's set contains its rsid. O(N + M) for N variants and M trait rows.
///
/// Returns the annotated variants, the coverage rows, and summary notes.
///
pub fn join_annotations(
    variants: &[Variant],
    catalog: &Catalog,
) -> (Vec<AnnotatedVariant>, Vec<TraitCoverageRow>, Vec<String>) {
    let variant_lookup: HashMap<&str, &Variant> =
        variants.iter().map(|v| (v.rsid.as_str(), v)).collect();

    let annotated: Vec<AnnotatedVariant> = variants.iter().map(AnnotatedVariant::from).collect();

    let mut traits = Vec::with_capacity(catalog.trait_rows().len());
    let mut covered = 0usize;
    for row in catalog.trait_rows() {
        let hit = variant_lookup.get(row.rsid.as_str());
        if hit.is_some() {
            covered += 1;
        }
        traits.push(TraitCoverageRow {
            trait_name: row.trait_name.clone(),
            rsid: row.rsid.clone(),
            effect_allele: row.effect_allele.clone(),
            your_genotype: hit.map(|v| v.genotype.clone()),
            status: if hit.is_some() {
                CoverageStatus::Covered
            } else {
                CoverageStatus::Missing
            },
            source_url: row.source_url.clone(),
        });
    }

    let notes = vec![format!(
        "Traits coverage: {}/{} covered.",
        covered,
        traits.len()
    )];
    (annotated, traits, notes)
}
