//! The polygenic score engine.
//!
//! Accumulates `weight * dosage` over the PGS weight table, normalizes to a
//! z-score against the fixed demo reference distribution, and converts to a
//! percentile. Missing variants contribute a dosage of 0 and are counted in
//! the notes; the engine itself never fails.

use std::collections::HashMap;

use varanno_catalog::rows::PgsWeightRow;
use varanno_core::genotype::{dosage, percentile_from_z};
use varanno_core::models::{PgsScore, Variant};

use crate::consts::{PGS_ID, PGS_NOTE, REFERENCE_MEAN, REFERENCE_SD};

///
/// Compute the demo BMI polygenic score for a variant set.
///
/// An empty weight table or an entirely-missing variant set yields
/// `z = 0, percentile = 50`. O(N + M) for N variants and M weight rows.
///
pub fn compute_bmi_pgs(variants: &[Variant], weights: &[PgsWeightRow]) -> (PgsScore, Vec<String>) {
    let variant_lookup: HashMap<&str, &Variant> =
        variants.iter().map(|v| (v.rsid.as_str(), v)).collect();

    let mut score = 0.0;
    let mut missing_snps = 0usize;
    for row in weights {
        match variant_lookup.get(row.rsid.as_str()) {
            Some(variant) => {
                score += row.weight * f64::from(dosage(&variant.genotype, &row.effect_allele));
            }
            None => missing_snps += 1,
        }
    }

    // sd == 0 would divide by zero; force a neutral z instead.
    let z = if REFERENCE_SD == 0.0 {
        0.0
    } else {
        (score - REFERENCE_MEAN) / REFERENCE_SD
    };

    let result = PgsScore {
        z,
        percentile: percentile_from_z(z),
        pgs_id: PGS_ID.to_string(),
        note: PGS_NOTE.to_string(),
    };
    let notes = vec![format!("missing_snps: {missing_snps}")];
    (result, notes)
}
