//! Genotype utilities: normalization, effect-allele dosage, and z-score to
//! percentile conversion. All functions here are total; malformed input
//! degrades to the missing sentinel or a zero dosage, never an error.

use statrs::function::erf::erf;

/// Sentinel for a missing or unreadable genotype call.
pub const MISSING_GENOTYPE: &str = "--";

///
/// Normalize a raw genotype string to its canonical form.
///
/// Uppercases, keeps only A/C/G/T characters, duplicates a lone allele to a
/// homozygous pair, truncates to two alleles, and sorts them so the
/// representation is order-insensitive. Returns `"--"` when no valid allele
/// characters remain. Idempotent.
///
pub fn normalize_genotype(raw: &str) -> String {
    let mut alleles: Vec<u8> = raw
        .bytes()
        .map(|b| b.to_ascii_uppercase())
        .filter(|b| matches!(b, b'A' | b'C' | b'G' | b'T'))
        .collect();
    if alleles.is_empty() {
        return MISSING_GENOTYPE.to_string();
    }
    if alleles.len() == 1 {
        alleles.push(alleles[0]);
    }
    alleles.truncate(2);
    alleles.sort_unstable();
    // alleles is valid ASCII by construction
    String::from_utf8(alleles).unwrap_or_else(|_| MISSING_GENOTYPE.to_string())
}

///
/// Count of the effect allele in a genotype, in `0..=2`.
///
/// The genotype is normalized first, so the count is invariant under allele
/// order. The missing sentinel always yields 0.
///
pub fn dosage(genotype: &str, effect_allele: &str) -> u8 {
    let gt = normalize_genotype(genotype);
    if gt == MISSING_GENOTYPE {
        return 0;
    }
    let Some(effect) = effect_allele.trim().bytes().next() else {
        return 0;
    };
    let effect = effect.to_ascii_uppercase();
    gt.bytes().filter(|&b| b == effect).count() as u8
}

///
/// Standard normal CDF of `z`, scaled to `0..=100` and rounded.
///
/// The final clamp defends against rounding producing a value a hair
/// outside the range.
///
pub fn percentile_from_z(z: f64) -> u8 {
    let p = 0.5 * (1.0 + erf(z / std::f64::consts::SQRT_2));
    (p * 100.0).round().clamp(0.0, 100.0) as u8
}
