//! Reference-site URL templates keyed by rsid/chrom/pos. No network access;
//! the links are constructible even for rsids unknown to any catalog.

/// dbSNP entry for an rsid.
pub fn dbsnp_url(rsid: &str) -> String {
    format!("https://www.ncbi.nlm.nih.gov/snp/{rsid}")
}

/// Ensembl variation explorer for a variant.
pub fn ensembl_url(chrom: &str, pos: u64, rsid: &str) -> String {
    format!(
        "https://www.ensembl.org/Homo_sapiens/Variation/Explore?v={rsid}&vdb=variant;vf={chrom}:{pos}"
    )
}
