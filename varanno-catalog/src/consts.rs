//! Resource file names expected inside a catalog data directory.

pub const TRAITS_FILE: &str = "traits_catalog.csv";
pub const PROTEIN_MAP_FILE: &str = "protein_map.csv";
pub const PGS_FILE: &str = "pgs_bmi_small.csv";
pub const AA_WINDOWS_FILE: &str = "aa_windows.json";
