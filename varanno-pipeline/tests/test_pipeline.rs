//! End-to-end tests for the pipeline: variants + on-disk catalog in,
//! sanitized contract out.

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use pretty_assertions::assert_eq;
use serde_json::json;
use tempfile::TempDir;

use varanno_catalog::consts::{AA_WINDOWS_FILE, PGS_FILE, PROTEIN_MAP_FILE, TRAITS_FILE};
use varanno_catalog::Catalog;
use varanno_core::models::{AnalysisConfig, CoverageStatus, Variant};
use varanno_pipeline::{finalize, Analyzer};

fn write_file(dir: &Path, name: &str, content: &str) {
    let mut file = std::fs::File::create(dir.join(name)).unwrap();
    write!(file, "{}", content).unwrap();
}

/// A catalog directory covering all four resources.
fn demo_data_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_file(
        dir.path(),
        TRAITS_FILE,
        "trait,rsid,effect_allele,source_url\n\
         Lactose tolerance,rs4988235,A,https://example.org/lct\n\
         Caffeine metabolism,rs762551,A,https://example.org/cyp1a2\n",
    );
    write_file(
        dir.path(),
        PROTEIN_MAP_FILE,
        "rsid,uniprot,alphafold_cif_url,residue_index,protein_change\n\
         rs1042522,P04637,https://alphafold.ebi.ac.uk/files/AF-P04637-F1-model_v4.cif,72,P72R\n",
    );
    write_file(
        dir.path(),
        PGS_FILE,
        "rsid,effect_allele,weight\nrs4988235,A,2.0\n",
    );
    write_file(
        dir.path(),
        AA_WINDOWS_FILE,
        r#"{"rs1042522": {"wt_seq": "ACDEFGHIK", "mut_seq": "ACDERGHIK", "center_index": 4}}"#,
    );
    dir
}

fn analyzer_for(dir: &TempDir) -> Analyzer {
    Analyzer::new(Arc::new(Catalog::load(dir.path())))
}

#[test]
fn test_trait_coverage_end_to_end() {
    let dir = demo_data_dir();
    let variants = vec![Variant::new("rs4988235", "2", 136608646, "AG")];
    let result = analyzer_for(&dir).run(&variants, &AnalysisConfig::default());

    let lct = result
        .traits
        .iter()
        .find(|t| t.rsid == "rs4988235")
        .unwrap();
    assert_eq!(lct.status, CoverageStatus::Covered);
    assert_eq!(lct.your_genotype.as_deref(), Some("AG"));
    assert!(result
        .notes
        .iter()
        .any(|n| n == "Traits coverage: 1/2 covered."));
}

#[test]
fn test_protein_target_end_to_end() {
    let dir = demo_data_dir();
    let variants = vec![Variant::new("rs1042522", "17", 7579472, "GG")];
    let result = analyzer_for(&dir).run(&variants, &AnalysisConfig::default());

    let protein = result.protein.unwrap();
    assert_eq!(protein.uniprot, "P04637");
    assert_eq!(protein.residues.len(), 1);
    assert_eq!(protein.residues[0].rsid, "rs1042522");
    assert_eq!(protein.residues[0].index, 72);
    // the aa window exists, so the structure delta is attached
    let ss = protein.ss.unwrap();
    assert_eq!(ss.window.length, 9);
}

#[test]
fn test_empty_variant_list_completes_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let analyzer = analyzer_for(&dir);
    let config = AnalysisConfig {
        run_pgs: true,
        ..AnalysisConfig::default()
    };
    let result = analyzer.run(&[], &config);

    assert!(result.variants.is_empty());
    assert!(result.traits.is_empty());
    assert!(result.protein.is_none());
    let pgs = result.pgs.unwrap();
    assert_eq!(pgs["bmi"].z, 0.0);
    assert_eq!(pgs["bmi"].percentile, 50);
}

#[test]
fn test_pgs_end_to_end() {
    let dir = demo_data_dir();
    let variants = vec![Variant::new("rs4988235", "2", 136608646, "AA")];
    let config = AnalysisConfig {
        run_pgs: true,
        ..AnalysisConfig::default()
    };
    let result = analyzer_for(&dir).run(&variants, &config);

    // dosage 2 at weight 2.0, demo mean 0 / sd 1
    let pgs = result.pgs.unwrap();
    assert_eq!(pgs["bmi"].z, 4.0);
    assert_eq!(pgs["bmi"].percentile, 100);
    assert!(result.notes.iter().any(|n| n == "missing_snps: 0"));
}

#[test]
fn test_missing_window_degrades_to_note() {
    let dir = demo_data_dir();
    write_file(dir.path(), AA_WINDOWS_FILE, "{}");
    let variants = vec![Variant::new("rs1042522", "17", 7579472, "GG")];
    let result = analyzer_for(&dir).run(&variants, &AnalysisConfig::default());

    let protein = result.protein.unwrap();
    assert!(protein.ss.is_none());
    assert!(result
        .notes
        .iter()
        .any(|n| n == "ss_window_missing:rs1042522"));
}

#[test]
fn test_no_protein_intersection_degrades_to_note() {
    let dir = demo_data_dir();
    let variants = vec![Variant::new("rs762551", "15", 75041917, "AC")];
    let result = analyzer_for(&dir).run(&variants, &AnalysisConfig::default());

    assert!(result.protein.is_none());
    assert!(result.notes.iter().any(|n| n == "no_protein_mapped"));
}

#[test]
fn test_disabled_stages_stay_empty() {
    let dir = demo_data_dir();
    let variants = vec![Variant::new("rs1042522", "17", 7579472, "GG")];
    let config = AnalysisConfig {
        run_traits: false,
        run_protein: false,
        run_pgs: false,
        target_rsid: None,
    };
    let result = analyzer_for(&dir).run(&variants, &config);

    assert_eq!(result.variants.len(), 1);
    assert!(result.traits.is_empty());
    assert!(result.protein.is_none());
    assert!(result.pgs.is_none());
}

#[test]
fn test_target_rsid_is_honored() {
    let dir = demo_data_dir();
    write_file(
        dir.path(),
        PROTEIN_MAP_FILE,
        "rsid,uniprot,alphafold_cif_url,residue_index,protein_change\n\
         rs1042522,P04637,https://example.org/p04637.cif,72,P72R\n\
         rs429358,P02649,https://example.org/p02649.cif,130,C130R\n",
    );
    let variants = vec![
        Variant::new("rs1042522", "17", 7579472, "GG"),
        Variant::new("rs429358", "19", 44908684, "CT"),
    ];
    let config = AnalysisConfig {
        target_rsid: Some("rs429358".to_string()),
        ..AnalysisConfig::default()
    };
    let result = analyzer_for(&dir).run(&variants, &config);

    assert_eq!(result.protein.unwrap().uniprot, "P02649");
}

#[test]
fn test_finalized_contract_shape() {
    let dir = demo_data_dir();
    let variants = vec![Variant::new("rs1042522", "17", 7579472, "GG")];
    let result = analyzer_for(&dir).run(&variants, &AnalysisConfig::default());
    let contract = finalize(&result).unwrap();

    assert!(contract["variants"].is_array());
    assert!(contract["traits"].is_array());
    assert!(contract["notes"].is_array());
    assert_eq!(
        contract["variants"][0]["links"]["dbsnp"],
        json!("https://www.ncbi.nlm.nih.gov/snp/rs1042522")
    );
    // the sanitizer's uniform unit clamp applies to every numeric leaf
    assert_eq!(contract["protein"]["residues"][0]["index"], json!(1.0));

    // the contract is stable under re-sanitization
    let again = varanno_pipeline::sanitize(&contract).unwrap();
    assert_eq!(contract, again);
}
