//! The reference catalog store.
//!
//! [`Catalog::load`] reads the four static resources from a data directory
//! and never fails outright: a resource that is absent or unparsable
//! degrades to an empty table, logged, and the rest of the catalog stays
//! usable. The catalog is immutable after load and safe to share across
//! threads behind an `Arc`.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{error, info, warn};
use serde::de::DeserializeOwned;

use crate::consts::{AA_WINDOWS_FILE, PGS_FILE, PROTEIN_MAP_FILE, TRAITS_FILE};
use crate::rows::{AaWindow, PgsWeightRow, ProteinMapRow, TraitRow};

///
/// Immutable view over the four static reference tables, with by-rsid
/// lookup indexes built once at load time.
///
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    data_dir: PathBuf,
    traits: Vec<TraitRow>,
    traits_by_rsid: HashMap<String, Vec<usize>>,
    protein_rows: Vec<ProteinMapRow>,
    protein_rows_by_rsid: HashMap<String, Vec<usize>>,
    pgs_weights: Vec<PgsWeightRow>,
    aa_windows: HashMap<String, AaWindow>,
}

impl Catalog {
    ///
    /// Load all catalog resources from `data_dir`.
    ///
    /// Individual resources degrade to empty tables on any failure; the
    /// load itself always succeeds.
    ///
    pub fn load(data_dir: &Path) -> Self {
        let traits: Vec<TraitRow> = safe_csv(&data_dir.join(TRAITS_FILE));
        let protein_rows: Vec<ProteinMapRow> = safe_csv(&data_dir.join(PROTEIN_MAP_FILE));
        let pgs_weights: Vec<PgsWeightRow> = safe_csv(&data_dir.join(PGS_FILE));
        let aa_windows = safe_json(&data_dir.join(AA_WINDOWS_FILE));

        let mut traits_by_rsid: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, row) in traits.iter().enumerate() {
            traits_by_rsid.entry(row.rsid.clone()).or_default().push(i);
        }
        let mut protein_rows_by_rsid: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, row) in protein_rows.iter().enumerate() {
            protein_rows_by_rsid
                .entry(row.rsid.clone())
                .or_default()
                .push(i);
        }

        info!(
            "Catalog loaded from {:?}: {} trait rows, {} protein rows, {} PGS weights, {} aa windows",
            data_dir,
            traits.len(),
            protein_rows.len(),
            pgs_weights.len(),
            aa_windows.len()
        );

        Catalog {
            data_dir: data_dir.to_path_buf(),
            traits,
            traits_by_rsid,
            protein_rows,
            protein_rows_by_rsid,
            pgs_weights,
            aa_windows,
        }
    }

    /// Directory this catalog was loaded from.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Trait-catalog rows in file order.
    pub fn trait_rows(&self) -> &[TraitRow] {
        &self.traits
    }

    /// Trait rows for one rsid, in file order.
    pub fn trait_rows_for(&self, rsid: &str) -> impl Iterator<Item = &TraitRow> {
        self.traits_by_rsid
            .get(rsid)
            .into_iter()
            .flatten()
            .map(|&i| &self.traits[i])
    }

    /// Protein-map rows in file order.
    pub fn protein_rows(&self) -> &[ProteinMapRow] {
        &self.protein_rows
    }

    /// Protein-map rows for one rsid, in file order.
    pub fn protein_rows_for(&self, rsid: &str) -> impl Iterator<Item = &ProteinMapRow> {
        self.protein_rows_by_rsid
            .get(rsid)
            .into_iter()
            .flatten()
            .map(|&i| &self.protein_rows[i])
    }

    /// PGS weight rows in file order.
    pub fn pgs_weights(&self) -> &[PgsWeightRow] {
        &self.pgs_weights
    }

    /// Amino-acid window for one rsid, if cataloged.
    pub fn aa_window(&self, rsid: &str) -> Option<&AaWindow> {
        self.aa_windows.get(rsid)
    }
}

fn read_csv<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("can't open csv file {:?}", path))?;
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let row: T = record.with_context(|| format!("can't parse record in {:?}", path))?;
        rows.push(row);
    }
    Ok(rows)
}

/// Load a CSV resource, degrading to an empty table on any failure.
fn safe_csv<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    if !path.exists() {
        warn!("Catalog file not found: {:?}", path);
        return Vec::new();
    }
    match read_csv(path) {
        Ok(rows) => {
            info!("Loaded {} rows from {:?}", rows.len(), path);
            rows
        }
        Err(e) => {
            error!("Failed to load {:?}: {:#}", path, e);
            Vec::new()
        }
    }
}

fn read_json(path: &Path) -> Result<HashMap<String, AaWindow>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("can't read json file {:?}", path))?;
    serde_json::from_str(&text).with_context(|| format!("can't parse json in {:?}", path))
}

/// Load the amino-acid window map, degrading to empty on any failure.
fn safe_json(path: &Path) -> HashMap<String, AaWindow> {
    if !path.exists() {
        warn!("Catalog file not found: {:?}", path);
        return HashMap::new();
    }
    match read_json(path) {
        Ok(map) => {
            info!("Loaded {} windows from {:?}", map.len(), path);
            map
        }
        Err(e) => {
            error!("Failed to load {:?}: {:#}", path, e);
            HashMap::new()
        }
    }
}
