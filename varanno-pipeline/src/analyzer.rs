//! The pipeline orchestrator.
//!
//! Sequences Join → Protein → Structure delta → PGS → assembly over one
//! request's variants. Each stage is isolated: anything that prevents a
//! stage from producing output is recorded as a note and the stage falls
//! back to its empty/null value, so one failing data source degrades the
//! report instead of aborting the request.

use std::collections::BTreeMap;
use std::sync::Arc;

use log::debug;

use varanno_annotate::{build_protein_target, join_annotations};
use varanno_catalog::Catalog;
use varanno_core::models::{AnalysisConfig, AnalysisResult, Variant};
use varanno_scoring::compute_bmi_pgs;

use crate::structure::{StructurePredictor, UniformPredictor};

///
/// Runs the annotation pipeline over a shared, read-only [Catalog].
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
/// use std::sync::Arc;
/// use varanno_catalog::Catalog;
/// use varanno_core::models::{AnalysisConfig, Variant};
/// use varanno_pipeline::Analyzer;
///
/// let catalog = Arc::new(Catalog::load(Path::new("data")));
/// let analyzer = Analyzer::new(catalog);
/// let variants = vec![Variant::new("rs4988235", "2", 136608646, "AG")];
/// let result = analyzer.run(&variants, &AnalysisConfig::default());
/// assert_eq!(result.variants.len(), 1);
/// ```
///
pub struct Analyzer {
    catalog: Arc<Catalog>,
    predictor: Box<dyn StructurePredictor>,
}

impl Analyzer {
    /// Create an analyzer with the fallback structure predictor.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Analyzer {
            catalog,
            predictor: Box::new(UniformPredictor),
        }
    }

    /// Swap in an external structure predictor.
    pub fn with_predictor(mut self, predictor: Box<dyn StructurePredictor>) -> Self {
        self.predictor = predictor;
        self
    }

    ///
    /// Run the pipeline for one request.
    ///
    /// Always returns a structurally complete [AnalysisResult]; degraded
    /// stages are visible only through `notes`.
    ///
    pub fn run(&self, variants: &[Variant], config: &AnalysisConfig) -> AnalysisResult {
        let mut notes = Vec::new();

        // 1) Join: links for every variant, coverage per trait row.
        let (annotated, traits) = {
            let (annotated, traits, join_notes) = join_annotations(variants, &self.catalog);
            if config.run_traits {
                notes.extend(join_notes);
                (annotated, traits)
            } else {
                (annotated, Vec::new())
            }
        };
        debug!("join stage: {} variants, {} trait rows", annotated.len(), traits.len());

        // 2) Protein target selection.
        let mut protein = None;
        if config.run_protein {
            let (target, protein_notes) =
                build_protein_target(variants, &self.catalog, config.target_rsid.as_deref());
            notes.extend(protein_notes);
            protein = target;
        }

        // 3) Structure delta, only when at least one residue resolved.
        if let Some(target) = protein.as_mut() {
            if let Some(residue) = target.residues.first() {
                let rsid = residue.rsid.clone();
                match self.catalog.aa_window(&rsid) {
                    Some(window) => {
                        match self.predictor.predict(&window.wt_seq, &window.mut_seq) {
                            Ok(delta) => target.ss = Some(delta),
                            Err(e) => notes.push(format!("ss_model_error: {e}")),
                        }
                    }
                    None => notes.push(format!("ss_window_missing:{rsid}")),
                }
            }
        }

        // 4) PGS.
        let mut pgs = None;
        if config.run_pgs {
            let (score, pgs_notes) = compute_bmi_pgs(variants, self.catalog.pgs_weights());
            notes.extend(pgs_notes);
            pgs = Some(BTreeMap::from([("bmi".to_string(), score)]));
        }

        // 5) Assembly.
        debug!("pipeline finished with {} notes", notes.len());
        AnalysisResult {
            variants: annotated,
            traits,
            protein,
            pgs,
            notes,
        }
    }
}
