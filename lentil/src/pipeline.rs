use crate::assemble::{assemble_samples, AssembledMatrix, DuplicatePolicy};
use crate::error::{LentilError, Result};
use crate::pca_engine::{fit_pca, PcaResult, NUM_COMPONENTS};
use crate::plot::draw_score_panels;
use crate::report::*;
use crate::sample_loader::{load_sample, sample_name_from_file};

use log::info;
use std::collections::HashSet;

/// Everything a run needs besides its input files
#[derive(Debug, Clone)]
pub struct PcaConfig {
    /// output prefix `P` for `P.csv`, `P_components.csv`, `P_pca_plots.png`
    pub prefix: Box<str>,
    /// rows per read batch (`None` = whole file)
    pub chunk_size: Option<usize>,
    pub duplicates: DuplicatePolicy,
    /// bin-pairs reported per component
    pub top_k: usize,
    pub draw_plot: bool,
}

impl PcaConfig {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.into(),
            chunk_size: None,
            duplicates: DuplicatePolicy::default(),
            top_k: DEFAULT_TOP_K,
            draw_plot: true,
        }
    }
}

/// A contact matrix file and the sample name it goes by
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSource {
    pub file: Box<str>,
    pub name: Box<str>,
}

///
/// Pair data files with sample names. Without explicit names, each
/// sample is named after its file.
///
pub fn sample_sources(
    files: &[Box<str>],
    names: Option<&[Box<str>]>,
) -> Result<Vec<SampleSource>> {
    let names: Vec<Box<str>> = match names {
        Some(names) if names.len() != files.len() => {
            return Err(LentilError::Config(format!(
                "{} sample names for {} data files",
                names.len(),
                files.len()
            )));
        }
        Some(names) => names.to_vec(),
        None => files
            .iter()
            .map(|f| sample_name_from_file(f))
            .collect::<Result<_>>()?,
    };

    Ok(files
        .iter()
        .zip(names)
        .map(|(file, name)| SampleSource {
            file: file.clone(),
            name,
        })
        .collect())
}

/// What a run computed and where it was written
#[derive(Debug, Clone)]
pub struct PcaRunOutput {
    pub matrix: AssembledMatrix,
    pub pca: PcaResult,
    pub top_features: Vec<TopFeatures>,
    pub files: OutputFiles,
}

/// Plot first, then tables
fn write_outputs(pca: &PcaResult, files: &OutputFiles, draw_plot: bool) -> Result<()> {
    if draw_plot {
        draw_score_panels(pca, &files.plot)?;
    }
    write_tables(pca, files)
}

///
/// Load, assemble, decompose, then write. Every input is read and
/// the components are fitted before the first output file is
/// touched, so a bad input leaves no partial results behind. If
/// writing fails halfway, the files written so far are removed.
///
pub fn run_contact_pca(sources: &[SampleSource], config: &PcaConfig) -> Result<PcaRunOutput> {
    if sources.is_empty() {
        return Err(LentilError::Config("no data files".into()));
    }

    let mut seen: HashSet<&str> = HashSet::new();
    for s in sources {
        // sample names head the rows of the score table
        if s.name.is_empty() || s.name.contains(',') {
            return Err(LentilError::Config(format!(
                "invalid sample name `{}`",
                s.name
            )));
        }
        if !seen.insert(&s.name) {
            return Err(LentilError::Config(format!(
                "duplicate sample name: {}",
                s.name
            )));
        }
    }

    if sources.len() < NUM_COMPONENTS {
        return Err(LentilError::Config(format!(
            "need at least {} samples for {} components, but found {}",
            NUM_COMPONENTS,
            NUM_COMPONENTS,
            sources.len()
        )));
    }

    // 1. read every sample
    let samples = sources
        .iter()
        .map(|s| load_sample(&s.file, &s.name, config.chunk_size))
        .collect::<Result<Vec<_>>>()?;

    // 2. outer join on bin-pairs
    let matrix = assemble_samples(&samples, config.duplicates)?;
    drop(samples);

    // 3. principal components
    let pca = fit_pca(&matrix, NUM_COMPONENTS)?;
    let top_features = top_features(&pca, config.top_k);
    log_top_features(&top_features);

    // 4. outputs, all of them or none
    let files = OutputFiles::new(&config.prefix);
    if let Err(e) = write_outputs(&pca, &files, config.draw_plot) {
        files.remove_all();
        return Err(e);
    }

    info!("done with {} samples", matrix.num_samples());

    Ok(PcaRunOutput {
        matrix,
        pca,
        top_features,
        files,
    })
}
