use crate::contact_record::normalize_line;
use crate::error::{LentilError, Result};

use log::{debug, info};
use matrix_util::common_io::{basename_without, LineChunks, NumberedLine};
use rayon::prelude::*;

/// File extensions dropped when a sample is named after its file
pub const SAMPLE_FILE_EXTENSIONS: [&str; 4] = ["gz", "txt", "tsv", "bedpe"];

/// Bin-pair keys and values of one sample, in file order.
/// Repeated keys are kept as they are.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleVector {
    pub name: Box<str>,
    pub entries: Vec<(Box<str>, f64)>,
}

impl SampleVector {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.into(),
            entries: vec![],
        }
    }

    pub fn from_entries<K: Into<Box<str>>>(name: &str, entries: Vec<(K, f64)>) -> Self {
        Self {
            name: name.into(),
            entries: entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append rows, e.g., those of the next chunk
    pub fn extend(&mut self, rows: Vec<(Box<str>, f64)>) {
        self.entries.extend(rows);
    }
}

/// Sample name derived from the data file, `dir/WT-0h-1.txt.gz` -> `WT-0h-1`
pub fn sample_name_from_file(file: &str) -> Result<Box<str>> {
    basename_without(file, &SAMPLE_FILE_EXTENSIONS)
        .map_err(|e| LentilError::Config(e.to_string()))
}

///
/// Read a tab-separated contact matrix (no header) into a sample vector
///
/// * `file` - file name--either gzipped or not
/// * `name` - sample name
/// * `chunk_size` - number of rows to read at a time (`None` = whole file)
///
pub fn load_sample(file: &str, name: &str, chunk_size: Option<usize>) -> Result<SampleVector> {
    if chunk_size == Some(0) {
        return Err(LentilError::Config("chunk size must be at least 1".into()));
    }

    let chunks = LineChunks::open(file, chunk_size).map_err(|e| LentilError::io(file, e))?;

    let mut sample = SampleVector::new(name);

    for (i, chunk) in chunks.enumerate() {
        let chunk = chunk.map_err(|e| LentilError::io(file, e))?;
        let rows = parse_chunk(file, &chunk)?;
        debug!("{}: chunk {} with {} rows", name, i, rows.len());
        sample.extend(rows);
    }

    info!("{}: read {} contacts from {}", name, sample.len(), file);
    Ok(sample)
}

/// Normalize lines in parallel while keeping their order. The
/// error of the earliest malformed line is reported.
fn parse_chunk(file: &str, chunk: &[NumberedLine]) -> Result<Vec<(Box<str>, f64)>> {
    let parsed: Vec<Result<(Box<str>, f64)>> = chunk
        .par_iter()
        .map(|line| normalize_line(&line.text))
        .collect();

    parsed
        .into_iter()
        .zip(chunk)
        .map(|(res, line)| {
            res.map_err(|e| match e {
                LentilError::Parse(msg) => LentilError::Parse(format!(
                    "{}:{}: {} in `{}`",
                    file, line.line_no, msg, line.text
                )),
                other => other,
            })
        })
        .collect()
}
