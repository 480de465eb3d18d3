use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Lines that start with these characters are treated as comments
const COMMENT_PREFIXES: [char; 2] = ['#', '%'];

fn is_data_line(line: &str) -> bool {
    !(line.trim().is_empty() || line.starts_with(COMMENT_PREFIXES))
}

///
/// Open a file for reading, and return a buffered reader
/// * `input_file` - file name--either gzipped or not
pub fn open_buf_reader(input_file: &str) -> anyhow::Result<Box<dyn BufRead>> {
    // take a look at the extension
    // return buffered reader accordingly
    let ext = Path::new(input_file).extension().and_then(|x| x.to_str());
    let file = File::open(input_file)?;
    match ext {
        Some("gz") => Ok(Box::new(BufReader::new(GzDecoder::new(file)))),
        _ => Ok(Box::new(BufReader::new(file))),
    }
}

///
/// Open a file for writing, and return a buffered writer
/// * `output_file` - file name--either gzipped or not
pub fn open_buf_writer(output_file: &str) -> anyhow::Result<Box<dyn Write>> {
    // we can simply override with stdout
    if output_file.eq_ignore_ascii_case("stdout") {
        return Ok(Box::new(BufWriter::new(std::io::stdout())));
    }

    let ext = Path::new(output_file).extension().and_then(|x| x.to_str());
    let file = File::create(output_file)?;
    match ext {
        Some("gz") => {
            let encoder = flate2::write::GzEncoder::new(file, flate2::Compression::default());
            Ok(Box::new(BufWriter::new(encoder)))
        }
        _ => Ok(Box::new(BufWriter::new(file))),
    }
}

///
/// Write every line into the output_file
///
/// * `lines` - vector of lines
/// * `output_file` - file name--either gzipped or not
///
pub fn write_lines<T>(lines: &[T], output_file: &str) -> anyhow::Result<()>
where
    T: std::fmt::Display,
{
    let mut buf = open_buf_writer(output_file)?;
    for line in lines {
        writeln!(buf, "{}", line)?;
    }
    buf.flush()?;
    Ok(())
}

/// A line of text with its 1-based position in the source file
#[derive(Debug, Clone, PartialEq)]
pub struct NumberedLine {
    pub line_no: usize,
    pub text: Box<str>,
}

///
/// Read data lines in batches of at most `chunk_size` lines. Comment
/// (`#`, `%`) and blank lines are skipped but still counted, so
/// `line_no` always points back into the original file.
///
pub struct LineChunks {
    buf: Box<dyn BufRead>,
    chunk_size: usize,
    line_no: usize,
    done: bool,
}

impl LineChunks {
    /// * `input_file` - file name--either gzipped or not
    /// * `chunk_size` - maximum number of data lines per chunk (`None` = all)
    pub fn open(input_file: &str, chunk_size: Option<usize>) -> anyhow::Result<Self> {
        let chunk_size = match chunk_size {
            Some(0) => anyhow::bail!("chunk size must be positive"),
            Some(n) => n,
            None => usize::MAX,
        };
        Ok(Self {
            buf: open_buf_reader(input_file)?,
            chunk_size,
            line_no: 0,
            done: false,
        })
    }

    fn next_chunk(&mut self) -> anyhow::Result<Vec<NumberedLine>> {
        let mut chunk = vec![];
        let mut line = String::new();
        while chunk.len() < self.chunk_size {
            line.clear();
            if self.buf.read_line(&mut line)? == 0 {
                self.done = true;
                break;
            }
            self.line_no += 1;
            let text = line.trim_end_matches(['\n', '\r']);
            if is_data_line(text) {
                chunk.push(NumberedLine {
                    line_no: self.line_no,
                    text: text.into(),
                });
            }
        }
        Ok(chunk)
    }
}

impl Iterator for LineChunks {
    type Item = anyhow::Result<Vec<NumberedLine>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_chunk() {
            Ok(chunk) if chunk.is_empty() => None,
            Ok(chunk) => Some(Ok(chunk)),
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

///
/// Create a directory if needed
/// * `file` - file name
///
pub fn mkdir(file: &str) -> anyhow::Result<()> {
    let path = Path::new(file);
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    Ok(())
}

///
/// Take the basename of a file, dropping any of the given extensions
/// repeatedly from the end, e.g., `a/WT-1.txt.gz` -> `WT-1`
///
/// * `file` - file name
/// * `extensions` - extensions to drop (without leading dot)
///
pub fn basename_without(file: &str, extensions: &[&str]) -> anyhow::Result<Box<str>> {
    let mut name = Path::new(file)
        .file_name()
        .and_then(|x| x.to_str())
        .ok_or_else(|| anyhow::anyhow!("no file name: {}", file))?;

    while let Some((stem, ext)) = name.rsplit_once('.') {
        if stem.is_empty() || !extensions.contains(&ext) {
            break;
        }
        name = stem;
    }
    Ok(name.into())
}

///
/// Create an empty file in the temporary directory that outlives
/// this call
/// * `suffix` - suffix of the file name
///
pub fn create_temp_dir_file(suffix: &str) -> anyhow::Result<std::path::PathBuf> {
    let temp_file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()?
        .into_temp_path()
        .keep()?;
    Ok(temp_file)
}
