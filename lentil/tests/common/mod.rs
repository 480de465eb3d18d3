use std::io::Write;
use std::path::{Path, PathBuf};

/// Write rows as a tab-separated contact matrix file
pub fn write_contacts(dir: &Path, file_name: &str, rows: &[&[&str]]) -> anyhow::Result<Box<str>> {
    let path: PathBuf = dir.join(file_name);
    let mut file = std::fs::File::create(&path)?;
    for row in rows {
        writeln!(file, "{}", row.join("\t"))?;
    }
    Ok(path.to_string_lossy().into())
}

/// A contact matrix with `n` rows whose values depend on `seed`
pub fn synthetic_rows(n: usize, seed: usize) -> Vec<Vec<String>> {
    (0..n)
        .map(|i| {
            let start1 = 1000 * (i % 5);
            let start2 = 1000 * (i / 5);
            let value = ((i * 7 + seed * 13 + i * i * seed) % 17) as f64 + 0.5;
            vec![
                "chr1".to_string(),
                start1.to_string(),
                (start1 + 1000).to_string(),
                if i % 2 == 0 { "chr1" } else { "chr2" }.to_string(),
                start2.to_string(),
                (start2 + 1000).to_string(),
                value.to_string(),
            ]
        })
        .collect()
}

pub fn write_synthetic(dir: &Path, file_name: &str, n: usize, seed: usize) -> anyhow::Result<Box<str>> {
    let rows = synthetic_rows(n, seed);
    let rows: Vec<Vec<&str>> = rows
        .iter()
        .map(|r| r.iter().map(|x| x.as_str()).collect())
        .collect();
    let rows: Vec<&[&str]> = rows.iter().map(|r| r.as_slice()).collect();
    write_contacts(dir, file_name, &rows)
}
