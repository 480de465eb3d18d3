use matrix_util::common_io::{create_temp_dir_file, open_buf_reader, LineChunks};
use matrix_util::traits::IoOps;
use std::io::{BufRead, Write};

#[test]
fn dmatrix_named_csv_test() -> anyhow::Result<()> {
    let xx = nalgebra::DMatrix::<f64>::from_row_slice(2, 3, &[1.0, -2.5, 0.0, 3.0, 4.0, 0.125]);
    let rows: Vec<Box<str>> = vec!["a".into(), "b".into()];
    let cols: Vec<Box<str>> = vec!["PC1".into(), "PC2".into(), "PC3".into()];

    let csv_file = create_temp_dir_file(".csv")?;
    xx.to_csv_with_names(csv_file.to_str().unwrap(), &rows, &cols)?;

    let lines: Vec<String> = open_buf_reader(csv_file.to_str().unwrap())?
        .lines()
        .collect::<Result<_, _>>()?;

    assert_eq!(lines, vec![",PC1,PC2,PC3", "a,1,-2.5,0", "b,3,4,0.125"]);
    Ok(())
}

#[test]
fn dmatrix_named_csv_shape_mismatch() -> anyhow::Result<()> {
    let xx = nalgebra::DMatrix::<f64>::zeros(2, 2);
    let rows: Vec<Box<str>> = vec!["a".into()];
    let cols: Vec<Box<str>> = vec!["x".into(), "y".into()];

    let csv_file = create_temp_dir_file(".csv")?;
    assert!(xx
        .to_csv_with_names(csv_file.to_str().unwrap(), &rows, &cols)
        .is_err());
    Ok(())
}

#[test]
fn line_chunks_gz_test() -> anyhow::Result<()> {
    let gz_file = create_temp_dir_file(".txt.gz")?;
    {
        let file = std::fs::File::create(&gz_file)?;
        let mut enc = flate2::write::GzEncoder::new(file, flate2::Compression::default());
        writeln!(enc, "# header comment")?;
        for i in 0..7 {
            writeln!(enc, "line{}", i)?;
        }
        writeln!(enc)?;
        enc.finish()?;
    }

    let chunks = LineChunks::open(gz_file.to_str().unwrap(), Some(3))?
        .collect::<anyhow::Result<Vec<_>>>()?;

    let sizes: Vec<usize> = chunks.iter().map(|c| c.len()).collect();
    assert_eq!(sizes, vec![3, 3, 1]);

    // line numbers count the comment line too
    assert_eq!(chunks[0][0].line_no, 2);
    assert_eq!(&*chunks[0][0].text, "line0");
    assert_eq!(chunks[2][0].line_no, 8);
    assert_eq!(&*chunks[2][0].text, "line6");

    let whole = LineChunks::open(gz_file.to_str().unwrap(), None)?
        .collect::<anyhow::Result<Vec<_>>>()?;
    assert_eq!(whole.len(), 1);
    assert_eq!(whole[0], chunks.concat());

    Ok(())
}

#[test]
fn line_chunks_reject_zero() {
    assert!(LineChunks::open("does-not-matter.txt", Some(0)).is_err());
}

#[test]
fn line_chunks_missing_file() {
    let err = LineChunks::open("/nonexistent/dir/file.txt", None).err().unwrap();
    assert!(err.downcast_ref::<std::io::Error>().is_some());
}
