use crate::common_io::write_lines;
use crate::traits::*;
pub use nalgebra::{DMatrix, DVector};

use std::fmt::Display;

impl<T> IoOps for DMatrix<T>
where
    T: nalgebra::Scalar + Display + Copy,
{
    type Scalar = T;
    type Mat = Self;

    fn write_file_delim_with_names(
        &self,
        file: &str,
        delim: &str,
        row_names: &[Box<str>],
        column_names: &[Box<str>],
    ) -> anyhow::Result<()> {
        if row_names.len() != self.nrows() {
            anyhow::bail!(
                "{} row names for {} rows",
                row_names.len(),
                self.nrows()
            );
        }

        if column_names.len() != self.ncols() {
            anyhow::bail!(
                "{} column names for {} columns",
                column_names.len(),
                self.ncols()
            );
        }

        let mut lines: Vec<Box<str>> = Vec::with_capacity(self.nrows() + 1);

        // the corner cell is left empty
        let header = std::iter::once("")
            .chain(column_names.iter().map(|x| x.as_ref()))
            .collect::<Vec<_>>()
            .join(delim);
        lines.push(header.into_boxed_str());

        // par_iter() would mess up the order of the rows
        for (name, row) in row_names.iter().zip(self.row_iter()) {
            let line = std::iter::once(name.to_string())
                .chain(row.iter().map(|x| format!("{}", *x)))
                .collect::<Vec<String>>()
                .join(delim);
            lines.push(line.into_boxed_str());
        }

        write_lines(&lines, file)
    }
}
