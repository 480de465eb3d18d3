/// Standardize columns
pub trait MatOps {
    type Mat;
    type Scalar;

    /// `x[,j] = (x[,j] - mean(x[,j])) / sd(x[,j])` with the
    /// population standard deviation (divisor `n`). Constant
    /// columns are only centred, which leaves them all zero.
    fn scale_columns_inplace(&mut self);
    fn scale_columns(&self) -> Self::Mat;
}

/// Truncated decompositions
pub trait PcaOps {
    type Mat;
    type DVec;

    /// Principal components of the rows of `self`, which are taken
    /// as already centred (or standardized) observations.
    ///
    /// * `rank` - number of components to keep
    ///
    /// Returns `(scores, singular values, loadings)`
    fn pca(&self, rank: usize) -> anyhow::Result<(Self::Mat, Self::DVec, Self::Mat)>;
}

/// Write matrices together with their row and column names
pub trait IoOps {
    type Scalar;
    type Mat;

    /// The first line is a header `<corner>,col1,col2,...` and
    /// every following line starts with a row name.
    fn write_file_delim_with_names(
        &self,
        file: &str,
        delim: &str,
        row_names: &[Box<str>],
        column_names: &[Box<str>],
    ) -> anyhow::Result<()>;

    fn to_csv_with_names(
        &self,
        csv_file: &str,
        row_names: &[Box<str>],
        column_names: &[Box<str>],
    ) -> anyhow::Result<()> {
        self.write_file_delim_with_names(csv_file, ",", row_names, column_names)
    }
}
