use clap::Args;
use lentil::assemble::DuplicatePolicy;
use lentil::pipeline::*;
use lentil::report::DEFAULT_TOP_K;

#[derive(Args, Debug)]
pub struct PcaArgs {
    /// Contact matrix files, one per sample (`.gz` is fine)
    #[arg(required = true)]
    data_files: Vec<Box<str>>,

    /// Output header
    #[arg(long, short, required = true)]
    out: Box<str>,

    /// Sample names (comma-separated). By default, each file name
    /// without its `.txt`/`.tsv`/`.gz` extensions.
    #[arg(long, short = 'n', value_delimiter(','))]
    sample_names: Option<Vec<Box<str>>>,

    /// Read this many rows at a time. If None, read whole files.
    #[arg(long, short = 'c')]
    chunk_size: Option<usize>,

    /// How to combine a bin-pair repeated within one file
    #[arg(long, value_enum, default_value_t = DuplicatePolicy::Error)]
    duplicates: DuplicatePolicy,

    /// #bin-pairs to report per component
    #[arg(long, default_value_t = DEFAULT_TOP_K)]
    top_k: usize,

    /// skip the scatter plots
    #[arg(long, default_value_t = false)]
    no_plot: bool,
}

pub fn run_pca(args: &PcaArgs) -> anyhow::Result<()> {
    let sources = sample_sources(&args.data_files, args.sample_names.as_deref())?;

    let config = PcaConfig {
        prefix: args.out.clone(),
        chunk_size: args.chunk_size,
        duplicates: args.duplicates,
        top_k: args.top_k,
        draw_plot: !args.no_plot,
    };

    run_contact_pca(&sources, &config)?;
    Ok(())
}
