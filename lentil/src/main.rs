mod run_pca;

use clap::{Parser, Subcommand};
use log::info;
use run_pca::*;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "LENTIL",
    long_about = "Low-dimensional Embedding of coNTact matrIces across sampLes\n\
		  Contact matrices (MicroC/Hi-C) are tab-separated files with seven columns:\n\
		  chr1, start1, end1, chr2, start2, end2, value (no header)."
)]
struct Cli {
    #[command(subcommand)]
    commands: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Principal components of contact matrices",
        long_about = "Principal component analysis in three stages: \n\
		      (1) Key each contact by its bin-pair `chr1:start1-end1;chr2:start2-end2`\n\
		      (2) Outer join samples on bin-pairs, absent contacts set to zero\n\
		      (3) Standardize bin-pairs across samples and take three components.\n\
		      Writes {out}.csv, {out}_components.csv and {out}_pca_plots.png\n"
    )]
    Pca(PcaArgs),
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match &cli.commands {
        Commands::Pca(args) => {
            run_pca(args)?;
        }
    }

    info!("Done");
    Ok(())
}
