use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use hapcompare::compare_haplotypes;
use hapcompare::genomics::io::{open_vcf_gz, AtomicOutput};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "hapcompare",
    version,
    about = "Pairwise haplotype genotype comparison table from a four-sample VCF"
)]
struct Cli {
    /// Input gzipped VCF file with exactly four sample columns.
    input: PathBuf,
    /// Output tab-delimited file.
    output: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    info!(input = %cli.input.display(), output = %cli.output.display(), "starting comparison");

    let reader = open_vcf_gz(&cli.input)
        .with_context(|| format!("failed to open input VCF {}", cli.input.display()))?;
    let mut output = AtomicOutput::create(&cli.output).with_context(|| {
        format!(
            "failed to create output file next to {}",
            cli.output.display()
        )
    })?;

    let summary = compare_haplotypes(reader, &mut output)
        .with_context(|| format!("failed to process {}", cli.input.display()))?;

    output
        .commit()
        .with_context(|| format!("failed to write output {}", cli.output.display()))?;

    info!(records = summary.records, "wrote {}", cli.output.display());
    Ok(())
}
