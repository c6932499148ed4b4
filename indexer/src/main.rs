use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::{self, BufWriter, Write};
use stemfreq::{run, BuildArgs};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "stemfreq")]
#[command(about = "Index stem occurrences per document and plot the count distribution", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the occurrence index and histogram for a corpus
    Build(BuildArgs),
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Build(args) => {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            run(&args, &mut out)?;
            out.flush()?;
            Ok(())
        }
    }
}
