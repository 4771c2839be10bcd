use amalgam::{AmalgamConfig, run};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Single-file bundler: inline #include directives into one flat artifact", long_about = None)]
struct Args {
    /// Root document to expand, relative to the source directory
    root: Option<PathBuf>,

    /// Directory holding all includable documents
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Output file path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // 1. Load from file or default
    let mut config = AmalgamConfig::load_from_file().unwrap_or_default();

    // 2. Override with CLI args
    if let Some(r) = args.root {
        config.root = r;
    }
    if let Some(s) = args.source_dir {
        config.source_dir = s;
    }
    if let Some(o) = args.output {
        config.output = Some(o);
    }
    if args.verbose {
        config.verbose = true;
    }

    config.validate()?;
    run(config)
}
