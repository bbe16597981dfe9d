use carpet::CarpetConfig;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Generate a printable carpet grid: graph paper with a bold line every tenth cell
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Output filename
    #[arg(long, default_value = "carpet.pdf")]
    filename: PathBuf,

    /// Carpet type; 120 gives 20mm bold cells, each step of 20 shrinks them by 2mm
    #[arg(long = "type", default_value_t = 120, allow_negative_numbers = true)]
    type_value: i64,
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = CarpetConfig::default();

    if let Err(err) = carpet::generate_to_file(&config, args.type_value, &args.filename) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
