//! Console entry point: print the full tour to stdout
//!
//! The only external surface is human-readable text lines. Log
//! verbosity follows the standard `RUST_LOG` filter.

use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> typetour::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    info!("starting tour");
    for transcript in typetour::full_tour()? {
        print!("{transcript}");
        println!();
    }
    info!("tour complete");
    Ok(())
}
