//! mvncopy - Maven artifact repository synchronizer
//!
//! Reads two repository endpoints and a list of artifact coordinates from a
//! YAML configuration file, then copies every version present on the source
//! and missing on the target, sub-artifacts included.

use clap::Parser;

mod artifact;
mod cli;
mod config;
mod copier;
mod error;
mod local;
mod progress;
mod repository;

use cli::Cli;
use config::Config;
use copier::Copier;
use error::Result;
use local::LocalRepository;
use repository::DefaultRepositorySystem;

fn main() {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(0) => {}
        Ok(failed) => {
            eprintln!("Error: {failed} coordinate(s) failed to copy");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Copy every configured coordinate, returning how many failed
///
/// A coordinate that fails fatally does not stop the remaining ones; its
/// error is reported as it happens and the process exits non-zero at the end.
fn run(cli: &Cli) -> Result<usize> {
    let config = Config::load(&cli.config)?;

    let local = LocalRepository::resolve(config.local_repository.as_deref());
    let system = DefaultRepositorySystem::new(local);
    let copier = Copier::new(
        system,
        config.source.to_endpoint("source"),
        config.target.to_endpoint("target"),
    )
    .with_verbose(config.verbose);

    let mut failed = 0;
    for coords in &config.artifact {
        if let Err(e) = copier.copy(coords) {
            eprintln!("Error: {e}");
            failed += 1;
        }
    }
    Ok(failed)
}
