//! CLI definitions using clap derive API

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};
use std::path::PathBuf;

/// mvncopy - Maven artifact repository synchronizer
///
/// Copies the versions of each configured artifact that exist on the source
/// repository but not on the target, together with their sub-artifacts.
#[derive(Parser, Debug)]
#[command(
    name = "mvncopy",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Copies Maven artifacts and their sub-artifacts between repositories",
    long_about = "mvncopy queries the source and target repositories for the versions of each \
                  configured artifact, then fetches and re-publishes every version missing on \
                  the target, including POM, sources, javadoc and test-jar sub-artifacts. \
                  All parameters come from the configuration file.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  mvncopy\n    \
                  mvncopy mirrors/central-to-internal.yaml"
)]
pub struct Cli {
    /// Path to the YAML configuration file
    #[arg(value_name = "CONFIG", default_value = "conf.yaml")]
    pub config: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_to_conf_yaml() {
        let cli = Cli::parse_from(["mvncopy"]);
        assert_eq!(cli.config, PathBuf::from("conf.yaml"));
    }

    #[test]
    fn test_config_path_argument() {
        let cli = Cli::parse_from(["mvncopy", "sync.yaml"]);
        assert_eq!(cli.config, PathBuf::from("sync.yaml"));
    }
}
