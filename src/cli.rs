//! Command-line argument parsing
//!
//! Supports:
//! - Loading an initial hierarchy from a seed file
//! - Overriding the top-level source cap
//! - Running a command script instead of reading stdin
//! - Printing the final configuration as JSON

use clap::Parser;
use std::path::PathBuf;

use crate::config::AppConfig;

/// Interactive source filter editor
#[derive(Parser, Debug)]
#[command(
    name = "sourcefilter",
    version,
    about = "Edit a three-level source hierarchy and pick a filter from it"
)]
pub struct CliArgs {
    /// Seed file with the initial sources (.yaml, .yml or .json)
    #[arg(long, value_name = "PATH", conflicts_with = "empty")]
    pub seed: Option<PathBuf>,

    /// Start with no sources instead of the demo hierarchy
    #[arg(long)]
    pub empty: bool,

    /// Maximum number of top-level sources
    #[arg(long, value_name = "N")]
    pub max_sources: Option<u32>,

    /// Read commands from a file instead of stdin
    #[arg(long, value_name = "PATH")]
    pub script: Option<PathBuf>,

    /// Print the final source configuration as JSON on exit
    #[arg(long)]
    pub dump_json: bool,
}

/// Where the initial hierarchy comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedSource {
    /// The built-in demo hierarchy
    Demo,
    /// No sources at all
    Empty,
    /// A seed file on disk
    File(PathBuf),
}

/// Configuration derived from CLI arguments and the config file
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub seed: SeedSource,
    /// Cap override; `None` keeps the seed's own value
    pub max_sources: Option<u32>,
    pub script: Option<PathBuf>,
    pub dump_json: bool,
    pub indent_px: u32,
}

impl CliArgs {
    /// Merge parsed CLI args over the file configuration
    ///
    /// Flags win over the config file. A config-file cap only applies when
    /// neither a flag nor a seed file provides one.
    pub fn into_config(self, file: &AppConfig) -> StartupConfig {
        let seed = if self.empty {
            SeedSource::Empty
        } else if let Some(path) = self.seed.or_else(|| file.seed.clone()) {
            SeedSource::File(path)
        } else {
            SeedSource::Demo
        };

        let max_sources = match (&seed, self.max_sources) {
            (_, Some(max)) => Some(max),
            (SeedSource::File(_), None) => None,
            (_, None) => Some(file.max_sources),
        };

        StartupConfig {
            seed,
            max_sources,
            script: self.script,
            dump_json: self.dump_json,
            indent_px: file.indent_px,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> CliArgs {
        CliArgs {
            seed: None,
            empty: false,
            max_sources: None,
            script: None,
            dump_json: false,
        }
    }

    #[test]
    fn test_no_args_gives_demo_seed() {
        let config = args().into_config(&AppConfig::default());
        assert_eq!(config.seed, SeedSource::Demo);
        assert_eq!(config.max_sources, Some(10));
    }

    #[test]
    fn test_empty_flag() {
        let config = CliArgs {
            empty: true,
            ..args()
        }
        .into_config(&AppConfig::default());
        assert_eq!(config.seed, SeedSource::Empty);
    }

    #[test]
    fn test_seed_file_keeps_its_own_cap() {
        let config = CliArgs {
            seed: Some(PathBuf::from("seed.yaml")),
            ..args()
        }
        .into_config(&AppConfig::default());
        assert_eq!(config.seed, SeedSource::File(PathBuf::from("seed.yaml")));
        assert_eq!(config.max_sources, None);
    }

    #[test]
    fn test_flag_overrides_config_file() {
        let file = AppConfig {
            max_sources: 3,
            seed: Some(PathBuf::from("from-config.json")),
            ..AppConfig::default()
        };
        let config = CliArgs {
            max_sources: Some(8),
            seed: Some(PathBuf::from("flag.yaml")),
            ..args()
        }
        .into_config(&file);
        assert_eq!(config.seed, SeedSource::File(PathBuf::from("flag.yaml")));
        assert_eq!(config.max_sources, Some(8));
    }

    #[test]
    fn test_clap_parses_flags() {
        let parsed = CliArgs::try_parse_from([
            "sourcefilter",
            "--max-sources",
            "4",
            "--dump-json",
            "--script",
            "ops.txt",
        ])
        .unwrap();
        assert_eq!(parsed.max_sources, Some(4));
        assert!(parsed.dump_json);
        assert_eq!(parsed.script, Some(PathBuf::from("ops.txt")));
    }

    #[test]
    fn test_seed_conflicts_with_empty() {
        assert!(
            CliArgs::try_parse_from(["sourcefilter", "--empty", "--seed", "x.yaml"]).is_err()
        );
    }
}
