use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Folio - static portfolio page generator
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'folio init' to write a starter folio.toml and content.toml.")]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where content comes from and where the page goes
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Content file (defaults to site.content in folio.toml, then built-in content)
    #[arg(short, long)]
    pub content: Option<PathBuf>,

    /// Output directory (defaults to build.out_dir in folio.toml)
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the page to <out>/index.html
    Build {
        #[command(flatten)]
        source: SourceArgs,

        /// Pin the copyright year instead of reading the clock
        #[arg(long)]
        year: Option<i32>,

        /// Rewrite the output even when it is unchanged
        #[arg(short, long)]
        force: bool,

        /// Dry run - render and validate without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Validate content and page anchors
    Check {
        /// Content file (defaults to site.content in folio.toml, then built-in content)
        #[arg(short, long)]
        content: Option<PathBuf>,

        /// Fail on warnings too (CI mode)
        #[arg(long)]
        strict_warnings: bool,
    },

    /// Preview changes to the built page without writing
    Diff {
        #[command(flatten)]
        source: SourceArgs,

        /// Pin the copyright year instead of reading the clock
        #[arg(long)]
        year: Option<i32>,
    },

    /// Rebuild whenever the content file changes
    Watch {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Write a starter folio.toml and content.toml
    Init {
        /// Directory to initialize
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_build_with_flags() {
        let cli = Cli::try_parse_from([
            "folio",
            "build",
            "--content",
            "c.toml",
            "--out",
            "public",
            "--year",
            "2030",
            "--dry-run",
        ])
        .unwrap();

        match cli.command {
            Commands::Build {
                source,
                year,
                force,
                dry_run,
            } => {
                assert_eq!(source.content, Some(PathBuf::from("c.toml")));
                assert_eq!(source.out, Some(PathBuf::from("public")));
                assert_eq!(year, Some(2030));
                assert!(!force);
                assert!(dry_run);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["folio", "check", "--json", "-vv", "--color", "never"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.color, Some(ColorWhen::Never));
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["folio"]).is_err());
    }

    #[test]
    fn init_defaults_to_current_dir() {
        let cli = Cli::try_parse_from(["folio", "init"]).unwrap();
        match cli.command {
            Commands::Init { path, force } => {
                assert_eq!(path, PathBuf::from("."));
                assert!(!force);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
