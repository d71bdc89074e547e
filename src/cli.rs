use crate::io::writers::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "maturitymap")]
#[command(about = "Maturity scoring for sales pipeline assessments", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Configuration file to use instead of discovering .maturitymap.toml
    #[arg(long, global = true, env = "MATURITYMAP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colors in terminal output
    #[arg(long, global = true)]
    pub plain: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score an assessment and print the maturity report
    Score {
        /// Assessment file (.json, .yaml, .yml or .toml); the built-in diagnostic when omitted
        path: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number of ranked actions to show (0 shows all)
        #[arg(long = "top", visible_alias = "head")]
        top: Option<usize>,

        /// Reject missing or null focusAreas / recommendedActions
        #[arg(long)]
        strict: bool,
    },

    /// Check an assessment file and report every problem found
    Validate {
        /// Assessment file to check
        path: PathBuf,

        /// Reject missing or null focusAreas / recommendedActions
        #[arg(long)]
        strict: bool,
    },

    /// Print the maturity stages and their score ranges
    Stages,

    /// Write a default .maturitymap.toml in the current directory
    Init {
        /// Overwrite an existing configuration file
        #[arg(short, long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_score_arguments() {
        let cli = Cli::try_parse_from([
            "maturitymap",
            "-vv",
            "score",
            "assessment.yaml",
            "--format",
            "markdown",
            "--top",
            "3",
            "--strict",
        ])
        .unwrap();
        assert_eq!(cli.verbosity, 2);
        match cli.command {
            Commands::Score {
                path,
                format,
                top,
                strict,
                output,
            } => {
                assert_eq!(path, Some(PathBuf::from("assessment.yaml")));
                assert_eq!(format, Some(OutputFormat::Markdown));
                assert_eq!(top, Some(3));
                assert!(strict);
                assert!(output.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn validate_requires_a_path() {
        assert!(Cli::try_parse_from(["maturitymap", "validate"]).is_err());
    }
}
