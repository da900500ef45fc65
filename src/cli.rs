//! CLI argument definitions.

use std::ffi::OsString;

use clap::Parser;

/// Top-level CLI parser for `secretgen`.
///
/// Recognizes no options of its own; clap supplies `--help` and `--version`.
/// Any other arguments are accepted and ignored.
#[derive(Debug, Parser)]
#[command(
    name = "secretgen",
    version,
    about = "Print a random 64-character hex secret built from two UUIDv4s"
)]
pub struct Cli {
    /// Extra arguments, ignored.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub ignored: Vec<OsString>,
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;

    use super::Cli;
    use clap::error::ErrorKind;
    use clap::Parser;

    #[test]
    fn parses_without_arguments() {
        let cli = Cli::try_parse_from(["secretgen"]).unwrap();
        assert!(cli.ignored.is_empty());
    }

    #[test]
    fn ignores_positional_arguments() {
        let cli = Cli::try_parse_from(["secretgen", "extra"]).unwrap();
        assert_eq!(cli.ignored, vec![OsString::from("extra")]);
    }

    #[test]
    fn ignores_unknown_flags() {
        let cli = Cli::try_parse_from(["secretgen", "--length", "32"]).unwrap();
        assert_eq!(cli.ignored, vec![OsString::from("--length"), OsString::from("32")]);
    }

    #[test]
    fn version_flag_is_reported_as_display_version() {
        let err = Cli::try_parse_from(["secretgen", "--version"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
    }
}
