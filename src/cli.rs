//! CLI module - Command-line interface definitions and handler

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::core::model::{
    MalformedPolicy, ScanConfig, DEFAULT_EXCLUDED_NAMESPACE, DEFAULT_EXTENSION, DEFAULT_ROOT,
};

/// importscan - list the external packages referenced by import statements.
#[derive(Parser, Debug)]
#[command(name = "importscan")]
#[command(
    author,
    version,
    about,
    long_about = r#"importscan walks a source tree, finds lines containing an import
statement (`import <name>;`) and prints each referenced package once, in the
order it was first seen.

Lines containing the excluded namespace (the project's own packages) are
never reported.

Static imports (`import static a.B.c;`) do not have that shape and abort
the scan. Java trees usually contain them, the default wahlzeit tree included,
so scan those with --skip-malformed.

Examples:
    importscan --skip-malformed
    importscan --root wahlzeit/src --exclude org.wahlzeit
    importscan --root app --ext kt --skip-malformed
"#
)]
pub struct Cli {
    /// Root directory to scan.
    #[arg(
        long,
        default_value = DEFAULT_ROOT,
        value_name = "DIR",
        long_help = "Root directory to scan recursively.\n\n\
The scan fails if the directory does not exist or cannot be read."
    )]
    pub root: PathBuf,

    /// File extension to scan.
    #[arg(
        long,
        default_value = DEFAULT_EXTENSION,
        value_name = "EXT",
        long_help = "Only files whose name ends in .EXT are read.\n\n\
A leading dot is accepted (--ext .java and --ext java are equivalent)."
    )]
    pub ext: String,

    /// Namespace whose imports are never reported.
    #[arg(
        long,
        default_value = DEFAULT_EXCLUDED_NAMESPACE,
        value_name = "NAMESPACE",
        long_help = "Any import line containing this substring is skipped entirely.\n\n\
Pass an empty string to report every import."
    )]
    pub exclude: String,

    /// Skip import lines no reference can be derived from.
    #[arg(
        long,
        long_help = "By default a matching line that does not have the shape\n\
`import <name>;` (for example `import static a.B.c;`) aborts the scan.\n\
With this flag such lines are reported on stderr and skipped.\n\n\
The default wahlzeit tree has static imports and needs this flag."
    )]
    pub skip_malformed: bool,

    /// Quiet mode (errors only on stderr).
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (per-file diagnostics on stderr).
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Build the scan configuration from parsed arguments
    pub fn scan_config(&self) -> ScanConfig {
        let malformed = if self.skip_malformed {
            MalformedPolicy::Skip
        } else {
            MalformedPolicy::Abort
        };

        ScanConfig::new(self.root.clone())
            .with_extension(&self.ext)
            .with_excluded_namespace(self.exclude.clone())
            .with_malformed(malformed)
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let config = cli.scan_config();
    crate::flows::references::run_references(&config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_builtin_config() {
        let cli = Cli::parse_from(["importscan"]);
        assert_eq!(cli.scan_config(), ScanConfig::default());
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from([
            "importscan",
            "--root",
            "src",
            "--ext",
            ".kt",
            "--exclude",
            "com.acme",
            "--skip-malformed",
        ]);
        let config = cli.scan_config();
        assert_eq!(config.root, PathBuf::from("src"));
        assert_eq!(config.extension, "kt");
        assert_eq!(config.excluded_namespace, "com.acme");
        assert_eq!(config.malformed, MalformedPolicy::Skip);
    }

    #[test]
    fn test_long_help_points_wahlzeit_at_skip_malformed() {
        use clap::CommandFactory;

        let help = Cli::command().render_long_help().to_string();
        assert!(help.contains("import static a.B.c;"));
        assert!(help.contains("The default wahlzeit tree has static imports and needs this flag."));
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["importscan", "-q", "-v"]).is_err());
    }
}
