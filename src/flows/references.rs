//! Reference collection flow
//!
//! Walks the scan root, reads every selected file and gathers the
//! deduplicated set of referenced packages. The report is only written once
//! the whole scan has succeeded, so a failure never leaves partial output.

use anyhow::Result;
use std::io::{self, BufWriter};
use std::path::Path;
use tracing::{debug, warn};

use crate::backends::imports::{extract_candidates, scan_lines, Candidate};
use crate::backends::scan::discover_files;
use crate::core::error::ScanError;
use crate::core::model::{MalformedPolicy, ScanConfig, ScanOutcome};
use crate::core::paths::normalize_path;
use crate::core::render::render_to;

/// Scan the tree described by `config` and collect its references
pub fn collect_references(config: &ScanConfig) -> Result<ScanOutcome, ScanError> {
    let suffix = config.suffix();
    let mut outcome = ScanOutcome::default();

    debug!(root = %normalize_path(&config.root), suffix = %suffix, "scanning");

    for path in discover_files(&config.root, &suffix) {
        let path = path?;
        scan_file(&path, config, &mut outcome)?;
    }

    outcome.stats.references_kept = outcome.references.len();
    debug!(
        files = outcome.stats.files_scanned,
        matched = outcome.stats.lines_matched,
        kept = outcome.stats.references_kept,
        duplicates = outcome.stats.duplicates_dropped,
        excluded = outcome.stats.excluded,
        malformed = outcome.stats.malformed_skipped,
        "scan complete"
    );

    Ok(outcome)
}

/// Add every reference found in one file to `outcome`
pub fn scan_file(
    path: &Path,
    config: &ScanConfig,
    outcome: &mut ScanOutcome,
) -> Result<(), ScanError> {
    debug!(path = %normalize_path(path), "reading");
    outcome.stats.files_scanned += 1;

    for line in scan_lines(path)? {
        let line = line?;
        if !line.is_import {
            continue;
        }
        outcome.stats.lines_matched += 1;

        for candidate in extract_candidates(&line.text, &config.excluded_namespace) {
            match candidate {
                Candidate::Reference(token) => {
                    if !outcome.references.insert(token) {
                        outcome.stats.duplicates_dropped += 1;
                    }
                }
                Candidate::Excluded => outcome.stats.excluded += 1,
                Candidate::Malformed => match config.malformed {
                    MalformedPolicy::Abort => {
                        return Err(ScanError::MalformedImport {
                            path: path.to_path_buf(),
                            line: line.number,
                            text: line.text,
                        });
                    }
                    MalformedPolicy::Skip => {
                        warn!(
                            path = %normalize_path(path),
                            line = line.number,
                            "skipping malformed import: {}",
                            line.text.trim()
                        );
                        outcome.stats.malformed_skipped += 1;
                    }
                },
            }
        }
    }

    Ok(())
}

/// Run the scan and print references to stdout, one per line
pub fn run_references(config: &ScanConfig) -> Result<()> {
    let outcome = collect_references(config)?;
    if outcome.references.is_empty() {
        debug!("no references found");
    }

    let stdout = io::stdout();
    render_to(&outcome.references, BufWriter::new(stdout.lock())).map_err(ScanError::Output)?;

    Ok(())
}
