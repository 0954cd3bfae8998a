//! Import line matching and reference extraction
//!
//! Lines are tested against a fixed textual pattern (`import`, a space, at
//! least one character, `;`) by substring search. No grammar is involved:
//! a matching line yields one candidate per non-overlapping occurrence.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::core::error::ScanError;

/// Static regex for import statements
/// Format: import <anything>;
pub static IMPORT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"import .+?;").expect("Invalid IMPORT_RE regex"));

/// Statement terminator stripped from the derived token
const TERMINATOR: char = ';';

/// A line read from a source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedLine {
    /// 1-indexed line number
    pub number: usize,
    pub text: String,
    /// Whether the line contains the import pattern anywhere
    pub is_import: bool,
}

/// Check whether a line contains the import pattern
pub fn is_import_line(line: &str) -> bool {
    IMPORT_RE.is_match(line)
}

/// Open `path` and lazily read it line by line
pub fn scan_lines(path: &Path) -> Result<ImportLines, ScanError> {
    let file = File::open(path).map_err(|source| ScanError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(ImportLines {
        path: path.to_path_buf(),
        reader: BufReader::new(file),
        buffer: Vec::new(),
        number: 0,
        done: false,
    })
}

/// Iterator over the lines of one file; the handle is closed on drop
pub struct ImportLines {
    path: PathBuf,
    reader: BufReader<File>,
    buffer: Vec<u8>,
    number: usize,
    done: bool,
}

impl Iterator for ImportLines {
    type Item = Result<ScannedLine, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        self.buffer.clear();
        match self.reader.read_until(b'\n', &mut self.buffer) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => {
                self.number += 1;
                if self.buffer.last() == Some(&b'\n') {
                    self.buffer.pop();
                    if self.buffer.last() == Some(&b'\r') {
                        self.buffer.pop();
                    }
                }
                // Non-UTF-8 bytes are replaced rather than failing the run
                let text = String::from_utf8_lossy(&self.buffer).into_owned();
                let is_import = is_import_line(&text);
                Some(Ok(ScannedLine {
                    number: self.number,
                    text,
                    is_import,
                }))
            }
            Err(source) => {
                self.done = true;
                Some(Err(ScanError::Io {
                    path: self.path.clone(),
                    source,
                }))
            }
        }
    }
}

/// Outcome for one occurrence of the import pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidate {
    /// A derived reference token
    Reference(String),
    /// The line contains the excluded namespace
    Excluded,
    /// No token could be derived from the occurrence
    Malformed,
}

/// Derive candidates for every occurrence of the import pattern in `line`.
///
/// The exclusion check is applied to the whole line for each occurrence, so
/// one excluded import suppresses every other import on the same line. An
/// empty `excluded_namespace` disables exclusion.
pub fn extract_candidates(line: &str, excluded_namespace: &str) -> Vec<Candidate> {
    let line_excluded = !excluded_namespace.is_empty() && line.contains(excluded_namespace);

    IMPORT_RE
        .find_iter(line)
        .map(|occurrence| {
            if line_excluded {
                return Candidate::Excluded;
            }
            match derive_token(occurrence.as_str()) {
                Some(token) => Candidate::Reference(token.to_string()),
                None => Candidate::Malformed,
            }
        })
        .collect()
}

/// Second whitespace-delimited token of an occurrence, minus its terminator.
///
/// Returns None when the occurrence does not have the `import <token>;`
/// shape: fewer than two tokens, a second token not ending in the terminator,
/// or nothing left once the terminator is stripped.
pub fn derive_token(occurrence: &str) -> Option<&str> {
    let token = occurrence.split_whitespace().nth(1)?;
    token
        .strip_suffix(TERMINATOR)
        .filter(|stripped| !stripped.is_empty())
}
