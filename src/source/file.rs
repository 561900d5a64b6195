//! Local blog exports
//!
//! Reads JSON arrays (`mongoexport --jsonArray`, saved API responses) and
//! JSON Lines files. Inputs may be files, directories or glob patterns.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::core::Blog;
use crate::error::LoadError;
use crate::source::{Fetched, Source, blogs_from_values};

/// Blogs read from one or more local files
pub(crate) struct FileSource {
    inputs: Vec<String>,
}

impl FileSource {
    pub(crate) fn new(inputs: Vec<String>) -> Self {
        FileSource { inputs }
    }
}

impl Source for FileSource {
    fn display_name(&self) -> String {
        match self.inputs.as_slice() {
            [single] => single.clone(),
            many => format!("{} inputs", many.len()),
        }
    }

    fn fetch(&self) -> Result<Fetched, LoadError> {
        let files = resolve_inputs(&self.inputs)?;
        tracing::debug!("scanning {} blog files", files.len());

        // collect keeps file order so tie-breaks stay deterministic
        let parsed = files
            .par_iter()
            .map(|path| parse_blog_file(path))
            .collect::<Result<Vec<_>, _>>()?;

        let mut fetched = Fetched {
            inputs: files.len(),
            ..Fetched::default()
        };
        for (blogs, skipped) in parsed {
            fetched.blogs.extend(blogs);
            fetched.skipped += skipped;
        }
        Ok(fetched)
    }
}

// ============================================================================
// File discovery
// ============================================================================

fn glob_paths(pattern: &str) -> Result<Vec<PathBuf>, LoadError> {
    let entries = glob::glob(pattern).map_err(|e| LoadError::Pattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })?;
    Ok(entries.flatten().filter(|p| p.is_file()).collect())
}

fn find_in_dir(dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
    let mut files = glob_paths(&format!("{}/**/*.json", dir.display()))?;
    files.extend(glob_paths(&format!("{}/**/*.jsonl", dir.display()))?);
    files.sort();
    Ok(files)
}

/// Expand every input into concrete file paths, in the order given
pub(crate) fn resolve_inputs(inputs: &[String]) -> Result<Vec<PathBuf>, LoadError> {
    let mut files = Vec::new();
    for input in inputs {
        let path = Path::new(input);
        let found = if path.is_file() {
            vec![path.to_path_buf()]
        } else if path.is_dir() {
            find_in_dir(path)?
        } else {
            glob_paths(input)?
        };
        if found.is_empty() {
            return Err(LoadError::NoMatch {
                input: input.clone(),
            });
        }
        files.extend(found);
    }
    Ok(files)
}

// ============================================================================
// Parsing
// ============================================================================

/// Parse one file into blogs plus the number of records that were skipped
pub(crate) fn parse_blog_file(path: &Path) -> Result<(Vec<Blog>, usize), LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    // Exports saved by some Windows editors start with a UTF-8 byte order mark
    let content = content.strip_prefix('\u{FEFF}').unwrap_or(content.as_str());
    let trimmed = content.trim_start();

    if trimmed.is_empty() {
        return Ok((Vec::new(), 0));
    }

    if trimmed.starts_with('[') {
        let values: Vec<serde_json::Value> =
            serde_json::from_str(trimmed).map_err(|source| LoadError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        return Ok(blogs_from_values(values));
    }

    Ok(parse_json_lines(content))
}

fn parse_json_lines(content: &str) -> (Vec<Blog>, usize) {
    let mut blogs = Vec::new();
    let mut skipped = 0;
    for (lineno, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<Blog>(line) {
            Ok(blog) => blogs.push(blog),
            Err(e) => {
                tracing::debug!("line {}: skipping malformed blog record: {e}", lineno + 1);
                skipped += 1;
            }
        }
    }
    (blogs, skipped)
}
