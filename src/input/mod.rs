//! URL list loading
//!
//! The URL list is a plain text file with one URL per line. Lines are trimmed,
//! blank lines are skipped and repeated URLs keep only their first position.
//! URL syntax is not checked here: a malformed line becomes a per-page failure
//! in the batch rather than a setup error.

use crate::InputError;
use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::Path;

/// Loads the URL list from `path`
///
/// # Returns
///
/// * `Ok(Vec<String>)` - URLs in file order, at least one
/// * `Err(InputError::Missing)` - The file does not exist
/// * `Err(InputError::Empty)` - The file holds no URLs
/// * `Err(InputError::Io)` - Any other read failure
pub fn load_urls(path: &Path) -> Result<Vec<String>, InputError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(InputError::Missing {
                path: path.to_path_buf(),
            });
        }
        Err(e) => return Err(InputError::Io(e)),
    };

    let urls = parse_url_list(&content);
    if urls.is_empty() {
        return Err(InputError::Empty {
            path: path.to_path_buf(),
        });
    }

    tracing::info!("Loaded {} URLs from {}", urls.len(), path.display());
    Ok(urls)
}

/// Parses URL list content into trimmed, de-duplicated lines
pub fn parse_url_list(content: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut urls = Vec::new();

    for line in content.lines() {
        let url = line.trim();
        if url.is_empty() {
            continue;
        }

        if !seen.insert(url) {
            tracing::warn!("Skipping duplicate URL: {}", url);
            continue;
        }

        urls.push(url.to_string());
    }

    urls
}
