//! Allow-list ingestion

use tracing::{info, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Turn an uploaded file into allow-list entries
///
/// Invalid UTF-8 sequences are dropped, one entry per line. Any of the
/// Unicode line terminators ends a line, so CR-only files split too. Lines
/// are trimmed and blank lines dropped. Link lines (`http://`, `https://`) are
/// reduced to their last path segment, so `https://t.me/name/` becomes `name`.
pub fn parse_allow_list(content: &[u8]) -> Vec<String> {
    let text: String = content.utf8_chunks().map(|chunk| chunk.valid()).collect();

    // `\r\n` leaves a blank piece behind, dropped below
    text.split(is_line_terminator)
        .map(str::trim)
        .map(|line| {
            if line.starts_with("http://") || line.starts_with("https://") {
                let path = line.trim_end_matches('/');
                path.rsplit('/').next().unwrap_or(path).trim()
            } else {
                line
            }
        })
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn is_line_terminator(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c'..='\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Allow-list service
pub struct AllowListService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AllowListService<'a> {
    /// Create a new AllowListService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Replace the stored allow-list with the file's entries
    ///
    /// Returns the number of entries stored.
    #[instrument(skip(self, content), fields(bytes = content.len()))]
    pub async fn ingest(&self, content: &[u8]) -> ServiceResult<usize> {
        let entries = parse_allow_list(content);
        self.ctx.allow_list_repo().replace_all(&entries).await?;

        info!(count = entries.len(), "Allow-list updated");
        Ok(entries.len())
    }

    /// Current entries, verbatim
    pub async fn list(&self) -> ServiceResult<Vec<String>> {
        Ok(self.ctx.allow_list_repo().list_all().await?)
    }
}
