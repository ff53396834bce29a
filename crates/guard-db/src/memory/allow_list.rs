use async_trait::async_trait;
use parking_lot::RwLock;

use guard_core::{AllowListRepository, RepoResult};

/// In-memory allow-list
#[derive(Debug, Default)]
pub struct InMemoryAllowListRepository {
    entries: RwLock<Vec<String>>,
}

impl InMemoryAllowListRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-loaded with entries
    pub fn with_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: RwLock::new(entries.into_iter().map(Into::into).collect()),
        }
    }
}

#[async_trait]
impl AllowListRepository for InMemoryAllowListRepository {
    async fn replace_all(&self, identifiers: &[String]) -> RepoResult<()> {
        *self.entries.write() = identifiers.to_vec();
        Ok(())
    }

    async fn list_all(&self) -> RepoResult<Vec<String>> {
        Ok(self.entries.read().clone())
    }
}
