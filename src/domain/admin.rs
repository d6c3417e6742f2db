//! Administrator allow-list.

use std::collections::HashSet;
use std::sync::Arc;

/// Fixed set of administrator ids, loaded once at process start.
///
/// Cloning shares the underlying set; there is no way to mutate it after
/// construction.
#[derive(Debug, Clone, Default)]
pub struct AdminAllowList {
    ids: Arc<HashSet<String>>,
}

impl AdminAllowList {
    /// Build an allow-list from a collection of ids.
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: Arc::new(ids.into_iter().map(Into::into).collect()),
        }
    }

    /// Parse a comma-separated id list, ignoring blanks.
    pub fn from_csv(raw: &str) -> Self {
        Self::new(
            raw.split(',')
                .map(str::trim)
                .filter(|id| !id.is_empty()),
        )
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
