//! Append-only, human-readable record of request outcomes.

/// Ordered operator log; grows until explicitly cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultLog {
    entries: Vec<String>,
}

impl ResultLog {
    pub fn push(&mut self, line: impl Into<String>) {
        self.entries.push(line.into());
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    /// Returns at most `count` of the newest entries, oldest first.
    #[must_use]
    pub fn tail(&self, count: usize) -> &[String] {
        let start = self.entries.len().saturating_sub(count);
        self.entries.get(start..).unwrap_or_default()
    }
}
