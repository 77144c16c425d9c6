//! Navigation history

/// Browser-style history stack.
///
/// Pushing after going back discards the forward entries. Pushing the
/// current entry again is a no-op.
///
/// # Example
///
/// ```
/// use greenstar::History;
///
/// let mut history = History::new();
/// history.push("/");
/// history.push("/db/sql");
///
/// assert_eq!(history.back(), Some("/"));
/// assert_eq!(history.forward(), Some("/db/sql"));
/// assert_eq!(history.forward(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
    position: usize,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a navigation to `path`.
    pub fn push(&mut self, path: impl Into<String>) {
        let path = path.into();
        if self.current() == Some(path.as_str()) {
            return;
        }
        if !self.entries.is_empty() {
            self.entries.truncate(self.position + 1);
        }
        self.entries.push(path);
        self.position = self.entries.len() - 1;
    }

    /// The entry currently shown.
    pub fn current(&self) -> Option<&str> {
        self.entries.get(self.position).map(String::as_str)
    }

    /// Step back one entry and return it.
    pub fn back(&mut self) -> Option<&str> {
        if !self.can_go_back() {
            return None;
        }
        self.position -= 1;
        self.current()
    }

    /// Step forward one entry and return it.
    pub fn forward(&mut self) -> Option<&str> {
        if !self.can_go_forward() {
            return None;
        }
        self.position += 1;
        self.current()
    }

    /// Check if there is an entry behind the current one.
    pub fn can_go_back(&self) -> bool {
        self.position > 0
    }

    /// Check if there is an entry ahead of the current one.
    pub fn can_go_forward(&self) -> bool {
        self.position + 1 < self.entries.len()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing was recorded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_history() {
        let mut history = History::new();
        assert_eq!(history.current(), None);
        assert_eq!(history.back(), None);
        assert_eq!(history.forward(), None);
    }

    #[test]
    fn test_push_after_back_truncates_forward() {
        let mut history = History::new();
        history.push("/");
        history.push("/a");
        history.push("/b");
        history.back();
        history.back();
        history.push("/c");

        assert_eq!(history.len(), 2);
        assert_eq!(history.current(), Some("/c"));
        assert!(!history.can_go_forward());
        assert_eq!(history.back(), Some("/"));
    }

    #[test]
    fn test_duplicate_push_is_ignored() {
        let mut history = History::new();
        history.push("/");
        history.push("/");
        assert_eq!(history.len(), 1);
    }
}
