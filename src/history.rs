use crate::constants::DEFAULT_SCHEME;

/// Browser-style back/forward history for one tab.
///
/// The entry list is never empty and the cursor always points at a live
/// entry. Navigating while the cursor sits mid-history discards the
/// forward branch, like a browser does. Boundary moves are silent
/// no-ops rather than errors; callers only ever observe a valid
/// current address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationHistory {
    entries: Vec<String>,
    cursor: usize,
}

/// Prefix `raw` with the default scheme unless it already carries one.
fn qualify(raw: &str) -> String {
    if raw.contains("://") {
        raw.to_string()
    } else {
        format!("{DEFAULT_SCHEME}{raw}")
    }
}

impl NavigationHistory {
    pub fn new(initial: &str) -> Self {
        Self {
            entries: vec![qualify(initial)],
            cursor: 0,
        }
    }

    /// Record a new navigation, truncating any forward branch first.
    ///
    /// Consecutive navigations to the same address are kept as separate
    /// entries; dedupe is deliberately not applied.
    pub fn navigate(&mut self, raw: &str) {
        let address = qualify(raw);
        self.entries.truncate(self.cursor + 1);
        self.entries.push(address);
        self.cursor = self.entries.len() - 1;
        tracing::debug!(address = %self.entries[self.cursor], "navigated");
    }

    /// Step back one entry, or stay put at the oldest one.
    pub fn back(&mut self) -> &str {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
        &self.entries[self.cursor]
    }

    /// Step forward one entry, or stay put at the newest one.
    pub fn forward(&mut self) -> &str {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
        }
        &self.entries[self.cursor]
    }

    /// The current address, unchanged; the content pane re-fetches it.
    pub fn reload(&self) -> &str {
        &self.entries[self.cursor]
    }

    pub fn current(&self) -> &str {
        &self.entries[self.cursor]
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}
