use crate::history::NavigationHistory;

/// Stable identifier for a tab within one pane.
///
/// Assigned from a per-pane counter so ids survive reordering; never
/// reused for the lifetime of the pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TabId(pub u64);

#[derive(Debug, Clone)]
pub struct Tab {
    id: TabId,
    history: NavigationHistory,
}

impl Tab {
    pub fn id(&self) -> TabId {
        self.id
    }

    pub fn history(&self) -> &NavigationHistory {
        &self.history
    }
}

/// Ordered, never-empty collection of tabs with one active selection.
///
/// `0 <= active_index < tabs.len()` holds after every operation; an
/// out-of-range switch leaves the selection untouched.
#[derive(Debug, Clone)]
pub struct TabbedPane {
    tabs: Vec<Tab>,
    active_index: usize,
    next_tab_seq: u64,
}

impl TabbedPane {
    /// A pane starts with a single active tab seeded at `initial`.
    pub fn new(initial: &str) -> Self {
        Self {
            tabs: vec![Tab {
                id: TabId(0),
                history: NavigationHistory::new(initial),
            }],
            active_index: 0,
            next_tab_seq: 1,
        }
    }

    /// Append a fresh tab seeded at `initial` and make it active.
    pub fn add_tab(&mut self, initial: &str) -> TabId {
        let id = TabId(self.next_tab_seq);
        self.next_tab_seq += 1;
        self.tabs.push(Tab {
            id,
            history: NavigationHistory::new(initial),
        });
        self.active_index = self.tabs.len() - 1;
        tracing::debug!(tab_id = ?id, index = self.active_index, "opened tab");
        id
    }

    /// Activate `tabs[index]`; out-of-range indices are ignored.
    pub fn switch_tab(&mut self, index: usize) {
        if index < self.tabs.len() {
            self.active_index = index;
        }
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn active_history(&self) -> &NavigationHistory {
        &self.tabs[self.active_index].history
    }

    pub fn active_history_mut(&mut self) -> &mut NavigationHistory {
        &mut self.tabs[self.active_index].history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tabs_become_active() {
        let mut pane = TabbedPane::new("https://a");
        assert_eq!(pane.tabs().len(), 1);
        assert_eq!(pane.active_index(), 0);

        pane.add_tab("example.com");
        assert_eq!(pane.tabs().len(), 2);
        assert_eq!(pane.active_index(), 1);

        pane.add_tab("https://b");
        assert_eq!(pane.tabs().len(), 3);
        assert_eq!(pane.active_index(), 2);
    }

    #[test]
    fn switch_tab_ignores_out_of_range() {
        let mut pane = TabbedPane::new("https://a");
        pane.add_tab("https://b");
        pane.switch_tab(0);
        assert_eq!(pane.active_index(), 0);
        pane.switch_tab(7);
        assert_eq!(pane.active_index(), 0);
    }

    #[test]
    fn tabs_keep_independent_histories() {
        let mut pane = TabbedPane::new("https://a");
        pane.add_tab("https://b");
        pane.active_history_mut().navigate("https://c");
        pane.switch_tab(0);
        assert_eq!(pane.active_history().current(), "https://a");
        pane.switch_tab(1);
        assert_eq!(pane.active_history().current(), "https://c");
        assert!(pane.active_history().can_go_back());
    }

    #[test]
    fn tab_ids_are_not_reused() {
        let mut pane = TabbedPane::new("https://a");
        let first = pane.add_tab("https://b");
        let second = pane.add_tab("https://c");
        assert_ne!(first, second);
        assert_eq!(pane.tabs()[0].id(), TabId(0));
    }
}
