use shared::domain::UserId;

/// Which user card, if any, is expanded. At most one at a time.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpansionState {
    expanded: Option<UserId>,
}

impl ExpansionState {
    /// Collapses `id` if it is the expanded card, otherwise expands it and
    /// collapses whichever card was open.
    pub fn toggle(&mut self, id: UserId) {
        self.expanded = if self.expanded == Some(id) {
            None
        } else {
            Some(id)
        };
    }

    pub fn is_expanded(&self, id: UserId) -> bool {
        self.expanded == Some(id)
    }

    pub fn expanded(&self) -> Option<UserId> {
        self.expanded
    }

    pub fn collapse(&mut self) {
        self.expanded = None;
    }
}
