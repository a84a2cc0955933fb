/// Ephemeral per-article UI state, keyed by article id and kept out of the
/// Article records themselves: which card is expanded (at most one) and
/// which article the detail dialog shows. Lives in a signal owned by the
/// article list; nothing here feeds back into the collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionState {
    expanded: Option<String>,
    dialog: Option<String>,
}

impl InteractionState {
    pub fn toggle_expanded(&mut self, id: &str) {
        if self.expanded.as_deref() == Some(id) {
            self.expanded = None;
        } else {
            self.expanded = Some(id.to_string());
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.as_deref() == Some(id)
    }

    pub fn open_dialog(&mut self, id: &str) {
        self.dialog = Some(id.to_string());
    }

    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }

    pub fn dialog_id(&self) -> Option<&str> {
        self.dialog.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expansion_toggles_and_moves_between_ids() {
        let mut state = InteractionState::default();
        state.toggle_expanded("a");
        assert!(state.is_expanded("a"));

        // Expanding another card collapses the first.
        state.toggle_expanded("b");
        assert!(state.is_expanded("b"));
        assert!(!state.is_expanded("a"));

        state.toggle_expanded("b");
        assert!(!state.is_expanded("b"));
    }

    #[test]
    fn dialog_opens_and_closes_independently_of_expansion() {
        let mut state = InteractionState::default();
        state.toggle_expanded("a");
        state.open_dialog("b");
        assert_eq!(state.dialog_id(), Some("b"));
        assert!(state.is_expanded("a"));

        state.close_dialog();
        assert_eq!(state.dialog_id(), None);
    }
}
