use isle_common::WorldPosition;

/// A high-level action the builder consumes.
///
/// The build-mode controller never sees raw pointer events, only actions, so
/// any front end (desktop window, CLI script, test) drives it the same way.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Open the shop panel.
    OpenShop,
    /// Close the shop panel.
    CloseShop,
    /// Flip the shop panel.
    ToggleShop,
    /// Pick a catalog item by id and start placing it.
    SelectItem(String),
    /// The cursor now points at this ground position.
    CursorMoved(WorldPosition),
    /// Commit the active item at the last evaluated position.
    Confirm,
    /// Leave build mode without placing.
    Cancel,
    /// No-op (used for input mapping that hasn't been bound yet).
    Noop,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_item_carries_id() {
        let a = Action::SelectItem("house".into());
        assert!(matches!(a, Action::SelectItem(ref id) if id == "house"));
    }

    #[test]
    fn cursor_moved_carries_position() {
        let a = Action::CursorMoved(WorldPosition::new(1.0, 2.0));
        assert_eq!(a, Action::CursorMoved(WorldPosition::new(1.0, 2.0)));
    }

    #[test]
    fn confirm_cancel() {
        assert!(matches!(Action::Confirm, Action::Confirm));
        assert_ne!(Action::Confirm, Action::Cancel);
    }
}
