//! Keyboard shortcut dispatch table.
//!
//! The document-level keydown listener in the app is a thin adapter: it
//! builds a [`KeyContext`] from the DOM event and asks [`dispatch`] what to
//! do. Keys are ignored while the user is typing in a text field or
//! holding a modifier, so shortcuts never swallow browser chords.

/// Action bound to a single-key shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    /// `m` - switch between monthly and annual mode.
    ToggleMode,
    /// `s` - toggle the ±1σ overlay (annual mode only).
    ToggleSigma,
    /// `g` - open/close the chat sidebar.
    ToggleChat,
    /// `r` - reset year range and zoom to the dataset bounds.
    ResetFilters,
    /// `?` - open the onboarding tour.
    ShowTour,
}

/// Where and how the key event happened.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyContext {
    /// Focus is inside an input, textarea, or select element.
    pub in_text_input: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl KeyContext {
    fn has_modifier(&self) -> bool {
        self.ctrl || self.alt || self.meta
    }
}

/// Map a `KeyboardEvent.key` value to its action, or `None` when the key
/// is unbound or the context suppresses shortcuts.
pub fn dispatch(key: &str, ctx: KeyContext) -> Option<ShortcutAction> {
    if ctx.in_text_input || ctx.has_modifier() {
        return None;
    }
    match key {
        "m" | "M" => Some(ShortcutAction::ToggleMode),
        "s" | "S" => Some(ShortcutAction::ToggleSigma),
        "g" | "G" => Some(ShortcutAction::ToggleChat),
        "r" | "R" => Some(ShortcutAction::ResetFilters),
        "?" => Some(ShortcutAction::ShowTour),
        _ => None,
    }
}

/// `(key, description)` pairs for the help/tour overlay.
pub fn bindings() -> &'static [(&'static str, &'static str)] {
    &[
        ("m", "Switch between monthly and annual view"),
        ("s", "Toggle the ±1σ overlay"),
        ("g", "Open or close the chat sidebar"),
        ("r", "Reset year range and zoom"),
        ("?", "Show the guided tour"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bound_keys_dispatch() {
        let ctx = KeyContext::default();
        assert_eq!(dispatch("m", ctx), Some(ShortcutAction::ToggleMode));
        assert_eq!(dispatch("s", ctx), Some(ShortcutAction::ToggleSigma));
        assert_eq!(dispatch("g", ctx), Some(ShortcutAction::ToggleChat));
        assert_eq!(dispatch("r", ctx), Some(ShortcutAction::ResetFilters));
        assert_eq!(dispatch("?", ctx), Some(ShortcutAction::ShowTour));
    }

    #[test]
    fn uppercase_keys_dispatch_too() {
        let ctx = KeyContext::default();
        assert_eq!(dispatch("M", ctx), Some(ShortcutAction::ToggleMode));
        assert_eq!(dispatch("R", ctx), Some(ShortcutAction::ResetFilters));
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let ctx = KeyContext::default();
        assert_eq!(dispatch("x", ctx), None);
        assert_eq!(dispatch("Enter", ctx), None);
        assert_eq!(dispatch("Escape", ctx), None);
    }

    #[test]
    fn text_input_suppresses_shortcuts() {
        let ctx = KeyContext {
            in_text_input: true,
            ..Default::default()
        };
        assert_eq!(dispatch("m", ctx), None);
        assert_eq!(dispatch("?", ctx), None);
    }

    #[test]
    fn modifiers_suppress_shortcuts() {
        for ctx in [
            KeyContext { ctrl: true, ..Default::default() },
            KeyContext { alt: true, ..Default::default() },
            KeyContext { meta: true, ..Default::default() },
        ] {
            assert_eq!(dispatch("s", ctx), None, "modifier chord must pass through");
        }
    }

    #[test]
    fn every_binding_in_help_table_dispatches() {
        let ctx = KeyContext::default();
        for (key, _) in bindings() {
            assert!(dispatch(key, ctx).is_some(), "help lists unbound key {key}");
        }
    }
}
