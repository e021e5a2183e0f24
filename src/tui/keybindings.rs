//! Keybinding definitions
//!
//! Defines all keyboard shortcuts for different contexts

use crossterm::event::{KeyCode, KeyModifiers};

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub description: &'static str,
    pub context: KeyContext,
}

/// Context in which a keybinding is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// Active everywhere
    Global,
    /// Active in the project filter list
    Filters,
    /// Active in the monthly table
    Table,
    /// Active in dialogs
    Dialog,
}

impl KeyContext {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Global => "Global Keys",
            Self::Filters => "Project Filters",
            Self::Table => "Monthly Table",
            Self::Dialog => "Dialogs",
        }
    }
}

const fn bind(
    key: KeyCode,
    modifiers: KeyModifiers,
    description: &'static str,
    context: KeyContext,
) -> Keybinding {
    Keybinding {
        key,
        modifiers,
        description,
        context,
    }
}

/// All keybindings
pub static KEYBINDINGS: &[Keybinding] = &[
    // Global
    bind(KeyCode::Char('q'), KeyModifiers::NONE, "Quit", KeyContext::Global),
    bind(KeyCode::Char('?'), KeyModifiers::NONE, "Show/hide help", KeyContext::Global),
    bind(KeyCode::Tab, KeyModifiers::NONE, "Switch panel focus", KeyContext::Global),
    bind(KeyCode::Char('r'), KeyModifiers::NONE, "Reload data", KeyContext::Global),
    bind(KeyCode::Char('a'), KeyModifiers::CONTROL, "Select all projects", KeyContext::Global),
    bind(KeyCode::Char('d'), KeyModifiers::CONTROL, "Deselect all projects", KeyContext::Global),
    bind(KeyCode::Char('j'), KeyModifiers::NONE, "Move down", KeyContext::Global),
    bind(KeyCode::Char('k'), KeyModifiers::NONE, "Move up", KeyContext::Global),
    // Filters
    bind(KeyCode::Char(' '), KeyModifiers::NONE, "Toggle project", KeyContext::Filters),
    bind(KeyCode::Enter, KeyModifiers::NONE, "Toggle project", KeyContext::Filters),
    // Table
    bind(KeyCode::Enter, KeyModifiers::NONE, "Show records of month", KeyContext::Table),
    // Dialog
    bind(KeyCode::Esc, KeyModifiers::NONE, "Close dialog", KeyContext::Dialog),
];

/// Get keybindings for a specific context (without the global ones)
pub fn get_keybindings(context: KeyContext) -> Vec<&'static Keybinding> {
    KEYBINDINGS
        .iter()
        .filter(|kb| kb.context == context)
        .collect()
}

/// Format a keybinding for display
pub fn format_keybinding(kb: &Keybinding) -> String {
    let mut parts = Vec::new();

    if kb.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl".to_string());
    }
    if kb.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt".to_string());
    }

    let key_str = match kb.key {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) if kb.modifiers.contains(KeyModifiers::CONTROL) => {
            c.to_ascii_uppercase().to_string()
        }
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        _ => format!("{:?}", kb.key),
    };

    parts.push(key_str);
    parts.join("+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_keybinding() {
        let ctrl_a = &KEYBINDINGS[4];
        assert_eq!(format_keybinding(ctrl_a), "Ctrl+A");

        let space = get_keybindings(KeyContext::Filters)[0];
        assert_eq!(format_keybinding(space), "Space");
    }

    #[test]
    fn test_contexts_are_covered() {
        for context in [
            KeyContext::Global,
            KeyContext::Filters,
            KeyContext::Table,
            KeyContext::Dialog,
        ] {
            assert!(!get_keybindings(context).is_empty(), "{:?}", context);
        }
    }
}
