//! Keybinding definitions
//!
//! Every shortcut the allotment screen understands, grouped by context.
//! The help dialog is rendered from this table.

use crossterm::event::{KeyCode, KeyModifiers};

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    /// The key code
    pub key: KeyCode,
    /// Alternative key with the same effect
    pub alt: Option<KeyCode>,
    /// Required modifiers
    pub modifiers: KeyModifiers,
    /// Description of what the key does
    pub description: &'static str,
    /// Context where this keybinding is active
    pub context: KeyContext,
}

/// Context in which a keybinding is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// Active everywhere outside text entry and dialogs
    Global,
    /// Moving between and adjusting sliders
    Sliders,
    /// Editing the total budget
    TotalInput,
    /// Answering the cancel prompt
    Confirm,
}

impl KeyContext {
    /// Section heading in the help dialog
    pub fn title(&self) -> &'static str {
        match self {
            Self::Global => "General",
            Self::Sliders => "Sliders",
            Self::TotalInput => "Total Budget",
            Self::Confirm => "Cancel Prompt",
        }
    }
}

const fn bind(
    key: KeyCode,
    alt: Option<KeyCode>,
    modifiers: KeyModifiers,
    description: &'static str,
    context: KeyContext,
) -> Keybinding {
    Keybinding {
        key,
        alt,
        modifiers,
        description,
        context,
    }
}

const NONE: KeyModifiers = KeyModifiers::NONE;

/// All keybindings
pub static KEYBINDINGS: &[Keybinding] = &[
    // Global
    bind(KeyCode::Char('q'), None, NONE, "Quit", KeyContext::Global),
    bind(KeyCode::Char('?'), None, NONE, "Show/hide help", KeyContext::Global),
    bind(KeyCode::Char('t'), None, NONE, "Edit total budget", KeyContext::Global),
    bind(
        KeyCode::Char('a'),
        Some(KeyCode::Enter),
        NONE,
        "Allot budget",
        KeyContext::Global,
    ),
    bind(
        KeyCode::Char('c'),
        Some(KeyCode::Esc),
        NONE,
        "Cancel and reset allocations",
        KeyContext::Global,
    ),
    // Sliders
    bind(KeyCode::Up, Some(KeyCode::Char('k')), NONE, "Previous category", KeyContext::Sliders),
    bind(KeyCode::Down, Some(KeyCode::Char('j')), NONE, "Next category", KeyContext::Sliders),
    bind(KeyCode::Left, Some(KeyCode::Char('h')), NONE, "Decrease", KeyContext::Sliders),
    bind(KeyCode::Right, Some(KeyCode::Char('l')), NONE, "Increase", KeyContext::Sliders),
    bind(
        KeyCode::Left,
        Some(KeyCode::Right),
        KeyModifiers::SHIFT,
        "Move ten steps",
        KeyContext::Sliders,
    ),
    bind(KeyCode::Home, None, NONE, "Set to zero", KeyContext::Sliders),
    bind(KeyCode::End, None, NONE, "Set to the whole budget", KeyContext::Sliders),
    // Total input
    bind(KeyCode::Char('0'), Some(KeyCode::Char('9')), NONE, "Type digits", KeyContext::TotalInput),
    bind(KeyCode::Enter, None, NONE, "Apply (resets allocations)", KeyContext::TotalInput),
    bind(KeyCode::Esc, None, NONE, "Discard edit", KeyContext::TotalInput),
    // Confirm
    bind(KeyCode::Char('y'), None, NONE, "Reset allocations", KeyContext::Confirm),
    bind(KeyCode::Char('n'), Some(KeyCode::Esc), NONE, "Keep allocations", KeyContext::Confirm),
];

/// Get keybindings for a specific context
pub fn get_keybindings(context: KeyContext) -> Vec<&'static Keybinding> {
    KEYBINDINGS
        .iter()
        .filter(|kb| kb.context == context)
        .collect()
}

/// Format a keybinding for display (e.g., "↑/k", "Shift+←/→")
pub fn format_keybinding(kb: &Keybinding) -> String {
    let mut keys = format_key(&kb.key);
    if let Some(alt) = &kb.alt {
        let sep = if kb.context == KeyContext::TotalInput { "-" } else { "/" };
        keys = format!("{}{}{}", keys, sep, format_key(alt));
    }

    let mut parts = Vec::new();
    if kb.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl".to_string());
    }
    if kb.modifiers.contains(KeyModifiers::SHIFT) {
        parts.push("Shift".to_string());
    }
    parts.push(keys);
    parts.join("+")
}

fn format_key(key: &KeyCode) -> String {
    match key {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        _ => format!("{:?}", key),
    }
}

/// Short hint line for the bottom of the popup
pub fn hint_line() -> String {
    [
        ("↑↓", "select"),
        ("←→", "adjust"),
        ("t", "total"),
        ("a", "allot"),
        ("c", "cancel"),
        ("?", "help"),
    ]
    .iter()
    .map(|(key, what)| format!("{} {}", key, what))
    .collect::<Vec<_>>()
    .join("  ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_context_has_bindings() {
        for context in [
            KeyContext::Global,
            KeyContext::Sliders,
            KeyContext::TotalInput,
            KeyContext::Confirm,
        ] {
            assert!(!get_keybindings(context).is_empty(), "{:?}", context);
        }
    }

    #[test]
    fn test_format_keybinding() {
        let up = get_keybindings(KeyContext::Sliders)[0];
        assert_eq!(format_keybinding(up), "↑/k");

        let coarse = get_keybindings(KeyContext::Sliders)
            .into_iter()
            .find(|kb| kb.modifiers.contains(KeyModifiers::SHIFT))
            .unwrap();
        assert_eq!(format_keybinding(coarse), "Shift+←/→");

        let digits = get_keybindings(KeyContext::TotalInput)[0];
        assert_eq!(format_keybinding(digits), "0-9");
    }

    #[test]
    fn test_hint_line() {
        let hints = hint_line();
        assert!(hints.contains("a allot"));
        assert!(hints.contains("c cancel"));
    }
}
