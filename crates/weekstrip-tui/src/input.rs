use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::keymap::{KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Pull the strip one drag step toward earlier days
    DragLeft,
    /// Pull the strip one drag step toward later days
    DragRight,
    /// Let go of the strip
    Release,
    PrevPage,
    NextPage,
    /// Owner-side assignment of the previous day
    PrevDay,
    NextDay,
    Today,
    /// Tap the cell in this slot of the visible page
    Tap(usize),
    ToggleTracking,
    ToggleKind,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, keymap: &Keymap) -> Action {
    let binding = KeyBinding::new(key.code, normalize_modifiers(key.code, key.modifiers));
    if let Some(action) = keymap.get(&binding) {
        return *action;
    }

    // Digits tap a slot of the visible page
    match (key.code, key.modifiers) {
        (KeyCode::Char(c @ '1'..='7'), KeyModifiers::NONE) => {
            Action::Tap(c as usize - '1' as usize)
        }
        _ => Action::None,
    }
}

/// Terminals report uppercase letters with or without SHIFT
fn normalize_modifiers(code: KeyCode, modifiers: KeyModifiers) -> KeyModifiers {
    match code {
        KeyCode::Char(c) if c.is_ascii_uppercase() => modifiers | KeyModifiers::SHIFT,
        _ => modifiers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_default_actions() {
        let keymap = Keymap::default();
        assert_eq!(
            handle_key_event(press(KeyCode::Char('l'), KeyModifiers::NONE), &keymap),
            Action::DragRight
        );
        assert_eq!(
            handle_key_event(press(KeyCode::Char('L'), KeyModifiers::NONE), &keymap),
            Action::NextPage
        );
        assert_eq!(
            handle_key_event(press(KeyCode::Char('c'), KeyModifiers::CONTROL), &keymap),
            Action::Quit
        );
    }

    #[test]
    fn test_digit_taps() {
        let keymap = Keymap::default();
        assert_eq!(
            handle_key_event(press(KeyCode::Char('1'), KeyModifiers::NONE), &keymap),
            Action::Tap(0)
        );
        assert_eq!(
            handle_key_event(press(KeyCode::Char('7'), KeyModifiers::NONE), &keymap),
            Action::Tap(6)
        );
        assert_eq!(
            handle_key_event(press(KeyCode::Char('8'), KeyModifiers::NONE), &keymap),
            Action::None
        );
    }
}
