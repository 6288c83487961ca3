use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use smol_str::{SmolStr, ToSmolStr};

/// Centrally defined key actions for the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    PreviousCategory,
    NextCategory,
    ViewTotal,
    AddTransaction,
    Import,
    RefreshStatements,
    ReloadStatement,
    Logs,
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    GotoTop,
    GotoBottom,
    Select,
    Back,
    ClearLine,
    Char(char),
    DeleteChar,
}

// ── Key code constants ───────────────────────────────────────────

pub const KEY_QUIT: KeyCode = KeyCode::Char('q');
pub const KEY_PREVIOUS_CATEGORY: KeyCode = KeyCode::Left;
pub const KEY_NEXT_CATEGORY: KeyCode = KeyCode::Right;
pub const KEY_VIEW_TOTAL: KeyCode = KeyCode::Char('t');
pub const KEY_ADD_TRANSACTION: KeyCode = KeyCode::Char('a');
pub const KEY_IMPORT: KeyCode = KeyCode::Char('i');
pub const KEY_REFRESH: KeyCode = KeyCode::Char('r');
pub const KEY_RELOAD: KeyCode = KeyCode::Char('R');
pub const KEY_LOGS: KeyCode = KeyCode::Char('L');
pub const KEY_SELECT: KeyCode = KeyCode::Enter;
pub const KEY_BACK: KeyCode = KeyCode::Esc;
pub const KEY_UP: KeyCode = KeyCode::Up;
pub const KEY_DOWN: KeyCode = KeyCode::Down;
pub const KEY_PAGE_UP: KeyCode = KeyCode::PageUp;
pub const KEY_PAGE_DOWN: KeyCode = KeyCode::PageDown;
pub const KEY_GOTO_TOP: KeyCode = KeyCode::Home;
pub const KEY_GOTO_BOTTOM: KeyCode = KeyCode::End;
pub const KEY_DELETE_CHAR: KeyCode = KeyCode::Backspace;

impl Action {
    /// Label shown in the help bar. Returns `None` for actions that
    /// shouldn't appear (navigation, text input, etc.).
    pub fn help_label(&self) -> Option<(SmolStr, SmolStr)> {
        let (key, desc) = match self {
            Action::Quit => (key_label(KEY_QUIT), "quit"),
            Action::PreviousCategory | Action::NextCategory => {
                ("\u{2190}/\u{2192}".into(), "category")
            }
            Action::ViewTotal => (key_label(KEY_VIEW_TOTAL), "total"),
            Action::AddTransaction => (key_label(KEY_ADD_TRANSACTION), "add"),
            Action::Import => (key_label(KEY_IMPORT), "import"),
            Action::RefreshStatements => (key_label(KEY_REFRESH), "refresh"),
            Action::ReloadStatement => (key_label(KEY_RELOAD), "reload"),
            Action::Logs => (key_label(KEY_LOGS), "logs"),
            Action::Select => (key_label(KEY_SELECT), "upload"),
            Action::Back => (key_label(KEY_BACK), "close"),
            _ => return None,
        };
        Some((key, desc.into()))
    }
}

fn key_label(code: KeyCode) -> SmolStr {
    match code {
        KeyCode::Char(c) => c.to_smolstr(),
        KeyCode::Enter => "enter".into(),
        KeyCode::Esc => "esc".into(),
        other => format!("{other:?}").to_lowercase().into(),
    }
}

/// Resolve a key event into an action on the main screen.
pub fn home_action(key: &KeyEvent) -> Option<Action> {
    match key.code {
        KEY_QUIT => Some(Action::Quit),
        KEY_PREVIOUS_CATEGORY => Some(Action::PreviousCategory),
        KEY_NEXT_CATEGORY => Some(Action::NextCategory),
        KEY_VIEW_TOTAL => Some(Action::ViewTotal),
        KEY_ADD_TRANSACTION => Some(Action::AddTransaction),
        KEY_IMPORT => Some(Action::Import),
        KEY_REFRESH => Some(Action::RefreshStatements),
        KEY_RELOAD => Some(Action::ReloadStatement),
        KEY_LOGS => Some(Action::Logs),
        KEY_UP => Some(Action::MoveUp),
        KEY_DOWN => Some(Action::MoveDown),
        KEY_PAGE_UP => Some(Action::PageUp),
        KEY_PAGE_DOWN => Some(Action::PageDown),
        KEY_GOTO_TOP => Some(Action::GotoTop),
        KEY_GOTO_BOTTOM => Some(Action::GotoBottom),
        KEY_BACK => Some(Action::Back),
        _ => None,
    }
}

/// Resolve a key event into an action while typing a path to import.
pub fn import_action(key: &KeyEvent) -> Option<Action> {
    match key.code {
        KEY_BACK => Some(Action::Back),
        KEY_SELECT => Some(Action::Select),
        KEY_DELETE_CHAR => Some(Action::DeleteChar),
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) && c == 'u' {
                Some(Action::ClearLine)
            } else {
                Some(Action::Char(c))
            }
        }
        _ => None,
    }
}

/// Resolve a key event into an action in logs context.
pub fn logs_action(key: &KeyEvent) -> Option<Action> {
    match key.code {
        KEY_BACK | KEY_LOGS | KEY_QUIT => Some(Action::Back),
        KEY_UP => Some(Action::MoveUp),
        KEY_DOWN => Some(Action::MoveDown),
        KEY_PAGE_UP => Some(Action::PageUp),
        KEY_PAGE_DOWN => Some(Action::PageDown),
        KEY_GOTO_TOP => Some(Action::GotoTop),
        KEY_GOTO_BOTTOM => Some(Action::GotoBottom),
        _ => None,
    }
}

/// Ordered list of actions to show in the main help bar.
pub const HOME_HELP: &[Action] = &[
    Action::Quit,
    Action::NextCategory,
    Action::ViewTotal,
    Action::AddTransaction,
    Action::Back,
    Action::Import,
    Action::RefreshStatements,
    Action::ReloadStatement,
    Action::Logs,
];

/// Ordered list of actions to show in the import help bar.
pub const IMPORT_HELP: &[Action] = &[Action::Select, Action::Back];

/// Ordered list of actions to show in the logs help bar.
pub const LOGS_HELP: &[Action] = &[Action::Back];

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_import_captures_command_keys_as_text() {
        assert_eq!(import_action(&press(KEY_QUIT)), Some(Action::Char('q')));
        assert_eq!(
            import_action(&KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL)),
            Some(Action::ClearLine)
        );
        assert_eq!(import_action(&press(KEY_BACK)), Some(Action::Back));
    }

    #[test]
    fn test_home_actions() {
        assert_eq!(home_action(&press(KEY_QUIT)), Some(Action::Quit));
        assert_eq!(home_action(&press(KeyCode::Right)), Some(Action::NextCategory));
        assert_eq!(home_action(&press(KeyCode::Char('z'))), None);
    }

    #[test]
    fn test_help_labels() {
        assert_eq!(
            Action::Import.help_label(),
            Some(("i".into(), "import".into()))
        );
        assert_eq!(Action::MoveUp.help_label(), None);
    }
}
