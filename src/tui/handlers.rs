use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct KeyHandler;

impl KeyHandler {
    pub fn handle_normal_mode_key(key_event: KeyEvent) -> NormalModeAction {
        match key_event.code {
            KeyCode::Char('q') => NormalModeAction::Quit,
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                NormalModeAction::Quit
            }
            KeyCode::Esc => NormalModeAction::ClearSearch,
            KeyCode::Up | KeyCode::Char('k') => NormalModeAction::MoveSelectionUp,
            KeyCode::Down | KeyCode::Char('j') => NormalModeAction::MoveSelectionDown,
            KeyCode::Enter | KeyCode::Char(' ') => NormalModeAction::ToggleRow,
            KeyCode::Char('s') => NormalModeAction::Submit,
            KeyCode::Char('/') => NormalModeAction::EnterSearchMode,
            KeyCode::Char('?') => NormalModeAction::ToggleHelpMode,
            _ => NormalModeAction::None,
        }
    }

    pub fn handle_help_mode_key(key_event: KeyEvent) -> HelpModeAction {
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Char('?') => {
                HelpModeAction::ExitHelpMode
            }
            _ => HelpModeAction::None,
        }
    }

    pub fn handle_search_mode_key(key_event: KeyEvent) -> SearchModeAction {
        match key_event.code {
            KeyCode::Esc => SearchModeAction::CancelSearch,
            KeyCode::Enter => SearchModeAction::ConfirmSearch,
            KeyCode::Backspace => SearchModeAction::Backspace,
            KeyCode::Char(c) => SearchModeAction::InsertChar(c),
            _ => SearchModeAction::None,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum NormalModeAction {
    None,
    Quit,
    ClearSearch,
    MoveSelectionUp,
    MoveSelectionDown,
    ToggleRow,
    Submit,
    EnterSearchMode,
    ToggleHelpMode,
}

#[derive(Debug, PartialEq)]
pub enum HelpModeAction {
    None,
    ExitHelpMode,
}

#[derive(Debug, PartialEq)]
pub enum SearchModeAction {
    None,
    CancelSearch,
    ConfirmSearch,
    Backspace,
    InsertChar(char),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_mode_basic_keys() {
        let key_event = KeyEvent::from(KeyCode::Char('q'));
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::Quit);

        let key_event = KeyEvent::from(KeyCode::Enter);
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::ToggleRow);

        let key_event = KeyEvent::from(KeyCode::Char(' '));
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::ToggleRow);

        let key_event = KeyEvent::from(KeyCode::Char('s'));
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::Submit);

        let key_event = KeyEvent::from(KeyCode::Char('/'));
        assert_eq!(
            KeyHandler::handle_normal_mode_key(key_event),
            NormalModeAction::EnterSearchMode
        );
    }

    #[test]
    fn test_normal_mode_navigation_keys() {
        let key_event = KeyEvent::from(KeyCode::Up);
        assert_eq!(
            KeyHandler::handle_normal_mode_key(key_event),
            NormalModeAction::MoveSelectionUp
        );

        let key_event = KeyEvent::from(KeyCode::Char('j'));
        assert_eq!(
            KeyHandler::handle_normal_mode_key(key_event),
            NormalModeAction::MoveSelectionDown
        );
    }

    #[test]
    fn test_normal_mode_ctrl_c() {
        let mut key_event = KeyEvent::from(KeyCode::Char('c'));
        key_event.modifiers = KeyModifiers::CONTROL;
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::Quit);

        let key_event = KeyEvent::from(KeyCode::Char('c'));
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::None);
    }

    #[test]
    fn test_help_mode_keys() {
        let key_event = KeyEvent::from(KeyCode::Esc);
        assert_eq!(KeyHandler::handle_help_mode_key(key_event), HelpModeAction::ExitHelpMode);

        let key_event = KeyEvent::from(KeyCode::Char('x'));
        assert_eq!(KeyHandler::handle_help_mode_key(key_event), HelpModeAction::None);
    }

    #[test]
    fn test_search_mode_keys() {
        let key_event = KeyEvent::from(KeyCode::Esc);
        assert_eq!(KeyHandler::handle_search_mode_key(key_event), SearchModeAction::CancelSearch);

        let key_event = KeyEvent::from(KeyCode::Enter);
        assert_eq!(KeyHandler::handle_search_mode_key(key_event), SearchModeAction::ConfirmSearch);

        let key_event = KeyEvent::from(KeyCode::Backspace);
        assert_eq!(KeyHandler::handle_search_mode_key(key_event), SearchModeAction::Backspace);

        let key_event = KeyEvent::from(KeyCode::Char('q'));
        assert_eq!(
            KeyHandler::handle_search_mode_key(key_event),
            SearchModeAction::InsertChar('q')
        );
    }
}
