//! Command registry for dispatching keyboard input to commands.
//!
//! Priority:
//! 1. Global bindings (Ctrl+C, Ctrl+T)
//! 2. Bindings of the current [`InputContext`]
//! 3. Printable characters, when the context accepts text

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::command::Command;
use super::context::InputContext;
use super::keybindings::{KeyCombo, KeybindingConfig};

#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    config: KeybindingConfig,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: KeybindingConfig) -> Self {
        Self { config }
    }

    /// Map a key event to a command, or `None` if the key is ignored.
    pub fn dispatch(&self, key: KeyEvent, context: InputContext) -> Option<Command> {
        if key.kind == KeyEventKind::Release {
            return None;
        }

        // Shift only changes the character itself.
        let modifiers = key.modifiers.difference(KeyModifiers::SHIFT);
        let combo = KeyCombo::new(key.code, modifiers);

        if let Some(cmd) = self.config.get_global(&combo) {
            return Some(cmd);
        }
        if let Some(cmd) = self.config.get_context(context, &combo) {
            return Some(cmd);
        }

        match key.code {
            KeyCode::Char(c)
                if context.accepts_text()
                    && !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Some(Command::InsertChar(c))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_global_bindings_everywhere() {
        let registry = CommandRegistry::new();
        for context in [
            InputContext::PostList,
            InputContext::PostSearch,
            InputContext::DetailComments,
            InputContext::DetailForm,
            InputContext::Moderator,
        ] {
            assert_eq!(registry.dispatch(ctrl('c'), context), Some(Command::Quit));
            assert_eq!(registry.dispatch(ctrl('t'), context), Some(Command::ToggleTheme));
        }
    }

    #[test]
    fn test_post_list_bindings() {
        let registry = CommandRegistry::new();
        let ctx = InputContext::PostList;
        assert_eq!(registry.dispatch(key(KeyCode::Char('j')), ctx), Some(Command::SelectNext));
        assert_eq!(registry.dispatch(key(KeyCode::Up), ctx), Some(Command::SelectPrevious));
        assert_eq!(registry.dispatch(key(KeyCode::Enter), ctx), Some(Command::OpenSelected));
        assert_eq!(registry.dispatch(key(KeyCode::Char('m')), ctx), Some(Command::OpenModerator));
        assert_eq!(registry.dispatch(key(KeyCode::Char('/')), ctx), Some(Command::BeginSearch));
        assert_eq!(registry.dispatch(key(KeyCode::Char('q')), ctx), Some(Command::Quit));
        assert_eq!(registry.dispatch(key(KeyCode::Char('x')), ctx), None);
    }

    #[test]
    fn test_form_types_letters_that_are_shortcuts_elsewhere() {
        let registry = CommandRegistry::new();
        let ctx = InputContext::DetailForm;
        assert_eq!(registry.dispatch(key(KeyCode::Char('q')), ctx), Some(Command::InsertChar('q')));
        assert_eq!(registry.dispatch(key(KeyCode::Char('t')), ctx), Some(Command::InsertChar('t')));
        assert_eq!(
            registry.dispatch(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT), ctx),
            Some(Command::InsertChar('A'))
        );
        assert_eq!(registry.dispatch(key(KeyCode::Enter), ctx), Some(Command::SubmitComment));
        assert_eq!(registry.dispatch(key(KeyCode::Esc), ctx), Some(Command::Back));
        assert_eq!(registry.dispatch(ctrl('x'), ctx), None);
    }

    #[test]
    fn test_form_line_break_keys() {
        let registry = CommandRegistry::new();
        let ctx = InputContext::DetailForm;
        assert_eq!(
            registry.dispatch(KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT), ctx),
            Some(Command::InsertNewline)
        );
        assert_eq!(registry.dispatch(ctrl('j'), ctx), Some(Command::InsertNewline));
        assert_eq!(registry.dispatch(ctrl('j'), InputContext::DetailComments), None);
    }

    #[test]
    fn test_search_prompt() {
        let registry = CommandRegistry::new();
        let ctx = InputContext::PostSearch;
        assert_eq!(registry.dispatch(key(KeyCode::Char('m')), ctx), Some(Command::InsertChar('m')));
        assert_eq!(registry.dispatch(key(KeyCode::Enter), ctx), Some(Command::CommitSearch));
        assert_eq!(registry.dispatch(key(KeyCode::Esc), ctx), Some(Command::CancelSearch));
    }

    #[test]
    fn test_moderator_bindings() {
        let registry = CommandRegistry::new();
        let ctx = InputContext::Moderator;
        assert_eq!(registry.dispatch(key(KeyCode::Char('a')), ctx), Some(Command::Approve));
        assert_eq!(registry.dispatch(key(KeyCode::Char('d')), ctx), Some(Command::Remove));
        assert_eq!(registry.dispatch(key(KeyCode::Esc), ctx), Some(Command::Back));
        assert_eq!(registry.dispatch(key(KeyCode::Enter), ctx), Some(Command::OpenSelected));
    }

    #[test]
    fn test_release_events_ignored() {
        let registry = CommandRegistry::new();
        let mut event = key(KeyCode::Char('q'));
        event.kind = KeyEventKind::Release;
        assert_eq!(registry.dispatch(event, InputContext::PostList), None);
    }
}
