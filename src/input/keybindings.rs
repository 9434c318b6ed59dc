//! Default keybindings for the application.

use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

use super::command::Command;
use super::context::InputContext;

/// Represents a key combination (key code + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }
}

/// Keybinding configuration for the application.
#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    /// Always active, checked first
    pub global: HashMap<KeyCombo, Command>,
    /// Per input context
    pub context: HashMap<InputContext, HashMap<KeyCombo, Command>>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    pub fn new() -> Self {
        let mut config = Self {
            global: HashMap::new(),
            context: HashMap::new(),
        };
        config.setup_global_bindings();
        config.setup_context_bindings();
        config
    }

    fn setup_global_bindings(&mut self) {
        self.global
            .insert(KeyCombo::ctrl(KeyCode::Char('c')), Command::Quit);
        self.global
            .insert(KeyCombo::ctrl(KeyCode::Char('t')), Command::ToggleTheme);
    }

    fn setup_context_bindings(&mut self) {
        let mut list = HashMap::new();
        list.insert(KeyCombo::plain(KeyCode::Up), Command::SelectPrevious);
        list.insert(KeyCombo::plain(KeyCode::Char('k')), Command::SelectPrevious);
        list.insert(KeyCombo::plain(KeyCode::Down), Command::SelectNext);
        list.insert(KeyCombo::plain(KeyCode::Char('j')), Command::SelectNext);
        list.insert(KeyCombo::plain(KeyCode::Enter), Command::OpenSelected);
        list.insert(KeyCombo::plain(KeyCode::Char('m')), Command::OpenModerator);
        list.insert(KeyCombo::plain(KeyCode::Char('/')), Command::BeginSearch);
        list.insert(KeyCombo::plain(KeyCode::Char('r')), Command::Reload);
        list.insert(KeyCombo::plain(KeyCode::Char('t')), Command::ToggleTheme);
        list.insert(KeyCombo::plain(KeyCode::Char('q')), Command::Quit);
        self.context.insert(InputContext::PostList, list);

        let mut search = HashMap::new();
        search.insert(KeyCombo::plain(KeyCode::Enter), Command::CommitSearch);
        search.insert(KeyCombo::plain(KeyCode::Esc), Command::CancelSearch);
        search.insert(KeyCombo::plain(KeyCode::Backspace), Command::Backspace);
        self.context.insert(InputContext::PostSearch, search);

        let mut comments = HashMap::new();
        comments.insert(KeyCombo::plain(KeyCode::Esc), Command::Back);
        comments.insert(KeyCombo::plain(KeyCode::Char('b')), Command::Back);
        comments.insert(KeyCombo::plain(KeyCode::Tab), Command::CycleFocus);
        comments.insert(KeyCombo::plain(KeyCode::Up), Command::ScrollUp);
        comments.insert(KeyCombo::plain(KeyCode::Char('k')), Command::ScrollUp);
        comments.insert(KeyCombo::plain(KeyCode::Down), Command::ScrollDown);
        comments.insert(KeyCombo::plain(KeyCode::Char('j')), Command::ScrollDown);
        comments.insert(KeyCombo::plain(KeyCode::Char('r')), Command::Reload);
        comments.insert(KeyCombo::plain(KeyCode::Char('t')), Command::ToggleTheme);
        comments.insert(KeyCombo::plain(KeyCode::Char('q')), Command::Quit);
        self.context.insert(InputContext::DetailComments, comments);

        let mut form = HashMap::new();
        form.insert(KeyCombo::plain(KeyCode::Esc), Command::Back);
        form.insert(KeyCombo::plain(KeyCode::Tab), Command::CycleFocus);
        form.insert(KeyCombo::plain(KeyCode::Enter), Command::SubmitComment);
        form.insert(KeyCombo::new(KeyCode::Enter, KeyModifiers::ALT), Command::InsertNewline);
        form.insert(KeyCombo::ctrl(KeyCode::Char('j')), Command::InsertNewline);
        form.insert(KeyCombo::plain(KeyCode::Backspace), Command::Backspace);
        form.insert(KeyCombo::plain(KeyCode::Up), Command::ScrollUp);
        form.insert(KeyCombo::plain(KeyCode::Down), Command::ScrollDown);
        self.context.insert(InputContext::DetailForm, form);

        let mut moderator = HashMap::new();
        moderator.insert(KeyCombo::plain(KeyCode::Esc), Command::Back);
        moderator.insert(KeyCombo::plain(KeyCode::Char('b')), Command::Back);
        moderator.insert(KeyCombo::plain(KeyCode::Up), Command::SelectPrevious);
        moderator.insert(KeyCombo::plain(KeyCode::Char('k')), Command::SelectPrevious);
        moderator.insert(KeyCombo::plain(KeyCode::Down), Command::SelectNext);
        moderator.insert(KeyCombo::plain(KeyCode::Char('j')), Command::SelectNext);
        moderator.insert(KeyCombo::plain(KeyCode::Char('a')), Command::Approve);
        moderator.insert(KeyCombo::plain(KeyCode::Char('d')), Command::Remove);
        moderator.insert(KeyCombo::plain(KeyCode::Enter), Command::OpenSelected);
        moderator.insert(KeyCombo::plain(KeyCode::Char('r')), Command::Reload);
        moderator.insert(KeyCombo::plain(KeyCode::Char('t')), Command::ToggleTheme);
        moderator.insert(KeyCombo::plain(KeyCode::Char('q')), Command::Quit);
        self.context.insert(InputContext::Moderator, moderator);
    }

    pub fn get_global(&self, combo: &KeyCombo) -> Option<Command> {
        self.global.get(combo).copied()
    }

    pub fn get_context(&self, context: InputContext, combo: &KeyCombo) -> Option<Command> {
        self.context
            .get(&context)
            .and_then(|bindings| bindings.get(combo))
            .copied()
    }
}
