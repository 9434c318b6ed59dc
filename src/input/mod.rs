//! Input handling: keyboard events to commands to app mutations.
//!
//! ```text
//! KeyEvent -> CommandRegistry::dispatch() -> Command -> App::execute_command()
//! ```

pub mod command;
pub mod context;
pub mod keybindings;
pub mod registry;

pub use command::Command;
pub use context::InputContext;
pub use keybindings::{KeyCombo, KeybindingConfig};
pub use registry::CommandRegistry;

use crossterm::event::KeyEvent;

use crate::app::{App, View};
use crate::state::ModerationAction;

impl App {
    /// Route a key event through `registry` and apply the result.
    pub fn handle_key(&mut self, registry: &CommandRegistry, key: KeyEvent) {
        let context = InputContext::from_app(self);
        if let Some(command) = registry.dispatch(key, context) {
            self.execute_command(command);
        }
    }

    pub fn execute_command(&mut self, command: Command) {
        self.mark_dirty();
        match command {
            Command::Quit => self.should_quit = true,
            Command::ToggleTheme => self.toggle_theme(),
            Command::Back => self.go_back(),
            Command::Reload => self.reload(),
            Command::OpenModerator => self.navigate_to_moderator(),
            Command::CommitSearch => self.commit_search(),
            Command::SubmitComment => self.submit_comment(),
            Command::Approve => self.moderate_selected(ModerationAction::Approve),
            Command::Remove => self.moderate_selected(ModerationAction::Remove),
            Command::OpenSelected => {
                let target = match &self.view {
                    View::PostList(state) => state.selected_post().map(|p| p.id),
                    View::Moderator(state) => state.selected_comment().map(|c| c.post),
                    View::PostDetail(_) => None,
                };
                if let Some(post_id) = target {
                    self.open_post(post_id);
                }
            }
            _ => self.apply_local_command(command),
        }
    }

    /// Commands that only touch the mounted view's state.
    fn apply_local_command(&mut self, command: Command) {
        match (&mut self.view, command) {
            (View::PostList(state), Command::SelectNext) => state.select_next(),
            (View::PostList(state), Command::SelectPrevious) => state.select_previous(),
            (View::PostList(state), Command::BeginSearch) => state.begin_search(),
            (View::PostList(state), Command::CancelSearch) => state.cancel_search(),
            (View::PostList(state), Command::InsertChar(c)) => state.search_char(c),
            (View::PostList(state), Command::Backspace) => state.search_backspace(),

            (View::PostDetail(state), Command::CycleFocus) => state.cycle_focus(),
            (View::PostDetail(state), Command::ScrollUp) => state.scroll_up(),
            (View::PostDetail(state), Command::ScrollDown) => state.scroll_down(),
            (View::PostDetail(state), Command::InsertChar(c)) if state.form_available() => state.form.input_char(c),
            (View::PostDetail(state), Command::InsertNewline) if state.form_available() => state.form.input_newline(),
            (View::PostDetail(state), Command::Backspace) if state.form_available() => state.form.backspace(),

            (View::Moderator(state), Command::SelectNext) => state.select_next(),
            (View::Moderator(state), Command::SelectPrevious) => state.select_previous(),

            _ => {}
        }
    }
}
