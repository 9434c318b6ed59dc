//! Commands produced from key events.

/// A user action, independent of the key that triggered it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    ToggleTheme,

    // Lists
    SelectNext,
    SelectPrevious,
    OpenSelected,
    OpenModerator,
    Reload,
    Back,

    // Post list search prompt
    BeginSearch,
    CommitSearch,
    CancelSearch,

    // Post detail
    CycleFocus,
    ScrollUp,
    ScrollDown,
    SubmitComment,

    // Moderator dashboard
    Approve,
    Remove,

    // Text entry (search prompt and comment form)
    InsertChar(char),
    /// Line break in the comment text
    InsertNewline,
    Backspace,
}
