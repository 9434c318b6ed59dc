//! Per-view fetch state and view lifetimes.
//!
//! Every time a screen is mounted it receives a fresh [`ViewToken`]. Async
//! completions carry the token they were issued under; a completion whose
//! token is not the active screen's token belongs to a view that no longer
//! exists and is dropped.

/// Identity of one mounted view instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewToken(u64);

impl ViewToken {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Issues monotonically increasing view tokens.
#[derive(Debug, Default)]
pub struct ViewLifetimes {
    next: u64,
}

impl ViewLifetimes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new view lifetime. Tokens are never reused.
    pub fn mount(&mut self) -> ViewToken {
        self.next += 1;
        ViewToken(self.next)
    }
}

/// Result of a single view fetch.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Fetch<T> {
    #[default]
    Loading,
    Loaded(T),
    /// Holds the generic message shown to the user, never the raw error.
    Failed(String),
}

impl<T> Fetch<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Fetch::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Fetch::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn loaded_mut(&mut self) -> Option<&mut T> {
        match self {
            Fetch::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Fetch::Failed(message) => Some(message),
            _ => None,
        }
    }
}
