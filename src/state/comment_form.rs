//! Comment submission form.
//!
//! Local state machine: `Idle -> Submitting -> Succeeded -> Idle` on success,
//! `Idle -> Submitting -> Idle` (with an error) on failure. The form never
//! talks to the network itself; [`CommentForm::begin_submit`] hands back the
//! request and the owner reports the outcome.

use crate::models::CreateComment;

pub const VALIDATION_ERROR: &str = "Please fill in all fields";
pub const SUBMIT_ERROR: &str = "Failed to submit comment. Please try again.";
pub const SUBMIT_SUCCESS: &str = "Comment submitted successfully!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Author,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
}

/// Why a submission did not start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// A submission is already in flight.
    Busy,
    /// Author or text is blank after trimming.
    Invalid,
}

#[derive(Debug, Clone, Default)]
pub struct CommentForm {
    pub author: String,
    pub text: String,
    pub field: FormField,
    pub phase: FormPhase,
    pub error: Option<String>,
}

impl CommentForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inputs are disabled while a submission is in flight.
    pub fn is_locked(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn success_message(&self) -> Option<&'static str> {
        (self.phase == FormPhase::Succeeded).then_some(SUBMIT_SUCCESS)
    }

    pub fn focus(&mut self, field: FormField) {
        self.field = field;
    }

    fn active_mut(&mut self) -> &mut String {
        match self.field {
            FormField::Author => &mut self.author,
            FormField::Text => &mut self.text,
        }
    }

    pub fn input_char(&mut self, c: char) {
        if !self.is_locked() {
            self.active_mut().push(c);
        }
    }

    /// Only the comment text may span lines.
    pub fn input_newline(&mut self) {
        if !self.is_locked() && self.field == FormField::Text {
            self.text.push('\n');
        }
    }

    pub fn backspace(&mut self) {
        if !self.is_locked() {
            self.active_mut().pop();
        }
    }

    /// Validate and move to `Submitting`.
    ///
    /// Returns the trimmed request to send. On validation failure the error
    /// message is set and nothing is sent.
    pub fn begin_submit(&mut self, post_id: u64) -> Result<CreateComment, SubmitBlocked> {
        if self.is_locked() {
            return Err(SubmitBlocked::Busy);
        }

        let author = self.author.trim();
        let text = self.text.trim();
        if author.is_empty() || text.is_empty() {
            self.error = Some(VALIDATION_ERROR.to_string());
            self.phase = FormPhase::Idle;
            return Err(SubmitBlocked::Invalid);
        }

        let request = CreateComment {
            post: post_id,
            author: author.to_string(),
            text: text.to_string(),
        };
        self.error = None;
        self.phase = FormPhase::Submitting;
        Ok(request)
    }

    pub fn submit_succeeded(&mut self) {
        self.author.clear();
        self.text.clear();
        self.field = FormField::Author;
        self.error = None;
        self.phase = FormPhase::Succeeded;
    }

    pub fn submit_failed(&mut self) {
        self.error = Some(SUBMIT_ERROR.to_string());
        self.phase = FormPhase::Idle;
    }

    /// End the success display. No-op unless currently `Succeeded`.
    pub fn finish_success(&mut self) -> bool {
        if self.phase == FormPhase::Succeeded {
            self.phase = FormPhase::Idle;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(author: &str, text: &str) -> CommentForm {
        CommentForm {
            author: author.to_string(),
            text: text.to_string(),
            ..CommentForm::new()
        }
    }

    #[test]
    fn test_blank_fields_rejected() {
        for (author, text) in [("", "hi"), ("ann", ""), ("  ", "hi"), ("ann", "\n\t ")] {
            let mut form = filled(author, text);
            assert_eq!(form.begin_submit(1), Err(SubmitBlocked::Invalid));
            assert_eq!(form.error.as_deref(), Some(VALIDATION_ERROR));
            assert_eq!(form.phase, FormPhase::Idle);
        }
    }

    #[test]
    fn test_begin_submit_trims() {
        let mut form = filled("  Ann ", " Nice post\n");
        let request = form.begin_submit(7).unwrap();
        assert_eq!(
            request,
            CreateComment {
                post: 7,
                author: "Ann".to_string(),
                text: "Nice post".to_string(),
            }
        );
        assert!(form.is_locked());
        assert_eq!(form.error, None);
    }

    #[test]
    fn test_locked_while_submitting() {
        let mut form = filled("Ann", "Hi");
        form.begin_submit(1).unwrap();

        form.input_char('x');
        form.backspace();
        assert_eq!(form.author, "Ann");
        assert_eq!(form.begin_submit(1), Err(SubmitBlocked::Busy));
    }

    #[test]
    fn test_failure_keeps_inputs() {
        let mut form = filled("Ann", "Hi");
        form.begin_submit(1).unwrap();
        form.submit_failed();

        assert_eq!(form.phase, FormPhase::Idle);
        assert_eq!(form.error.as_deref(), Some(SUBMIT_ERROR));
        assert_eq!(form.text, "Hi");

        form.begin_submit(1).unwrap();
        assert_eq!(form.error, None);
    }

    #[test]
    fn test_success_cycle() {
        let mut form = filled("Ann", "Hi");
        form.field = FormField::Text;
        form.begin_submit(1).unwrap();
        form.submit_succeeded();

        assert!(form.author.is_empty() && form.text.is_empty());
        assert_eq!(form.field, FormField::Author);
        assert_eq!(form.success_message(), Some(SUBMIT_SUCCESS));
        assert!(!form.is_locked());

        assert!(form.finish_success());
        assert_eq!(form.phase, FormPhase::Idle);
        assert!(!form.finish_success());
    }

    #[test]
    fn test_typing_targets_active_field() {
        let mut form = CommentForm::new();
        form.input_char('A');
        form.focus(FormField::Text);
        form.input_char('b');
        form.input_char('c');
        form.backspace();
        assert_eq!(form.author, "A");
        assert_eq!(form.text, "b");
    }

    #[test]
    fn test_newline_only_in_text() {
        let mut form = CommentForm::new();
        form.input_newline();
        assert!(form.author.is_empty());

        form.focus(FormField::Text);
        form.input_char('a');
        form.input_newline();
        form.input_char('b');
        assert_eq!(form.text, "a\nb");

        let request = form.begin_submit(1);
        assert!(request.is_err());
        form.author = "Ann".to_string();
        form.error = None;
        assert_eq!(form.begin_submit(1).unwrap().text, "a\nb");
    }
}
