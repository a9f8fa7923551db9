//! Session bootstrap state machine.
//!
//! A conversation links itself to a backend session record at most once, the
//! moment its history first holds exactly one turn after the system prompt.
//! A failed attempt is terminal as well: repeated user traffic never turns
//! into a retry loop against the backend.
//!
//! # State Transitions
//!
//! ```text
//! NotAttempted ──> Attempting ──> Created
//!                            └──> FailedSoft
//! ```

use super::entities::SessionHandle;

/// History length at which the session is created (system prompt + first turn).
pub const BOOTSTRAP_HISTORY_LEN: usize = 2;

/// State of the single session-creation attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionBootstrap {
    #[default]
    NotAttempted,
    Attempting,
    Created(SessionHandle),
    FailedSoft,
}

impl SessionBootstrap {
    /// Whether a history of `history_len` messages should trigger the attempt.
    pub fn should_attempt(&self, history_len: usize) -> bool {
        matches!(self, Self::NotAttempted) && history_len == BOOTSTRAP_HISTORY_LEN
    }

    /// Move `NotAttempted -> Attempting`. Returns false from any other state.
    pub fn begin(&mut self) -> bool {
        if matches!(self, Self::NotAttempted) {
            *self = Self::Attempting;
            true
        } else {
            false
        }
    }

    /// Record the outcome of the attempt started by [`begin`](Self::begin).
    ///
    /// Ignored unless the state is `Attempting`.
    pub fn finish(&mut self, handle: Option<SessionHandle>) {
        if !matches!(self, Self::Attempting) {
            return;
        }
        *self = match handle {
            Some(handle) => Self::Created(handle),
            None => Self::FailedSoft,
        };
    }

    pub fn was_attempted(&self) -> bool {
        !matches!(self, Self::NotAttempted)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Created(_) | Self::FailedSoft)
    }

    pub fn handle(&self) -> Option<&SessionHandle> {
        match self {
            Self::Created(handle) => Some(handle),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triggers_only_at_first_turn() {
        let state = SessionBootstrap::default();
        assert!(!state.should_attempt(1));
        assert!(state.should_attempt(2));
        assert!(!state.should_attempt(3));
    }

    #[test]
    fn test_success_path() {
        let mut state = SessionBootstrap::default();
        assert!(state.begin());
        assert_eq!(state, SessionBootstrap::Attempting);
        state.finish(Some(SessionHandle::new("s-1")));
        assert!(state.is_terminal());
        assert_eq!(state.handle().map(|h| h.as_str()), Some("s-1"));
    }

    #[test]
    fn test_failure_is_terminal() {
        let mut state = SessionBootstrap::default();
        state.begin();
        state.finish(None);
        assert_eq!(state, SessionBootstrap::FailedSoft);
        assert!(state.was_attempted());
        assert!(state.handle().is_none());
        assert!(!state.should_attempt(2));
        assert!(!state.begin());
    }

    #[test]
    fn test_finish_without_begin_is_ignored() {
        let mut state = SessionBootstrap::default();
        state.finish(Some(SessionHandle::new("x")));
        assert_eq!(state, SessionBootstrap::NotAttempted);
    }
}
