//! Passcode gate for one studio session.

/// Per-session unlock state.
///
/// Created when the studio starts and dropped when it exits. Without a
/// passcode the session starts unlocked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    passcode: Option<String>,
    unlocked: bool,
}

impl SessionState {
    /// Start a session; an empty passcode disables the gate.
    pub fn new(passcode: Option<String>) -> Self {
        let passcode = passcode.filter(|p| !p.is_empty());
        let unlocked = passcode.is_none();
        Self { passcode, unlocked }
    }

    /// Whether the gate has been passed.
    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    /// Whether a passcode is configured at all.
    pub fn is_gated(&self) -> bool {
        self.passcode.is_some()
    }

    /// Try to unlock with an attempt; only an exact match succeeds.
    pub fn try_unlock(&mut self, attempt: &str) -> bool {
        if let Some(passcode) = &self.passcode
            && attempt == passcode
        {
            self.unlocked = true;
        }
        self.unlocked
    }
}
