//! Game phase taxonomy.
//!
//! The original flag soup (`isRunning`, `chestTriggered`, a string `gameState`)
//! is collapsed into one enum owned by [`crate::game::GameEngine`]; the only
//! auxiliary flag that survives is the single-use chest trigger.

/// Exactly one phase is active at any time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    /// Assets and question bank are still being prepared.
    Loading,
    /// Start screen is showing; waiting for the user's start action.
    Start,
    /// In the world, standing still; waiting for the run toggle (or the
    /// automatic resume between questions).
    Ready,
    /// Scrolling; the chest proximity check is armed.
    Running,
    /// A question is live (from chest trigger until resolution).
    Question,
    /// Terminal: all questions answered.
    Victory,
    /// Terminal: the run was abandoned before the bank was exhausted.
    GameOver,
}

impl GamePhase {
    /// Lowercase name as exposed to the host page.
    pub fn as_str(self) -> &'static str {
        match self {
            GamePhase::Loading => "loading",
            GamePhase::Start => "start",
            GamePhase::Ready => "ready",
            GamePhase::Running => "running",
            GamePhase::Question => "question",
            GamePhase::Victory => "victory",
            GamePhase::GameOver => "gameOver",
        }
    }

    /// Terminal phases stop the frame driver; drawing is handed to the
    /// ending summary's own cadence.
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::Victory | GamePhase::GameOver)
    }
}
