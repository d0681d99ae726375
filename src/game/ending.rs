//! Terminal summary: the castle walk and the final score card.
//!
//! The summary snapshots the tally the moment a terminal phase is entered;
//! later state is irrelevant to what it shows. It draws on its own cadence
//! because the main frame driver has already stopped.

use crate::game::{CANVAS_H, CANVAS_W, Renderer, ScoreTally};

/// How the session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndOutcome {
    /// Every question in the session was answered.
    Victory,
    /// The run was abandoned before the bank was exhausted.
    Abandoned,
}

const WALK_START_X: f64 = 50.0;
const WALK_END_X: f64 = 420.0;
const WALK_Y: f64 = 260.0;
/// 2 px per 60 Hz frame in the original, expressed per second so the redraw
/// cadence does not change the walk duration.
const WALK_SPEED_PX_PER_SEC: f64 = 120.0;
/// Backup deadline: the card appears after this long even if the walk stalls.
const CARD_DEADLINE_MS: f64 = 4_000.0;

pub struct EndingSummary {
    correct: u32,
    incorrect: u32,
    total: usize,
    outcome: EndOutcome,
    started_ms: f64,
    walker_x: f64,
    card_shown: bool,
}

impl EndingSummary {
    /// Capture an immutable snapshot of the tally at terminal-phase entry.
    pub fn capture(outcome: EndOutcome, score: ScoreTally, total: usize, now_ms: f64) -> Self {
        Self {
            correct: score.correct,
            incorrect: score.incorrect,
            total,
            outcome,
            started_ms: now_ms,
            walker_x: WALK_START_X,
            // No walk on the abandoned path; show the card straight away.
            card_shown: outcome == EndOutcome::Abandoned,
        }
    }

    /// Advance the walk / card reveal to `now_ms`.
    pub fn tick(&mut self, now_ms: f64) {
        if self.card_shown {
            return;
        }
        let elapsed_ms = now_ms - self.started_ms;
        self.walker_x =
            (WALK_START_X + WALK_SPEED_PX_PER_SEC * elapsed_ms / 1000.0).min(WALK_END_X);
        if self.walker_x >= WALK_END_X || elapsed_ms >= CARD_DEADLINE_MS {
            self.card_shown = true;
        }
    }

    pub fn render(&self, r: &mut dyn Renderer) {
        r.clear_frame();
        r.draw_sprite("castle", 0.0, 0.0, CANVAS_W, CANVAS_H);
        if !self.card_shown {
            // Walk frame cycles every 20 px, matching the original's
            // frame-every-10-ticks at 2 px per tick.
            let step = ((self.walker_x - WALK_START_X) / 20.0) as usize % 5 + 1;
            r.draw_sprite(&format!("character_{step}"), self.walker_x, WALK_Y, 48.0, 48.0);
            return;
        }
        r.draw_overlay(0.7);
        let cx = CANVAS_W / 2.0;
        match self.outcome {
            EndOutcome::Victory => {
                r.draw_text("Game Complete!", cx, 140.0, 24, "#FFD700");
                r.draw_text(&format!("Correct Answers: {}", self.correct), cx, 170.0, 16, "#00FF00");
                r.draw_text(&format!("Incorrect Answers: {}", self.incorrect), cx, 195.0, 16, "#FF6B6B");
                r.draw_text(&format!("Total Questions: {}", self.total), cx, 220.0, 16, "#FFD700");
                r.draw_text(&self.score_message(), cx, 250.0, 14, "#FFFFFF");
                r.draw_text("The badger has reached the castle", cx, 280.0, 12, "#FFFFFF");
                r.draw_text("and completed the journey!", cx, 300.0, 12, "#FFFFFF");
            }
            EndOutcome::Abandoned => {
                r.draw_text("Game Over", cx, 140.0, 24, "#FF6B6B");
                r.draw_text(
                    &format!(
                        "You answered {} out of {} questions correctly!",
                        self.correct, self.total
                    ),
                    cx,
                    180.0,
                    16,
                    "#FFFFFF",
                );
                r.draw_text("The journey ends here.", cx, 220.0, 12, "#FFFFFF");
            }
        }
    }

    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f64 / self.total as f64 * 100.0
        }
    }

    /// Score branch text shown under the tally.
    pub fn score_message(&self) -> String {
        let pct = self.percentage();
        if self.correct as usize == self.total {
            "Perfect Score! Outstanding!".to_string()
        } else if pct >= 70.0 {
            format!("Great job! {pct:.1}% correct!")
        } else if pct >= 50.0 {
            format!("Good effort! {pct:.1}% correct!")
        } else {
            format!("Keep trying! {pct:.1}% correct!")
        }
    }

    pub fn outcome(&self) -> EndOutcome {
        self.outcome
    }

    pub fn card_shown(&self) -> bool {
        self.card_shown
    }

    pub fn correct(&self) -> u32 {
        self.correct
    }

    pub fn incorrect(&self) -> u32 {
        self.incorrect
    }

    pub fn total(&self) -> usize {
        self.total
    }
}
