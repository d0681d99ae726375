//! Question lifecycle: session sampling, answer-slot shuffling, the typed
//! prompt reveal, and the answer lock that makes resolution exactly-once.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::game::GameError;
use crate::game::tasks::CountdownTimer;

/// One bank entry. `correct` indexes into `choices`.
#[derive(Clone, Copy, Debug)]
pub struct TriviaQuestion {
    pub prompt: &'static str,
    pub choices: [&'static str; 4],
    pub correct: usize,
}

/// Milliseconds between typed-reveal characters.
pub const TYPING_INTERVAL_MS: f64 = 50.0;

/// The session's question order: `count` distinct questions sampled uniformly
/// from the bank, then independently shuffled. Rebuilt from fresh randomness
/// on every playthrough.
pub struct QuestionSession {
    set: Vec<TriviaQuestion>,
    cursor: usize,
}

impl QuestionSession {
    pub fn draw(
        bank: &'static [TriviaQuestion],
        count: usize,
        rng: &mut impl Rng,
    ) -> Result<Self, GameError> {
        if count > bank.len() {
            return Err(GameError::BankTooSmall {
                requested: count,
                available: bank.len(),
            });
        }
        let mut set: Vec<TriviaQuestion> = rand::seq::index::sample(rng, bank.len(), count)
            .iter()
            .map(|i| bank[i])
            .collect();
        set.shuffle(rng);
        Ok(Self { set, cursor: 0 })
    }

    pub fn current(&self) -> Option<&TriviaQuestion> {
        self.set.get(self.cursor)
    }

    /// Step to the next question. Returns whether any remain; exhaustion is
    /// the sole victory trigger.
    pub fn advance(&mut self) -> bool {
        self.cursor += 1;
        self.cursor < self.set.len()
    }

    /// 1-based number of the question currently (or about to be) asked.
    pub fn current_number(&self) -> usize {
        (self.cursor + 1).min(self.set.len())
    }

    pub fn total(&self) -> usize {
        self.set.len()
    }

    pub fn answered(&self) -> usize {
        self.cursor.min(self.set.len())
    }

    pub fn prompts(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.set.iter().map(|q| q.prompt)
    }
}

/// One displayed answer slot: the choice text plus whether it was the bank's
/// correct choice before shuffling.
#[derive(Clone, Copy, Debug)]
pub struct AnswerSlot {
    pub text: &'static str,
    pub correct: bool,
}

/// Progressive character-by-character prompt disclosure. Progress is derived
/// from elapsed time so the tick cadence does not change the reveal rate.
pub struct TypedReveal {
    chars: Vec<char>,
    started_ms: Option<f64>,
    shown: usize,
}

impl TypedReveal {
    fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            started_ms: None,
            shown: 0,
        }
    }

    fn begin(&mut self, now_ms: f64) {
        self.started_ms = Some(now_ms);
        self.shown = 0;
    }

    /// Advance to `now_ms`; returns the visible prefix if it grew.
    fn tick(&mut self, now_ms: f64) -> Option<String> {
        let started = self.started_ms?;
        let target = (((now_ms - started) / TYPING_INTERVAL_MS) as usize).min(self.chars.len());
        if target > self.shown {
            self.shown = target;
            Some(self.chars[..self.shown].iter().collect())
        } else {
            None
        }
    }

    pub fn is_complete(&self) -> bool {
        self.started_ms.is_some() && self.shown >= self.chars.len()
    }
}

/// Ephemeral state of the question being asked. Created when the chest
/// triggers, destroyed on resolution.
pub struct ActiveQuestion {
    slots: [AnswerSlot; 4],
    reveal: TypedReveal,
    locked: bool,
    chosen_slot: Option<usize>,
    countdown: Option<CountdownTimer>,
}

impl ActiveQuestion {
    /// Build the view: a uniformly random permutation of the four choices,
    /// each slot tagged with whether it holds the correct one.
    pub fn new(question: &TriviaQuestion, rng: &mut impl Rng) -> Self {
        let mut order = [0usize, 1, 2, 3];
        order.shuffle(rng);
        let slots = order.map(|i| AnswerSlot {
            text: question.choices[i],
            correct: i == question.correct,
        });
        Self {
            slots,
            reveal: TypedReveal::new(question.prompt),
            locked: false,
            chosen_slot: None,
            countdown: None,
        }
    }

    pub fn slots(&self) -> &[AnswerSlot; 4] {
        &self.slots
    }

    pub fn correct_slot(&self) -> usize {
        self.slots.iter().position(|s| s.correct).unwrap_or(0)
    }

    /// Start the typed reveal and arm the countdown.
    pub fn begin_reveal(&mut self, now_ms: f64, countdown_ms: f64) {
        self.reveal.begin(now_ms);
        self.countdown = Some(CountdownTimer::new(now_ms, countdown_ms));
    }

    pub fn reveal_tick(&mut self, now_ms: f64) -> Option<String> {
        self.reveal.tick(now_ms)
    }

    pub fn reveal_complete(&self) -> bool {
        self.reveal.is_complete()
    }

    pub fn countdown(&self) -> Option<&CountdownTimer> {
        self.countdown.as_ref()
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn chosen_slot(&self) -> Option<usize> {
        self.chosen_slot
    }

    /// Accept an answer. Returns the slot's correctness, or `None` when the
    /// submission must be ignored (out of range, reveal incomplete, or
    /// already locked — the exactly-once guard for the submit/timeout race).
    pub fn try_answer(&mut self, slot: usize) -> Option<bool> {
        if self.locked || slot >= self.slots.len() || !self.reveal.is_complete() {
            return None;
        }
        self.locked = true;
        self.chosen_slot = Some(slot);
        self.countdown = None;
        Some(self.slots[slot].correct)
    }

    /// Observe countdown expiry. Locks and reports timeout at most once;
    /// returns false if the question was already locked (or not yet armed).
    pub fn try_expire(&mut self, now_ms: f64) -> bool {
        match self.countdown {
            Some(cd) if !self.locked && cd.expired(now_ms) => {
                self.locked = true;
                self.countdown = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    const Q: TriviaQuestion = TriviaQuestion {
        prompt: "Which way is up?",
        choices: ["North", "South", "East", "West"],
        correct: 0,
    };

    #[test]
    fn slots_are_a_permutation_with_one_correct() {
        let mut rng = SmallRng::seed_from_u64(7);
        let aq = ActiveQuestion::new(&Q, &mut rng);
        let mut texts: Vec<&str> = aq.slots().iter().map(|s| s.text).collect();
        texts.sort_unstable();
        assert_eq!(texts, ["East", "North", "South", "West"]);
        assert_eq!(aq.slots().iter().filter(|s| s.correct).count(), 1);
        assert!(aq.slots()[aq.correct_slot()].correct);
    }

    #[test]
    fn answer_rejected_until_reveal_completes() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut aq = ActiveQuestion::new(&Q, &mut rng);
        assert_eq!(aq.try_answer(0), None);
        aq.begin_reveal(0.0, 12_300.0);
        assert_eq!(aq.try_answer(0), None); // zero characters revealed yet
        let full_ms = Q.prompt.chars().count() as f64 * TYPING_INTERVAL_MS;
        aq.reveal_tick(full_ms);
        assert!(aq.reveal_complete());
        assert!(aq.try_answer(0).is_some());
    }

    #[test]
    fn lock_is_first_writer_wins() {
        let mut rng = SmallRng::seed_from_u64(2);
        let mut aq = ActiveQuestion::new(&Q, &mut rng);
        aq.begin_reveal(0.0, 12_300.0);
        aq.reveal_tick(10_000.0);
        let first = aq.try_answer(1);
        assert!(first.is_some());
        assert_eq!(aq.try_answer(2), None);
        assert_eq!(aq.chosen_slot(), Some(1));
        // A racing expiry after the manual answer is also swallowed.
        assert!(!aq.try_expire(99_999.0));
    }

    #[test]
    fn expiry_locks_exactly_once() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut aq = ActiveQuestion::new(&Q, &mut rng);
        aq.begin_reveal(0.0, 12_300.0);
        assert!(!aq.try_expire(12_299.0));
        assert!(aq.try_expire(12_300.0));
        assert!(!aq.try_expire(12_301.0));
        assert_eq!(aq.try_answer(0), None);
    }
}
