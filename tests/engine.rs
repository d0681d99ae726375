// State machine and question lifecycle properties, exercised natively with
// mock collaborators and synthetic clocks. No wasm/browser APIs anywhere.

use std::cell::RefCell;
use std::rc::Rc;

use rand::SeedableRng;
use rand::rngs::SmallRng;

use lore_path::game::bank::QUESTION_BANK;
use lore_path::game::ending::EndOutcome;
use lore_path::game::phase::GamePhase;
use lore_path::game::question::QuestionSession;
use lore_path::game::{AudioSink, GameConfig, GameEngine, QuestionUi, Renderer};

// --- Mock collaborators -------------------------------------------------------

struct NullRenderer;

impl Renderer for NullRenderer {
    fn clear_frame(&mut self) {}
    fn draw_sprite(&mut self, _name: &str, _x: f64, _y: f64, _w: f64, _h: f64) {}
    fn draw_floor(&mut self) {}
    fn draw_overlay(&mut self, _alpha: f64) {}
    fn draw_text(&mut self, _text: &str, _x: f64, _y: f64, _size_px: u32, _color: &str) {}
}

type EventLog = Rc<RefCell<Vec<String>>>;

struct RecordingAudio(EventLog);

impl AudioSink for RecordingAudio {
    fn on_run_start(&mut self) {
        self.0.borrow_mut().push("run_start".into());
    }
    fn on_victory(&mut self) {
        self.0.borrow_mut().push("victory".into());
    }
}

struct RecordingUi(EventLog);

impl QuestionUi for RecordingUi {
    fn show_question(&mut self) {
        self.0.borrow_mut().push("show".into());
    }
    fn hide_question(&mut self) {
        self.0.borrow_mut().push("hide".into());
    }
    fn set_prompt_text(&mut self, _text: &str) {}
    fn set_answer_slots(&mut self, _texts: [&'static str; 4]) {
        self.0.borrow_mut().push("slots".into());
    }
    fn show_answer_feedback(&mut self, _correct_slot: usize, _chosen_slot: usize) {
        self.0.borrow_mut().push("feedback".into());
    }
    fn set_countdown(&mut self, _remaining_secs: f64) {}
    fn set_progress(&mut self, _current: usize, _total: usize) {}
}

// --- Harness ------------------------------------------------------------------

struct Sim {
    engine: GameEngine,
    audio_events: EventLog,
    ui_events: EventLog,
    now: f64,
}

impl Sim {
    fn new(question_count: usize, seed: u64) -> Self {
        let audio_events: EventLog = Rc::new(RefCell::new(Vec::new()));
        let ui_events: EventLog = Rc::new(RefCell::new(Vec::new()));
        let config = GameConfig {
            question_count,
            ..GameConfig::default()
        };
        let engine = GameEngine::new(
            QUESTION_BANK,
            config,
            Box::new(NullRenderer),
            Box::new(RecordingAudio(audio_events.clone())),
            Box::new(RecordingUi(ui_events.clone())),
            SmallRng::seed_from_u64(seed),
        )
        .expect("bank covers requested count");
        Self {
            engine,
            audio_events,
            ui_events,
            now: 1_000.0,
        }
    }

    /// Boot through loading and the start screen into `Ready`.
    fn boot(&mut self) {
        self.engine.assets_ready();
        self.engine.start();
        assert_eq!(self.engine.phase(), GamePhase::Ready);
    }

    fn step_frames(&mut self, n: usize) {
        for _ in 0..n {
            self.now += 16.0;
            self.engine.frame_tick(self.now);
        }
    }

    /// Advance the timer channel in 50 ms ticks until `ms` have elapsed.
    fn step_timer(&mut self, ms: f64) {
        let target = self.now + ms;
        while self.now < target {
            self.now = (self.now + 50.0).min(target);
            self.engine.timer_tick(self.now);
        }
    }

    /// Drive both channels until the chest triggers a question.
    fn run_to_question(&mut self) {
        for _ in 0..5_000 {
            if self.engine.phase() == GamePhase::Question {
                return;
            }
            self.now += 16.0;
            self.engine.frame_tick(self.now);
            self.engine.timer_tick(self.now);
        }
        panic!("chest never triggered; phase {:?}", self.engine.phase());
    }

    /// Let the chest finish opening and the typed reveal complete.
    fn reveal(&mut self) {
        self.step_timer(1_050.0);
        for _ in 0..400 {
            if self
                .engine
                .active_question()
                .is_some_and(|aq| aq.reveal_complete())
            {
                return;
            }
            self.step_timer(50.0);
        }
        panic!("typed reveal never completed");
    }

    /// Answer the open question and wait out the feedback dwell.
    fn answer(&mut self, correct: bool) {
        let aq = self.engine.active_question().expect("question open");
        let correct_slot = aq.correct_slot();
        let slot = if correct {
            correct_slot
        } else {
            (correct_slot + 1) % 4
        };
        self.engine.submit_answer(slot);
        self.step_timer(2_100.0);
    }

    /// One full question: trigger, reveal, answer, dwell.
    fn play_question(&mut self, correct: bool) {
        self.run_to_question();
        self.reveal();
        self.answer(correct);
    }
}

// --- Selection properties -------------------------------------------------------

#[test]
fn session_draw_returns_distinct_bank_questions() {
    let mut rng = SmallRng::seed_from_u64(11);
    let session = QuestionSession::draw(QUESTION_BANK, 40, &mut rng).unwrap();
    assert_eq!(session.total(), 40);
    let prompts: Vec<&str> = session.prompts().collect();
    let mut unique = prompts.clone();
    unique.sort_unstable();
    unique.dedup();
    assert_eq!(unique.len(), 40, "sampled questions must be distinct");
    for prompt in &prompts {
        assert!(QUESTION_BANK.iter().any(|q| q.prompt == *prompt));
    }
}

#[test]
fn session_draw_rerandomizes_order() {
    let mut rng = SmallRng::seed_from_u64(12);
    let first: Vec<&str> = QuestionSession::draw(QUESTION_BANK, 40, &mut rng)
        .unwrap()
        .prompts()
        .collect();
    let second: Vec<&str> = QuestionSession::draw(QUESTION_BANK, 40, &mut rng)
        .unwrap()
        .prompts()
        .collect();
    assert_ne!(first, second, "successive draws should reorder");
}

#[test]
fn session_draw_accepts_the_whole_bank_and_rejects_more() {
    let mut rng = SmallRng::seed_from_u64(13);
    let full = QuestionSession::draw(QUESTION_BANK, QUESTION_BANK.len(), &mut rng).unwrap();
    assert_eq!(full.total(), QUESTION_BANK.len());
    assert!(QuestionSession::draw(QUESTION_BANK, QUESTION_BANK.len() + 1, &mut rng).is_err());
}

// --- Transition graph ------------------------------------------------------------

#[test]
fn boot_sequence_walks_loading_start_ready_running() {
    let mut sim = Sim::new(5, 1);
    assert_eq!(sim.engine.phase(), GamePhase::Loading);
    sim.engine.assets_ready();
    assert_eq!(sim.engine.phase(), GamePhase::Start);
    sim.engine.start();
    assert_eq!(sim.engine.phase(), GamePhase::Ready);
    sim.engine.toggle_run();
    assert_eq!(sim.engine.phase(), GamePhase::Running);
    assert_eq!(
        sim.audio_events.borrow().as_slice(),
        ["run_start"],
        "user toggle notifies audio once"
    );
}

#[test]
fn start_and_answers_are_ignored_out_of_phase() {
    let mut sim = Sim::new(5, 2);
    sim.engine.start(); // still loading
    assert_eq!(sim.engine.phase(), GamePhase::Loading);
    sim.engine.submit_answer(0);
    assert_eq!(sim.engine.score().answered(), 0);
    sim.engine.assets_ready();
    sim.engine.assets_ready(); // idempotent
    assert_eq!(sim.engine.phase(), GamePhase::Start);
}

#[test]
fn chest_trigger_fires_once_and_freezes_the_world() {
    let mut sim = Sim::new(5, 3);
    sim.boot();
    sim.engine.toggle_run();
    sim.run_to_question();
    assert!(sim.engine.is_chest_triggered());
    assert!(sim.engine.active_question().is_some());
    // Proximity still holds (the world is frozen), but no re-trigger: the
    // question stays singular and nothing scores.
    sim.step_frames(50);
    assert_eq!(sim.engine.phase(), GamePhase::Question);
    assert!(sim.engine.active_question().is_some());
    assert_eq!(sim.engine.score().answered(), 0);
}

#[test]
fn question_resolution_returns_to_running_without_user_input() {
    let mut sim = Sim::new(5, 4);
    sim.boot();
    sim.engine.toggle_run();
    sim.play_question(true);
    assert_eq!(sim.engine.phase(), GamePhase::Ready);
    assert!(!sim.engine.is_chest_triggered());
    assert!(sim.engine.active_question().is_none());
    // The resume task fires on the timer channel after the fixed delay.
    sim.step_timer(1_100.0);
    assert_eq!(sim.engine.phase(), GamePhase::Running);
    // Auto-resume is not a user toggle; audio only heard the first one.
    assert_eq!(sim.audio_events.borrow().as_slice(), ["run_start"]);
}

// --- Exactly-once resolution -------------------------------------------------------

#[test]
fn second_submission_is_ignored() {
    let mut sim = Sim::new(5, 5);
    sim.boot();
    sim.engine.toggle_run();
    sim.run_to_question();
    sim.reveal();
    let correct_slot = sim.engine.active_question().unwrap().correct_slot();
    let wrong_slot = (correct_slot + 1) % 4;
    sim.engine.submit_answer(wrong_slot);
    sim.engine.submit_answer(correct_slot); // rapid second click
    sim.step_timer(2_100.0);
    let score = sim.engine.score();
    assert_eq!((score.correct, score.incorrect), (0, 1), "first submission wins");
    let feedback_count = sim
        .ui_events
        .borrow()
        .iter()
        .filter(|e| e.as_str() == "feedback")
        .count();
    assert_eq!(feedback_count, 1);
}

#[test]
fn submissions_before_reveal_completes_are_ignored() {
    let mut sim = Sim::new(5, 6);
    sim.boot();
    sim.engine.toggle_run();
    sim.run_to_question();
    // Chest still opening; nothing revealed yet.
    sim.engine.submit_answer(0);
    sim.step_timer(1_100.0);
    // Reveal underway but incomplete.
    assert!(!sim.engine.active_question().unwrap().reveal_complete());
    sim.engine.submit_answer(0);
    assert!(!sim.engine.active_question().unwrap().is_locked());
    assert_eq!(sim.engine.score().answered(), 0);
}

#[test]
fn timeout_resolves_incorrect_exactly_once_and_never_early() {
    let mut sim = Sim::new(5, 7);
    sim.boot();
    sim.engine.toggle_run();
    sim.run_to_question();
    // Fire the reveal task at a known instant; the countdown arms here.
    sim.step_timer(1_000.0);
    let armed_at = sim.now;
    let countdown = sim.engine.active_question().unwrap().countdown();
    assert!(countdown.is_some(), "countdown armed at reveal");

    sim.engine.timer_tick(armed_at + 12_299.0);
    assert_eq!(sim.engine.phase(), GamePhase::Question, "not a moment early");
    assert_eq!(sim.engine.score().answered(), 0);

    sim.now = armed_at + 12_300.0;
    sim.engine.timer_tick(sim.now);
    let score = sim.engine.score();
    assert_eq!((score.correct, score.incorrect), (0, 1));
    assert_eq!(sim.engine.phase(), GamePhase::Ready);

    // Stale ticks after resolution change nothing.
    sim.engine.timer_tick(sim.now + 10.0);
    assert_eq!(sim.engine.score().answered(), 1);
}

#[test]
fn timeout_racing_a_submitted_answer_is_swallowed() {
    let mut sim = Sim::new(5, 17);
    sim.boot();
    sim.engine.toggle_run();
    sim.run_to_question();
    sim.step_timer(1_000.0);
    let armed_at = sim.now;
    sim.reveal();
    let correct_slot = sim.engine.active_question().unwrap().correct_slot();
    sim.engine.submit_answer(correct_slot);
    // The countdown's old deadline passes while the feedback dwell is still
    // pending; the lock keeps the expiry from scoring a second resolution.
    sim.engine.timer_tick(armed_at + 12_350.0);
    let score = sim.engine.score();
    assert_eq!((score.correct, score.incorrect), (1, 0));
    assert_eq!(sim.engine.score().answered(), 1);
}

#[test]
fn submission_after_timeout_is_ignored() {
    let mut sim = Sim::new(5, 8);
    sim.boot();
    sim.engine.toggle_run();
    sim.run_to_question();
    sim.step_timer(1_000.0);
    sim.step_timer(12_300.0);
    assert_eq!(sim.engine.score().incorrect, 1);
    sim.engine.submit_answer(0);
    sim.step_timer(2_100.0);
    assert_eq!(sim.engine.score().answered(), 1, "late answer never scores");
}

#[test]
fn out_of_range_slot_is_ignored() {
    let mut sim = Sim::new(5, 9);
    sim.boot();
    sim.engine.toggle_run();
    sim.run_to_question();
    sim.reveal();
    sim.engine.submit_answer(4);
    sim.engine.submit_answer(99);
    assert!(!sim.engine.active_question().unwrap().is_locked());
    assert_eq!(sim.engine.score().answered(), 0);
}

// --- Tally arithmetic ---------------------------------------------------------------

#[test]
fn tally_sums_to_questions_resolved() {
    let mut sim = Sim::new(5, 10);
    sim.boot();
    sim.engine.toggle_run();
    let pattern = [true, false, true, true, false];
    for (i, correct) in pattern.iter().enumerate() {
        sim.play_question(*correct);
        let score = sim.engine.score();
        assert_eq!(score.answered() as usize, i + 1);
        if i + 1 < pattern.len() {
            sim.step_timer(1_100.0);
        }
    }
    let score = sim.engine.score();
    assert_eq!((score.correct, score.incorrect), (3, 2));
    assert_eq!(sim.engine.phase(), GamePhase::Victory);
    let ending = sim.engine.ending().expect("summary captured");
    assert_eq!(ending.score_message(), "Good effort! 60.0% correct!");
}

// --- Victory ----------------------------------------------------------------------

#[test]
fn perfect_forty_question_run_reaches_victory() {
    let mut sim = Sim::new(40, 20);
    sim.boot();
    sim.engine.toggle_run();
    for i in 0..40 {
        sim.play_question(true);
        if i < 39 {
            sim.step_timer(1_100.0);
        }
    }
    let score = sim.engine.score();
    assert_eq!((score.correct, score.incorrect), (40, 0));
    assert_eq!(sim.engine.phase(), GamePhase::Victory);

    let ending = sim.engine.ending().expect("summary captured");
    assert_eq!(ending.outcome(), EndOutcome::Victory);
    assert_eq!(ending.correct(), 40);
    assert_eq!(ending.total(), 40);
    assert_eq!(ending.percentage(), 100.0);
    assert_eq!(ending.score_message(), "Perfect Score! Outstanding!");
    assert_eq!(
        sim.audio_events.borrow().last().map(String::as_str),
        Some("victory")
    );

    // The frame driver self-terminates; the summary card appears on the
    // ending's own cadence.
    assert!(!sim.engine.frame_tick(sim.now + 16.0));
    sim.engine.ending_tick(sim.now + 5_000.0);
    assert!(sim.engine.ending().unwrap().card_shown());
}

// --- GameOver / abandon --------------------------------------------------------------

#[test]
fn toggling_mid_run_abandons_to_game_over() {
    let mut sim = Sim::new(5, 30);
    sim.boot();
    sim.engine.toggle_run();
    sim.play_question(true);
    sim.step_timer(1_100.0);
    assert_eq!(sim.engine.phase(), GamePhase::Running);

    sim.engine.toggle_run();
    assert_eq!(sim.engine.phase(), GamePhase::GameOver);
    let ending = sim.engine.ending().expect("summary captured");
    assert_eq!(ending.outcome(), EndOutcome::Abandoned);
    assert_eq!(ending.correct(), 1);
    assert!(ending.card_shown(), "no walk on the abandoned path");
    assert!(!sim.engine.frame_tick(sim.now + 16.0));
}

#[test]
fn abandoning_during_a_question_cancels_its_timers() {
    let mut sim = Sim::new(5, 31);
    sim.boot();
    sim.engine.toggle_run();
    sim.run_to_question();
    sim.step_timer(1_000.0);
    sim.engine.toggle_run();
    assert_eq!(sim.engine.phase(), GamePhase::GameOver);
    assert!(sim.engine.active_question().is_none());
    // A stale countdown expiry must not score into the dead session.
    sim.step_timer(13_000.0);
    assert_eq!(sim.engine.score().answered(), 0);
}

// --- Restart ---------------------------------------------------------------------------

#[test]
fn restart_resamples_and_zeroes_everything() {
    let mut sim = Sim::new(3, 40);
    sim.boot();
    sim.engine.toggle_run();
    for i in 0..3 {
        sim.play_question(true);
        if i < 2 {
            sim.step_timer(1_100.0);
        }
    }
    assert_eq!(sim.engine.phase(), GamePhase::Victory);
    let first_order: Vec<&str> = sim.engine.session().prompts().collect();

    sim.engine.restart().unwrap();
    assert_eq!(sim.engine.phase(), GamePhase::Start);
    let score = sim.engine.score();
    assert_eq!((score.correct, score.incorrect), (0, 0));
    assert!(sim.engine.ending().is_none());
    assert!(sim.engine.active_question().is_none());
    assert_eq!(sim.engine.session().total(), 3);

    let second_order: Vec<&str> = sim.engine.session().prompts().collect();
    assert_ne!(first_order, second_order, "replay draws an independent set");

    // The fresh session plays through cleanly.
    sim.engine.start();
    sim.engine.toggle_run();
    sim.play_question(false);
    let score = sim.engine.score();
    assert_eq!((score.correct, score.incorrect), (0, 1));
}

#[test]
fn restart_is_rejected_mid_session() {
    let mut sim = Sim::new(5, 41);
    sim.boot();
    sim.engine.toggle_run();
    sim.run_to_question();
    sim.engine.restart().unwrap();
    assert_eq!(sim.engine.phase(), GamePhase::Question, "mid-run restart is a no-op");
    assert!(sim.engine.active_question().is_some());
}

// --- Progress surface -------------------------------------------------------------------

#[test]
fn progress_counts_one_based_and_clamps_at_total() {
    let mut sim = Sim::new(3, 50);
    sim.boot();
    assert_eq!(sim.engine.progress().current, 1);
    assert_eq!(sim.engine.progress().total, 3);
    sim.engine.toggle_run();
    sim.play_question(true);
    sim.step_timer(1_100.0);
    assert_eq!(sim.engine.progress().current, 2);
    sim.play_question(true);
    sim.step_timer(1_100.0);
    sim.play_question(true);
    assert_eq!(sim.engine.phase(), GamePhase::Victory);
    assert_eq!(sim.engine.progress().current, 3, "clamped after exhaustion");
    assert_eq!(sim.engine.progress().percentage, 100.0);
}
