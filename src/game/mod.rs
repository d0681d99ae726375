//! Game core: the state machine coordinating scrolling, animation, and the
//! timed-question lifecycle.
//!
//! Everything here is plain Rust — no web types. Wall-clock time enters as
//! explicit `f64` millisecond timestamps through two cooperative channels:
//! the per-frame driver ([`GameEngine::frame_tick`], `requestAnimationFrame`
//! in the browser) and the fixed-interval timer channel
//! ([`GameEngine::timer_tick`], a 50 ms interval). The browser glue in
//! [`crate::web`] supplies the collaborators and the timestamps; native tests
//! supply mocks and synthetic clocks.

pub mod animation;
pub mod bank;
pub mod ending;
pub mod phase;
pub mod question;
pub mod scroll;
pub mod tasks;

use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use animation::{
    AnimationSet, CHARACTER_RUN, CHARACTER_RUN_DURATION_MS, CHEST_OPEN, CHEST_OPEN_DURATION_MS,
    character_run_frames, chest_open_frames,
};
use ending::{EndOutcome, EndingSummary};
use phase::GamePhase;
use question::{ActiveQuestion, QuestionSession, TriviaQuestion};
use scroll::{CHARACTER_X, ScrollState};
use tasks::{Deferred, TaskQueue};

pub const CANVAS_W: f64 = 800.0;
pub const CANVAS_H: f64 = 480.0;
/// Character stands on the dock.
pub const CHARACTER_Y: f64 = 340.0;
/// Chest sits a hair lower than the character.
pub const CHEST_Y: f64 = 348.0;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("question bank too small: requested {requested}, bank holds {available}")]
    BankTooSmall { requested: usize, available: usize },
}

/// Session score. Written only by the engine's resolution handler.
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct ScoreTally {
    pub correct: u32,
    pub incorrect: u32,
}

impl ScoreTally {
    fn record(&mut self, correct: bool) {
        if correct {
            self.correct += 1;
        } else {
            self.incorrect += 1;
        }
    }

    pub fn answered(&self) -> u32 {
        self.correct + self.incorrect
    }
}

/// Question counter as shown to the host.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Progress {
    pub current: usize,
    pub total: usize,
    pub percentage: f64,
}

/// Session tunables. Host pages may override via JSON
/// (`start_game_with_config`); defaults are the shipped game's values.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameConfig {
    /// Questions asked per playthrough (sampled from the bank).
    pub question_count: usize,
    /// Countdown per question, milliseconds.
    pub countdown_ms: f64,
    /// Pause between chest trigger and question reveal.
    pub chest_open_delay_ms: f64,
    /// Feedback hold after an accepted answer.
    pub dwell_ms: f64,
    /// Pause before scrolling resumes after a resolution.
    pub resume_delay_ms: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            question_count: 40,
            countdown_ms: 12_300.0,
            chest_open_delay_ms: 1_000.0,
            dwell_ms: 2_000.0,
            resume_delay_ms: 1_000.0,
        }
    }
}

/// Opaque drawing capability. The glue resolves sprite names to images,
/// substituting a deterministic placeholder when an asset is missing.
pub trait Renderer {
    fn clear_frame(&mut self);
    fn draw_sprite(&mut self, name: &str, x: f64, y: f64, w: f64, h: f64);
    /// Dock and water strip under the character.
    fn draw_floor(&mut self);
    /// Full-canvas dimming layer for the ending card.
    fn draw_overlay(&mut self, alpha: f64);
    /// Centered text at (x, y).
    fn draw_text(&mut self, text: &str, x: f64, y: f64, size_px: u32, color: &str);
}

/// Fire-and-forget audio notifications; the engine never waits on these.
pub trait AudioSink {
    fn on_run_start(&mut self);
    fn on_victory(&mut self);
}

/// Question/countdown display. Push-only: the engine writes values at it and
/// reads nothing back (answers arrive through `submit_answer`).
pub trait QuestionUi {
    fn show_question(&mut self);
    fn hide_question(&mut self);
    fn set_prompt_text(&mut self, text: &str);
    fn set_answer_slots(&mut self, texts: [&'static str; 4]);
    fn show_answer_feedback(&mut self, correct_slot: usize, chosen_slot: usize);
    fn set_countdown(&mut self, remaining_secs: f64);
    fn set_progress(&mut self, current: usize, total: usize);
}

/// The state machine. Owns the phase, the tally, and every component; all
/// mutation funnels through the tick channels and the host input methods.
pub struct GameEngine {
    phase: GamePhase,
    score: ScoreTally,
    bank: &'static [TriviaQuestion],
    session: QuestionSession,
    active: Option<ActiveQuestion>,
    scroll: ScrollState,
    animations: AnimationSet,
    tasks: TaskQueue,
    chest_triggered: bool,
    ending: Option<EndingSummary>,
    config: GameConfig,
    rng: SmallRng,
    last_now_ms: f64,
    renderer: Box<dyn Renderer>,
    audio: Box<dyn AudioSink>,
    ui: Box<dyn QuestionUi>,
}

impl GameEngine {
    pub fn new(
        bank: &'static [TriviaQuestion],
        config: GameConfig,
        renderer: Box<dyn Renderer>,
        audio: Box<dyn AudioSink>,
        ui: Box<dyn QuestionUi>,
        mut rng: SmallRng,
    ) -> Result<Self, GameError> {
        let session = QuestionSession::draw(bank, config.question_count, &mut rng)?;
        let mut animations = AnimationSet::new();
        animations.create(
            CHARACTER_RUN,
            character_run_frames(),
            CHARACTER_RUN_DURATION_MS,
            true,
        );
        animations.create(CHEST_OPEN, chest_open_frames(), CHEST_OPEN_DURATION_MS, false);
        Ok(Self {
            phase: GamePhase::Loading,
            score: ScoreTally::default(),
            bank,
            session,
            active: None,
            scroll: ScrollState::new(),
            animations,
            tasks: TaskQueue::new(),
            chest_triggered: false,
            ending: None,
            config,
            rng,
            last_now_ms: 0.0,
            renderer,
            audio,
            ui,
        })
    }

    // --- Host inputs ---------------------------------------------------------

    /// Asset/bank setup finished; leave the loading screen.
    pub fn assets_ready(&mut self) {
        if self.phase == GamePhase::Loading {
            self.phase = GamePhase::Start;
            log::info!("assets ready, showing start screen");
        }
    }

    /// Explicit user start action from the start screen.
    pub fn start(&mut self) {
        if self.phase == GamePhase::Start {
            self.phase = GamePhase::Ready;
            self.ui
                .set_progress(self.session.current_number(), self.session.total());
            log::info!("game started, waiting for run toggle");
        } else {
            log::debug!("start ignored in phase {:?}", self.phase);
        }
    }

    /// Run toggle: begins scrolling from `Ready`; once a run is underway it
    /// abandons the session (the reset half of the original START/RESET
    /// button).
    pub fn toggle_run(&mut self) {
        match self.phase {
            GamePhase::Ready => {
                self.chest_triggered = false;
                self.enter_running(true);
            }
            GamePhase::Running | GamePhase::Question => self.abandon_run(),
            _ => log::debug!("run toggle ignored in phase {:?}", self.phase),
        }
    }

    /// Answer input from the UI. Silently ignored while locked, before the
    /// reveal completes, out of range, or outside the question phase.
    pub fn submit_answer(&mut self, slot: usize) {
        if self.phase != GamePhase::Question {
            log::debug!("answer ignored in phase {:?}", self.phase);
            return;
        }
        let Some(active) = self.active.as_mut() else {
            return;
        };
        let Some(correct) = active.try_answer(slot) else {
            log::debug!("answer slot {slot} ignored (locked or reveal pending)");
            return;
        };
        let correct_slot = active.correct_slot();
        self.ui.show_answer_feedback(correct_slot, slot);
        self.tasks.schedule(
            self.last_now_ms,
            self.config.dwell_ms,
            Deferred::FinishDwell { correct },
        );
        log::info!(
            "answer slot {slot} accepted ({}), dwelling",
            if correct { "correct" } else { "incorrect" }
        );
    }

    /// Full session teardown; accepted only from a terminal phase.
    pub fn restart(&mut self) -> Result<(), GameError> {
        if !self.phase.is_terminal() {
            log::debug!("restart ignored in phase {:?}", self.phase);
            return Ok(());
        }
        self.tasks.cancel_all();
        self.active = None;
        self.score = ScoreTally::default();
        self.session = QuestionSession::draw(self.bank, self.config.question_count, &mut self.rng)?;
        self.scroll.reset();
        self.animations.reset();
        self.chest_triggered = false;
        self.ending = None;
        self.phase = GamePhase::Start;
        self.ui.hide_question();
        self.ui
            .set_progress(self.session.current_number(), self.session.total());
        log::info!("session reset, fresh question set drawn");
        Ok(())
    }

    // --- Tick channels -------------------------------------------------------

    /// Per-frame driver: advance animations and scroll, check the chest
    /// trigger, render. Returns whether the host should schedule another
    /// frame; `false` once a terminal phase owns drawing.
    pub fn frame_tick(&mut self, now_ms: f64) -> bool {
        if self.phase.is_terminal() {
            return false;
        }
        self.last_now_ms = now_ms;
        self.animations.advance(now_ms);
        self.scroll.update();
        if self.phase == GamePhase::Running
            && !self.chest_triggered
            && self.scroll.chest_in_window()
        {
            self.trigger_question(now_ms);
        }
        self.render_frame();
        !self.phase.is_terminal()
    }

    /// Timer channel: fires due deferred tasks, advances the typed reveal,
    /// pushes the countdown, observes expiry. Runs on a fixed interval
    /// independent of the frame driver.
    pub fn timer_tick(&mut self, now_ms: f64) {
        self.last_now_ms = now_ms;
        for action in self.tasks.take_due(now_ms) {
            self.handle_deferred(action, now_ms);
        }
        let mut timed_out = false;
        if self.phase == GamePhase::Question {
            if let Some(active) = self.active.as_mut() {
                if let Some(prefix) = active.reveal_tick(now_ms) {
                    self.ui.set_prompt_text(&prefix);
                }
                if let Some(cd) = active.countdown() {
                    self.ui.set_countdown(cd.remaining_secs(now_ms));
                }
                timed_out = active.try_expire(now_ms);
            }
        }
        if timed_out {
            log::info!("countdown expired, marking incorrect");
            self.resolve_question(false, now_ms);
        }
    }

    /// Ending cadence: owned by the terminal summary once the frame driver
    /// has stopped.
    pub fn ending_tick(&mut self, now_ms: f64) {
        self.last_now_ms = now_ms;
        if let Some(ending) = self.ending.as_mut() {
            ending.tick(now_ms);
            ending.render(self.renderer.as_mut());
        }
    }

    // --- Read-only host surface ----------------------------------------------

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> ScoreTally {
        self.score
    }

    pub fn progress(&self) -> Progress {
        let current = self.session.current_number();
        let total = self.session.total();
        Progress {
            current,
            total,
            percentage: if total == 0 {
                0.0
            } else {
                current as f64 / total as f64 * 100.0
            },
        }
    }

    pub fn ending(&self) -> Option<&EndingSummary> {
        self.ending.as_ref()
    }

    pub fn active_question(&self) -> Option<&ActiveQuestion> {
        self.active.as_ref()
    }

    pub fn is_chest_triggered(&self) -> bool {
        self.chest_triggered
    }

    pub fn session(&self) -> &QuestionSession {
        &self.session
    }

    // --- Internal transitions -------------------------------------------------

    fn enter_running(&mut self, user_initiated: bool) {
        self.phase = GamePhase::Running;
        self.animations.start(CHARACTER_RUN, self.last_now_ms);
        self.scroll.start();
        if user_initiated {
            self.audio.on_run_start();
        }
        log::info!("running");
    }

    /// Chest reached the character: freeze the world, open the chest, and
    /// schedule the question reveal for when the lid is up.
    fn trigger_question(&mut self, now_ms: f64) {
        let Some(question) = self.session.current() else {
            log::warn!("chest trigger with exhausted session");
            return;
        };
        self.chest_triggered = true;
        self.phase = GamePhase::Question;
        self.animations.stop(CHARACTER_RUN);
        self.animations.start(CHEST_OPEN, now_ms);
        self.scroll.stop();
        self.active = Some(ActiveQuestion::new(question, &mut self.rng));
        self.tasks.schedule(
            now_ms,
            self.config.chest_open_delay_ms,
            Deferred::RevealQuestion,
        );
        log::info!("question {} triggered", self.session.current_number());
    }

    fn handle_deferred(&mut self, action: Deferred, now_ms: f64) {
        match action {
            Deferred::RevealQuestion => {
                if self.phase != GamePhase::Question {
                    return;
                }
                let Some(active) = self.active.as_mut() else {
                    return;
                };
                active.begin_reveal(now_ms, self.config.countdown_ms);
                let texts = active.slots().map(|s| s.text);
                self.ui.show_question();
                self.ui.set_answer_slots(texts);
                self.ui
                    .set_countdown(self.config.countdown_ms / 1000.0);
            }
            Deferred::FinishDwell { correct } => self.resolve_question(correct, now_ms),
            Deferred::ResumeRunning => {
                // Only resume if nothing (abandon, restart) intervened.
                if self.phase == GamePhase::Ready {
                    self.enter_running(false);
                }
            }
        }
    }

    /// The single scoring point: every question resolution — manual answer
    /// after its dwell, or timeout — lands here exactly once.
    fn resolve_question(&mut self, correct: bool, now_ms: f64) {
        if self.phase != GamePhase::Question {
            return;
        }
        self.score.record(correct);
        log::info!(
            "resolved {}: {} correct / {} incorrect",
            if correct { "correct" } else { "incorrect" },
            self.score.correct,
            self.score.incorrect
        );
        self.ui.hide_question();
        self.active = None;
        self.chest_triggered = false;
        if !self.session.advance() {
            self.enter_victory(now_ms);
            return;
        }
        self.scroll.advance_background();
        self.phase = GamePhase::Ready;
        self.ui
            .set_progress(self.session.current_number(), self.session.total());
        self.tasks
            .schedule(now_ms, self.config.resume_delay_ms, Deferred::ResumeRunning);
    }

    fn enter_victory(&mut self, now_ms: f64) {
        self.animations.stop_all();
        self.scroll.stop();
        self.phase = GamePhase::Victory;
        self.ending = Some(EndingSummary::capture(
            EndOutcome::Victory,
            self.score,
            self.session.total(),
            now_ms,
        ));
        self.audio.on_victory();
        log::info!("victory: {}/{}", self.score.correct, self.session.total());
    }

    fn abandon_run(&mut self) {
        self.tasks.cancel_all();
        if self.active.is_some() {
            self.ui.hide_question();
            self.active = None;
        }
        self.scroll.stop();
        self.animations.stop_all();
        self.phase = GamePhase::GameOver;
        self.ending = Some(EndingSummary::capture(
            EndOutcome::Abandoned,
            self.score,
            self.session.total(),
            self.last_now_ms,
        ));
        log::info!(
            "run abandoned after {} answers",
            self.score.answered()
        );
    }

    fn render_frame(&mut self) {
        self.renderer.clear_frame();
        let current_sky = self.scroll.current_sky_name();
        let next_sky = self.scroll.next_sky_name();
        let offset = self.scroll.background_offset();
        self.renderer
            .draw_sprite(&current_sky, -offset, 0.0, scroll::SKY_WIDTH, CANVAS_H);
        self.renderer.draw_sprite(
            &next_sky,
            scroll::SKY_WIDTH - offset,
            0.0,
            scroll::SKY_WIDTH,
            CANVAS_H,
        );
        self.renderer.draw_floor();
        let chest_x = self.scroll.chest_screen_x();
        if chest_x > -100.0 && chest_x < CANVAS_W + 100.0 {
            let chest_sprite = if self.chest_triggered {
                self.animations
                    .current_frame(CHEST_OPEN)
                    .unwrap_or("chest_closed")
            } else {
                "chest_closed"
            };
            let chest_sprite = chest_sprite.to_string();
            self.renderer
                .draw_sprite(&chest_sprite, chest_x - 24.0, CHEST_Y - 24.0, 48.0, 48.0);
        }
        let character_sprite = if self.phase == GamePhase::Running {
            self.animations
                .current_frame(CHARACTER_RUN)
                .unwrap_or("character_1")
        } else {
            "character_1"
        };
        let character_sprite = character_sprite.to_string();
        self.renderer.draw_sprite(
            &character_sprite,
            CHARACTER_X - 32.0,
            CHARACTER_Y - 32.0,
            64.0,
            64.0,
        );
    }
}
