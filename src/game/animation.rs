//! Named frame animations, advanced by elapsed wall-clock time.
//!
//! Animations have a lifecycle independent of the game phase: the engine
//! starts and stops them explicitly at phase boundaries, and the frame driver
//! advances whichever are playing every tick.

use std::collections::HashMap;

struct Animation {
    frames: Vec<String>,
    current_frame: usize,
    time_per_frame_ms: f64,
    last_advance_ms: f64,
    playing: bool,
    looping: bool,
}

#[derive(Default)]
pub struct AnimationSet {
    animations: HashMap<&'static str, Animation>,
}

impl AnimationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an animation. `duration_ms` covers one full pass over the
    /// frames; looping animations wrap, play-once animations hold the last
    /// frame.
    pub fn create(
        &mut self,
        name: &'static str,
        frames: Vec<String>,
        duration_ms: f64,
        looping: bool,
    ) {
        let time_per_frame_ms = duration_ms / frames.len().max(1) as f64;
        self.animations.insert(
            name,
            Animation {
                frames,
                current_frame: 0,
                time_per_frame_ms,
                last_advance_ms: 0.0,
                playing: false,
                looping,
            },
        );
    }

    pub fn start(&mut self, name: &str, now_ms: f64) {
        if let Some(anim) = self.animations.get_mut(name) {
            anim.playing = true;
            anim.current_frame = 0;
            anim.last_advance_ms = now_ms;
        }
    }

    pub fn stop(&mut self, name: &str) {
        if let Some(anim) = self.animations.get_mut(name) {
            anim.playing = false;
        }
    }

    pub fn stop_all(&mut self) {
        for anim in self.animations.values_mut() {
            anim.playing = false;
        }
    }

    /// Advance every playing animation to `now_ms`.
    pub fn advance(&mut self, now_ms: f64) {
        for anim in self.animations.values_mut() {
            if !anim.playing || anim.frames.is_empty() {
                continue;
            }
            while now_ms - anim.last_advance_ms >= anim.time_per_frame_ms {
                anim.last_advance_ms += anim.time_per_frame_ms;
                if anim.current_frame + 1 < anim.frames.len() {
                    anim.current_frame += 1;
                } else if anim.looping {
                    anim.current_frame = 0;
                } else {
                    // Play-once: hold the final frame.
                    anim.playing = false;
                    break;
                }
            }
        }
    }

    /// Sprite name for the animation's current frame.
    pub fn current_frame(&self, name: &str) -> Option<&str> {
        let anim = self.animations.get(name)?;
        anim.frames.get(anim.current_frame).map(String::as_str)
    }

    /// True once a play-once animation has reached its last frame.
    pub fn is_complete(&self, name: &str) -> bool {
        self.animations
            .get(name)
            .map(|a| !a.looping && a.current_frame + 1 == a.frames.len())
            .unwrap_or(false)
    }

    pub fn reset(&mut self) {
        for anim in self.animations.values_mut() {
            anim.playing = false;
            anim.current_frame = 0;
            anim.last_advance_ms = 0.0;
        }
    }
}

/// Character run cycle: frames character_1 .. character_5, 800 ms per pass.
pub fn character_run_frames() -> Vec<String> {
    (1..=5).map(|i| format!("character_{i}")).collect()
}

/// Chest opening: closed -> opening -> opened over one second, played once.
pub fn chest_open_frames() -> Vec<String> {
    ["chest_closed", "chest_opening", "chest_opened"]
        .into_iter()
        .map(String::from)
        .collect()
}

pub const CHARACTER_RUN: &str = "character_run";
pub const CHEST_OPEN: &str = "chest_open";
pub const CHARACTER_RUN_DURATION_MS: f64 = 800.0;
pub const CHEST_OPEN_DURATION_MS: f64 = 1000.0;
