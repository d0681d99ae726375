// Native tests for the leaf components: scroll projection and frame
// animations. The task queue and countdown carry their own unit tests in
// `src/game/tasks.rs`.

use lore_path::game::animation::{AnimationSet, character_run_frames, chest_open_frames};
use lore_path::game::scroll::{
    CHEST_WORLD_X, PROXIMITY_MAX, PROXIMITY_MIN, SCROLL_SPEED, ScrollState,
};

#[test]
fn scroll_is_frozen_until_started() {
    let mut scroll = ScrollState::new();
    scroll.update();
    assert_eq!(scroll.background_offset(), 0.0);
    assert_eq!(scroll.chest_screen_x(), CHEST_WORLD_X);

    scroll.start();
    scroll.update();
    assert_eq!(scroll.background_offset(), SCROLL_SPEED);
    assert_eq!(scroll.chest_screen_x(), CHEST_WORLD_X - SCROLL_SPEED);

    scroll.stop();
    scroll.update();
    assert_eq!(scroll.background_offset(), SCROLL_SPEED);
}

#[test]
fn background_cycle_wraps_mod_four() {
    let mut scroll = ScrollState::new();
    scroll.start();
    assert_eq!(scroll.current_sky_name(), "sky_1");
    assert_eq!(scroll.next_sky_name(), "sky_2");
    // One full sky of travel wraps the cycle index and zeroes the offset.
    for _ in 0..400 {
        scroll.update();
    }
    assert_eq!(scroll.current_sky_name(), "sky_2");
    assert_eq!(scroll.background_offset(), 0.0);
    // Three more skies of travel return to the first.
    for _ in 0..1200 {
        scroll.update();
    }
    assert_eq!(scroll.current_sky_name(), "sky_1");
}

#[test]
fn chest_enters_the_proximity_window_exactly_when_projected_inside() {
    let mut scroll = ScrollState::new();
    scroll.start();
    // Chest starts at 600; window is [350, 400].
    assert!(!scroll.chest_in_window());
    while scroll.chest_screen_x() > PROXIMITY_MAX {
        assert!(!scroll.chest_in_window());
        scroll.update();
    }
    assert!(scroll.chest_in_window());
    while scroll.chest_screen_x() >= PROXIMITY_MIN {
        assert!(scroll.chest_in_window());
        scroll.update();
    }
    assert!(!scroll.chest_in_window());
}

#[test]
fn advance_background_respawns_the_chest() {
    let mut scroll = ScrollState::new();
    scroll.start();
    for _ in 0..150 {
        scroll.update();
    }
    assert!(scroll.chest_screen_x() < CHEST_WORLD_X);
    scroll.advance_background();
    assert_eq!(scroll.chest_screen_x(), CHEST_WORLD_X);
    assert_eq!(scroll.background_offset(), 0.0);
    assert_eq!(scroll.current_sky_name(), "sky_2");
}

#[test]
fn looping_animation_wraps_frames() {
    let mut set = AnimationSet::new();
    set.create("run", character_run_frames(), 800.0, true);
    set.start("run", 0.0);
    assert_eq!(set.current_frame("run"), Some("character_1"));
    set.advance(160.0);
    assert_eq!(set.current_frame("run"), Some("character_2"));
    set.advance(800.0);
    assert_eq!(set.current_frame("run"), Some("character_1"));
}

#[test]
fn play_once_animation_holds_the_last_frame() {
    let mut set = AnimationSet::new();
    set.create("chest", chest_open_frames(), 1000.0, false);
    set.start("chest", 0.0);
    assert!(!set.is_complete("chest"));
    set.advance(5_000.0);
    assert_eq!(set.current_frame("chest"), Some("chest_opened"));
    assert!(set.is_complete("chest"));
    // Further advancing does not wrap.
    set.advance(10_000.0);
    assert_eq!(set.current_frame("chest"), Some("chest_opened"));
}

#[test]
fn stopped_animation_does_not_advance() {
    let mut set = AnimationSet::new();
    set.create("run", character_run_frames(), 800.0, true);
    set.start("run", 0.0);
    set.stop("run");
    set.advance(1_000.0);
    assert_eq!(set.current_frame("run"), Some("character_1"));
}
