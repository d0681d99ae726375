//! Browser glue: canvas, DOM widgets, audio, asset loading, and the two
//! timing channels that drive the core.
//!
//! Nothing in here holds game rules. The engine lives in a thread-local cell;
//! event listeners and the two loops (`requestAnimationFrame` frames, a 50 ms
//! interval for the timer channel) borrow it, feed it timestamps, and let it
//! decide. All collaborator failures degrade visuals only.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    CanvasRenderingContext2d, Document, HtmlAudioElement, HtmlButtonElement, HtmlCanvasElement,
    HtmlImageElement, window,
};

use crate::game::phase::GamePhase;
use crate::game::{
    AudioSink, CANVAS_H, CANVAS_W, GameConfig, GameEngine, QuestionUi, Renderer, bank,
};

thread_local! {
    static ENGINE: RefCell<Option<GameEngine>> = RefCell::new(None);
    static ENDING_INTERVAL: Cell<Option<i32>> = Cell::new(None);
}

/// Timer channel cadence; also paces the typed reveal and countdown display.
const TIMER_TICK_MS: i32 = 50;
/// Ending summary redraw cadence once the frame driver has stopped.
const ENDING_TICK_MS: i32 = 100;

const ASSET_MANIFEST: &[(&str, &str)] = &[
    ("character_1", "assets/character_1.png"),
    ("character_2", "assets/character_2.png"),
    ("character_3", "assets/character_3.png"),
    ("character_4", "assets/character_4.png"),
    ("character_5", "assets/character_5.png"),
    ("chest_closed", "assets/chest_closed.png"),
    ("chest_opening", "assets/chest_opening.png"),
    ("chest_opened", "assets/chest_opened.png"),
    ("sky_1", "assets/sky_1.png"),
    ("sky_2", "assets/sky_2.png"),
    ("sky_3", "assets/sky_3.png"),
    ("sky_4", "assets/sky_4.png"),
    ("ripplewave", "assets/ripplewave.png"),
    ("castle", "assets/castle.png"),
];

pub(crate) fn with_engine<R>(f: impl FnOnce(&mut GameEngine) -> R) -> Option<R> {
    ENGINE.with(|cell| cell.borrow_mut().as_mut().map(f))
}

fn now_ms() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

// --- Console logging backend -------------------------------------------------

struct ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::Level::Debug
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format!("{} {}", record.level(), record.args()));
        match record.level() {
            log::Level::Error => web_sys::console::error_1(&line),
            log::Level::Warn => web_sys::console::warn_1(&line),
            _ => web_sys::console::log_1(&line),
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;

fn init_logger() {
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(log::LevelFilter::Debug));
}

// --- Renderer over the 2d canvas ----------------------------------------------

type AssetMap = Rc<RefCell<HashMap<String, HtmlImageElement>>>;

struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    assets: AssetMap,
}

impl CanvasRenderer {
    fn asset_ready(img: &HtmlImageElement) -> bool {
        img.complete() && img.natural_width() > 0
    }
}

impl Renderer for CanvasRenderer {
    fn clear_frame(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, CANVAS_W, CANVAS_H);
    }

    fn draw_sprite(&mut self, name: &str, x: f64, y: f64, w: f64, h: f64) {
        let assets = self.assets.borrow();
        match assets.get(name).filter(|img| Self::asset_ready(img)) {
            Some(img) => {
                self.ctx
                    .draw_image_with_html_image_element_and_dw_and_dh(img, x, y, w, h)
                    .ok();
            }
            None => {
                // Deterministic stand-in for missing art.
                self.ctx.set_fill_style(&JsValue::from_str("#ff00ff"));
                self.ctx.fill_rect(x, y, w, h);
                self.ctx.set_fill_style(&JsValue::from_str("#000"));
                self.ctx.set_font("8px Arial");
                self.ctx.fill_text("MISSING", x + w / 2.0, y + h / 2.0).ok();
            }
        }
    }

    fn draw_floor(&mut self) {
        let ctx = &self.ctx;
        // Water strip under the dock.
        let wave_drawn = {
            let assets = self.assets.borrow();
            if let Some(wave) = assets.get("ripplewave").filter(|img| Self::asset_ready(img)) {
                let scale = 100.0 / wave.natural_height().max(1) as f64;
                let tile_w = wave.natural_width() as f64 * scale;
                let mut x = 0.0;
                while x < CANVAS_W {
                    ctx.draw_image_with_html_image_element_and_dw_and_dh(
                        wave,
                        x,
                        CANVAS_H - 100.0,
                        tile_w,
                        100.0,
                    )
                    .ok();
                    x += tile_w.max(1.0);
                }
                true
            } else {
                false
            }
        };
        if !wave_drawn {
            ctx.set_fill_style(&JsValue::from_str("#3B82F6"));
            ctx.fill_rect(0.0, CANVAS_H - 100.0, CANVAS_W, 100.0);
        }
        // Wooden dock with plank lines and posts.
        let dock_y = CANVAS_H - 110.0;
        ctx.set_fill_style(&JsValue::from_str("#8B4513"));
        ctx.fill_rect(0.0, dock_y, CANVAS_W, 30.0);
        ctx.set_fill_style(&JsValue::from_str("#654321"));
        let mut y = dock_y;
        while y < dock_y + 30.0 {
            ctx.fill_rect(0.0, y, CANVAS_W, 2.0);
            y += 6.0;
        }
        ctx.set_fill_style(&JsValue::from_str("#5D4037"));
        let mut x = 60.0;
        while x < CANVAS_W {
            ctx.fill_rect(x, dock_y + 30.0, 12.0, 50.0);
            x += 120.0;
        }
        ctx.set_fill_style(&JsValue::from_str("#A0522D"));
        ctx.fill_rect(0.0, dock_y, CANVAS_W, 3.0);
    }

    fn draw_overlay(&mut self, alpha: f64) {
        self.ctx
            .set_fill_style(&JsValue::from_str(&format!("rgba(0, 0, 0, {alpha})")));
        self.ctx.fill_rect(0.0, 0.0, CANVAS_W, CANVAS_H);
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64, size_px: u32, color: &str) {
        self.ctx
            .set_font(&format!("bold {size_px}px Arial, sans-serif"));
        self.ctx.set_fill_style(&JsValue::from_str(color));
        self.ctx.fill_text(text, x, y).ok();
    }
}

// --- Audio notifications -------------------------------------------------------

struct WebAudio {
    current: Option<HtmlAudioElement>,
}

impl AudioSink for WebAudio {
    fn on_run_start(&mut self) {
        if self.current.is_some() {
            return;
        }
        if let Ok(audio) = HtmlAudioElement::new_with_src("music/overworld.mp3") {
            audio.set_loop(true);
            audio.set_volume(0.3);
            let _ = audio.play();
            self.current = Some(audio);
        }
    }

    fn on_victory(&mut self) {
        if let Some(previous) = self.current.take() {
            let _ = previous.pause();
        }
        if let Ok(audio) = HtmlAudioElement::new_with_src("music/victory.mp3") {
            audio.set_volume(0.3);
            let _ = audio.play();
            self.current = Some(audio);
        }
    }
}

// --- Question / countdown DOM widgets ------------------------------------------

const TIMER_BASE_STYLE: &str =
    "font-family:'Fira Code', monospace; font-size:22px; text-align:center; margin:4px 0;";

struct DomUi {
    doc: Document,
}

impl DomUi {
    fn set_text(&self, id: &str, text: &str) {
        if let Some(el) = self.doc.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_style(&self, id: &str, style: &str) {
        if let Some(el) = self.doc.get_element_by_id(id) {
            el.set_attribute("style", style).ok();
        }
    }

    fn set_button_enabled(&self, id: &str, enabled: bool) {
        if let Some(el) = self.doc.get_element_by_id(id) {
            if let Some(button) = el.dyn_ref::<HtmlButtonElement>() {
                button.set_disabled(!enabled);
            }
        }
    }
}

const ANSWER_BASE_STYLE: &str = "display:block; width:100%; margin:6px 0; padding:10px 14px; \
     font-family:'Fira Code', monospace; font-size:14px; text-align:left; cursor:pointer; \
     background:#1d2736; color:#e8e8e8; border:2px solid #31405a; border-radius:6px;";

impl QuestionUi for DomUi {
    fn show_question(&mut self) {
        self.set_style("lp-question", QUESTION_PANEL_STYLE);
        self.set_text("lp-question-text", "");
    }

    fn hide_question(&mut self) {
        self.set_style("lp-question", &format!("{QUESTION_PANEL_STYLE} display:none;"));
    }

    fn set_prompt_text(&mut self, text: &str) {
        self.set_text("lp-question-text", text);
    }

    fn set_answer_slots(&mut self, texts: [&'static str; 4]) {
        for (i, text) in texts.iter().enumerate() {
            let id = format!("lp-answer-{i}");
            self.set_text(&id, text);
            self.set_style(&id, ANSWER_BASE_STYLE);
            self.set_button_enabled(&id, true);
        }
    }

    fn show_answer_feedback(&mut self, correct_slot: usize, chosen_slot: usize) {
        for i in 0..4 {
            let id = format!("lp-answer-{i}");
            self.set_button_enabled(&id, false);
            if i == correct_slot {
                self.set_style(
                    &id,
                    &format!("{ANSWER_BASE_STYLE} background:#1d6b2f; border-color:#2f9e4f;"),
                );
            } else if i == chosen_slot {
                self.set_style(
                    &id,
                    &format!("{ANSWER_BASE_STYLE} background:#7a1f1f; border-color:#b03333;"),
                );
            }
        }
    }

    fn set_countdown(&mut self, remaining_secs: f64) {
        self.set_text("lp-timer", &format!("{remaining_secs:.2}"));
        let color = if remaining_secs < 4.0 {
            "#ff0000"
        } else if remaining_secs < 6.0 {
            "#ff8800"
        } else {
            "#ffffff"
        };
        self.set_style("lp-timer", &format!("{TIMER_BASE_STYLE} color:{color};"));
    }

    fn set_progress(&mut self, current: usize, total: usize) {
        self.set_text("lp-counter", &format!("Question {current} / {total}"));
    }
}

const QUESTION_PANEL_STYLE: &str = "position:fixed; left:50%; top:50%; \
     transform:translate(-50%,-50%); width:520px; padding:18px 22px; \
     background:rgba(10, 16, 28, 0.94); border:2px solid #31405a; border-radius:10px; \
     color:#e8e8e8; z-index:40;";

// --- DOM bootstrapping ----------------------------------------------------------

fn ensure_dom(doc: &Document) -> Result<HtmlCanvasElement, JsValue> {
    let body = doc
        .body()
        .ok_or_else(|| JsValue::from_str("no document body"))?;

    // Create / reuse the game canvas.
    let canvas: HtmlCanvasElement = if let Some(el) = doc.get_element_by_id("lp-canvas") {
        el.dyn_into()?
    } else {
        let c: HtmlCanvasElement = doc.create_element("canvas")?.dyn_into()?;
        c.set_id("lp-canvas");
        c.set_width(CANVAS_W as u32);
        c.set_height(CANVAS_H as u32);
        c.set_attribute(
            "style",
            "position:fixed; left:50%; top:45%; transform:translate(-50%,-50%); \
             image-rendering:pixelated; border:2px solid #222; background:#87CEEB; z-index:10;",
        )
        .ok();
        body.append_child(&c)?;
        c
    };

    // Controls bar: run toggle + question counter + restart.
    if doc.get_element_by_id("lp-controls").is_none() {
        let bar = doc.create_element("div")?;
        bar.set_id("lp-controls");
        bar.set_attribute(
            "style",
            "position:fixed; bottom:24px; left:50%; transform:translateX(-50%); \
             display:flex; gap:14px; align-items:center; z-index:30; \
             font-family:'Fira Code', monospace;",
        )
        .ok();
        let run = doc.create_element("button")?;
        run.set_id("lp-run");
        run.set_text_content(Some("START"));
        run.set_attribute(
            "style",
            "padding:10px 26px; font-size:15px; cursor:pointer; background:#2d5f8a; \
             color:#fff; border:2px solid #3f7fb5; border-radius:6px;",
        )
        .ok();
        bar.append_child(&run)?;
        let counter = doc.create_element("span")?;
        counter.set_id("lp-counter");
        counter.set_attribute("style", "color:#ffd166; font-size:14px;").ok();
        counter.set_text_content(Some("Question 1 / 40"));
        bar.append_child(&counter)?;
        let restart = doc.create_element("button")?;
        restart.set_id("lp-restart");
        restart.set_text_content(Some("PLAY AGAIN"));
        restart
            .set_attribute(
                "style",
                "display:none; padding:10px 26px; font-size:15px; cursor:pointer; \
                 background:#4CAF50; color:#fff; border:2px solid #45a049; border-radius:6px;",
            )
            .ok();
        bar.append_child(&restart)?;
        body.append_child(&bar)?;
    }

    // Question panel with prompt, four answer slots, and the countdown.
    if doc.get_element_by_id("lp-question").is_none() {
        let panel = doc.create_element("div")?;
        panel.set_id("lp-question");
        panel
            .set_attribute("style", &format!("{QUESTION_PANEL_STYLE} display:none;"))
            .ok();
        let timer = doc.create_element("div")?;
        timer.set_id("lp-timer");
        timer.set_attribute("style", TIMER_BASE_STYLE).ok();
        timer.set_text_content(Some(""));
        panel.append_child(&timer)?;
        let text = doc.create_element("div")?;
        text.set_id("lp-question-text");
        text.set_attribute(
            "style",
            "min-height:48px; font-size:16px; line-height:1.4; margin-bottom:10px;",
        )
        .ok();
        panel.append_child(&text)?;
        for i in 0..4 {
            let button = doc.create_element("button")?;
            button.set_id(&format!("lp-answer-{i}"));
            button.set_attribute("style", ANSWER_BASE_STYLE).ok();
            panel.append_child(&button)?;
        }
        body.append_child(&panel)?;
    }

    // Start screen overlay.
    if doc.get_element_by_id("lp-start-screen").is_none() {
        let overlay = doc.create_element("div")?;
        overlay.set_id("lp-start-screen");
        overlay
            .set_attribute("style", START_SCREEN_STYLE)
            .ok();
        let title = doc.create_element("div")?;
        title.set_text_content(Some("Walking the Lore Path"));
        title
            .set_attribute("style", "font-size:28px; color:#ffd166; margin-bottom:18px;")
            .ok();
        overlay.append_child(&title)?;
        let begin = doc.create_element("button")?;
        begin.set_id("lp-start");
        begin.set_text_content(Some("BEGIN"));
        begin
            .set_attribute(
                "style",
                "padding:12px 34px; font-size:17px; cursor:pointer; background:#2d5f8a; \
                 color:#fff; border:2px solid #3f7fb5; border-radius:6px;",
            )
            .ok();
        overlay.append_child(&begin)?;
        body.append_child(&overlay)?;
    }

    Ok(canvas)
}

const START_SCREEN_STYLE: &str = "position:fixed; inset:0; display:flex; flex-direction:column; \
     align-items:center; justify-content:center; background:rgba(6, 10, 18, 0.92); z-index:50; \
     font-family:'Fira Code', monospace;";

fn hide_start_screen(doc: &Document) {
    if let Some(el) = doc.get_element_by_id("lp-start-screen") {
        el.set_attribute("style", &format!("{START_SCREEN_STYLE} display:none;"))
            .ok();
    }
}

fn show_start_screen(doc: &Document) {
    if let Some(el) = doc.get_element_by_id("lp-start-screen") {
        el.set_attribute("style", START_SCREEN_STYLE).ok();
    }
}

fn set_run_label(doc: &Document, label: &str) {
    if let Some(el) = doc.get_element_by_id("lp-run") {
        el.set_text_content(Some(label));
    }
}

fn set_restart_visible(doc: &Document, visible: bool) {
    if let Some(el) = doc.get_element_by_id("lp-restart") {
        let base = "padding:10px 26px; font-size:15px; cursor:pointer; background:#4CAF50; \
             color:#fff; border:2px solid #45a049; border-radius:6px;";
        let style = if visible {
            base.to_string()
        } else {
            format!("display:none; {base}")
        };
        el.set_attribute("style", &style).ok();
    }
}

// --- Asset loading ---------------------------------------------------------------

fn load_assets(assets: &AssetMap) -> Result<(), JsValue> {
    let pending = Rc::new(Cell::new(ASSET_MANIFEST.len()));
    for (name, path) in ASSET_MANIFEST {
        let img = HtmlImageElement::new()?;
        let pending = pending.clone();
        let settle = Closure::wrap(Box::new(move || {
            pending.set(pending.get().saturating_sub(1));
            if pending.get() == 0 {
                with_engine(|engine| engine.assets_ready());
            }
        }) as Box<dyn FnMut()>);
        img.set_onload(Some(settle.as_ref().unchecked_ref()));
        img.set_onerror(Some(settle.as_ref().unchecked_ref()));
        settle.forget();
        img.set_src(path);
        assets.borrow_mut().insert((*name).to_string(), img);
    }
    Ok(())
}

// --- Input listeners -------------------------------------------------------------

fn handle_start(doc: &Document) {
    with_engine(|engine| engine.start());
    hide_start_screen(doc);
    set_run_label(doc, "START");
}

fn handle_toggle_run(doc: &Document) {
    with_engine(|engine| engine.toggle_run());
    let phase = with_engine(|engine| engine.phase());
    match phase {
        Some(GamePhase::Running) => set_run_label(doc, "RESET"),
        Some(GamePhase::GameOver) => set_run_label(doc, "START"),
        _ => {}
    }
}

fn install_listeners(doc: &Document) -> Result<(), JsValue> {
    if let Some(el) = doc.get_element_by_id("lp-start") {
        let doc_start = doc.clone();
        let closure = Closure::wrap(Box::new(move || {
            handle_start(&doc_start);
        }) as Box<dyn FnMut()>);
        el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    if let Some(el) = doc.get_element_by_id("lp-run") {
        let doc_run = doc.clone();
        let closure = Closure::wrap(Box::new(move || {
            handle_toggle_run(&doc_run);
        }) as Box<dyn FnMut()>);
        el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    if let Some(el) = doc.get_element_by_id("lp-restart") {
        let closure = Closure::wrap(Box::new(move || {
            restart_game();
        }) as Box<dyn FnMut()>);
        el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    for i in 0..4usize {
        if let Some(el) = doc.get_element_by_id(&format!("lp-answer-{i}")) {
            let closure = Closure::wrap(Box::new(move || {
                with_engine(|engine| engine.submit_answer(i));
            }) as Box<dyn FnMut()>);
            el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
    }
    // Space: start from the start screen, run toggle afterwards.
    {
        let doc_keys = doc.clone();
        let closure = Closure::wrap(Box::new(move |evt: web_sys::KeyboardEvent| {
            if evt.code() != "Space" {
                return;
            }
            evt.prevent_default();
            match with_engine(|engine| engine.phase()) {
                Some(GamePhase::Start) => handle_start(&doc_keys),
                Some(_) => handle_toggle_run(&doc_keys),
                None => {}
            }
        }) as Box<dyn FnMut(_)>);
        doc.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

// --- Timing channels -------------------------------------------------------------

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn start_main_loop() {
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        let keep_going = with_engine(|engine| engine.frame_tick(ts)).unwrap_or(false);
        if keep_going {
            if let Some(w) = window() {
                let _ = w
                    .request_animation_frame(f.borrow().as_ref().unwrap().as_ref().unchecked_ref());
            }
        } else {
            on_frame_loop_stopped();
        }
    }) as Box<dyn FnMut(f64)>));
    if let Some(w) = window() {
        let _ = w.request_animation_frame(g.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}

fn start_timer_channel() -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let closure = Closure::wrap(Box::new(move || {
        let now = now_ms();
        with_engine(|engine| engine.timer_tick(now));
    }) as Box<dyn FnMut()>);
    win.set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        TIMER_TICK_MS,
    )?;
    closure.forget();
    Ok(())
}

/// The frame driver stopped: a terminal phase owns drawing from here on.
fn on_frame_loop_stopped() {
    let terminal = matches!(
        with_engine(|engine| engine.phase()),
        Some(phase) if phase.is_terminal()
    );
    if !terminal {
        return;
    }
    if let Some(doc) = window().and_then(|w| w.document()) {
        set_restart_visible(&doc, true);
    }
    if ENDING_INTERVAL.with(|cell| cell.get()).is_some() {
        return;
    }
    let Some(win) = window() else { return };
    let closure = Closure::wrap(Box::new(move || {
        let now = now_ms();
        with_engine(|engine| engine.ending_tick(now));
    }) as Box<dyn FnMut()>);
    if let Ok(id) = win.set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        ENDING_TICK_MS,
    ) {
        ENDING_INTERVAL.with(|cell| cell.set(Some(id)));
    }
    closure.forget();
}

/// Restart from the summary screen: reset the core, stop the ending cadence,
/// and hand drawing back to the frame driver.
pub(crate) fn restart_game() {
    let was_terminal = matches!(
        with_engine(|engine| engine.phase()),
        Some(phase) if phase.is_terminal()
    );
    if !was_terminal {
        return;
    }
    let ok = with_engine(|engine| engine.restart())
        .map(|r| r.is_ok())
        .unwrap_or(false);
    if !ok {
        log::error!("restart failed; keeping summary screen");
        return;
    }
    if let Some(id) = ENDING_INTERVAL.with(|cell| cell.take()) {
        if let Some(win) = window() {
            win.clear_interval_with_handle(id);
        }
    }
    if let Some(doc) = window().and_then(|w| w.document()) {
        set_restart_visible(&doc, false);
        set_run_label(&doc, "START");
        show_start_screen(&doc);
    }
    start_main_loop();
}

// --- Entry -----------------------------------------------------------------------

pub(crate) fn start_game(config: GameConfig) -> Result<(), JsValue> {
    init_logger();
    if ENGINE.with(|cell| cell.borrow().is_some()) {
        return Ok(());
    }
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let canvas = ensure_dom(&doc)?;
    let ctx: CanvasRenderingContext2d = canvas.get_context("2d")?.unwrap().dyn_into()?;
    ctx.set_image_smoothing_enabled(false);
    ctx.set_text_align("center");

    let assets: AssetMap = Rc::new(RefCell::new(HashMap::new()));
    let renderer = CanvasRenderer {
        ctx,
        assets: assets.clone(),
    };
    let audio = WebAudio { current: None };
    let ui = DomUi { doc: doc.clone() };

    let engine = GameEngine::new(
        bank::QUESTION_BANK,
        config,
        Box::new(renderer),
        Box::new(audio),
        Box::new(ui),
        SmallRng::from_entropy(),
    )
    .map_err(|e| JsValue::from_str(&e.to_string()))?;
    ENGINE.with(|cell| cell.replace(Some(engine)));

    install_listeners(&doc)?;
    load_assets(&assets)?;
    start_timer_channel()?;
    start_main_loop();
    Ok(())
}
