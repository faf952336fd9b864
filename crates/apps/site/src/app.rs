//! Browser half of the composer: thread-local page state, the rAF frame
//! loop, and the wasm exports the host page calls.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement};

use foundation::geometry::{Rect, Vec2};
use foundation::time::Time;
use map::backend::MapBackend;
use map::Region;
use motion::player::is_finished;
use motion::spring::{CounterFormat, SpringCounter};
use motion::ticker::Ticker;
use runtime::{EventBus, Frame, IntervalTimer, Job, Scheduler, Teardown};
use scene::entity::ElementId;
use scene::hover::HoverSelection;
use scene::viewport::ViewportObserver;
use scene::PageWorld;

use crate::styles;
use crate::SiteConfig;

mod compose;
mod dom;
mod map_view;

// Guard to prevent double-initialization of global state (relevant during hot reload).
static INITIALIZED: AtomicBool = AtomicBool::new(false);

thread_local! {
    static STATE: RefCell<Option<SiteState>> = const { RefCell::new(None) };
    static SCHEDULER: RefCell<Scheduler> = RefCell::new(Scheduler::new());
    static BUS: RefCell<EventBus> = RefCell::new(EventBus::new());
    static TEARDOWN: RefCell<Teardown> = RefCell::new(Teardown::new());
    static RUNNING: Cell<bool> = const { Cell::new(false) };
}

pub(crate) fn with_state<R>(f: impl FnOnce(&mut SiteState) -> R) -> Option<R> {
    STATE.with(|cell| cell.borrow_mut().as_mut().map(f))
}

pub(crate) fn with_teardown(f: impl FnOnce(&mut Teardown)) {
    TEARDOWN.with(|cell| f(&mut cell.borrow_mut()));
}

pub(crate) fn emit(frame: Frame, kind: &'static str, message: impl Into<String>) {
    BUS.with(|bus| bus.borrow_mut().emit(frame, kind, message));
}

pub(crate) struct SiteState {
    pub config: SiteConfig,
    pub world: PageWorld,
    pub frame: Frame,
    pub last_now_ms: Option<f64>,
    /// DOM node per world element, indexed by `ElementId::index()`.
    pub nodes: Vec<HtmlElement>,
    /// Revealed elements whose entrance is still animating.
    pub live: Vec<ElementId>,
    pub nav: NavState,
    pub hero: HeroState,
    pub strategy: StrategyState,
    pub presence: PresenceState,
    pub team: TeamState,
    pub insights: InsightsState,
    /// Root container, removed on teardown.
    pub root: HtmlElement,
}

pub(crate) struct NavState {
    pub bar: HtmlElement,
    pub scrolled: bool,
    pub mobile_menu: HtmlElement,
    pub menu_open: bool,
}

pub(crate) struct FloatingEl {
    pub node: HtmlElement,
    pub duration_s: f64,
    pub delay_s: f64,
}

pub(crate) struct HeroState {
    pub grid: HtmlElement,
    pub ticker_row: HtmlElement,
    pub ticker: Ticker,
    pub ticker_timer: IntervalTimer,
    pub floating: Vec<FloatingEl>,
    pub scroll_cue: HtmlElement,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum StrategyTab {
    Long,
    Short,
}

pub(crate) struct StrategyState {
    pub tab: StrategyTab,
    pub long_button: HtmlElement,
    pub short_button: HtmlElement,
    pub panel_title: HtmlElement,
    pub panel_description: HtmlElement,
    pub panel_focus: HtmlElement,
    pub long_copy: content::FrameworkCopy,
    pub short_copy: content::FrameworkCopy,
}

pub(crate) struct LoadedTile {
    pub screen: Vec2,
    pub image: web_sys::HtmlImageElement,
}

pub(crate) struct PresenceState {
    pub hover: HoverSelection,
    pub backend: MapBackend,
    pub canvas: HtmlCanvasElement,
    pub ctx: CanvasRenderingContext2d,
    pub regions: Vec<Region>,
    /// Details entries, same order as `regions`.
    pub list_items: Vec<HtmlElement>,
    pub tiles: Vec<LoadedTile>,
    pub tiles_ready: bool,
    pub needs_redraw: bool,
}

pub(crate) struct TeamState {
    /// The rotating card inner per member.
    pub cards: Vec<HtmlElement>,
    pub flipped: Option<usize>,
}

pub(crate) struct CounterBinding {
    pub node: HtmlElement,
    pub gate: ViewportObserver,
    pub spring: SpringCounter,
    pub format: CounterFormat,
}

pub(crate) struct InsightsState {
    pub counters: Vec<CounterBinding>,
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Avoid double-initialization (can happen during hot-reload edge cases).
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }
    console_error_panic_hook::set_once();
    Ok(())
}

/// Composes the page and starts the frame loop.
///
/// `access_token` enables the tile map; pass `None` (or blank) for the
/// vector fallback. `reduced_motion` skips entrance animations.
#[wasm_bindgen]
pub fn init_site(access_token: Option<String>, reduced_motion: Option<bool>) -> Result<(), JsValue> {
    init_with_config(SiteConfig::new(access_token, reduced_motion.unwrap_or(false)))
}

/// JSON variant of [`init_site`]: `{"accessToken": ..., "reducedMotion": ...}`.
#[wasm_bindgen]
pub fn init_site_json(options_json: &str) -> Result<(), JsValue> {
    let options = crate::SiteOptions::parse(options_json)
        .map_err(|e| JsValue::from_str(&format!("invalid site options: {e}")))?;
    init_with_config(options.into_config())
}

fn init_with_config(config: SiteConfig) -> Result<(), JsValue> {
    if RUNNING.with(|r| r.get()) {
        shutdown_site();
    }
    init_site_inner(config).inspect_err(|err| {
        dom::log(&format!("site init error: {err:?}"));
    })
}

/// Deregisters every listener and timer and removes the composed DOM.
#[wasm_bindgen]
pub fn shutdown_site() {
    RUNNING.with(|r| r.set(false));
    TEARDOWN.with(|cell| cell.borrow_mut().run());
    SCHEDULER.with(|cell| cell.borrow_mut().clear());
    let root = with_state(|s| s.root.clone());
    if let Some(root) = root {
        root.remove();
    }
    STATE.with(|cell| cell.borrow_mut().take());
}

/// Drains the frame event log, one line per event. Diagnostics only.
#[wasm_bindgen]
pub fn drain_events() -> String {
    BUS.with(|bus| {
        bus.borrow_mut()
            .drain()
            .into_iter()
            .map(|e| format!("frame {} [{}] {}", e.frame_index, e.kind, e.message))
            .collect::<Vec<_>>()
            .join("\n")
    })
}

fn init_site_inner(config: SiteConfig) -> Result<(), JsValue> {
    let document = dom::document()?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no document body"))?;

    let mut state = compose::compose_page(&document, &body, &config)?;

    if config.reduced_motion {
        // Trigger everything far in the past so samples clamp at rest.
        let viewport = Rect::from_origin_size(Vec2::new(-1.0e9, -1.0e9), 2.0e9, 2.0e9);
        let long_ago = Frame {
            index: 0,
            dt_s: 0.0,
            time: Time(-1.0e6),
        };
        state.world.observe_viewport(viewport, long_ago);
        for idx in 0..state.world.len() as u32 {
            let element = element_at(idx);
            let sample = state.world.style_at(element, Time(0.0));
            apply_entrance_style(&state.nodes[idx as usize], &sample);
        }
    }

    STATE.with(|cell| cell.borrow_mut().replace(state));

    SCHEDULER.with(|cell| {
        let mut sched = cell.borrow_mut();
        sched.add_job(Job::with_priority("reveals", 0, update_reveals));
        sched.add_job(Job::with_priority("ticker", 10, update_ticker));
        sched.add_job(Job::with_priority("counters", 20, update_counters));
        sched.add_job(Job::with_priority("hero-ambient", 30, update_hero_ambient));
        sched.add_job(Job::with_priority("map", 40, update_map));
    });

    if let Some(MapBackend::Tiles) = with_state(|s| s.presence.backend) {
        map_view::mount_tiles();
    }

    start_frame_loop()
}

pub(crate) fn element_at(index: u32) -> ElementId {
    ElementId(foundation::handles::Handle::new(index, 0))
}

fn start_frame_loop() -> Result<(), JsValue> {
    RUNNING.with(|r| r.set(true));
    let window = dom::window()?;

    let cb: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let cb_inner = Rc::clone(&cb);
    *cb.borrow_mut() = Some(Closure::new(move |now_ms: f64| {
        if !RUNNING.with(|r| r.get()) {
            return;
        }
        on_frame(now_ms);
        if let Ok(window) = dom::window()
            && let Some(cb) = cb_inner.borrow().as_ref()
        {
            let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }));

    if let Some(cb_ref) = cb.borrow().as_ref() {
        window.request_animation_frame(cb_ref.as_ref().unchecked_ref())?;
    }

    // Stops the chain and breaks the closure's self-reference.
    with_teardown(move |t| {
        t.defer(move || {
            RUNNING.with(|r| r.set(false));
            cb.borrow_mut().take();
        })
    });
    Ok(())
}

fn on_frame(now_ms: f64) {
    let Some(frame) = with_state(|s| {
        let dt_s = match s.last_now_ms {
            // Clamp pathological gaps (background tab) to keep springs sane.
            Some(prev) => ((now_ms - prev) / 1000.0).clamp(0.0, 0.25),
            None => 0.0,
        };
        s.last_now_ms = Some(now_ms);
        s.frame = s.frame.advance(dt_s);
        s.frame
    }) else {
        return;
    };

    SCHEDULER.with(|sched| {
        BUS.with(|bus| {
            sched.borrow_mut().run_frame(frame, &mut bus.borrow_mut());
        })
    });
}

fn viewport_rect() -> Option<Rect> {
    let window = dom::window().ok()?;
    let x = window.scroll_x().ok()?;
    let y = window.scroll_y().ok()?;
    let w = window.inner_width().ok()?.as_f64()?;
    let h = window.inner_height().ok()?.as_f64()?;
    Some(Rect::from_origin_size(Vec2::new(x, y), w, h))
}

/// Document-space bounds of a node at the current scroll position.
fn document_bounds(node: &HtmlElement, scroll: Vec2) -> Rect {
    let rect = node.get_bounding_client_rect();
    Rect::from_origin_size(
        Vec2::new(rect.left() + scroll.x, rect.top() + scroll.y),
        rect.width(),
        rect.height(),
    )
}

pub(crate) fn apply_entrance_style(node: &HtmlElement, sample: &motion::style::StyleSample) {
    let style = node.style();
    let _ = style.set_property("opacity", &styles::opacity_value(sample));
    let _ = style.set_property("transform", &styles::transform_value(sample));
}

fn update_reveals(frame: Frame, bus: &mut EventBus) {
    let Some(viewport) = viewport_rect() else {
        return;
    };
    with_state(|s| {
        // Refresh layout bounds for everything still waiting to trigger.
        for idx in 0..s.world.len() as u32 {
            let element = element_at(idx);
            let Some(reveal) = s.world.reveal(element) else {
                continue;
            };
            if reveal.has_triggered() {
                continue;
            }
            let bounds = document_bounds(&s.nodes[idx as usize], viewport.min);
            s.world
                .set_bounds(element, scene::components::ElementBounds { rect: bounds });
        }

        let fired = s.world.observe_viewport(viewport, frame);
        for element in fired.iter_elements() {
            bus.emit(frame, "reveal", format!("element {}", element.index()));
            s.live.push(element);
        }

        let world = &s.world;
        let nodes = &s.nodes;
        s.live.retain(|&element| {
            let sample = world.style_at(element, frame.time);
            apply_entrance_style(&nodes[element.index() as usize], &sample);
            match world.animation(element) {
                Some(animation) => {
                    let revealed_at = world.reveal(element).and_then(|r| r.revealed_at());
                    !is_finished(&animation.spec, revealed_at, frame.time)
                }
                None => false,
            }
        });
    });
}

fn update_ticker(frame: Frame, bus: &mut EventBus) {
    with_state(|s| {
        let due = s.hero.ticker_timer.advance(frame.dt_s);
        if due == 0 {
            return;
        }
        s.hero.ticker.tick_n(due);
        let offset = s.hero.ticker.offset_px();
        if offset == 0.0 {
            bus.emit(frame, "ticker", "wrapped");
        }
        let _ = s
            .hero
            .ticker_row
            .style()
            .set_property("transform", &styles::ticker_transform(offset));
    });
}

fn update_counters(frame: Frame, bus: &mut EventBus) {
    let Some(viewport) = viewport_rect() else {
        return;
    };
    with_state(|s| {
        for binding in &mut s.insights.counters {
            if !binding.gate.is_visible() {
                let bounds = document_bounds(&binding.node, viewport.min);
                if binding.gate.update(viewport, bounds) {
                    binding.spring.start();
                    bus.emit(frame, "counter", binding.format.format(binding.spring.target()));
                }
            }
            if !binding.spring.started() || binding.spring.is_settled() {
                continue;
            }
            binding.spring.step(frame.dt_s);
            binding
                .node
                .set_text_content(Some(&binding.format.format(binding.spring.value())));
        }
    });
}

fn update_hero_ambient(frame: Frame, _bus: &mut EventBus) {
    with_state(|s| {
        if s.config.reduced_motion {
            return;
        }
        let t = frame.time.0;

        for floating in &s.hero.floating {
            let local = t - floating.delay_s;
            // Rest at the baseline until this indicator's slot begins.
            let wave = if local <= 0.0 {
                0.0
            } else {
                let phase = (local / floating.duration_s).fract();
                0.5 - 0.5 * (std::f64::consts::TAU * phase).cos()
            };
            let style = floating.node.style();
            let _ = style.set_property("opacity", &format!("{:.3}", 0.3 + 0.2 * wave));
            let _ = style.set_property(
                "transform",
                &format!("translateY({:.2}px) scale({:.4})", -30.0 * wave, 0.9 + 0.1 * wave),
            );
        }

        // Two-second bounce on the scroll cue.
        let phase = (t / 2.0).fract();
        let bounce = 10.0 * (0.5 - 0.5 * (std::f64::consts::TAU * phase).cos());
        let _ = s
            .hero
            .scroll_cue
            .style()
            .set_property("transform", &format!("translateY({bounce:.2}px)"));
    });
}

fn update_map(_frame: Frame, _bus: &mut EventBus) {
    with_state(|s| {
        if !s.presence.needs_redraw {
            return;
        }
        map_view::redraw(&s.presence);
        s.presence.needs_redraw = false;
    });
}

/// Shared hover entry point for list items and map markers.
pub(crate) fn on_region_enter(name: &str) {
    with_state(|s| {
        if s.presence.hover.enter(name) {
            compose::restyle_region_list(&s.presence);
            s.presence.needs_redraw = true;
        }
    });
}

pub(crate) fn on_region_leave(name: &str) {
    with_state(|s| {
        if s.presence.hover.leave(name) {
            compose::restyle_region_list(&s.presence);
            s.presence.needs_redraw = true;
        }
    });
}

pub(crate) fn on_region_clear() {
    with_state(|s| {
        if s.presence.hover.active_key().is_some() {
            s.presence.hover.clear();
            compose::restyle_region_list(&s.presence);
            s.presence.needs_redraw = true;
        }
    });
}

/// Scrolls the section registered under `anchor` into view.
pub(crate) fn scroll_to_anchor(anchor: &str) {
    with_state(|s| {
        let Some(element) = s.world.element_by_anchor(anchor) else {
            return;
        };
        let node = &s.nodes[element.index() as usize];
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        node.scroll_into_view_with_scroll_into_view_options(&options);
    });
}

/// Demotes the presence section to the vector fallback. Called when tile
/// fetch or init fails; the fallback is already renderable so there is no
/// user-visible error.
pub(crate) fn demote_to_vector(reason: &str) {
    dom::log(&format!("tile map unavailable, using fallback: {reason}"));
    with_state(|s| {
        s.presence.backend = MapBackend::Vector;
        s.presence.tiles_ready = false;
        s.presence.tiles.clear();
        s.presence.needs_redraw = true;
        emit(s.frame, "map", "fallback to vector");
    });
}

/// Navbar restyle once the page scrolls past 50px.
pub(crate) fn on_window_scroll() {
    let Ok(window) = dom::window() else {
        return;
    };
    let y = window.scroll_y().unwrap_or(0.0);
    with_state(|s| {
        let scrolled = y > 50.0;
        if scrolled == s.nav.scrolled {
            return;
        }
        s.nav.scrolled = scrolled;
        let _ = s
            .nav
            .bar
            .set_attribute("data-scrolled", if scrolled { "true" } else { "false" });
        dom::set_style(
            &s.nav.bar,
            "background-color",
            if scrolled {
                "rgba(8, 15, 26, 0.95)"
            } else {
                "transparent"
            },
        );
        dom::set_style(
            &s.nav.bar,
            "border-bottom",
            if scrolled {
                "1px solid #1e293b"
            } else {
                "1px solid transparent"
            },
        );
    });
}

/// Hero grid parallax; `x`/`y` are the precomputed pixel offsets.
pub(crate) fn on_pointer_parallax(x: f64, y: f64) {
    with_state(|s| {
        if s.config.reduced_motion {
            return;
        }
        dom::set_style(&s.hero.grid, "transform", &styles::parallax_transform(x, y));
    });
}

/// Pointer moved over the map canvas; hit-tests markers and syncs the
/// shared hover selection.
pub(crate) fn on_canvas_pointer(pos: Vec2) {
    with_state(|s| {
        match map_view::region_under_pointer(&s.presence, pos) {
            Some(name) => {
                if s.presence.hover.enter(name.as_str()) {
                    compose::restyle_region_list(&s.presence);
                    s.presence.needs_redraw = true;
                }
            }
            None => {
                if s.presence.hover.active_key().is_some() {
                    s.presence.hover.clear();
                    compose::restyle_region_list(&s.presence);
                    s.presence.needs_redraw = true;
                }
            }
        }
    });
}

pub(crate) fn set_strategy_tab(tab: StrategyTab) {
    with_state(|s| {
        if s.strategy.tab == tab {
            return;
        }
        s.strategy.tab = tab;

        let copy = match tab {
            StrategyTab::Long => &s.strategy.long_copy,
            StrategyTab::Short => &s.strategy.short_copy,
        };
        s.strategy.panel_title.set_text_content(Some(&copy.title));
        s.strategy
            .panel_description
            .set_text_content(Some(&copy.description));
        s.strategy.panel_focus.set_text_content(Some(&copy.focus));

        let (on, off) = match tab {
            StrategyTab::Long => (&s.strategy.long_button, &s.strategy.short_button),
            StrategyTab::Short => (&s.strategy.short_button, &s.strategy.long_button),
        };
        let _ = on.set_attribute("data-active", "true");
        let _ = off.set_attribute("data-active", "false");
        dom::set_style(on, "border-bottom", "2px solid #0ea5e9");
        dom::set_style(on, "color", "#f8fafc");
        dom::set_style(off, "border-bottom", "2px solid transparent");
        dom::set_style(off, "color", "#94a3b8");
    });
}

pub(crate) fn set_card_flipped(index: usize, flipped: bool) {
    with_state(|s| {
        let Some(card) = s.team.cards.get(index) else {
            return;
        };
        if flipped {
            s.team.flipped = Some(index);
            dom::set_style(card, "transform", "rotateY(180deg)");
        } else if s.team.flipped == Some(index) {
            s.team.flipped = None;
            dom::set_style(card, "transform", "rotateY(0deg)");
        }
    });
}

pub(crate) fn toggle_mobile_menu() {
    with_state(|s| {
        s.nav.menu_open = !s.nav.menu_open;
        apply_menu_state(&s.nav);
    });
}

pub(crate) fn close_mobile_menu() {
    with_state(|s| {
        if s.nav.menu_open {
            s.nav.menu_open = false;
            apply_menu_state(&s.nav);
        }
    });
}

fn apply_menu_state(nav: &NavState) {
    let _ = nav
        .mobile_menu
        .set_attribute("data-open", if nav.menu_open { "true" } else { "false" });
    dom::set_style(
        &nav.mobile_menu,
        "display",
        if nav.menu_open { "block" } else { "none" },
    );
}
