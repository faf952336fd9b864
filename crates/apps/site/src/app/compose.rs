//! Builds the fixed navigation and the eight sections, registering every
//! animated element with the page world as it goes.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlElement};

use content::copy;
use foundation::geometry::Vec2;
use map::backend::select_backend;
use motion::player::AnimationSpec;
use motion::spring::{CounterFormat, SpringCounter};
use motion::ticker::Ticker;
use runtime::{Frame, IntervalTimer};
use scene::PageWorld;
use scene::components::{AnchorId, RevealAnimation, RevealTarget};
use scene::hover::HoverSelection;
use scene::viewport::ViewportObserver;

use super::{
    CounterBinding, FloatingEl, HeroState, InsightsState, NavState, PresenceState, SiteState,
    StrategyState, StrategyTab, TeamState, dom,
};
use crate::{SiteConfig, chart, presets, styles};

/// Accumulates the page world and the DOM node per element while sections
/// are built.
struct Composer {
    world: PageWorld,
    nodes: Vec<HtmlElement>,
}

impl Composer {
    fn new() -> Self {
        Self {
            world: PageWorld::new(),
            nodes: Vec::new(),
        }
    }

    /// Registers `node` for a one-shot entrance animation and applies its
    /// initial style.
    fn animated(&mut self, node: &HtmlElement, spec: AnimationSpec, margin_px: f64) {
        let element = self.world.spawn();
        self.nodes.push(node.clone());
        self.world.set_reveal(element, RevealTarget::new(margin_px));
        self.world.set_animation(element, RevealAnimation::new(spec));
        super::apply_entrance_style(node, &spec.from);
    }

    /// Registers `node` as a navigation anchor target.
    fn anchored(&mut self, node: &HtmlElement, anchor: &str) {
        let element = self.world.spawn();
        self.nodes.push(node.clone());
        self.world.set_anchor(element, AnchorId::new(anchor));
    }
}

pub(crate) fn compose_page(
    document: &Document,
    body: &HtmlElement,
    config: &SiteConfig,
) -> Result<SiteState, JsValue> {
    let mut composer = Composer::new();

    let root = dom::el(document, "div", "site-root")?;
    root.set_id("site-root");

    let nav = build_nav(document, &root, &mut composer)?;

    let main = dom::el(document, "main", "site-main")?;
    root.append_child(&main)?;

    let hero = build_hero(document, &main, &mut composer)?;
    build_about(document, &main, &mut composer)?;
    build_edge(document, &main, &mut composer)?;
    let strategy = build_strategy(document, &main, &mut composer)?;
    let presence = build_presence(document, &main, &mut composer, config)?;
    let team = build_team(document, &main, &mut composer)?;
    let insights = build_insights(document, &main, &mut composer)?;
    build_contact_footer(document, &main, &mut composer)?;

    body.append_child(&root)?;

    // Page-wide listeners: navbar restyle and hero parallax.
    let window = dom::window()?;
    dom::listen(&window, "scroll", move |_| super::on_window_scroll())?;
    dom::listen(&window, "mousemove", move |e| {
        let Some(pointer) = e.dyn_ref::<web_sys::MouseEvent>() else {
            return;
        };
        let Ok(window) = dom::window() else {
            return;
        };
        let w = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(1.0)
            .max(1.0);
        let h = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(1.0)
            .max(1.0);
        let x = (f64::from(pointer.client_x()) / w - 0.5) * 20.0;
        let y = (f64::from(pointer.client_y()) / h - 0.5) * 20.0;
        super::on_pointer_parallax(x, y);
    })?;

    Ok(SiteState {
        config: config.clone(),
        world: composer.world,
        frame: Frame::first(),
        last_now_ms: None,
        nodes: composer.nodes,
        live: Vec::new(),
        nav,
        hero,
        strategy,
        presence,
        team,
        insights,
        root,
    })
}

/// Wires a click that smooth-scrolls to `anchor` (and closes the mobile
/// menu, which is a no-op when it is already closed).
fn nav_click(node: &HtmlElement, anchor: String) -> Result<(), JsValue> {
    dom::listen(node, "click", move |e| {
        e.prevent_default();
        super::close_mobile_menu();
        super::scroll_to_anchor(&anchor);
    })
}

fn build_nav(
    document: &Document,
    parent: &HtmlElement,
    composer: &mut Composer,
) -> Result<NavState, JsValue> {
    let bar = dom::el(document, "nav", "site-nav")?;
    let _ = bar.set_attribute("data-scrolled", "false");
    dom::set_style(&bar, "position", "fixed");
    dom::set_style(&bar, "top", "0");
    dom::set_style(&bar, "left", "0");
    dom::set_style(&bar, "right", "0");
    dom::set_style(&bar, "z-index", "50");
    dom::set_style(&bar, "background-color", "transparent");
    dom::set_style(&bar, "border-bottom", "1px solid transparent");
    dom::set_style(&bar, "transition", "background-color 300ms, border-color 300ms");

    let inner = dom::el(document, "div", "nav-inner")?;
    bar.append_child(&inner)?;

    let brand = dom::text_el(document, "a", "nav-brand", "ARM CAPITAL")?;
    let _ = brand.set_attribute("href", "/");
    inner.append_child(&brand)?;

    let links = dom::el(document, "div", "nav-links")?;
    inner.append_child(&links)?;
    for item in copy::nav_items() {
        let link = dom::text_el(document, "a", "nav-link", &item.label)?;
        let _ = link.set_attribute("href", &format!("#{}", item.anchor));
        nav_click(&link, item.anchor.clone())?;
        links.append_child(&link)?;
    }

    let menu_button = dom::el(document, "button", "nav-menu-button")?;
    let _ = menu_button.set_attribute("aria-label", "Toggle menu");
    for _ in 0..3 {
        let line = dom::el(document, "span", "nav-menu-line")?;
        menu_button.append_child(&line)?;
    }
    dom::listen(&menu_button, "click", move |_| super::toggle_mobile_menu())?;
    inner.append_child(&menu_button)?;

    let mobile_menu = dom::el(document, "div", "nav-mobile-menu")?;
    let _ = mobile_menu.set_attribute("data-open", "false");
    dom::set_style(&mobile_menu, "display", "none");
    for item in copy::nav_items() {
        let link = dom::text_el(document, "a", "nav-mobile-link", &item.label)?;
        let _ = link.set_attribute("href", &format!("#{}", item.anchor));
        nav_click(&link, item.anchor.clone())?;
        mobile_menu.append_child(&link)?;
    }
    bar.append_child(&mobile_menu)?;

    composer.animated(&bar, presets::nav_bar(), 0.0);
    parent.append_child(&bar)?;

    Ok(NavState {
        bar,
        scrolled: false,
        mobile_menu,
        menu_open: false,
    })
}

fn build_hero(
    document: &Document,
    parent: &HtmlElement,
    composer: &mut Composer,
) -> Result<HeroState, JsValue> {
    let data = copy::hero();

    let section = dom::el(document, "section", "hero section")?;
    parent.append_child(&section)?;

    // Parallax grid layer; the 300ms transition smooths pointer updates.
    let grid = dom::el(document, "div", "hero-grid")?;
    dom::set_style(&grid, "transition", "transform 0.3s ease-out");
    section.append_child(&grid)?;

    // Background chart.
    let chart_wrap = dom::el(document, "div", "hero-chart")?;
    dom::set_style(&chart_wrap, "opacity", "0.25");
    let svg = dom::svg_el(document, "svg")?;
    svg.set_attribute("viewBox", "0 0 1000 600")?;
    svg.set_attribute("preserveAspectRatio", "none")?;

    let area = dom::svg_el(document, "path")?;
    area.set_attribute("d", &chart::area_path(&data.chart_points, 1000.0, 600.0))?;
    area.set_attribute("fill", "rgba(14, 165, 233, 0.08)")?;
    svg.append_child(&area)?;

    let line = dom::svg_el(document, "path")?;
    line.set_attribute("d", &chart::line_path(&data.chart_points))?;
    line.set_attribute("fill", "none")?;
    line.set_attribute("stroke", "rgba(14, 165, 233, 0.45)")?;
    line.set_attribute("stroke-width", "3")?;
    svg.append_child(&line)?;

    for [x, y] in &data.chart_points {
        let dot = dom::svg_el(document, "circle")?;
        dot.set_attribute("cx", &x.to_string())?;
        dot.set_attribute("cy", &y.to_string())?;
        dot.set_attribute("r", "4")?;
        dot.set_attribute("fill", "#0ea5e9")?;
        dot.set_attribute("opacity", "0.6")?;
        svg.append_child(&dot)?;
    }
    chart_wrap.append_child(&svg)?;
    section.append_child(&chart_wrap)?;

    // Floating financial indicators, cycled by the ambient job.
    let mut floating = Vec::new();
    for (i, value) in data.floating_values.iter().enumerate() {
        let node = dom::text_el(document, "div", "hero-indicator", &value.text)?;
        dom::set_style(&node, "position", "absolute");
        dom::set_style(&node, "left", &format!("{}%", value.x_pct));
        dom::set_style(&node, "top", &format!("{}%", value.y_pct));
        dom::set_style(&node, "opacity", "0.3");
        section.append_child(&node)?;
        floating.push(FloatingEl {
            node,
            duration_s: 6.0 + i as f64 * 0.5,
            delay_s: i as f64 * 0.8,
        });
    }

    // Headline block.
    let container = dom::el(document, "div", "hero-content")?;
    let headline = dom::text_el(document, "h1", "hero-headline", &data.headline)?;
    composer.animated(&headline, presets::hero_headline(), 0.0);
    container.append_child(&headline)?;

    let kicker = dom::text_el(document, "div", "hero-kicker", &data.kicker)?;
    composer.animated(&kicker, presets::hero_kicker(), 0.0);
    container.append_child(&kicker)?;

    let pillars = dom::el(document, "div", "hero-pillars")?;
    for (i, pillar) in data.pillars.iter().enumerate() {
        let boxed = dom::el(document, "div", "hero-pillar")?;
        let label = dom::text_el(document, "span", "hero-pillar-label", pillar)?;
        boxed.append_child(&label)?;
        composer.animated(&boxed, presets::hero_pillar(i), 0.0);
        pillars.append_child(&boxed)?;
    }
    container.append_child(&pillars)?;

    let cta_wrap = dom::el(document, "div", "hero-cta-wrap")?;
    let cta = dom::text_el(document, "a", "hero-cta", &format!("{} \u{2192}", data.cta.label))?;
    let _ = cta.set_attribute("href", &format!("#{}", data.cta.anchor));
    nav_click(&cta, data.cta.anchor.clone())?;
    cta_wrap.append_child(&cta)?;
    composer.animated(&cta_wrap, presets::hero_cta(), 0.0);
    container.append_child(&cta_wrap)?;

    composer.animated(&container, presets::hero_container(), 0.0);
    section.append_child(&container)?;

    // Scroll cue, bounced by the ambient job.
    let scroll_cue = dom::el(document, "div", "hero-scroll-cue")?;
    let cue_dot = dom::el(document, "div", "hero-scroll-dot")?;
    scroll_cue.append_child(&cue_dot)?;
    section.append_child(&scroll_cue)?;

    // Ticker strip: content rendered twice so the wrap is seamless.
    let ticker_strip = dom::el(document, "div", "hero-ticker")?;
    dom::set_style(&ticker_strip, "overflow", "hidden");
    let ticker_row = dom::el(document, "div", "hero-ticker-row")?;
    dom::set_style(&ticker_row, "width", "max-content");
    dom::set_style(&ticker_row, "will-change", "transform");
    for symbol in data.ticker.iter().chain(data.ticker.iter()) {
        let cell = dom::el(document, "div", "ticker-cell")?;
        dom::set_style(&cell, "width", &format!("{}px", copy::TICKER_ITEM_WIDTH_PX));

        let name = dom::text_el(document, "span", "ticker-symbol", &symbol.symbol)?;
        cell.append_child(&name)?;
        let price = dom::text_el(
            document,
            "span",
            "ticker-price",
            &format!("${:.2}", symbol.price),
        )?;
        cell.append_child(&price)?;

        let change = dom::text_el(
            document,
            "span",
            "ticker-change",
            &styles::signed_pct(symbol.change_pct),
        )?;
        let up = symbol.change_pct >= 0.0;
        let _ = change.set_attribute("data-direction", if up { "up" } else { "down" });
        dom::set_style(&change, "color", if up { "#4ade80" } else { "#f87171" });
        cell.append_child(&change)?;

        ticker_row.append_child(&cell)?;
    }
    ticker_strip.append_child(&ticker_row)?;
    section.append_child(&ticker_strip)?;

    let total_width = data.ticker.len() as f64 * copy::TICKER_ITEM_WIDTH_PX;
    Ok(HeroState {
        grid,
        ticker_row,
        ticker: Ticker::new(total_width, copy::TICKER_STEP_PX),
        ticker_timer: IntervalTimer::from_period_ms(copy::TICKER_TICK_MS),
        floating,
        scroll_cue,
    })
}

/// Section skeleton: outer `<section id=...>` registered as an anchor
/// target, with an animated header block.
fn section_with_header(
    document: &Document,
    parent: &HtmlElement,
    composer: &mut Composer,
    anchor: &str,
    title: &str,
    subtitle: Option<&str>,
) -> Result<HtmlElement, JsValue> {
    let section = dom::el(document, "section", "section")?;
    section.set_id(anchor);
    composer.anchored(&section, anchor);
    parent.append_child(&section)?;

    let header = dom::el(document, "div", "section-header")?;
    let h2 = dom::text_el(document, "h2", "section-title", title)?;
    header.append_child(&h2)?;
    if let Some(subtitle) = subtitle {
        let p = dom::text_el(document, "p", "section-subtitle", subtitle)?;
        header.append_child(&p)?;
    }
    composer.animated(&header, presets::header(), presets::SECTION_MARGIN_PX);
    section.append_child(&header)?;

    Ok(section)
}

fn footnote(
    document: &Document,
    parent: &HtmlElement,
    composer: &mut Composer,
    text: &str,
    delay_ms: f64,
) -> Result<(), JsValue> {
    let note = dom::text_el(document, "p", "section-footnote", text)?;
    dom::set_style(&note, "font-style", "italic");
    composer.animated(&note, presets::footnote(delay_ms), presets::SECTION_MARGIN_PX);
    parent.append_child(&note)?;
    Ok(())
}

fn build_about(
    document: &Document,
    parent: &HtmlElement,
    composer: &mut Composer,
) -> Result<(), JsValue> {
    let section = section_with_header(document, parent, composer, "about", "About Us", None)?;

    let blocks = dom::el(document, "div", "about-blocks")?;
    for (i, block) in copy::about_blocks().iter().enumerate() {
        let wrap = dom::el(document, "div", "about-block")?;
        let h3 = dom::text_el(document, "h3", "about-block-title", &block.title)?;
        wrap.append_child(&h3)?;
        let p = dom::text_el(document, "p", "about-block-body", &block.body)?;
        wrap.append_child(&p)?;
        composer.animated(&wrap, presets::block(i), presets::SECTION_MARGIN_PX);
        blocks.append_child(&wrap)?;
    }
    section.append_child(&blocks)?;
    Ok(())
}

fn build_edge(
    document: &Document,
    parent: &HtmlElement,
    composer: &mut Composer,
) -> Result<(), JsValue> {
    let section = section_with_header(
        document,
        parent,
        composer,
        "edge",
        "Our Edge",
        Some("Three pillars that drive our investment process and differentiate our approach"),
    )?;

    let grid = dom::el(document, "div", "edge-grid")?;
    for (i, pillar) in copy::edge_pillars().iter().enumerate() {
        let card = dom::el(document, "div", "edge-card")?;
        let _ = card.set_attribute("data-pillar", &pillar.key);

        let icon = dom::el(document, "div", "edge-icon")?;
        card.append_child(&icon)?;
        let h3 = dom::text_el(document, "h3", "edge-title", &pillar.title)?;
        card.append_child(&h3)?;
        let sub = dom::text_el(document, "p", "edge-subtitle", &pillar.subtitle)?;
        card.append_child(&sub)?;
        let desc = dom::text_el(document, "p", "edge-description", &pillar.description)?;
        card.append_child(&desc)?;

        let list = dom::el(document, "ul", "edge-points")?;
        for point in &pillar.points {
            let li = dom::text_el(document, "li", "edge-point", point)?;
            list.append_child(&li)?;
        }
        card.append_child(&list)?;

        composer.animated(&card, presets::card(i), presets::SECTION_MARGIN_PX);
        grid.append_child(&card)?;
    }
    section.append_child(&grid)?;
    Ok(())
}

fn build_strategy(
    document: &Document,
    parent: &HtmlElement,
    composer: &mut Composer,
) -> Result<StrategyState, JsValue> {
    let data = copy::strategy();
    let section = section_with_header(
        document,
        parent,
        composer,
        "strategy",
        "Investment Strategy",
        Some("A disciplined, fundamental approach to global equity investing"),
    )?;

    let cards = dom::el(document, "div", "strategy-cards")?;
    for card in &data.cards {
        let node = dom::el(document, "div", "strategy-card")?;
        let h3 = dom::text_el(document, "h3", "strategy-card-title", &card.title)?;
        node.append_child(&h3)?;
        let p = dom::text_el(document, "p", "strategy-card-body", &card.body)?;
        node.append_child(&p)?;
        cards.append_child(&node)?;
    }
    composer.animated(&cards, presets::block(0), presets::SECTION_MARGIN_PX);
    section.append_child(&cards)?;

    // Long/short framework tab switcher.
    let tabs_wrap = dom::el(document, "div", "strategy-tabs")?;
    let tab_row = dom::el(document, "div", "strategy-tab-row")?;

    let long_button = dom::text_el(document, "button", "strategy-tab", "Long Framework")?;
    let _ = long_button.set_attribute("data-active", "true");
    dom::set_style(&long_button, "border-bottom", "2px solid #0ea5e9");
    dom::set_style(&long_button, "color", "#f8fafc");
    dom::listen(&long_button, "click", move |_| {
        super::set_strategy_tab(StrategyTab::Long)
    })?;
    tab_row.append_child(&long_button)?;

    let short_button = dom::text_el(document, "button", "strategy-tab", "Short Framework")?;
    let _ = short_button.set_attribute("data-active", "false");
    dom::set_style(&short_button, "border-bottom", "2px solid transparent");
    dom::set_style(&short_button, "color", "#94a3b8");
    dom::listen(&short_button, "click", move |_| {
        super::set_strategy_tab(StrategyTab::Short)
    })?;
    tab_row.append_child(&short_button)?;
    tabs_wrap.append_child(&tab_row)?;

    let panel = dom::el(document, "div", "strategy-panel")?;
    let panel_title = dom::text_el(document, "h3", "strategy-panel-title", &data.long.title)?;
    panel.append_child(&panel_title)?;
    let panel_description = dom::text_el(
        document,
        "p",
        "strategy-panel-description",
        &data.long.description,
    )?;
    panel.append_child(&panel_description)?;
    let panel_focus = dom::text_el(document, "p", "strategy-panel-focus", &data.long.focus)?;
    dom::set_style(&panel_focus, "font-style", "italic");
    panel.append_child(&panel_focus)?;
    tabs_wrap.append_child(&panel)?;

    composer.animated(&tabs_wrap, presets::block(1), presets::SECTION_MARGIN_PX);
    section.append_child(&tabs_wrap)?;

    let sectors = dom::el(document, "div", "strategy-sectors")?;
    for sector in &data.sectors {
        let chip = dom::text_el(document, "div", "strategy-sector", sector)?;
        sectors.append_child(&chip)?;
    }
    composer.animated(&sectors, presets::block(2), presets::SECTION_MARGIN_PX);
    section.append_child(&sectors)?;

    Ok(StrategyState {
        tab: StrategyTab::Long,
        long_button,
        short_button,
        panel_title,
        panel_description,
        panel_focus,
        long_copy: data.long,
        short_copy: data.short,
    })
}

fn build_presence(
    document: &Document,
    parent: &HtmlElement,
    composer: &mut Composer,
    config: &SiteConfig,
) -> Result<PresenceState, JsValue> {
    let regions = copy::regions();
    // Unique names are the join key between markers and list entries.
    map::validate_regions(&regions).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let section = section_with_header(
        document,
        parent,
        composer,
        "presence",
        "Global Presence",
        Some("Research footprint and regional exposure across global equity markets"),
    )?;

    let grid = dom::el(document, "div", "presence-grid")?;

    // Map panel.
    let map_panel = dom::el(document, "div", "presence-map")?;
    let canvas: web_sys::HtmlCanvasElement = document
        .create_element("canvas")?
        .dyn_into()
        .map_err(|_| JsValue::from_str("canvas creation failed"))?;
    canvas.set_width(800);
    canvas.set_height(500);
    dom::set_style(&canvas, "width", "100%");
    dom::set_style(&canvas, "height", "100%");
    map_panel.append_child(&canvas)?;

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into()
        .map_err(|_| JsValue::from_str("2d context has unexpected type"))?;

    let canvas_for_move = canvas.clone();
    dom::listen(&canvas, "pointermove", move |e| {
        let Some(pointer) = e.dyn_ref::<web_sys::MouseEvent>() else {
            return;
        };
        let rect = canvas_for_move.get_bounding_client_rect();
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return;
        }
        let sx = f64::from(canvas_for_move.width()) / rect.width();
        let sy = f64::from(canvas_for_move.height()) / rect.height();
        let pos = Vec2::new(
            (f64::from(pointer.client_x()) - rect.left()) * sx,
            (f64::from(pointer.client_y()) - rect.top()) * sy,
        );
        super::on_canvas_pointer(pos);
    })?;
    dom::listen(&canvas, "pointerleave", move |_| super::on_region_clear())?;

    composer.animated(&map_panel, presets::map_panel(), presets::SECTION_MARGIN_PX);
    grid.append_child(&map_panel)?;

    // Region details column, one entry per region in list order.
    let details = dom::el(document, "div", "presence-details")?;
    let mut list_items = Vec::new();
    for (i, region) in regions.iter().enumerate() {
        let item = dom::el(document, "div", "region-item")?;
        let _ = item.set_attribute("data-region", &region.name);
        let _ = item.set_attribute("data-active", "false");
        dom::set_style(&item, "cursor", "pointer");
        dom::set_style(&item, "border", "1px solid #1e293b");
        dom::set_style(&item, "background-color", "rgba(15, 23, 42, 0.5)");

        let pin = dom::el(document, "div", "region-pin")?;
        item.append_child(&pin)?;
        let h3 = dom::text_el(document, "h3", "region-name", &region.name)?;
        item.append_child(&h3)?;
        let p = dom::text_el(document, "p", "region-description", &region.description)?;
        item.append_child(&p)?;

        let name = region.name.clone();
        dom::listen(&item, "pointerenter", move |_| {
            super::on_region_enter(&name)
        })?;
        let name = region.name.clone();
        dom::listen(&item, "pointerleave", move |_| {
            super::on_region_leave(&name)
        })?;

        composer.animated(&item, presets::region_item(i), presets::SECTION_MARGIN_PX);
        details.append_child(&item)?;
        list_items.push(item);
    }
    composer.animated(&details, presets::details_panel(), presets::SECTION_MARGIN_PX);
    grid.append_child(&details)?;
    section.append_child(&grid)?;

    footnote(
        document,
        &section,
        composer,
        "Geographic exposure may vary based on market conditions and opportunity set. For \
         illustrative purposes only.",
        800.0,
    )?;

    Ok(PresenceState {
        hover: HoverSelection::new(),
        backend: select_backend(&config.map_config()),
        canvas,
        ctx,
        regions,
        list_items,
        tiles: Vec::new(),
        tiles_ready: false,
        needs_redraw: true,
    })
}

/// Syncs details-entry highlighting with the shared hover selection.
pub(crate) fn restyle_region_list(presence: &PresenceState) {
    for (item, region) in presence.list_items.iter().zip(&presence.regions) {
        let active = presence.hover.is_active(&region.name);
        let _ = item.set_attribute("data-active", if active { "true" } else { "false" });
        dom::set_style(
            item,
            "border",
            if active {
                "1px solid #334155"
            } else {
                "1px solid #1e293b"
            },
        );
        dom::set_style(
            item,
            "background-color",
            if active {
                "rgba(15, 23, 42, 0.7)"
            } else {
                "rgba(15, 23, 42, 0.5)"
            },
        );
    }
}

fn build_team(
    document: &Document,
    parent: &HtmlElement,
    composer: &mut Composer,
) -> Result<TeamState, JsValue> {
    let members = copy::team_members();
    let section = section_with_header(
        document,
        parent,
        composer,
        "team",
        "Team",
        Some("Experienced investment professionals with deep expertise in global equity markets"),
    )?;

    let grid = dom::el(document, "div", "team-grid")?;
    let mut cards = Vec::new();
    for (i, member) in members.iter().enumerate() {
        let outer = dom::el(document, "div", "team-card")?;
        dom::set_style(&outer, "perspective", "1000px");
        dom::set_style(&outer, "position", "relative");
        dom::set_style(&outer, "height", "600px");

        let inner = dom::el(document, "div", "team-card-inner")?;
        dom::set_style(&inner, "position", "relative");
        dom::set_style(&inner, "width", "100%");
        dom::set_style(&inner, "height", "100%");
        dom::set_style(&inner, "transform-style", "preserve-3d");
        dom::set_style(&inner, "transition", "transform 0.7s");

        // Front: profile, experience, track record.
        let front = dom::el(document, "div", "team-card-front")?;
        dom::set_style(&front, "position", "absolute");
        dom::set_style(&front, "inset", "0");
        dom::set_style(&front, "backface-visibility", "hidden");

        let avatar = dom::el(document, "div", "team-avatar")?;
        let image: web_sys::HtmlImageElement = document
            .create_element("img")?
            .dyn_into()
            .map_err(|_| JsValue::from_str("img creation failed"))?;
        image.set_src(&member.image);
        image.set_alt(&member.name);
        avatar.append_child(&image)?;

        let placeholder = dom::text_el(
            document,
            "div",
            "team-avatar-fallback",
            &content::initials(&member.name),
        )?;
        dom::set_style(&placeholder, "display", "none");
        avatar.append_child(&placeholder)?;

        // Failed load: swap to the deterministic initials placeholder.
        let image_for_error = image.clone();
        let placeholder_for_error = placeholder.clone();
        dom::listen(&image, "error", move |_| {
            dom::set_style(&image_for_error, "display", "none");
            dom::set_style(&placeholder_for_error, "display", "flex");
            super::with_state(|s| super::emit(s.frame, "image", "fallback to initials"));
        })?;
        front.append_child(&avatar)?;

        let h3 = dom::text_el(document, "h3", "team-name", &member.name)?;
        front.append_child(&h3)?;
        let role = dom::text_el(document, "p", "team-role", &member.role)?;
        front.append_child(&role)?;

        let exp_label = dom::text_el(document, "h4", "team-label", "Experience")?;
        front.append_child(&exp_label)?;
        let exp = dom::text_el(document, "p", "team-experience", &member.experience)?;
        front.append_child(&exp)?;

        let track_label = dom::text_el(document, "h4", "team-label", &member.stats.label)?;
        front.append_child(&track_label)?;
        let track_value = dom::text_el(document, "p", "team-track-value", &member.stats.value)?;
        front.append_child(&track_value)?;
        let track_detail = dom::text_el(document, "p", "team-track-detail", &member.stats.detail)?;
        front.append_child(&track_detail)?;

        let hint = dom::text_el(document, "p", "team-hint", "Hover to view education")?;
        front.append_child(&hint)?;
        inner.append_child(&front)?;

        // Back: education.
        let back = dom::el(document, "div", "team-card-back")?;
        dom::set_style(&back, "position", "absolute");
        dom::set_style(&back, "inset", "0");
        dom::set_style(&back, "backface-visibility", "hidden");
        dom::set_style(&back, "transform", "rotateY(180deg)");

        let back_name = dom::text_el(document, "h3", "team-name", &member.name)?;
        back.append_child(&back_name)?;
        let back_label = dom::text_el(document, "p", "team-role", "Education")?;
        back.append_child(&back_label)?;
        let list = dom::el(document, "ul", "team-education")?;
        for entry in &member.education {
            let li = dom::text_el(document, "li", "team-education-entry", entry)?;
            list.append_child(&li)?;
        }
        back.append_child(&list)?;
        inner.append_child(&back)?;

        outer.append_child(&inner)?;

        dom::listen(&outer, "pointerenter", move |_| {
            super::set_card_flipped(i, true)
        })?;
        dom::listen(&outer, "pointerleave", move |_| {
            super::set_card_flipped(i, false)
        })?;

        composer.animated(&outer, presets::card(i), presets::SECTION_MARGIN_PX);
        grid.append_child(&outer)?;
        cards.push(inner);
    }
    section.append_child(&grid)?;

    footnote(
        document,
        &section,
        composer,
        "Combined team experience: 8+ years in financial markets. Track record figures \
         calculated as per trade analytics provided by the broker.",
        600.0,
    )?;

    Ok(TeamState {
        cards,
        flipped: None,
    })
}

fn build_insights(
    document: &Document,
    parent: &HtmlElement,
    composer: &mut Composer,
) -> Result<InsightsState, JsValue> {
    let section = section_with_header(
        document,
        parent,
        composer,
        "insights",
        "Process & Framework",
        Some("Our investment framework emphasizes process, discipline, and risk management"),
    )?;

    let grid = dom::el(document, "div", "insight-grid")?;
    let mut counters = Vec::new();
    for (i, metric) in copy::insight_metrics().iter().enumerate() {
        let tile = dom::el(document, "div", "insight-tile")?;

        let icon = dom::el(document, "div", "insight-icon")?;
        tile.append_child(&icon)?;

        let format = CounterFormat::suffix(metric.suffix.clone());
        let value = dom::text_el(document, "span", "insight-value", &format.format(0.0))?;
        tile.append_child(&value)?;

        let label = dom::text_el(document, "p", "insight-label", &metric.label)?;
        tile.append_child(&label)?;
        let desc = dom::text_el(document, "p", "insight-description", &metric.description)?;
        tile.append_child(&desc)?;

        composer.animated(&tile, presets::metric(i), presets::SECTION_MARGIN_PX);
        grid.append_child(&tile)?;

        counters.push(CounterBinding {
            node: value,
            gate: ViewportObserver::new(presets::COUNTER_MARGIN_PX, true),
            spring: SpringCounter::new(metric.value),
            format,
        });
    }
    section.append_child(&grid)?;

    let process = dom::el(document, "div", "process")?;
    let h3 = dom::text_el(document, "h3", "process-title", "Five-Stage Investment Process")?;
    composer.animated(&h3, presets::block(1), presets::SECTION_MARGIN_PX);
    process.append_child(&h3)?;

    for (i, stage) in copy::process_stages().iter().enumerate() {
        let row = dom::el(document, "div", "process-stage")?;
        let badge = dom::text_el(document, "div", "process-badge", &stage.stage)?;
        row.append_child(&badge)?;
        let body = dom::el(document, "div", "process-body")?;
        let h4 = dom::text_el(document, "h4", "process-stage-title", &stage.title)?;
        body.append_child(&h4)?;
        let p = dom::text_el(document, "p", "process-stage-description", &stage.description)?;
        body.append_child(&p)?;
        row.append_child(&body)?;

        composer.animated(&row, presets::stage(i), presets::SECTION_MARGIN_PX);
        process.append_child(&row)?;
    }
    section.append_child(&process)?;

    footnote(
        document,
        &section,
        composer,
        "There is no guarantee that the fund will achieve profitable outcomes from what is \
         stated above, and the investment approach may evolve over time. No representation is \
         made that this investment approach will yield a particular level of return.",
        1000.0,
    )?;

    Ok(InsightsState { counters })
}

fn build_contact_footer(
    document: &Document,
    parent: &HtmlElement,
    composer: &mut Composer,
) -> Result<(), JsValue> {
    let data = copy::footer();

    let section = section_with_header(
        document,
        parent,
        composer,
        "contact",
        "Request Materials",
        Some(
            "For institutional investors, family offices, and qualified allocators interested in \
             learning more about our investment strategy and process.",
        ),
    )?;

    let cta_wrap = dom::el(document, "div", "contact-cta-wrap")?;
    let cta = dom::text_el(document, "a", "contact-cta", "Contact Investor Relations")?;
    let _ = cta.set_attribute("href", &format!("mailto:{}", data.email));
    cta_wrap.append_child(&cta)?;
    composer.animated(&cta_wrap, presets::block(0), presets::SECTION_MARGIN_PX);
    section.append_child(&cta_wrap)?;

    // Footer is static content; no reveal choreography.
    let footer = dom::el(document, "footer", "site-footer")?;

    let cols = dom::el(document, "div", "footer-columns")?;

    let brand_col = dom::el(document, "div", "footer-col")?;
    let brand = dom::text_el(document, "h3", "footer-brand", &data.firm)?;
    brand_col.append_child(&brand)?;
    let blurb = dom::text_el(document, "p", "footer-blurb", &data.blurb)?;
    brand_col.append_child(&blurb)?;
    cols.append_child(&brand_col)?;

    let info_col = dom::el(document, "div", "footer-col")?;
    let info_title = dom::text_el(document, "h4", "footer-heading", "Information")?;
    info_col.append_child(&info_title)?;
    let info_list = dom::el(document, "ul", "footer-links")?;
    for link in &data.info_links {
        let li = dom::el(document, "li", "")?;
        let a = dom::text_el(document, "a", "footer-link", &link.label)?;
        let _ = a.set_attribute("href", &format!("#{}", link.anchor));
        nav_click(&a, link.anchor.clone())?;
        li.append_child(&a)?;
        info_list.append_child(&li)?;
    }
    info_col.append_child(&info_list)?;
    cols.append_child(&info_col)?;

    let contact_col = dom::el(document, "div", "footer-col")?;
    let contact_title = dom::text_el(document, "h4", "footer-heading", "Contact")?;
    contact_col.append_child(&contact_title)?;
    let location = dom::text_el(document, "p", "footer-location", &data.location)?;
    contact_col.append_child(&location)?;
    let email = dom::text_el(document, "a", "footer-email", &data.email)?;
    let _ = email.set_attribute("href", &format!("mailto:{}", data.email));
    contact_col.append_child(&email)?;
    cols.append_child(&contact_col)?;

    footer.append_child(&cols)?;

    let disclosures = dom::el(document, "div", "footer-disclosures")?;
    let heading = dom::text_el(document, "p", "footer-disclosure-heading", "IMPORTANT DISCLOSURES")?;
    disclosures.append_child(&heading)?;
    for disclosure in &data.disclosures {
        let p = dom::text_el(document, "p", "footer-disclosure", disclosure)?;
        disclosures.append_child(&p)?;
    }
    footer.append_child(&disclosures)?;

    parent.append_child(&footer)?;
    Ok(())
}
