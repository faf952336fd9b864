//! Canvas rendering for the presence map: the vector fallback always, the
//! tile backend once its images have loaded. Both draw the same markers
//! and highlight treatment from the same hover selection.

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::CanvasRenderingContext2d;

use foundation::geometry::Vec2;
use gloo_net::http::Request;
use map::Region;
use map::backend::MapBackend;
use map::symbology::MarkerStyle;
use map::tiles::{TileMapPlan, TileSource};
use map::vector::{MarkerView, TooltipView, VectorMapScene};

use super::{LoadedTile, PresenceState, demote_to_vector, with_state};

/// Tile viewport: the world at a glance, centered between the regions.
pub(crate) const TILE_CENTER: [f64; 2] = [20.0, 30.0];
pub(crate) const TILE_ZOOM: f64 = 1.5;

/// Extra pointer slop around markers for hit-testing.
const MARKER_SLOP_PX: f64 = 4.0;

pub(crate) fn redraw(presence: &PresenceState) {
    let ctx = &presence.ctx;
    let w = f64::from(presence.canvas.width());
    let h = f64::from(presence.canvas.height());
    ctx.clear_rect(0.0, 0.0, w, h);

    match presence.backend {
        MapBackend::Tiles if presence.tiles_ready => draw_tiles(presence, ctx, w, h),
        _ => draw_vector(presence, ctx, w, h),
    }
}

/// Resolves the region marker under a canvas-space pointer position.
pub(crate) fn region_under_pointer(presence: &PresenceState, pos: Vec2) -> Option<String> {
    let w = f64::from(presence.canvas.width());
    let h = f64::from(presence.canvas.height());
    match presence.backend {
        MapBackend::Tiles if presence.tiles_ready => {
            let plan = TileMapPlan::build(
                TILE_CENTER,
                TILE_ZOOM,
                w,
                h,
                &presence.regions,
                presence.hover.active_key(),
            );
            plan.marker_at(pos, MARKER_SLOP_PX).map(str::to_string)
        }
        _ => {
            let scene =
                VectorMapScene::build(&presence.regions, presence.hover.active_key(), w, h);
            scene.marker_at(pos, MARKER_SLOP_PX).map(str::to_string)
        }
    }
}

fn draw_vector(presence: &PresenceState, ctx: &CanvasRenderingContext2d, w: f64, h: f64) {
    let scene = VectorMapScene::build(&presence.regions, presence.hover.active_key(), w, h);

    // Ocean wash.
    ctx.set_global_alpha(0.25);
    ctx.set_fill_style_str("#0a1c2d");
    ctx.fill_rect(0.0, 0.0, w, h);
    ctx.set_global_alpha(1.0);

    for shape in &scene.shapes {
        let style = &scene.shape_style;
        let (fill, stroke) = if shape.highlighted {
            (style.highlighted_fill, style.stroke)
        } else if shape.interactive {
            (style.fill, style.stroke)
        } else {
            (style.inert_fill, style.inert_stroke)
        };

        ctx.begin_path();
        for (i, p) in shape.points.iter().enumerate() {
            if i == 0 {
                ctx.move_to(p.x, p.y);
            } else {
                ctx.line_to(p.x, p.y);
            }
        }
        ctx.close_path();
        ctx.set_fill_style_str(fill);
        ctx.fill();
        ctx.set_stroke_style_str(stroke);
        ctx.set_line_width(style.stroke_width_px);
        ctx.stroke();
    }

    draw_markers(ctx, &scene.markers, &scene.marker_style);
    if let Some(tooltip) = &scene.tooltip {
        draw_tooltip(ctx, tooltip);
    }
}

fn draw_tiles(presence: &PresenceState, ctx: &CanvasRenderingContext2d, w: f64, h: f64) {
    for tile in &presence.tiles {
        let _ = ctx.draw_image_with_html_image_element(&tile.image, tile.screen.x, tile.screen.y);
    }

    let plan = TileMapPlan::build(
        TILE_CENTER,
        TILE_ZOOM,
        w,
        h,
        &presence.regions,
        presence.hover.active_key(),
    );

    for extent in &plan.extents {
        let style = &plan.extent_style;
        let fill = if extent.highlighted {
            style.highlighted_fill
        } else {
            style.fill
        };
        let r = extent.rect;
        ctx.set_fill_style_str(fill);
        ctx.fill_rect(r.min.x, r.min.y, r.width(), r.height());
        ctx.set_stroke_style_str(style.stroke);
        ctx.set_line_width(1.0);
        ctx.stroke_rect(r.min.x, r.min.y, r.width(), r.height());
    }

    draw_markers(ctx, &plan.markers, &plan.marker_style);

    if let Some(active) = presence.hover.active_key()
        && let Some(region) = presence.regions.iter().find(|r| r.name == active)
        && let Some(marker) = plan.markers.iter().find(|m| m.name == active)
    {
        draw_tooltip(
            ctx,
            &TooltipView {
                name: region.name.clone(),
                description: region.description.clone(),
                pos: marker.pos + Vec2::new(15.0, -35.0),
            },
        );
    }
}

fn draw_markers(ctx: &CanvasRenderingContext2d, markers: &[MarkerView], style: &MarkerStyle) {
    for marker in markers {
        if marker.highlighted {
            // Soft halo behind the active marker.
            ctx.begin_path();
            let _ = ctx.arc(
                marker.pos.x,
                marker.pos.y,
                20.0,
                0.0,
                std::f64::consts::TAU,
            );
            ctx.set_fill_style_str("rgba(14, 165, 233, 0.2)");
            ctx.fill();
        }

        ctx.begin_path();
        let _ = ctx.arc(
            marker.pos.x,
            marker.pos.y,
            marker.radius_px,
            0.0,
            std::f64::consts::TAU,
        );
        ctx.set_fill_style_str(if marker.highlighted {
            style.highlighted_fill
        } else {
            style.fill
        });
        ctx.fill();
        ctx.set_stroke_style_str(style.stroke);
        ctx.set_line_width(style.stroke_width_px);
        ctx.stroke();
    }
}

fn draw_tooltip(ctx: &CanvasRenderingContext2d, tooltip: &TooltipView) {
    let x = tooltip.pos.x;
    let y = tooltip.pos.y;

    ctx.set_fill_style_str("rgba(15, 23, 42, 0.98)");
    ctx.fill_rect(x, y, 200.0, 55.0);
    ctx.set_stroke_style_str("#0ea5e9");
    ctx.set_line_width(1.0);
    ctx.stroke_rect(x, y, 200.0, 55.0);

    ctx.set_fill_style_str("#fff");
    ctx.set_font("600 13px system-ui");
    let _ = ctx.fill_text(&tooltip.name, x + 10.0, y + 20.0);
    ctx.set_fill_style_str("#94a3b8");
    ctx.set_font("11px system-ui");
    let _ = ctx.fill_text(&tooltip.description, x + 10.0, y + 40.0);
}

/// Kicks off the async tile load; failure of any tile demotes the section
/// to the vector fallback with no user-visible error.
pub(crate) fn mount_tiles() {
    let Some(Some((token, regions, w, h))) = with_state(|s| {
        s.config.access_token.as_ref().map(|token| {
            (
                token.clone(),
                s.presence.regions.clone(),
                f64::from(s.presence.canvas.width()),
                f64::from(s.presence.canvas.height()),
            )
        })
    }) else {
        demote_to_vector("no access token");
        return;
    };

    spawn_local(async move {
        match load_tiles(&token, &regions, w, h).await {
            Ok(tiles) => {
                with_state(|s| {
                    s.presence.tiles = tiles;
                    s.presence.tiles_ready = true;
                    s.presence.needs_redraw = true;
                    super::emit(s.frame, "map", "tile backend ready");
                });
            }
            Err(err) => demote_to_vector(&format!("{err:?}")),
        }
    });
}

async fn load_tiles(
    token: &str,
    regions: &[Region],
    w: f64,
    h: f64,
) -> Result<Vec<LoadedTile>, JsValue> {
    let plan = TileMapPlan::build(TILE_CENTER, TILE_ZOOM, w, h, regions, None);
    let source = TileSource::dark(token);

    let mut out = Vec::new();
    for tile in &plan.tiles {
        let image = fetch_tile_image(&source.url(tile.z, tile.x, tile.y)).await?;
        out.push(LoadedTile {
            screen: tile.screen,
            image,
        });
    }
    Ok(out)
}

async fn fetch_tile_image(url: &str) -> Result<web_sys::HtmlImageElement, JsValue> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    if !response.ok() {
        return Err(JsValue::from_str(&format!(
            "tile fetch failed with status {}",
            response.status()
        )));
    }
    let bytes = response
        .binary()
        .await
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes.as_slice()).into());
    let blob = web_sys::Blob::new_with_u8_array_sequence(&parts)?;
    let object_url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let image = web_sys::HtmlImageElement::new()?;
    image.set_src(&object_url);
    let decoded = wasm_bindgen_futures::JsFuture::from(image.decode()).await;
    let _ = web_sys::Url::revoke_object_url(&object_url);
    decoded?;

    Ok(image)
}
