use foundation::geometry::{Rect, Vec2};

use crate::projection::{TILE_SIZE, web_mercator};
use crate::region::Region;
use crate::symbology::{ExtentStyle, MarkerStyle};
use crate::vector::MarkerView;

/// Tile source resolved from the access token.
///
/// The template carries `{z}`, `{x}`, `{y}` and `{token}` placeholders; the
/// dark institutional style mirrors the site's look.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileSource {
    template: String,
    token: String,
}

const DARK_STYLE_TEMPLATE: &str =
    "https://api.mapbox.com/styles/v1/mapbox/dark-v11/tiles/256/{z}/{x}/{y}?access_token={token}";

impl TileSource {
    pub fn dark(token: impl Into<String>) -> Self {
        Self {
            template: DARK_STYLE_TEMPLATE.to_string(),
            token: token.into(),
        }
    }

    pub fn url(&self, z: u32, x: u32, y: u32) -> String {
        self.template
            .replace("{z}", &z.to_string())
            .replace("{x}", &x.to_string())
            .replace("{y}", &y.to_string())
            .replace("{token}", &self.token)
    }
}

/// One tile to fetch, with its placement on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct TileRef {
    pub z: u32,
    pub x: u32,
    pub y: u32,
    /// Top-left corner in canvas pixels.
    pub screen: Vec2,
}

/// Translucent extent rectangle approximating a region's footprint,
/// mirroring the fallback's highlight behavior on the tile backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtentView {
    pub name: &'static str,
    pub rect: Rect,
    pub highlighted: bool,
}

/// Region extents as `[west, south, east, north]` degrees.
const REGION_EXTENTS: &[(&str, [f64; 4])] = &[
    ("North America", [-130.0, 25.0, -100.0, 50.0]),
    ("Europe", [-10.0, 35.0, 40.0, 70.0]),
    ("Asia Pacific", [100.0, 0.0, 150.0, 50.0]),
    ("Emerging Markets", [60.0, 5.0, 100.0, 35.0]),
];

/// One frame of the tile backend: which tiles to fetch and where overlays
/// land. Pure planning; fetching and drawing stay with the app.
#[derive(Debug, Clone, PartialEq)]
pub struct TileMapPlan {
    pub width: f64,
    pub height: f64,
    pub zoom: f64,
    pub tiles: Vec<TileRef>,
    pub markers: Vec<MarkerView>,
    pub extents: Vec<ExtentView>,
    pub marker_style: MarkerStyle,
    pub extent_style: ExtentStyle,
}

impl TileMapPlan {
    /// Plans the viewport centered on `center` (`[lon, lat]`) at `zoom`.
    ///
    /// Fractional zooms snap down to the integer tile level; the canvas is
    /// covered with whole tiles, clamped to the world's tile range (no
    /// horizontal wrap at the site's world-scale zoom).
    pub fn build(
        center: [f64; 2],
        zoom: f64,
        width: f64,
        height: f64,
        regions: &[Region],
        active: Option<&str>,
    ) -> Self {
        let z = zoom.max(0.0).floor() as u32;
        let zoom = f64::from(z);
        let tiles_per_axis = 2u32.pow(z);

        let center_px = web_mercator(center[0], center[1], zoom);
        let origin = Vec2::new(center_px.x - width / 2.0, center_px.y - height / 2.0);
        let to_screen = |world: Vec2| world - origin;

        let first_x = (origin.x / TILE_SIZE).floor() as i64;
        let first_y = (origin.y / TILE_SIZE).floor() as i64;
        let last_x = ((origin.x + width) / TILE_SIZE).ceil() as i64;
        let last_y = ((origin.y + height) / TILE_SIZE).ceil() as i64;

        let mut tiles = Vec::new();
        for ty in first_y.max(0)..last_y.min(i64::from(tiles_per_axis)) {
            for tx in first_x.max(0)..last_x.min(i64::from(tiles_per_axis)) {
                tiles.push(TileRef {
                    z,
                    x: tx as u32,
                    y: ty as u32,
                    screen: to_screen(Vec2::new(
                        tx as f64 * TILE_SIZE,
                        ty as f64 * TILE_SIZE,
                    )),
                });
            }
        }

        let marker_style = MarkerStyle::default();
        let markers = regions
            .iter()
            .map(|region| {
                let highlighted = active == Some(region.name.as_str());
                MarkerView {
                    name: region.name.clone(),
                    pos: to_screen(web_mercator(region.lon(), region.lat(), zoom)),
                    radius_px: if highlighted {
                        marker_style.highlighted_radius_px
                    } else {
                        marker_style.radius_px
                    },
                    highlighted,
                }
            })
            .collect();

        let extents = REGION_EXTENTS
            .iter()
            .map(|&(name, [west, south, east, north])| ExtentView {
                name,
                rect: Rect::new(
                    to_screen(web_mercator(west, north, zoom)),
                    to_screen(web_mercator(east, south, zoom)),
                ),
                highlighted: active == Some(name),
            })
            .collect();

        Self {
            width,
            height,
            zoom,
            tiles,
            markers,
            extents,
            marker_style,
            extent_style: ExtentStyle::default(),
        }
    }

    /// Same pointer hit-test contract as the fallback scene.
    pub fn marker_at(&self, pos: Vec2, slop_px: f64) -> Option<&str> {
        self.markers.iter().find_map(|m| {
            let d = pos - m.pos;
            let r = m.radius_px + slop_px;
            (d.x * d.x + d.y * d.y <= r * r).then_some(m.name.as_str())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{TileMapPlan, TileSource};
    use crate::region::Region;

    fn regions() -> Vec<Region> {
        vec![
            Region::new("North America", [-95.0, 40.0], "US and Canadian equity markets"),
            Region::new("Europe", [10.0, 54.0], "UK, Continental Europe"),
            Region::new("Asia Pacific", [120.0, 30.0], "India, China, Japan, and broader APAC"),
            Region::new("Emerging Markets", [80.0, 20.0], "Select emerging market opportunities"),
        ]
    }

    #[test]
    fn url_substitutes_all_placeholders() {
        let src = TileSource::dark("pk.test-token");
        let url = src.url(2, 1, 3);
        assert!(url.contains("/2/1/3"));
        assert!(url.ends_with("access_token=pk.test-token"));
        assert!(!url.contains('{'));
    }

    #[test]
    fn plan_covers_the_canvas_with_tiles() {
        let plan = TileMapPlan::build([20.0, 30.0], 1.5, 800.0, 500.0, &regions(), None);
        assert_eq!(plan.zoom, 1.0);
        assert!(!plan.tiles.is_empty());

        // Zoom 1 has a 2x2 world; everything must come from it.
        for t in &plan.tiles {
            assert!(t.x < 2 && t.y < 2);
            assert_eq!(t.z, 1);
        }
    }

    #[test]
    fn markers_match_region_count_and_highlight() {
        let plan = TileMapPlan::build([20.0, 30.0], 1.5, 800.0, 500.0, &regions(), Some("Europe"));
        assert_eq!(plan.markers.len(), 4);
        let lit: Vec<_> = plan
            .markers
            .iter()
            .filter(|m| m.highlighted)
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(lit, vec!["Europe"]);

        let extent = plan.extents.iter().find(|e| e.name == "Europe").unwrap();
        assert!(extent.highlighted);
        assert!(plan.extents.iter().filter(|e| e.highlighted).count() == 1);
    }

    #[test]
    fn extent_rects_are_well_formed() {
        let plan = TileMapPlan::build([20.0, 30.0], 1.5, 800.0, 500.0, &regions(), None);
        for e in &plan.extents {
            assert!(e.rect.width() > 0.0, "{} has no width", e.name);
            assert!(e.rect.height() > 0.0, "{} has no height", e.name);
        }
    }
}
