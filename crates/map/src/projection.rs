use foundation::geometry::Vec2;

/// Reference surface of the vector fallback, matching the hand-authored
/// outline coordinates.
pub const REF_WIDTH: f64 = 1000.0;
pub const REF_HEIGHT: f64 = 500.0;

/// Raster tile edge length in pixels.
pub const TILE_SIZE: f64 = 256.0;

/// Web mercator is undefined at the poles; tiles clamp latitude here.
pub const MERCATOR_MAX_LAT: f64 = 85.0511;

/// Equirectangular projection onto the reference surface.
pub fn equirectangular(lon: f64, lat: f64) -> Vec2 {
    Vec2::new(
        (lon + 180.0) / 360.0 * REF_WIDTH,
        (90.0 - lat) / 180.0 * REF_HEIGHT,
    )
}

/// Scales a reference-surface point to a `width x height` canvas.
pub fn ref_to_canvas(p: Vec2, width: f64, height: f64) -> Vec2 {
    Vec2::new(p.x / REF_WIDTH * width, p.y / REF_HEIGHT * height)
}

/// Web mercator world pixel coordinates at `zoom` (fractional zoom allowed).
///
/// The world is `TILE_SIZE * 2^zoom` pixels square; latitude is clamped to
/// the mercator domain.
pub fn web_mercator(lon: f64, lat: f64, zoom: f64) -> Vec2 {
    let world = TILE_SIZE * 2f64.powf(zoom);
    let lat = lat.clamp(-MERCATOR_MAX_LAT, MERCATOR_MAX_LAT);
    let lat_rad = lat.to_radians();

    let x = (lon + 180.0) / 360.0 * world;
    let y = (1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / std::f64::consts::PI) / 2.0 * world;
    Vec2::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::{REF_HEIGHT, REF_WIDTH, TILE_SIZE, equirectangular, ref_to_canvas, web_mercator};
    use foundation::geometry::Vec2;

    #[test]
    fn equirectangular_maps_known_points() {
        // Null island lands dead center.
        assert_eq!(
            equirectangular(0.0, 0.0),
            Vec2::new(REF_WIDTH / 2.0, REF_HEIGHT / 2.0)
        );
        // The antimeridian corners.
        assert_eq!(equirectangular(-180.0, 90.0), Vec2::new(0.0, 0.0));
        assert_eq!(
            equirectangular(180.0, -90.0),
            Vec2::new(REF_WIDTH, REF_HEIGHT)
        );
    }

    #[test]
    fn ref_to_canvas_scales_uniformly() {
        let p = ref_to_canvas(Vec2::new(500.0, 250.0), 640.0, 320.0);
        assert_eq!(p, Vec2::new(320.0, 160.0));
    }

    #[test]
    fn mercator_equator_is_half_world() {
        let p = web_mercator(0.0, 0.0, 2.0);
        let world = TILE_SIZE * 4.0;
        assert!((p.x - world / 2.0).abs() < 1e-9);
        assert!((p.y - world / 2.0).abs() < 1e-9);
    }

    #[test]
    fn mercator_clamps_poles() {
        let p = web_mercator(0.0, 90.0, 1.0);
        assert!(p.y.is_finite());
        assert!(p.y >= 0.0);
    }
}
