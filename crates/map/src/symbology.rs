/// Marker and shape styling shared by both map backends, so highlight
/// behavior reads identically whichever one is mounted.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerStyle {
    pub radius_px: f64,
    pub highlighted_radius_px: f64,
    pub fill: &'static str,
    pub highlighted_fill: &'static str,
    pub stroke: &'static str,
    pub stroke_width_px: f64,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            radius_px: 8.0,
            highlighted_radius_px: 10.0,
            fill: "#0284c7",
            highlighted_fill: "#0ea5e9",
            stroke: "#fff",
            stroke_width_px: 2.0,
        }
    }
}

/// Fill/stroke treatment for the fallback's landmass shapes.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeStyle {
    pub fill: &'static str,
    pub highlighted_fill: &'static str,
    /// Dimmer fill for shapes no region claims.
    pub inert_fill: &'static str,
    pub stroke: &'static str,
    pub inert_stroke: &'static str,
    pub stroke_width_px: f64,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            fill: "rgba(14, 165, 233, 0.12)",
            highlighted_fill: "rgba(14, 165, 233, 0.25)",
            inert_fill: "rgba(14, 165, 233, 0.1)",
            stroke: "rgba(14, 165, 233, 0.4)",
            inert_stroke: "rgba(14, 165, 233, 0.3)",
            stroke_width_px: 1.5,
        }
    }
}

/// Translucent region-extent treatment on the tile backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtentStyle {
    pub fill: &'static str,
    pub highlighted_fill: &'static str,
    pub stroke: &'static str,
}

impl Default for ExtentStyle {
    fn default() -> Self {
        Self {
            fill: "rgba(14, 165, 233, 0.1)",
            highlighted_fill: "rgba(14, 165, 233, 0.2)",
            stroke: "rgba(14, 165, 233, 0.3)",
        }
    }
}
