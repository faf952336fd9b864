use foundation::geometry::Vec2;

use crate::projection::{equirectangular, ref_to_canvas};
use crate::region::Region;
use crate::symbology::{MarkerStyle, ShapeStyle};

/// A hand-authored landmass outline on the reference surface.
///
/// `region_keys` lists the regions whose hover highlights this shape; a
/// shape can light up for several regions (India) or for none (pure
/// scenery like South America).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Outline {
    pub name: &'static str,
    pub points: &'static [[f64; 2]],
    pub region_keys: &'static [&'static str],
}

impl Outline {
    pub fn is_interactive(&self) -> bool {
        !self.region_keys.is_empty()
    }

    pub fn highlights_for(&self, key: &str) -> bool {
        self.region_keys.contains(&key)
    }
}

const NORTH_AMERICA: &[[f64; 2]] = &[
    [120.0, 80.0],
    [180.0, 75.0],
    [240.0, 85.0],
    [280.0, 100.0],
    [320.0, 120.0],
    [350.0, 140.0],
    [360.0, 170.0],
    [370.0, 200.0],
    [365.0, 230.0],
    [350.0, 260.0],
    [330.0, 280.0],
    [300.0, 290.0],
    [270.0, 295.0],
    [240.0, 290.0],
    [210.0, 280.0],
    [180.0, 270.0],
    [150.0, 250.0],
    [130.0, 220.0],
    [120.0, 190.0],
    [115.0, 160.0],
    [110.0, 130.0],
    [115.0, 100.0],
];

const CANADA_ALASKA: &[[f64; 2]] = &[
    [80.0, 40.0],
    [200.0, 35.0],
    [250.0, 50.0],
    [280.0, 70.0],
    [300.0, 90.0],
    [320.0, 110.0],
    [300.0, 120.0],
    [250.0, 115.0],
    [200.0, 100.0],
    [150.0, 90.0],
    [100.0, 70.0],
    [80.0, 50.0],
];

const SOUTH_AMERICA: &[[f64; 2]] = &[
    [280.0, 280.0],
    [320.0, 285.0],
    [350.0, 300.0],
    [370.0, 330.0],
    [380.0, 360.0],
    [375.0, 390.0],
    [360.0, 410.0],
    [340.0, 420.0],
    [310.0, 425.0],
    [280.0, 420.0],
    [250.0, 410.0],
    [230.0, 390.0],
    [220.0, 360.0],
    [225.0, 330.0],
    [240.0, 300.0],
    [260.0, 285.0],
];

const EUROPE: &[[f64; 2]] = &[
    [480.0, 60.0],
    [520.0, 65.0],
    [550.0, 75.0],
    [570.0, 90.0],
    [580.0, 110.0],
    [575.0, 130.0],
    [565.0, 150.0],
    [550.0, 165.0],
    [530.0, 170.0],
    [510.0, 168.0],
    [490.0, 160.0],
    [475.0, 145.0],
    [470.0, 125.0],
    [472.0, 105.0],
    [478.0, 85.0],
];

const BRITISH_ISLES: &[[f64; 2]] = &[
    [470.0, 90.0],
    [485.0, 92.0],
    [490.0, 100.0],
    [485.0, 108.0],
    [475.0, 110.0],
    [468.0, 105.0],
    [465.0, 98.0],
];

const AFRICA: &[[f64; 2]] = &[
    [520.0, 180.0],
    [560.0, 185.0],
    [590.0, 200.0],
    [610.0, 230.0],
    [620.0, 270.0],
    [615.0, 310.0],
    [605.0, 340.0],
    [585.0, 360.0],
    [560.0, 370.0],
    [535.0, 375.0],
    [510.0, 370.0],
    [490.0, 360.0],
    [475.0, 340.0],
    [470.0, 310.0],
    [475.0, 280.0],
    [485.0, 250.0],
    [500.0, 220.0],
    [515.0, 195.0],
];

const MIDDLE_EAST: &[[f64; 2]] = &[
    [580.0, 200.0],
    [620.0, 205.0],
    [640.0, 220.0],
    [645.0, 240.0],
    [635.0, 255.0],
    [620.0, 260.0],
    [600.0, 255.0],
    [585.0, 245.0],
    [580.0, 225.0],
];

const ASIA: &[[f64; 2]] = &[
    [640.0, 50.0],
    [720.0, 55.0],
    [780.0, 70.0],
    [820.0, 95.0],
    [850.0, 130.0],
    [870.0, 170.0],
    [880.0, 210.0],
    [875.0, 250.0],
    [860.0, 280.0],
    [835.0, 300.0],
    [800.0, 310.0],
    [760.0, 305.0],
    [720.0, 295.0],
    [685.0, 280.0],
    [660.0, 260.0],
    [645.0, 235.0],
    [640.0, 205.0],
    [642.0, 175.0],
    [648.0, 145.0],
    [655.0, 115.0],
    [660.0, 85.0],
    [655.0, 65.0],
];

const INDIA: &[[f64; 2]] = &[
    [680.0, 240.0],
    [720.0, 245.0],
    [740.0, 260.0],
    [745.0, 280.0],
    [735.0, 295.0],
    [715.0, 300.0],
    [695.0, 295.0],
    [680.0, 285.0],
    [675.0, 265.0],
    [678.0, 250.0],
];

const CHINA: &[[f64; 2]] = &[
    [750.0, 180.0],
    [820.0, 185.0],
    [850.0, 200.0],
    [860.0, 225.0],
    [855.0, 250.0],
    [840.0, 270.0],
    [815.0, 275.0],
    [790.0, 270.0],
    [770.0, 255.0],
    [755.0, 235.0],
    [750.0, 210.0],
];

const JAPAN: &[[f64; 2]] = &[
    [880.0, 200.0],
    [895.0, 202.0],
    [900.0, 210.0],
    [895.0, 218.0],
    [885.0, 220.0],
    [878.0, 215.0],
    [875.0, 205.0],
];

const AUSTRALIA: &[[f64; 2]] = &[
    [800.0, 380.0],
    [860.0, 385.0],
    [890.0, 400.0],
    [900.0, 420.0],
    [890.0, 435.0],
    [870.0, 440.0],
    [840.0, 435.0],
    [815.0, 425.0],
    [800.0, 410.0],
    [795.0, 395.0],
];

const SOUTHEAST_ASIA: &[[f64; 2]] = &[
    [780.0, 320.0],
    [820.0, 325.0],
    [850.0, 340.0],
    [860.0, 360.0],
    [850.0, 375.0],
    [830.0, 380.0],
    [805.0, 375.0],
    [785.0, 365.0],
    [775.0, 345.0],
];

const OUTLINES: &[Outline] = &[
    Outline {
        name: "north-america",
        points: NORTH_AMERICA,
        region_keys: &["North America"],
    },
    Outline {
        name: "canada-alaska",
        points: CANADA_ALASKA,
        region_keys: &["North America"],
    },
    Outline {
        name: "south-america",
        points: SOUTH_AMERICA,
        region_keys: &[],
    },
    Outline {
        name: "europe",
        points: EUROPE,
        region_keys: &["Europe"],
    },
    Outline {
        name: "british-isles",
        points: BRITISH_ISLES,
        region_keys: &["Europe"],
    },
    Outline {
        name: "africa",
        points: AFRICA,
        region_keys: &[],
    },
    Outline {
        name: "middle-east",
        points: MIDDLE_EAST,
        region_keys: &["Emerging Markets"],
    },
    Outline {
        name: "asia",
        points: ASIA,
        region_keys: &["Asia Pacific"],
    },
    Outline {
        name: "india",
        points: INDIA,
        region_keys: &["Asia Pacific", "Emerging Markets"],
    },
    Outline {
        name: "china",
        points: CHINA,
        region_keys: &["Asia Pacific"],
    },
    Outline {
        name: "japan",
        points: JAPAN,
        region_keys: &["Asia Pacific"],
    },
    Outline {
        name: "australia",
        points: AUSTRALIA,
        region_keys: &[],
    },
    Outline {
        name: "southeast-asia",
        points: SOUTHEAST_ASIA,
        region_keys: &["Asia Pacific"],
    },
];

pub fn outlines() -> &'static [Outline] {
    OUTLINES
}

/// A landmass shape resolved against the hover selection and scaled to the
/// output canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeView {
    pub name: &'static str,
    pub points: Vec<Vec2>,
    pub interactive: bool,
    pub highlighted: bool,
    /// First region key, for pointer hit-testing on interactive shapes.
    pub hover_key: Option<&'static str>,
}

/// A region marker scaled to the output canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerView {
    pub name: String,
    pub pos: Vec2,
    pub radius_px: f64,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TooltipView {
    pub name: String,
    pub description: String,
    pub pos: Vec2,
}

/// Everything a renderer needs for one frame of the fallback map.
///
/// Built fresh whenever the hover selection changes; drawing it is the
/// renderer's only job, so the scene itself stays testable off-browser.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorMapScene {
    pub width: f64,
    pub height: f64,
    pub shapes: Vec<ShapeView>,
    pub markers: Vec<MarkerView>,
    pub tooltip: Option<TooltipView>,
    pub marker_style: MarkerStyle,
    pub shape_style: ShapeStyle,
}

impl VectorMapScene {
    pub fn build(regions: &[Region], active: Option<&str>, width: f64, height: f64) -> Self {
        let marker_style = MarkerStyle::default();

        let shapes = OUTLINES
            .iter()
            .map(|outline| {
                let highlighted = active.is_some_and(|key| outline.highlights_for(key));
                ShapeView {
                    name: outline.name,
                    points: outline
                        .points
                        .iter()
                        .map(|&[x, y]| ref_to_canvas(Vec2::new(x, y), width, height))
                        .collect(),
                    interactive: outline.is_interactive(),
                    highlighted,
                    hover_key: outline.region_keys.first().copied(),
                }
            })
            .collect();

        let markers: Vec<MarkerView> = regions
            .iter()
            .map(|region| {
                let highlighted = active == Some(region.name.as_str());
                MarkerView {
                    name: region.name.clone(),
                    pos: ref_to_canvas(equirectangular(region.lon(), region.lat()), width, height),
                    radius_px: if highlighted {
                        marker_style.highlighted_radius_px
                    } else {
                        marker_style.radius_px
                    },
                    highlighted,
                }
            })
            .collect();

        let tooltip = active.and_then(|key| {
            let region = regions.iter().find(|r| r.name == key)?;
            let marker = markers.iter().find(|m| m.name == key)?;
            Some(TooltipView {
                name: region.name.clone(),
                description: region.description.clone(),
                pos: marker.pos + Vec2::new(15.0, -35.0),
            })
        });

        Self {
            width,
            height,
            shapes,
            markers,
            tooltip,
            marker_style,
            shape_style: ShapeStyle::default(),
        }
    }

    /// Hit-tests markers under a canvas-space pointer position.
    ///
    /// `slop_px` widens the target beyond the drawn radius. The first
    /// marker in region order wins on overlap.
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
    use super::{VectorMapScene, outlines};
    use crate::region::Region;
    use foundation::geometry::Vec2;

    fn regions() -> Vec<Region> {
        vec![
            Region::new("North America", [-95.0, 40.0], "US and Canadian equity markets"),
            Region::new("Europe", [10.0, 54.0], "UK, Continental Europe"),
            Region::new("Asia Pacific", [120.0, 30.0], "India, China, Japan, and broader APAC"),
            Region::new("Emerging Markets", [80.0, 20.0], "Select emerging market opportunities"),
        ]
    }

    #[test]
    fn renders_one_marker_per_region() {
        let scene = VectorMapScene::build(&regions(), None, 1000.0, 500.0);
        assert_eq!(scene.markers.len(), 4);
        assert!(scene.markers.iter().all(|m| !m.highlighted));
        assert!(scene.tooltip.is_none());
    }

    #[test]
    fn hover_highlights_matching_marker_and_shapes() {
        let scene = VectorMapScene::build(&regions(), Some("Asia Pacific"), 1000.0, 500.0);

        let highlighted: Vec<_> = scene
            .markers
            .iter()
            .filter(|m| m.highlighted)
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(highlighted, vec!["Asia Pacific"]);

        // Asia, India, China, Japan, Southeast Asia light up.
        let lit: Vec<_> = scene
            .shapes
            .iter()
            .filter(|s| s.highlighted)
            .map(|s| s.name)
            .collect();
        assert!(lit.contains(&"asia"));
        assert!(lit.contains(&"india"));
        assert!(!lit.contains(&"europe"));

        let tooltip = scene.tooltip.expect("tooltip for hovered region");
        assert_eq!(tooltip.name, "Asia Pacific");
    }

    #[test]
    fn india_highlights_for_both_claiming_regions() {
        let apac = VectorMapScene::build(&regions(), Some("Asia Pacific"), 1000.0, 500.0);
        let em = VectorMapScene::build(&regions(), Some("Emerging Markets"), 1000.0, 500.0);
        for scene in [apac, em] {
            assert!(
                scene
                    .shapes
                    .iter()
                    .any(|s| s.name == "india" && s.highlighted)
            );
        }
    }

    #[test]
    fn scenery_shapes_never_highlight() {
        for key in ["North America", "Europe", "Asia Pacific", "Emerging Markets"] {
            let scene = VectorMapScene::build(&regions(), Some(key), 1000.0, 500.0);
            for name in ["south-america", "africa"] {
                let shape = scene.shapes.iter().find(|s| s.name == name).unwrap();
                assert!(!shape.highlighted, "{name} lit up for {key}");
                assert!(!shape.interactive);
            }
        }
    }

    #[test]
    fn marker_hit_test_resolves_region_names() {
        let scene = VectorMapScene::build(&regions(), None, 1000.0, 500.0);
        let europe = scene.markers.iter().find(|m| m.name == "Europe").unwrap();

        assert_eq!(
            scene.marker_at(europe.pos + Vec2::new(3.0, -2.0), 0.0),
            Some("Europe")
        );
        assert_eq!(scene.marker_at(Vec2::new(0.0, 0.0), 0.0), None);
    }

    #[test]
    fn every_outline_has_a_closed_ring_worth_of_points() {
        for outline in outlines() {
            assert!(outline.points.len() >= 3, "{} too short", outline.name);
        }
    }
}
