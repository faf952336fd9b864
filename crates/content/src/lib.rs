use serde::{Deserialize, Serialize};

pub mod copy;

/// One fixed-navigation entry, addressing a section by its in-page anchor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub anchor: String,
}

impl NavItem {
    pub fn new(label: impl Into<String>, anchor: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            anchor: anchor.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerSymbol {
    pub symbol: String,
    pub price: f64,
    pub change_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloatingValue {
    pub text: String,
    pub x_pct: f64,
    pub y_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cta {
    pub label: String,
    pub anchor: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroContent {
    pub headline: String,
    pub kicker: String,
    pub pillars: Vec<String>,
    pub cta: Cta,
    /// Background chart polyline on a 1000x600 reference surface.
    pub chart_points: Vec<[f64; 2]>,
    pub floating_values: Vec<FloatingValue>,
    pub ticker: Vec<TickerSymbol>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutBlock {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgePillar {
    pub key: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyCard {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameworkCopy {
    pub title: String,
    pub description: String,
    pub focus: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyContent {
    pub cards: Vec<StrategyCard>,
    pub long: FrameworkCopy,
    pub short: FrameworkCopy,
    pub sectors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackRecord {
    pub label: String,
    pub value: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    /// Asset path; a failing load falls back to the member's initials.
    pub image: String,
    pub experience: String,
    pub education: Vec<String>,
    pub stats: TrackRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightMetric {
    pub label: String,
    pub value: f64,
    pub suffix: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStage {
    pub stage: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterContent {
    pub firm: String,
    pub blurb: String,
    pub location: String,
    pub email: String,
    pub info_links: Vec<NavItem>,
    pub disclosures: Vec<String>,
}

/// Deterministic text-initial placeholder for a failed image load:
/// the first letter of each whitespace-separated word, uppercased.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(|c| c.to_uppercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::initials;
    use pretty_assertions::assert_eq;

    #[test]
    fn initials_from_display_name() {
        assert_eq!(initials("Jane Doe"), "JD");
        assert_eq!(initials("Mikhail Gorshkov"), "MG");
        assert_eq!(initials("Rahul Khandelwal"), "RK");
    }

    #[test]
    fn initials_handle_odd_spacing_and_case() {
        assert_eq!(initials("  jane   van doe "), "JVD");
        assert_eq!(initials(""), "");
        assert_eq!(initials("Cher"), "C");
    }
}
