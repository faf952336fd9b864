use serde::{Deserialize, Serialize};

/// One entry of the region data contract shared by both map backends and
/// the details list.
///
/// `name` is the join key between map markers and list items and must be
/// unique within a region list. `coordinates` is `[longitude, latitude]`
/// in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    pub coordinates: [f64; 2],
    pub description: String,
}

impl Region {
    pub fn new(
        name: impl Into<String>,
        coordinates: [f64; 2],
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            coordinates,
            description: description.into(),
        }
    }

    pub fn lon(&self) -> f64 {
        self.coordinates[0]
    }

    pub fn lat(&self) -> f64 {
        self.coordinates[1]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionListError {
    DuplicateName(String),
}

impl std::fmt::Display for RegionListError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegionListError::DuplicateName(name) => {
                write!(f, "duplicate region name: {name}")
            }
        }
    }
}

impl std::error::Error for RegionListError {}

/// Validates the uniqueness half of the contract.
pub fn validate_regions(regions: &[Region]) -> Result<(), RegionListError> {
    for (i, region) in regions.iter().enumerate() {
        if regions[..i].iter().any(|r| r.name == region.name) {
            return Err(RegionListError::DuplicateName(region.name.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Region, RegionListError, validate_regions};

    #[test]
    fn serde_round_trip_keeps_the_contract_shape() {
        let r = Region::new("Europe", [10.0, 54.0], "UK, Continental Europe");
        let json = serde_json::to_string(&r).unwrap();
        assert!(json.contains("\"coordinates\":[10.0,54.0]"));
        let back: Region = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let regions = vec![
            Region::new("Europe", [10.0, 54.0], "a"),
            Region::new("Europe", [11.0, 50.0], "b"),
        ];
        assert_eq!(
            validate_regions(&regions),
            Err(RegionListError::DuplicateName("Europe".into()))
        );

        let ok = vec![
            Region::new("Europe", [10.0, 54.0], "a"),
            Region::new("Asia Pacific", [120.0, 30.0], "b"),
        ];
        assert!(validate_regions(&ok).is_ok());
    }
}
