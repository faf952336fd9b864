/// Map visualization configuration.
///
/// The access token is environment-provided and optional; its absence is a
/// normal, fully supported state, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapConfig {
    pub access_token: Option<String>,
}

impl MapConfig {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            access_token: Some(token.into()),
        }
    }

    /// The selection predicate: present and non-blank.
    pub fn has_valid_token(&self) -> bool {
        self.access_token
            .as_deref()
            .is_some_and(|t| !t.trim().is_empty())
    }
}

/// Which of the two interchangeable visualizations to mount.
///
/// `Vector` is the always-available fallback; `Tiles` is the on-demand
/// enhancement. Both accept the same region list and hover selection and
/// render equivalent highlight behavior.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MapBackend {
    Vector,
    Tiles,
}

/// Chooses the backend at composition time.
///
/// A tile failure later (network, init) demotes back to `Vector` with no
/// user-visible error; nothing ever promotes without a valid token.
pub fn select_backend(config: &MapConfig) -> MapBackend {
    if config.has_valid_token() {
        MapBackend::Tiles
    } else {
        MapBackend::Vector
    }
}

#[cfg(test)]
mod tests {
    use super::{MapBackend, MapConfig, select_backend};

    #[test]
    fn no_token_selects_the_fallback() {
        assert_eq!(select_backend(&MapConfig::default()), MapBackend::Vector);
    }

    #[test]
    fn blank_token_selects_the_fallback() {
        let config = MapConfig {
            access_token: Some("   ".into()),
        };
        assert_eq!(select_backend(&config), MapBackend::Vector);

        let empty = MapConfig {
            access_token: Some(String::new()),
        };
        assert_eq!(select_backend(&empty), MapBackend::Vector);
    }

    #[test]
    fn real_token_selects_tiles() {
        let config = MapConfig::with_token("pk.abc123");
        assert_eq!(select_backend(&config), MapBackend::Tiles);
    }
}
