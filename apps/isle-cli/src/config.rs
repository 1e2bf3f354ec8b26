use std::path::Path;

use anyhow::Context;
use isle_spatial::WorldLayout;
use serde::Deserialize;

/// Settings read from `--config`. Missing fields keep their defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub layout: WorldLayout,
    /// Seed for the cloud and mountain scatter; random when absent.
    pub scenery_seed: Option<u64>,
}

impl AppConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = Self::from_json(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        tracing::info!(path = %path.display(), "config loaded");
        Ok(config)
    }

    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_default() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.layout, WorldLayout::ISLAND);
    }

    #[test]
    fn partial_layout_override() {
        let config =
            AppConfig::from_json(r#"{ "layout": { "grid": { "size": 6 } }, "scenery_seed": 9 }"#)
                .unwrap();
        assert_eq!(config.layout.grid.size, 6);
        assert_eq!(config.layout.grid.cell_size, 1.0);
        assert_eq!(config.layout.buildable_radius, 5.0);
        assert_eq!(config.scenery_seed, Some(9));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(AppConfig::from_json("{ layout: ").is_err());
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = AppConfig::load(Path::new("/nonexistent/isle.json")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/isle.json"));
    }
}
