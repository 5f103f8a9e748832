use serde::{Deserialize, Serialize};
use std::path::Path;

use anyhow::Context;

/// Share of each axis' extent added as margin on both sides.
pub const DEFAULT_PADDING_RATIO: f64 = 0.1;
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 800.0;
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 600.0;
// Limits of the client zoom slider and pinch gesture.
pub const DEFAULT_MIN_ZOOM: f64 = 0.5;
pub const DEFAULT_MAX_ZOOM: f64 = 2.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewportConfig {
    pub width: f64,
    pub height: f64,
    pub padding_ratio: f64,
    pub zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_VIEWPORT_WIDTH,
            height: DEFAULT_VIEWPORT_HEIGHT,
            padding_ratio: DEFAULT_PADDING_RATIO,
            zoom: 1.0,
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub viewport: ViewportConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    viewport: Option<ViewportFile>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ViewportFile {
    width: Option<f64>,
    height: Option<f64>,
    padding_ratio: Option<f64>,
    zoom: Option<f64>,
    min_zoom: Option<f64>,
    max_zoom: Option<f64>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let parsed: ConfigFile = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse config {}", path.display()))?;

    if let Some(vars) = parsed.viewport {
        let viewport = &mut config.viewport;
        if let Some(v) = vars.width {
            viewport.width = v;
        }
        if let Some(v) = vars.height {
            viewport.height = v;
        }
        if let Some(v) = vars.padding_ratio {
            viewport.padding_ratio = v;
        }
        if let Some(v) = vars.zoom {
            viewport.zoom = v;
        }
        if let Some(v) = vars.min_zoom {
            viewport.min_zoom = v;
        }
        if let Some(v) = vars.max_zoom {
            viewport.max_zoom = v;
        }
    }

    validate(&config)?;
    Ok(config)
}

fn validate(config: &Config) -> anyhow::Result<()> {
    let vp = &config.viewport;
    crate::viewport::check_padding_ratio(vp.padding_ratio).context("invalid paddingRatio")?;
    if !crate::viewport::zoom_limits_valid(vp.min_zoom, vp.max_zoom) {
        anyhow::bail!(
            "zoom limits must satisfy 0 < minZoom <= maxZoom, got {}..{}",
            vp.min_zoom,
            vp.max_zoom
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "floorplan-nav-{}-{}.json",
            name,
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn defaults_without_file() {
        let config = load_config(None).unwrap();
        assert_eq!(config.viewport.width, 800.0);
        assert_eq!(config.viewport.height, 600.0);
        assert_eq!(config.viewport.padding_ratio, 0.1);
    }

    #[test]
    fn file_overrides_selected_fields() {
        let path = write_temp(
            "override",
            r#"{"viewport":{"width":1024,"paddingRatio":0.05,"maxZoom":3}}"#,
        );
        let config = load_config(Some(&path)).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(config.viewport.width, 1024.0);
        assert_eq!(config.viewport.height, 600.0);
        assert_eq!(config.viewport.padding_ratio, 0.05);
        assert_eq!(config.viewport.max_zoom, 3.0);
    }

    #[test]
    fn rejects_inverted_zoom_limits() {
        let path = write_temp("zoom", r#"{"viewport":{"minZoom":2,"maxZoom":1}}"#);
        let result = load_config(Some(&path));
        std::fs::remove_file(&path).ok();
        assert!(result.is_err());
    }

    #[test]
    fn rejects_negative_padding_ratio() {
        let path = write_temp("padding", r#"{"viewport":{"paddingRatio":-0.4}}"#);
        let result = load_config(Some(&path));
        std::fs::remove_file(&path).ok();
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<crate::error::Error>(),
            Some(crate::error::Error::InvalidPadding { .. })
        ));
    }
}
