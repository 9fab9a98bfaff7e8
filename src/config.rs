use serde::{Deserialize, Serialize};
use std::path::Path;

/// Trace profile shared by every route in a bundle. Widths and lengths are
/// in the same unit as port coordinates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrossSection {
    pub width: f64,
    /// Width used on long straight stretches when `auto_widen` is set.
    pub width_wide: Option<f64>,
    pub auto_widen: bool,
    pub taper_length: f64,
    /// Bend radius handed to the route assembler.
    pub radius: f64,
}

impl Default for CrossSection {
    fn default() -> Self {
        Self {
            width: 0.5,
            width_wide: Some(2.0),
            auto_widen: false,
            taper_length: 15.0,
            radius: 10.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouterConfig {
    /// Uniform fan pitch on the trunk interior. `None` keeps each port's
    /// natural spacing.
    pub separation: Option<f64>,
    /// Reorder both banks so matching indices pair up geometrically.
    pub sort_ports: bool,
    pub cross_section: CrossSection,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            separation: None,
            sort_ports: true,
            cross_section: CrossSection::default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    separation: Option<f64>,
    sort_ports: Option<bool>,
    cross_section: Option<CrossSectionFile>,
}

#[derive(Debug, Default, Deserialize)]
struct CrossSectionFile {
    width: Option<f64>,
    width_wide: Option<f64>,
    auto_widen: Option<bool>,
    taper_length: Option<f64>,
    radius: Option<f64>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<RouterConfig> {
    let mut config = RouterConfig::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)?;
    let parsed: ConfigFile = serde_json::from_str(&contents)?;

    if let Some(v) = parsed.separation {
        config.separation = Some(v);
    }
    if let Some(v) = parsed.sort_ports {
        config.sort_ports = v;
    }
    if let Some(section) = parsed.cross_section {
        if let Some(v) = section.width {
            config.cross_section.width = v;
        }
        if let Some(v) = section.width_wide {
            config.cross_section.width_wide = Some(v);
        }
        if let Some(v) = section.auto_widen {
            config.cross_section.auto_widen = v;
        }
        if let Some(v) = section.taper_length {
            config.cross_section.taper_length = v;
        }
        if let Some(v) = section.radius {
            config.cross_section.radius = v;
        }
    }

    Ok(config)
}
