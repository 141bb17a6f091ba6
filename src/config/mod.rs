//! Host Configuration
//! Option parsing and the asset-reference map consumed by the render pass

use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// Tick period used when the `speed` option is absent or unparsable
pub const DEFAULT_SPEED_MS: u64 = 1600;

/// Logical asset keys nodes may reference
///
/// Nodes store a key, never a path; the host's [`AssetMap`] resolves keys at
/// render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetKey {
    #[serde(rename = "farmers")]
    Farmers,
    #[serde(rename = "farmerrobot")]
    FarmerRobot,
    #[serde(rename = "openai")]
    OpenAi,
}

/// Resolves logical asset keys to path strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetMap {
    farmers: String,
    farmer_robot: String,
    openai: String,
}

impl Default for AssetMap {
    fn default() -> Self {
        Self {
            farmers: "/assets/farmers.png".to_string(),
            farmer_robot: "/assets/farmer-robot.png".to_string(),
            openai: "/assets/openai.png".to_string(),
        }
    }
}

impl AssetMap {
    pub fn resolve(&self, key: AssetKey) -> &str {
        match key {
            AssetKey::Farmers => &self.farmers,
            AssetKey::FarmerRobot => &self.farmer_robot,
            AssetKey::OpenAi => &self.openai,
        }
    }

    pub fn set(&mut self, key: AssetKey, path: impl Into<String>) {
        let slot = match key {
            AssetKey::Farmers => &mut self.farmers,
            AssetKey::FarmerRobot => &mut self.farmer_robot,
            AssetKey::OpenAi => &mut self.openai,
        };
        *slot = path.into();
    }
}

/// Everything the host feeds into the player at startup
#[derive(Debug, Clone)]
pub struct PlayerConfig {
    /// Start in the playing state
    pub autoplay: bool,
    /// Tick period in milliseconds
    pub speed_ms: u64,
    /// Optional cap on the canvas width in pixels
    pub width: Option<f32>,
    /// Asset paths for node icons and logos
    pub assets: AssetMap,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            autoplay: true,
            speed_ms: DEFAULT_SPEED_MS,
            width: None,
            assets: AssetMap::default(),
        }
    }
}

impl PlayerConfig {
    /// Parse `key=value` option pairs
    ///
    /// Unknown keys are ignored and unparsable values fall back to the
    /// compiled defaults; configuration mistakes never prevent startup.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut config = Self::default();

        for (key, value) in pairs {
            match key {
                "autoplay" => {
                    if value != "true" && value != "false" {
                        log::warn!("autoplay expects true/false, got '{value}'");
                    }
                    config.autoplay = value == "true";
                }
                "speed" => match value.parse::<u64>() {
                    Ok(ms) if ms > 0 => config.speed_ms = ms,
                    _ => log::warn!("invalid speed '{value}', keeping {DEFAULT_SPEED_MS} ms"),
                },
                "width" => match value.parse::<f32>() {
                    Ok(px) if px > 0.0 => config.width = Some(px),
                    _ => log::warn!("invalid width '{value}', using the container width"),
                },
                "farmers-src" => config.assets.set(AssetKey::Farmers, value),
                "farmerrobot-src" => config.assets.set(AssetKey::FarmerRobot, value),
                "openai-src" => config.assets.set(AssetKey::OpenAi, value),
                other => log::warn!("ignoring unknown option '{other}'"),
            }
        }

        config
    }
}
