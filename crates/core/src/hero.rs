//! Hero banner rules.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::fallback;

/// What fills the hero background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundType {
    Video,
    Image,
}

impl BackgroundType {
    pub fn as_str(self) -> &'static str {
        match self {
            BackgroundType::Video => "video",
            BackgroundType::Image => "image",
        }
    }
}

impl FromStr for BackgroundType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "video" => Ok(BackgroundType::Video),
            "image" => Ok(BackgroundType::Image),
            other => Err(CoreError::Validation(format!(
                "Invalid background type '{other}'. Must be 'video' or 'image'"
            ))),
        }
    }
}

/// Service list shown under the hero title. A row that never set services
/// (`NULL`) gets the defaults; an explicitly empty list stays empty.
pub fn resolve_services(stored: Option<&[String]>) -> Vec<String> {
    match stored {
        Some(services) => services.to_vec(),
        None => fallback::hero_services(),
    }
}
