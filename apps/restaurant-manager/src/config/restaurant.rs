//! Restaurant details shown on the pages.

use serde::{Deserialize, Serialize};

use crate::infrastructure::http::SiteInfo;

/// Restaurant configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantConfig {
    /// Name in the page titles and welcome heading.
    #[serde(default = "default_name")]
    pub name: String,
    /// Line under the welcome heading.
    #[serde(default = "default_tagline")]
    pub tagline: String,
    /// Banner image URL for the Home page. No banner when unset.
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Default for RestaurantConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            tagline: default_tagline(),
            image_url: None,
        }
    }
}

impl RestaurantConfig {
    /// Site details for page rendering.
    #[must_use]
    pub fn site_info(&self) -> SiteInfo {
        SiteInfo {
            name: self.name.clone(),
            tagline: self.tagline.clone(),
            image_url: self.image_url.clone().filter(|url| !url.is_empty()),
        }
    }
}

fn default_name() -> String {
    "Sukkur Delight".to_string()
}

fn default_tagline() -> String {
    "Restaurant & Cafe".to_string()
}
