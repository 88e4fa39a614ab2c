use std::path::PathBuf;

use rocket::figment::Figment;
use serde::{Deserialize, Serialize};

/// Site settings, read from the `folio` table of Rocket's configuration
/// (`Rocket.toml` or `ROCKET_FOLIO={...}`). Every key is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Profile TOML to render. The built-in profile is used when unset.
    pub profile: Option<PathBuf>,
    /// Directory served under `/static`.
    pub static_dir: PathBuf,
    /// Page `<title>`. Defaults to "<name> | <role>".
    pub title: Option<String>,
    pub banner: Banner,
}

/// The logo and outbound link block under the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Banner {
    pub enabled: bool,
    pub logo: String,
    pub caption: String,
    pub link: String,
    pub link_text: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            profile: None,
            static_dir: PathBuf::from("website/static"),
            title: None,
            banner: Banner::default(),
        }
    }
}

impl Default for Banner {
    fn default() -> Self {
        Banner {
            enabled: true,
            logo: "/static/logo.svg".to_string(),
            caption: "Served by Rocket.".to_string(),
            link: "https://rocket.rs".to_string(),
            link_text: "Learn Rocket".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_figment(figment: &Figment) -> Self {
        match figment.extract_inner::<SiteConfig>("folio") {
            Ok(config) => config,
            Err(e) if e.missing() => SiteConfig::default(),
            Err(e) => {
                log::warn!("Invalid [folio] configuration, using defaults: {}", e);
                SiteConfig::default()
            }
        }
    }
}
