use log::{error, info, warn};
use std::fs;
use std::path::Path;

use crate::config::SiteConfig;

/// Run startup checks before Rocket launches.
/// Creates the static directory if missing and warns about assets or
/// profile files that will not be found. Nothing here is fatal.
pub fn run(config: &SiteConfig) {
    info!("Folio boot check starting...");

    let mut warnings = 0u32;

    // ── 1. Static directory ────────────────────────────
    let static_dir = config.static_dir.as_path();
    if !static_dir.exists() {
        match fs::create_dir_all(static_dir) {
            Ok(_) => info!("  Created directory: {}", static_dir.display()),
            Err(e) => {
                error!("  FAILED to create directory {}: {}", static_dir.display(), e);
                warnings += 1;
            }
        }
    }

    // ── 2. Banner logo ─────────────────────────────────
    if config.banner.enabled {
        if let Some(file) = config.banner.logo.strip_prefix("/static/") {
            let path = static_dir.join(file);
            if !path.exists() {
                warn!("  Missing banner logo: {} (banner image will not load)", path.display());
                warnings += 1;
            }
        }
    }

    // ── 3. Profile file ────────────────────────────────
    match config.profile.as_deref() {
        Some(path) if !Path::new(path).is_file() => {
            warn!("  Profile file not found: {} (built-in profile will be used)", path.display());
            warnings += 1;
        }
        Some(path) => info!("  Profile: {}", path.display()),
        None => info!("  Profile: built-in"),
    }

    if warnings > 0 {
        warn!("Boot check finished with {} warning(s)", warnings);
    } else {
        info!("Boot check passed");
    }
}
