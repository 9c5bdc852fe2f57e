//! Application identity and behavior constants.
//!
//! Centralized so the magazine's name, external links, and interaction
//! timings are not magic values scattered through the codebase.

use std::time::Duration;

/// Application display name.
pub const APP_NAME: &str = "Petals";

/// Publisher attribution shown in the footer.
pub const PUBLISHER: &str = "A publication by MG International Fragrance Company";

/// Corporate site linked from the navigation bar and footer.
pub const CORPORATE_URL: &str = "https://gulcicek.com";

/// Display label for the corporate link.
pub const CORPORATE_LABEL: &str = "Gülçiçek";

/// Footer tagline.
pub const FOUNDED: &str = "Since 1961";

/// Hero autoplay: one slide per interval.
pub const HERO_INTERVAL: Duration = Duration::from_millis(6000);

/// Hero autoplay sampling step; drives the progress indicator.
pub const HERO_TICK: Duration = Duration::from_millis(50);

/// Horizontal distance covered by one issue-rail arrow press.
pub const RAIL_SCROLL_STEP: f32 = 600.0;

/// Root scroll offset past which the navigation bar turns solid.
pub const NAV_SOLID_THRESHOLD: f32 = 60.0;

/// Copyright notice.
pub fn copyright() -> String {
    let year = chrono::Utc::now().format("%Y");
    format!("© {year} {APP_NAME}")
}
