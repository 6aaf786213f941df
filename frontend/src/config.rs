use log::Level;

/// Fragment used when the browser location carries none.
pub const DEFAULT_FRAGMENT: &str = "#home";

/// Fragments that select the concatenated home view.
pub const HOME_ALIASES: [&str; 2] = ["#home", "#hero"];

pub const CONTACT_EMAIL: &str = "hello@brainai.academy";

/// Pixels scrolled before the header switches to its solid style.
pub const HEADER_SCROLL_THRESHOLD: f64 = 80.0;

pub const HEADLINE_ROTATION_MS: u32 = 2400;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Where Trunk copies `frontend/assets`.
pub const ASSET_BASE: &str = "/assets";

pub fn asset(name: &str) -> String {
    format!("{}/{}", ASSET_BASE, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_fragment_is_a_home_alias() {
        assert!(HOME_ALIASES.contains(&DEFAULT_FRAGMENT));
    }

    #[test]
    fn asset_joins_base_and_name() {
        assert_eq!(asset("brainai_car.png"), "/assets/brainai_car.png");
    }
}
