use log::Level;

pub const PRODUCT_NAME: &str = "Local Konnect";

pub const BRAND_TEAL: &str = "#1E708A";
pub const BRAND_GOLD: &str = "#D7A35E";

/// Inline style for the brand mark in the header and footer.
pub fn brand_mark_style() -> String {
    format!("background: linear-gradient(135deg, {BRAND_TEAL}, {BRAND_GOLD});")
}

const DEFAULT_ASSET_TIMEOUT_MS: u32 = 15_000;

#[cfg(debug_assertions)]
fn default_log_level() -> Level {
    Level::Debug // Verbose while running locally
}

#[cfg(not(debug_assertions))]
fn default_log_level() -> Level {
    Level::Info
}

/// Console log level, overridable at build time with `LOCALKONNECT_LOG_LEVEL`.
pub fn log_level() -> Level {
    option_env!("LOCALKONNECT_LOG_LEVEL")
        .and_then(parse_level)
        .unwrap_or_else(default_log_level)
}

/// Upper bound for a single animation asset fetch.
pub fn asset_timeout_ms() -> u32 {
    option_env!("LOCALKONNECT_ASSET_TIMEOUT_MS")
        .and_then(parse_timeout)
        .unwrap_or(DEFAULT_ASSET_TIMEOUT_MS)
}

fn parse_level(raw: &str) -> Option<Level> {
    raw.trim().parse().ok()
}

fn parse_timeout(raw: &str) -> Option<u32> {
    raw.trim().parse().ok().filter(|ms| *ms > 0)
}
