pub const SITE_NAME: &str = "Trackify";

/// `localStorage` key holding the bearer token between visits.
pub const TOKEN_STORAGE_KEY: &str = "trackify-token";

/// How long success and error banners stay on screen.
pub const BANNER_TIMEOUT_MS: u32 = 5_000;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Name of a 1-based month, empty for anything outside 1..=12.
pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|index| MONTH_NAMES.get(index as usize))
        .copied()
        .unwrap_or_default()
}
