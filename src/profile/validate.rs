//! Pure predicates gating profile construction.

/// Interactive input that quits the launcher.
pub const QUIT_SENTINEL: &str = "q";
/// Input that selects the custom-configuration placeholder.
pub const CUSTOM_CONFIGURATION_SENTINEL: &str = "0";

/// True iff `0 <= count < keepnet_limit`. The limit itself is rejected.
pub fn is_fish_count_valid(count: i64, keepnet_limit: u32) -> bool {
    (0..i64::from(keepnet_limit)).contains(&count)
}

/// Accepts the sentinels `"0"` and `"q"`, or an all-digit id within `[0, catalog_size - 1]`.
///
/// Numeric `0` and the sentinel `"0"` both address the placeholder entry.
pub fn is_profile_id_valid(id: &str, catalog_size: usize) -> bool {
    if id == CUSTOM_CONFIGURATION_SENTINEL || id == QUIT_SENTINEL {
        return true;
    }
    if id.is_empty() || !id.bytes().all(|byte| byte.is_ascii_digit()) {
        return false;
    }
    // Digit strings too long for usize are out of range by definition.
    match id.parse::<usize>() {
        Ok(index) => index < catalog_size,
        Err(_) => false,
    }
}
