pub mod gateways;
pub mod services;
pub mod types;
#[cfg(test)]
pub mod test_utils;

/// Background color applied while a selection has no stored theme yet.
/// Matches the page background so a brand-new import renders flat dark.
pub const DEFAULT_BACKGROUND: &str = "rgb(16,16,16)";
