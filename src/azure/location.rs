//! Azure region-name normalization
//!
//! ARM is inconsistent about region casing: requests accept `eastus`,
//! responses often return the display form `East US`. State records use the
//! canonical form so comparisons stay stable.

/// Normalize a region name to its canonical form: lowercase, no spaces.
///
/// `"East US 2"` becomes `"eastus2"`. Already-canonical names pass through
/// unchanged.
pub fn normalize_location(location: &str) -> String {
    location
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}
