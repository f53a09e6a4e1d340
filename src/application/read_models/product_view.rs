use crate::catalog::domain::{DriverEntry, Product};

/// Badge colour for brands without a dedicated one
pub const DEFAULT_BRAND_COLOR: &str = "#555";

const BRAND_COLORS: &[(&str, &str)] = &[
    ("nvidia", "#76B900"),
    ("amd", "#ED1C24"),
    ("intel", "#0068B5"),
    ("broadcom", "#D93025"),
];

/// Longest OS label shown before it is cut down to two words
const MAX_OS_LABEL_CHARS: usize = 20;

/// View representation of a catalog product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductView {
    pub name: String,
    pub brand: String,
    pub brand_color: &'static str,
    pub category: String,
    pub status: String,
    pub form_factor: String,
    pub firmware_version: String,
    pub spec: String,
    pub identifier: String,
    /// Sorted by OS name
    pub drivers: Vec<DriverView>,
}

/// View representation of one driver entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverView {
    pub os: String,
    /// Shortened OS name for badges
    pub os_label: String,
    pub model: Option<String>,
    pub version: String,
}

impl ProductView {
    /// Builds the view, sorting drivers by OS if the product is not sorted yet
    pub fn from_product(product: &Product) -> Self {
        let sorted = product.with_sorted_drivers();
        Self {
            name: product.display_name().to_string(),
            brand: product.brand().to_string(),
            brand_color: brand_color(product.brand()),
            category: product.category().to_string(),
            status: product.status().to_string(),
            form_factor: product.form_factor().to_string(),
            firmware_version: product.firmware_version().to_string(),
            spec: product.spec().to_string(),
            identifier: product.identifier().to_string(),
            drivers: sorted.drivers().iter().map(DriverView::from_entry).collect(),
        }
    }
}

impl DriverView {
    pub fn from_entry(entry: &DriverEntry) -> Self {
        Self {
            os: entry.os().to_string(),
            os_label: short_os_label(entry.os()),
            model: entry.model().map(String::from),
            version: entry.version().to_string(),
        }
    }
}

/// Picks the badge colour for a brand (case-insensitive substring match)
pub fn brand_color(brand: &str) -> &'static str {
    let brand = brand.to_lowercase();
    BRAND_COLORS
        .iter()
        .find(|(needle, _)| brand.contains(needle))
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_BRAND_COLOR)
}

/// Shortens an OS name for compact display
///
/// Drops the first "Microsoft" and "Enterprise", trims, and keeps only the
/// first two space-separated words when the result is still too long.
pub fn short_os_label(os: &str) -> String {
    let label = os.replacen("Microsoft", "", 1).replacen("Enterprise", "", 1);
    let label = label.trim();

    if label.chars().count() > MAX_OS_LABEL_CHARS {
        label.split(' ').take(2).collect::<Vec<_>>().join(" ")
    } else {
        label.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::domain::{IdentityKey, ScalarSnapshot};

    #[test]
    fn test_brand_color() {
        assert_eq!(brand_color("NVIDIA"), "#76B900");
        assert_eq!(brand_color("AMD"), "#ED1C24");
        assert_eq!(brand_color("Intel Corporation"), "#0068B5");
        assert_eq!(brand_color("broadcom"), "#D93025");
        assert_eq!(brand_color("Mellanox"), DEFAULT_BRAND_COLOR);
        assert_eq!(brand_color(""), DEFAULT_BRAND_COLOR);
    }

    #[test]
    fn test_short_os_label_strips_vendor_words() {
        assert_eq!(
            short_os_label("Microsoft Windows Server 2022"),
            "Windows Server 2022"
        );
        assert_eq!(short_os_label("RHEL 9.2"), "RHEL 9.2");
    }

    #[test]
    fn test_short_os_label_keeps_two_words_when_long() {
        assert_eq!(
            short_os_label("SUSE Linux Enterprise Server 15 SP5"),
            "SUSE Linux"
        );
        assert_eq!(
            short_os_label("Oracle Linux 8 with UEK Release 7"),
            "Oracle Linux"
        );
    }

    #[test]
    fn test_product_view_sorts_drivers() {
        let mut product = Product::new(
            IdentityKey::new("X710").unwrap(),
            &ScalarSnapshot {
                brand: Some("Intel".to_string()),
                ..Default::default()
            },
        );
        product.push_driver(DriverEntry::new("Windows Server 2022", "1.12"));
        product.push_driver(DriverEntry::for_model("ESXi 8.0", "RX2530 M7", "1.9"));

        let view = ProductView::from_product(&product);
        assert_eq!(view.brand_color, "#0068B5");
        assert_eq!(view.drivers[0].os, "ESXi 8.0");
        assert_eq!(view.drivers[0].model.as_deref(), Some("RX2530 M7"));
        assert_eq!(view.drivers[1].os_label, "Windows Server 2022");
        assert_eq!(view.firmware_version, "N/A");
    }
}
