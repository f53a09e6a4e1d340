use super::product::Product;

/// Immutable snapshot of one aggregation run
///
/// Products are held in order of first appearance of their identity key
/// across the concatenated row stream.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Products in first-appearance order with drivers sorted by OS name
    ///
    /// Sorting happens on export and never mutates the catalog, so repeated
    /// exports return identical lists.
    pub fn to_ordered_list(&self) -> Vec<Product> {
        self.products
            .iter()
            .map(Product::with_sorted_drivers)
            .collect()
    }

    /// Products exactly as aggregated (drivers in encounter order)
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, identity_key: &str) -> Option<&Product> {
        self.products
            .iter()
            .find(|p| p.identity_key().as_str() == identity_key)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Total number of driver entries across all products
    pub fn driver_count(&self) -> usize {
        self.products.iter().map(|p| p.drivers().len()).sum()
    }
}
