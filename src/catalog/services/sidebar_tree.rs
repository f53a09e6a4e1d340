use crate::catalog::domain::Product;

/// Form factor used for network products that carry none
pub const DEFAULT_FORM_FACTOR: &str = "PCIE";

/// Label of the intermediate node under a network form factor
pub const NETWORK_GROUP_LABEL: &str = "Network";

/// One node of the sidebar grouping tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarNode {
    label: String,
    children: Vec<SidebarNode>,
    is_product: bool,
}

impl SidebarNode {
    fn group(label: &str) -> Self {
        Self {
            label: label.to_string(),
            children: Vec::new(),
            is_product: false,
        }
    }

    fn product(label: &str) -> Self {
        Self {
            label: label.to_string(),
            children: Vec::new(),
            is_product: true,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn children(&self) -> &[SidebarNode] {
        &self.children
    }

    pub fn is_product(&self) -> bool {
        self.is_product
    }
}

/// SidebarTree - Grouping of catalog products for navigation
///
/// Network products are grouped form factor → "Network" → brand →
/// product; everything else brand → product. Groups appear in order of
/// first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SidebarTree {
    roots: Vec<SidebarNode>,
}

impl SidebarTree {
    pub fn build(products: &[Product]) -> Self {
        let mut roots = Vec::new();

        for product in products {
            let path: Vec<&str> = if product.is_network() {
                let form_factor = match product.form_factor() {
                    "" => DEFAULT_FORM_FACTOR,
                    other => other,
                };
                vec![form_factor, NETWORK_GROUP_LABEL, product.brand()]
            } else {
                vec![product.brand()]
            };

            let mut level = &mut roots;
            for label in path {
                level = &mut group_mut(level, label).children;
            }
            level.push(SidebarNode::product(product.display_name()));
        }

        Self { roots }
    }

    pub fn roots(&self) -> &[SidebarNode] {
        &self.roots
    }

    /// Number of product leaves in the tree
    pub fn product_count(&self) -> usize {
        fn count(nodes: &[SidebarNode]) -> usize {
            nodes
                .iter()
                .map(|n| if n.is_product { 1 } else { count(&n.children) })
                .sum()
        }
        count(&self.roots)
    }
}

fn group_mut<'a>(nodes: &'a mut Vec<SidebarNode>, label: &str) -> &'a mut SidebarNode {
    let position = match nodes
        .iter()
        .position(|n| !n.is_product && n.label == label)
    {
        Some(position) => position,
        None => {
            nodes.push(SidebarNode::group(label));
            nodes.len() - 1
        }
    };
    &mut nodes[position]
}
