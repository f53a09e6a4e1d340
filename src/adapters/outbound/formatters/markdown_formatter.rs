use crate::application::read_models::{
    CatalogMetadataView, CatalogReadModel, ProductView, SidebarNodeView,
};
use crate::ports::outbound::CatalogFormatter;
use crate::shared::Result;

/// Markdown table header for product fields
const FIELD_TABLE_HEADER: &str = "| Field | Value |\n|-------|-------|\n";

/// Markdown table header for driver entries
const DRIVER_TABLE_HEADER: &str = "| OS | Model | Version |\n|----|-------|---------|\n";

/// Markdown table header for sheet load results
const SHEET_TABLE_HEADER: &str = "| Sheet | Rows | Status |\n|-------|------|--------|\n";

/// MarkdownFormatter adapter for human-readable catalog output
///
/// Renders one card per product (field table, OS badges, driver table),
/// preceded by the load status and, when present, the sidebar tree as a
/// nested list.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn or_dash(text: &str) -> String {
        if text.trim().is_empty() {
            "-".to_string()
        } else {
            Self::escape_markdown_table_cell(text)
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, meta: &CatalogMetadataView, matched: usize) {
        output.push_str("# Driver Catalog\n\n");
        output.push_str(&format!("> {}\n\n", meta.status_message));

        if meta.used_sample_data {
            output.push_str(
                "**⚠️ Sample data:** no configured sheet could be loaded, the products below are built-in examples.\n\n",
            );
        }

        output.push_str(&format!(
            "_Generated by {} v{} at {}_\n\n",
            meta.tool_name, meta.tool_version, meta.generated_at
        ));

        if let Some(query) = &meta.search_query {
            output.push_str(&format!(
                "**Search:** `{}` ({} of {} products)\n\n",
                query, matched, meta.total_products
            ));
        }
    }

    fn render_sheets(&self, output: &mut String, meta: &CatalogMetadataView) {
        if meta.sheets.is_empty() {
            return;
        }

        output.push_str("## Sources\n\n");
        output.push_str(SHEET_TABLE_HEADER);
        for sheet in &meta.sheets {
            let status = match &sheet.error {
                Some(error) => format!("❌ {}", Self::escape_markdown_table_cell(error)),
                None => "✅ Loaded".to_string(),
            };
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&sheet.name),
                sheet.rows,
                status
            ));
        }
        output.push('\n');
    }

    fn render_sidebar(&self, output: &mut String, roots: &[SidebarNodeView]) {
        fn render_node(output: &mut String, node: &SidebarNodeView, depth: usize) {
            let indent = "  ".repeat(depth);
            if node.is_product {
                output.push_str(&format!("{}- {}\n", indent, node.label));
            } else {
                output.push_str(&format!("{}- **{}**\n", indent, node.label));
            }
            for child in &node.children {
                render_node(output, child, depth + 1);
            }
        }

        output.push_str("## Navigation\n\n");
        for root in roots {
            render_node(output, root, 0);
        }
        output.push('\n');
    }

    fn render_products(&self, output: &mut String, products: &[ProductView]) {
        output.push_str("## Products\n\n");

        if products.is_empty() {
            output.push_str("No matching products found.\n");
            return;
        }

        for product in products {
            self.render_product(output, product);
        }
    }

    fn render_product(&self, output: &mut String, product: &ProductView) {
        output.push_str(&format!("### {}\n\n", product.name));
        output.push_str(FIELD_TABLE_HEADER);
        output.push_str(&format!(
            "| Brand | {} (`{}`) |\n",
            Self::escape_markdown_table_cell(&product.brand),
            product.brand_color
        ));
        output.push_str(&format!("| Component | {} |\n", Self::or_dash(&product.category)));
        output.push_str(&format!(
            "| Form Factor | {} |\n",
            Self::or_dash(&product.form_factor)
        ));
        output.push_str(&format!(
            "| SWID / Status | {} \\| {} |\n",
            Self::or_dash(&product.identifier),
            Self::or_dash(&product.status)
        ));
        output.push_str(&format!("| FW | {} |\n", Self::or_dash(&product.firmware_version)));
        output.push_str(&format!("| Spec | {} |\n\n", Self::or_dash(&product.spec)));

        if product.drivers.is_empty() {
            output.push_str("_No driver data_\n\n");
            return;
        }

        let mut badges: Vec<&str> = Vec::new();
        for driver in &product.drivers {
            if !badges.contains(&driver.os_label.as_str()) {
                badges.push(&driver.os_label);
            }
        }
        let badges: Vec<String> = badges.iter().map(|b| format!("`{}`", b)).collect();
        output.push_str(&format!("**Supported OS:** {}\n\n", badges.join(" ")));

        output.push_str(DRIVER_TABLE_HEADER);
        for driver in &product.drivers {
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&driver.os),
                Self::or_dash(driver.model.as_deref().unwrap_or("")),
                Self::escape_markdown_table_cell(&driver.version)
            ));
        }
        output.push('\n');
    }
}

impl CatalogFormatter for MarkdownFormatter {
    fn format(&self, model: &CatalogReadModel) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, &model.metadata, model.products.len());
        self.render_sheets(&mut output, &model.metadata);

        if let Some(roots) = &model.sidebar {
            self.render_sidebar(&mut output, roots);
        }

        self.render_products(&mut output, &model.products);

        Ok(output)
    }
}
