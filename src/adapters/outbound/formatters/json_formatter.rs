use crate::application::read_models::{
    CatalogMetadataView, CatalogReadModel, DriverView, ProductView, SheetReportView,
    SidebarNodeView,
};
use crate::ports::outbound::CatalogFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CatalogDocument<'a> {
    metadata: Metadata<'a>,
    products: Vec<Product<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sidebar: Option<Vec<SidebarNode<'a>>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Metadata<'a> {
    generated_at: &'a str,
    tool: Tool<'a>,
    status: &'a str,
    used_sample_data: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    search: Option<&'a str>,
    total_products: usize,
    matched_products: usize,
    sheets: Vec<Sheet<'a>>,
}

#[derive(Debug, Serialize)]
struct Tool<'a> {
    name: &'a str,
    version: &'a str,
}

#[derive(Debug, Serialize)]
struct Sheet<'a> {
    name: &'a str,
    rows: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Product<'a> {
    name: &'a str,
    brand: &'a str,
    brand_color: &'a str,
    category: &'a str,
    status: &'a str,
    form_factor: &'a str,
    firmware: &'a str,
    spec: &'a str,
    swid: &'a str,
    drivers: Vec<Driver<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Driver<'a> {
    os: &'a str,
    os_label: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<&'a str>,
    version: &'a str,
}

#[derive(Debug, Serialize)]
struct SidebarNode<'a> {
    label: &'a str,
    kind: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<SidebarNode<'a>>,
}

/// JsonFormatter adapter for machine-readable catalog output
///
/// Serializes the read model into a pretty-printed JSON document with
/// camelCase keys.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }

    fn metadata<'a>(meta: &'a CatalogMetadataView, matched: usize) -> Metadata<'a> {
        Metadata {
            generated_at: &meta.generated_at,
            tool: Tool {
                name: &meta.tool_name,
                version: &meta.tool_version,
            },
            status: &meta.status_message,
            used_sample_data: meta.used_sample_data,
            search: meta.search_query.as_deref(),
            total_products: meta.total_products,
            matched_products: matched,
            sheets: meta.sheets.iter().map(Self::sheet).collect(),
        }
    }

    fn sheet(sheet: &SheetReportView) -> Sheet<'_> {
        Sheet {
            name: &sheet.name,
            rows: sheet.rows,
            error: sheet.error.as_deref(),
        }
    }

    fn product(product: &ProductView) -> Product<'_> {
        Product {
            name: &product.name,
            brand: &product.brand,
            brand_color: product.brand_color,
            category: &product.category,
            status: &product.status,
            form_factor: &product.form_factor,
            firmware: &product.firmware_version,
            spec: &product.spec,
            swid: &product.identifier,
            drivers: product.drivers.iter().map(Self::driver).collect(),
        }
    }

    fn driver(driver: &DriverView) -> Driver<'_> {
        Driver {
            os: &driver.os,
            os_label: &driver.os_label,
            model: driver.model.as_deref(),
            version: &driver.version,
        }
    }

    fn sidebar_node(node: &SidebarNodeView) -> SidebarNode<'_> {
        SidebarNode {
            label: &node.label,
            kind: if node.is_product { "product" } else { "group" },
            children: node.children.iter().map(Self::sidebar_node).collect(),
        }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogFormatter for JsonFormatter {
    fn format(&self, model: &CatalogReadModel) -> Result<String> {
        let document = CatalogDocument {
            metadata: Self::metadata(&model.metadata, model.products.len()),
            products: model.products.iter().map(Self::product).collect(),
            sidebar: model
                .sidebar
                .as_ref()
                .map(|roots| roots.iter().map(Self::sidebar_node).collect()),
        };

        Ok(serde_json::to_string_pretty(&document)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn metadata() -> CatalogMetadataView {
        CatalogMetadataView {
            generated_at: "2024-01-15T10:30:00Z".to_string(),
            tool_name: "driver-catalog".to_string(),
            tool_version: "0.1.0".to_string(),
            status_message: "Loaded 1 product from 1 of 2 sheets".to_string(),
            used_sample_data: false,
            search_query: None,
            total_products: 1,
            sheets: vec![
                SheetReportView {
                    name: "RHEL".to_string(),
                    rows: 1,
                    error: None,
                },
                SheetReportView {
                    name: "ESXi".to_string(),
                    rows: 0,
                    error: Some("HTTP status 404".to_string()),
                },
            ],
        }
    }

    fn product() -> ProductView {
        ProductView {
            name: "X710".to_string(),
            brand: "Intel".to_string(),
            brand_color: "#0068B5",
            category: "Network".to_string(),
            status: "GA".to_string(),
            form_factor: "OCP".to_string(),
            firmware_version: "9.40".to_string(),
            spec: "10GbE".to_string(),
            identifier: "SW-1".to_string(),
            drivers: vec![DriverView {
                os: "RHEL 9".to_string(),
                os_label: "RHEL 9".to_string(),
                model: None,
                version: "2.20".to_string(),
            }],
        }
    }

    fn render(model: &CatalogReadModel) -> Value {
        let output = JsonFormatter::new().format(model).unwrap();
        serde_json::from_str(&output).unwrap()
    }

    #[test]
    fn test_json_document_shape() {
        let json = render(&CatalogReadModel {
            metadata: metadata(),
            products: vec![product()],
            sidebar: None,
        });

        assert_eq!(json["metadata"]["tool"]["name"], "driver-catalog");
        assert_eq!(json["metadata"]["matchedProducts"], 1);
        assert_eq!(json["metadata"]["usedSampleData"], false);
        assert!(json["metadata"].get("search").is_none());
        assert_eq!(json["metadata"]["sheets"][1]["error"], "HTTP status 404");
        assert!(json["metadata"]["sheets"][0].get("error").is_none());

        let product = &json["products"][0];
        assert_eq!(product["name"], "X710");
        assert_eq!(product["brandColor"], "#0068B5");
        assert_eq!(product["formFactor"], "OCP");
        assert_eq!(product["firmware"], "9.40");
        assert_eq!(product["swid"], "SW-1");
        assert_eq!(product["drivers"][0]["osLabel"], "RHEL 9");
        assert!(product["drivers"][0].get("model").is_none());
        assert!(json.get("sidebar").is_none());
    }

    #[test]
    fn test_json_sidebar_kinds() {
        let json = render(&CatalogReadModel {
            metadata: metadata(),
            products: vec![product()],
            sidebar: Some(vec![SidebarNodeView {
                label: "Intel".to_string(),
                is_product: false,
                children: vec![SidebarNodeView {
                    label: "X710".to_string(),
                    is_product: true,
                    children: vec![],
                }],
            }]),
        });

        let root = &json["sidebar"][0];
        assert_eq!(root["kind"], "group");
        assert_eq!(root["children"][0]["kind"], "product");
        assert!(root["children"][0].get("children").is_none());
    }

    #[test]
    fn test_json_empty_products() {
        let json = render(&CatalogReadModel {
            metadata: metadata(),
            products: vec![],
            sidebar: None,
        });
        assert_eq!(json["products"], Value::Array(vec![]));
        assert_eq!(json["metadata"]["matchedProducts"], 0);
    }
}
