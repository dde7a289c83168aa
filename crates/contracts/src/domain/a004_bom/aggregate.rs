use serde::{Deserialize, Serialize};

use crate::shared::validation::{require, ValidationError};

/// Row of the BOM list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BomHeader {
    pub id: i64,
    pub product_code: String,
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub revision: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub imported_at: Option<String>,
    #[serde(default)]
    pub line_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BomLine {
    pub line_no: u32,
    /// Depth in the product tree, 0 for direct components.
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub parent_code: Option<String>,
    #[serde(default)]
    pub item_code: String,
    #[serde(default)]
    pub item_name: String,
    pub quantity: f64,
    #[serde(default)]
    pub unit: String,
}

/// Parsed upload, not yet stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BomImportPreview {
    #[serde(default)]
    pub product_code: String,
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub revision: Option<String>,
    #[serde(default)]
    pub lines: Vec<BomLine>,
    /// Parser warnings from the server.
    #[serde(default)]
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBomRequest {
    pub product_code: String,
    pub product_name: String,
    pub revision: Option<String>,
    pub lines: Vec<BomLine>,
}

impl CreateBomRequest {
    pub fn from_preview(preview: &BomImportPreview) -> Result<Self, ValidationError> {
        require("Product code", &preview.product_code)?;
        if preview.lines.is_empty() {
            return Err(ValidationError::invalid("Lines", "the BOM has no lines"));
        }
        Ok(Self {
            product_code: preview.product_code.trim().to_string(),
            product_name: preview.product_name.trim().to_string(),
            revision: preview.revision.clone(),
            lines: preview.lines.clone(),
        })
    }
}

/// `GET /api/boms/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BomDetail {
    #[serde(flatten)]
    pub header: BomHeader,
    #[serde(default)]
    pub lines: Vec<BomLine>,
}

/// Query string of `GET /api/boms`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BomListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    pub page: usize,
    pub page_size: usize,
}

impl BomListQuery {
    pub fn first_page(page_size: usize) -> Self {
        Self {
            search: None,
            page: 1,
            page_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(no: u32) -> BomLine {
        BomLine {
            line_no: no,
            level: 0,
            parent_code: None,
            item_code: format!("I-{no}"),
            item_name: String::new(),
            quantity: 1.0,
            unit: "pcs".into(),
        }
    }

    #[test]
    fn test_create_requires_code_and_lines() {
        let mut preview = BomImportPreview::default();
        assert_eq!(
            CreateBomRequest::from_preview(&preview),
            Err(ValidationError::Required("Product code"))
        );
        preview.product_code = " KAB-01 ".into();
        assert!(CreateBomRequest::from_preview(&preview).is_err());
        preview.lines.push(line(1));
        let request = CreateBomRequest::from_preview(&preview).unwrap();
        assert_eq!(request.product_code, "KAB-01");
        assert_eq!(request.lines.len(), 1);
    }

    #[test]
    fn test_detail_flattens_header() {
        let json = r#"{"id":9,"productCode":"KAB-01","productName":"Cabinet","lineCount":1,
            "lines":[{"lineNo":1,"level":1,"itemCode":"S-2","quantity":2.5}]}"#;
        let detail: BomDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.header.id, 9);
        assert_eq!(detail.lines[0].level, 1);
    }
}
