use serde::{Deserialize, Serialize};

use crate::shared::validation::{optional_text, require, ValidationError};

/// Stock item (raw material, semi-finished or finished product).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: i64,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

fn default_active() -> bool {
    true
}

impl Item {
    pub fn matches_text(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        needle.is_empty()
            || self.code.to_lowercase().contains(&needle)
            || self.name.to_lowercase().contains(&needle)
    }
}

/// Create / update form payload. `id` is `None` for a new item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub code: String,
    pub name: String,
    pub category: Option<String>,
    pub unit: String,
    pub description: Option<String>,
    pub is_active: bool,
}

impl ItemDto {
    pub fn new() -> Self {
        Self {
            is_active: true,
            unit: "pcs".to_string(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require("Code", &self.code)?;
        require("Name", &self.name)?;
        require("Unit", &self.unit)?;
        if self.code.trim().chars().any(char::is_whitespace) {
            return Err(ValidationError::invalid("Code", "must not contain spaces"));
        }
        Ok(())
    }

    /// Trimmed copy ready to send.
    pub fn normalized(&self) -> Self {
        Self {
            id: self.id,
            code: self.code.trim().to_string(),
            name: self.name.trim().to_string(),
            category: self.category.as_deref().and_then(optional_text),
            unit: self.unit.trim().to_string(),
            description: self.description.as_deref().and_then(optional_text),
            is_active: self.is_active,
        }
    }
}

impl From<&Item> for ItemDto {
    fn from(item: &Item) -> Self {
        Self {
            id: Some(item.id),
            code: item.code.clone(),
            name: item.name.clone(),
            category: item.category.clone(),
            unit: item.unit.clone(),
            description: item.description.clone(),
            is_active: item.is_active,
        }
    }
}

/// Query string of `GET /api/items`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub only_active: bool,
    pub page: usize,
    pub page_size: usize,
}

impl ItemListQuery {
    pub fn first_page(page_size: usize) -> Self {
        Self {
            search: None,
            category: None,
            only_active: false,
            page: 1,
            page_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_fields() {
        let mut dto = ItemDto::new();
        assert_eq!(dto.validate(), Err(ValidationError::Required("Code")));
        dto.code = "SAC-2MM".into();
        assert_eq!(dto.validate(), Err(ValidationError::Required("Name")));
        dto.name = "Sheet 2mm".into();
        assert!(dto.validate().is_ok());
        dto.unit = "  ".into();
        assert_eq!(dto.validate(), Err(ValidationError::Required("Unit")));
    }

    #[test]
    fn test_code_without_spaces() {
        let mut dto = ItemDto::new();
        dto.code = "SAC 2MM".into();
        dto.name = "Sheet".into();
        assert!(matches!(dto.validate(), Err(ValidationError::Invalid { field: "Code", .. })));
    }

    #[test]
    fn test_normalized_drops_blank_optionals() {
        let dto = ItemDto {
            code: " P-1 ".into(),
            name: " Plate ".into(),
            category: Some("   ".into()),
            description: Some(" thick ".into()),
            ..ItemDto::new()
        }
        .normalized();
        assert_eq!(dto.code, "P-1");
        assert_eq!(dto.category, None);
        assert_eq!(dto.description.as_deref(), Some("thick"));
    }

    #[test]
    fn test_item_parses_with_defaults() {
        let item: Item =
            serde_json::from_str(r#"{"id":3,"code":"B-10","name":"Bolt M10"}"#).unwrap();
        assert!(item.is_active);
        assert!(item.matches_text("m10"));
        assert!(!item.matches_text("nut"));
        assert_eq!(ItemDto::from(&item).id, Some(3));
    }
}
