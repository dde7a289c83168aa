use serde::{Deserialize, Serialize};

use crate::shared::validation::{optional_text, require, ValidationError};

pub const MIN_MODEL_YEAR: i32 = 1950;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: i64,
    pub plate: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub fuel_type: String,
    #[serde(default)]
    pub current_km: Option<i64>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub notes: Option<String>,
}

fn default_active() -> bool {
    true
}

impl Vehicle {
    pub fn display_name(&self) -> String {
        match (&self.brand, &self.model) {
            (Some(brand), Some(model)) => format!("{} ({} {})", self.plate, brand, model),
            (Some(brand), None) => format!("{} ({})", self.plate, brand),
            _ => self.plate.clone(),
        }
    }
}

/// Upper-case plate without any whitespace: `" 34 abc 123"` -> `"34ABC123"`.
pub fn normalize_plate(plate: &str) -> String {
    plate
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub plate: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub fuel_type: String,
    pub current_km: Option<i64>,
    pub is_active: bool,
    pub notes: Option<String>,
}

impl VehicleDto {
    pub fn new() -> Self {
        Self {
            is_active: true,
            fuel_type: "Diesel".to_string(),
            ..Default::default()
        }
    }

    /// `current_year` bounds the model year from above (`current_year + 1`).
    pub fn validate(&self, current_year: i32) -> Result<(), ValidationError> {
        require("Plate", &self.plate)?;
        if let Some(km) = self.current_km {
            if km < 0 {
                return Err(ValidationError::invalid("Current km", "cannot be negative"));
            }
        }
        if let Some(year) = self.year {
            let max = current_year + 1;
            if !(MIN_MODEL_YEAR..=max).contains(&year) {
                return Err(ValidationError::invalid(
                    "Year",
                    format!("must be between {} and {}", MIN_MODEL_YEAR, max),
                ));
            }
        }
        Ok(())
    }

    pub fn normalized(&self) -> Self {
        Self {
            id: self.id,
            plate: normalize_plate(&self.plate),
            brand: self.brand.as_deref().and_then(optional_text),
            model: self.model.as_deref().and_then(optional_text),
            year: self.year,
            fuel_type: self.fuel_type.trim().to_string(),
            current_km: self.current_km,
            is_active: self.is_active,
            notes: self.notes.as_deref().and_then(optional_text),
        }
    }
}

impl From<&Vehicle> for VehicleDto {
    fn from(v: &Vehicle) -> Self {
        Self {
            id: Some(v.id),
            plate: v.plate.clone(),
            brand: v.brand.clone(),
            model: v.model.clone(),
            year: v.year,
            fuel_type: v.fuel_type.clone(),
            current_km: v.current_km,
            is_active: v.is_active,
            notes: v.notes.clone(),
        }
    }
}

/// Query string of `GET /api/vehicles`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    pub only_active: bool,
    pub page: usize,
    pub page_size: usize,
}

impl VehicleListQuery {
    pub fn first_page(page_size: usize) -> Self {
        Self {
            search: None,
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
    fn test_plate_normalization() {
        assert_eq!(normalize_plate(" 34 abc 123 "), "34ABC123");
        assert_eq!(normalize_plate("06\tzz\n9"), "06ZZ9");
        let dto = VehicleDto {
            plate: "35 ab 77".into(),
            brand: Some(" ".into()),
            ..VehicleDto::new()
        }
        .normalized();
        assert_eq!(dto.plate, "35AB77");
        assert_eq!(dto.brand, None);
    }

    #[test]
    fn test_year_range() {
        let mut dto = VehicleDto::new();
        assert_eq!(dto.validate(2025), Err(ValidationError::Required("Plate")));
        dto.plate = "34ABC123".into();
        assert!(dto.validate(2025).is_ok());
        dto.year = Some(2026);
        assert!(dto.validate(2025).is_ok());
        dto.year = Some(2027);
        assert!(dto.validate(2025).is_err());
        dto.year = Some(1949);
        assert!(dto.validate(2025).is_err());
        dto.year = Some(1950);
        assert!(dto.validate(2025).is_ok());
        dto.current_km = Some(-1);
        assert!(dto.validate(2025).is_err());
    }

    #[test]
    fn test_display_name() {
        let v = Vehicle {
            id: 1,
            plate: "34ABC123".into(),
            brand: Some("Ford".into()),
            model: Some("Transit".into()),
            year: None,
            fuel_type: "Diesel".into(),
            current_km: None,
            is_active: true,
            notes: None,
        };
        assert_eq!(v.display_name(), "34ABC123 (Ford Transit)");
    }
}
