use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::dates::serde_date;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelPurchase {
    pub id: i64,
    pub vehicle_id: i64,
    #[serde(default)]
    pub plate: String,
    #[serde(with = "serde_date")]
    pub purchase_date: NaiveDate,
    pub liters: f64,
    pub unit_price: f64,
    pub total_amount: f64,
    #[serde(default)]
    pub station: Option<String>,
    #[serde(default)]
    pub km: Option<i64>,
}

/// Query string of `GET /api/vehicles/{id}/fuel-purchases`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelPurchaseQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelImportResult {
    #[serde(default)]
    pub imported: u32,
    #[serde(default)]
    pub skipped: u32,
    #[serde(default)]
    pub errors: Vec<ImportRowError>,
}

impl FuelImportResult {
    pub fn summary(&self) -> String {
        format!(
            "{} imported, {} skipped, {} errors",
            self.imported,
            self.skipped,
            self.errors.len()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportRowError {
    pub row: u32,
    pub message: String,
}

/// Totals over a list of purchases.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FuelSummary {
    pub count: usize,
    pub total_liters: f64,
    pub total_amount: f64,
    /// `total_amount / total_liters`, zero when nothing was bought.
    pub average_unit_price: f64,
}

impl FuelSummary {
    pub fn from_purchases(purchases: &[FuelPurchase]) -> Self {
        let total_liters: f64 = purchases.iter().map(|p| p.liters).sum();
        let total_amount: f64 = purchases.iter().map(|p| p.total_amount).sum();
        let average_unit_price = if total_liters > 0.0 {
            total_amount / total_liters
        } else {
            0.0
        };
        Self {
            count: purchases.len(),
            total_liters,
            total_amount,
            average_unit_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn purchase(liters: f64, total: f64) -> FuelPurchase {
        FuelPurchase {
            id: 1,
            vehicle_id: 1,
            plate: "34ABC123".into(),
            purchase_date: NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
            liters,
            unit_price: total / liters,
            total_amount: total,
            station: None,
            km: None,
        }
    }

    #[test]
    fn test_summary_totals() {
        let summary = FuelSummary::from_purchases(&[purchase(40.0, 1600.0), purchase(60.0, 2600.0)]);
        assert_eq!(summary.count, 2);
        assert!((summary.total_liters - 100.0).abs() < 1e-9);
        assert!((summary.total_amount - 4200.0).abs() < 1e-9);
        assert!((summary.average_unit_price - 42.0).abs() < 1e-9);
    }

    #[test]
    fn test_summary_empty() {
        assert_eq!(FuelSummary::from_purchases(&[]), FuelSummary::default());
    }

    #[test]
    fn test_import_result_parses() {
        let json = r#"{"imported":12,"skipped":1,"errors":[{"row":7,"message":"unknown plate"}]}"#;
        let result: FuelImportResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.errors[0].row, 7);
        assert_eq!(result.summary(), "12 imported, 1 skipped, 1 errors");
    }

    #[test]
    fn test_purchase_date_with_time() {
        let json = r#"{"id":1,"vehicleId":2,"purchaseDate":"2025-10-03T08:15:00",
            "liters":10,"unitPrice":41.5,"totalAmount":415}"#;
        let p: FuelPurchase = serde_json::from_str(json).unwrap();
        assert_eq!(p.purchase_date, NaiveDate::from_ymd_opt(2025, 10, 3).unwrap());
    }
}
