pub mod aggregate;
pub mod fuel;

pub use aggregate::{normalize_plate, Vehicle, VehicleDto, VehicleListQuery};
pub use fuel::{FuelImportResult, FuelPurchase, FuelPurchaseQuery, FuelSummary, ImportRowError};
