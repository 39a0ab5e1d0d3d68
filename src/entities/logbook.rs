//! Service history entry shown in a vehicle's logbook.

use serde::{Deserialize, Serialize};

/// A past service certified by the shop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceHistoryItem {
    /// Service performed (e.g., "Tratamiento Cerámico 9H")
    pub title: String,
    /// Detail line
    pub subtitle: String,
    /// Date label as shown to the customer
    pub date: String,
    /// Odometer label at the time of service
    pub mileage: String,
    /// Icon name
    pub icon: String,
    /// Whether the shop certified the work
    pub verified: bool,
}
