//! Vehicle intake - The service sheet filled in before a sale with services closes.

use serde::{Deserialize, Serialize};

/// Default vehicle type preselected on the form.
pub const DEFAULT_VEHICLE_TYPE: &str = "Auto";

/// Vehicle intake form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleIntake {
    /// Vehicle type (e.g., "Auto", "SUV", "Moto")
    pub vehicle_type: String,
    /// License plate (e.g., "ABCD-12")
    pub plate: String,
    /// Body color
    pub color: String,
    /// Odometer reading as typed
    pub mileage: String,
    /// Free-form notes on the vehicle's condition
    pub notes: String,
}

impl Default for VehicleIntake {
    fn default() -> Self {
        Self {
            vehicle_type: DEFAULT_VEHICLE_TYPE.to_string(),
            plate: String::new(),
            color: String::new(),
            mileage: String::new(),
            notes: String::new(),
        }
    }
}

impl VehicleIntake {
    /// An intake for the given plate with every other field left at its default.
    pub fn for_plate(plate: impl Into<String>) -> Self {
        Self {
            plate: plate.into(),
            ..Self::default()
        }
    }

    /// A sheet is complete once the vehicle is identified by its plate.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.plate.trim().is_empty()
    }

    /// Plate upper-cased and trimmed, the way it is printed on the work order.
    #[must_use]
    pub fn normalized_plate(&self) -> String {
        self.plate.trim().to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_incomplete() {
        let intake = VehicleIntake::default();
        assert_eq!(intake.vehicle_type, "Auto");
        assert!(!intake.is_complete());
    }

    #[test]
    fn test_plate_completes_sheet() {
        let intake = VehicleIntake::for_plate(" abcd12 ");
        assert!(intake.is_complete());
        assert_eq!(intake.normalized_plate(), "ABCD12");
    }
}
