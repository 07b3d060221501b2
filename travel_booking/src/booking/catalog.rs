// travel_booking/src/booking/catalog.rs

use waypoint::{StepCatalog, WizardResult};

pub const PASSENGER_STEP: &str = "passenger";
pub const ADDONS_STEP: &str = "addons";
pub const PAYMENT_STEP: &str = "payment";
pub const CONFIRMATION_STEP: &str = "confirmation";

/// Step ids and display names, in order. The progress indicator renders these as-is.
pub const BOOKING_STEPS: [(&str, &str); 4] = [
  (PASSENGER_STEP, "Passenger Details"),
  (ADDONS_STEP, "Add-ons"),
  (PAYMENT_STEP, "Payment"),
  (CONFIRMATION_STEP, "Confirmation"),
];

pub fn booking_catalog() -> WizardResult<StepCatalog> {
  StepCatalog::new(&BOOKING_STEPS)
}
