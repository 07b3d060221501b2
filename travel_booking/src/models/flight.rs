// travel_booking/src/models/flight.rs

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Airport {
  pub name: String,
  pub code: String,
  pub city: String,
  #[serde(default)]
  pub terminal: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
  pub time: String,
  pub date: String,
}

/// The flight being booked. Read-only for the whole wizard session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightOffer {
  pub id: String,
  pub airline: String,
  pub flight_number: String,
  pub origin: Airport,
  pub destination: Airport,
  pub departure: Schedule,
  pub arrival: Schedule,
  pub duration: String,
  #[serde(default)]
  pub stops: u32,
  /// Fare per passenger, in whole currency units.
  pub price: u64,
  pub currency: String,
}

impl FlightOffer {
  /// "IndiGo 6E 204"
  pub fn flight_label(&self) -> String {
    format!("{} {}", self.airline, self.flight_number)
  }

  /// "DEL to BOM"
  pub fn route(&self) -> String {
    format!("{} to {}", self.origin.code, self.destination.code)
  }
}

/// The offer shown on the flight detail page.
pub fn sample_offer() -> FlightOffer {
  FlightOffer {
    id: "fl001".to_string(),
    airline: "IndiGo".to_string(),
    flight_number: "6E 204".to_string(),
    origin: Airport {
      name: "Indira Gandhi International Airport".to_string(),
      code: "DEL".to_string(),
      city: "New Delhi".to_string(),
      terminal: Some("T3".to_string()),
    },
    destination: Airport {
      name: "Chhatrapati Shivaji Maharaj International Airport".to_string(),
      code: "BOM".to_string(),
      city: "Mumbai".to_string(),
      terminal: Some("T2".to_string()),
    },
    departure: Schedule {
      time: "10:00 AM".to_string(),
      date: "2024-09-15".to_string(),
    },
    arrival: Schedule {
      time: "12:05 PM".to_string(),
      date: "2024-09-15".to_string(),
    },
    duration: "2h 5m".to_string(),
    stops: 0,
    price: 7500,
    currency: "INR".to_string(),
  }
}
