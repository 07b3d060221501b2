// travel_booking/src/models/fare.rs

use crate::booking::record::BookingRecord;
use crate::models::flight::FlightOffer;
use serde::Serialize;

pub const TRAVEL_INSURANCE_PER_PASSENGER: u64 = 499;

/// Price breakdown for a booking, in whole units of the offer's currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FareSummary {
  pub currency: String,
  pub passengers: u64,
  pub base_fare: u64,
  pub extra_baggage: u64,
  pub travel_insurance: u64,
  pub total: u64,
}

impl FareSummary {
  pub fn compute(offer: &FlightOffer, record: &BookingRecord) -> Self {
    let passengers = record.passengers.len() as u64;
    let base_fare = offer.price * passengers;
    let extra_baggage = record.addons.extra_baggage.price();
    let travel_insurance = if record.addons.travel_insurance {
      TRAVEL_INSURANCE_PER_PASSENGER * passengers
    } else {
      0
    };

    Self {
      currency: offer.currency.clone(),
      passengers,
      base_fare,
      extra_baggage,
      travel_insurance,
      total: base_fare + extra_baggage + travel_insurance,
    }
  }

  pub fn has_extras(&self) -> bool {
    self.extra_baggage > 0 || self.travel_insurance > 0
  }
}

