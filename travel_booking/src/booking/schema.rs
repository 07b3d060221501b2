// travel_booking/src/booking/schema.rs

//! Field rules for each booking step, with the messages shown next to the inputs.

use crate::booking::catalog::{ADDONS_STEP, PASSENGER_STEP, PAYMENT_STEP};
use crate::booking::record::{
  BookingRecord, BookingSlice, FieldPath, PassengerField, PassengerInfo, PaymentField, PaymentInfo,
};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{event, Level};
use waypoint::{Record, ValidationResult, Validator};

static EMAIL_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}$").unwrap());
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10}$").unwrap());
static CARD_NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{16}$").unwrap());
static EXPIRY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(0[1-9]|1[0-2])/[0-9]{2}$").unwrap());
static CVV_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{3}$").unwrap());

pub const MSG_NO_PASSENGERS: &str = "At least one passenger is required";
pub const MSG_TITLE: &str = "Title is required";
pub const MSG_FIRST_NAME: &str = "First name is required";
pub const MSG_LAST_NAME: &str = "Last name is required";
pub const MSG_EMAIL: &str = "Invalid email address";
pub const MSG_PHONE: &str = "Phone number must be 10 digits";
pub const MSG_CARD_HOLDER: &str = "Cardholder name is required";
pub const MSG_CARD_NUMBER: &str = "Invalid card number (must be 16 digits)";
pub const MSG_EXPIRY: &str = "Invalid expiry date (MM/YY)";
pub const MSG_CVV: &str = "Invalid CVV (must be 3 digits)";
pub const MSG_TERMS: &str = "You must agree to terms and conditions";

fn has_min_chars(value: &str, min: usize) -> bool {
  value.trim().chars().count() >= min
}

pub fn validate_passengers(passengers: &[PassengerInfo]) -> ValidationResult<FieldPath> {
  let mut result = ValidationResult::ok();
  if passengers.is_empty() {
    result.add(FieldPath::Passengers, MSG_NO_PASSENGERS);
    return result;
  }

  for (i, p) in passengers.iter().enumerate() {
    let path = |field| FieldPath::passenger(i, field);
    if !has_min_chars(&p.title, 1) {
      result.add(path(PassengerField::Title), MSG_TITLE);
    }
    if !has_min_chars(&p.first_name, 2) {
      result.add(path(PassengerField::FirstName), MSG_FIRST_NAME);
    }
    if !has_min_chars(&p.last_name, 2) {
      result.add(path(PassengerField::LastName), MSG_LAST_NAME);
    }
    if !EMAIL_RE.is_match(&p.email) {
      result.add(path(PassengerField::Email), MSG_EMAIL);
    }
    if !PHONE_RE.is_match(&p.phone) {
      result.add(path(PassengerField::Phone), MSG_PHONE);
    }
  }
  result
}

pub fn validate_payment(payment: &PaymentInfo) -> ValidationResult<FieldPath> {
  let mut result = ValidationResult::ok();
  let path = FieldPath::Payment;

  if !has_min_chars(&payment.card_holder_name, 2) {
    result.add(path(PaymentField::CardHolderName), MSG_CARD_HOLDER);
  }
  if !CARD_NUMBER_RE.is_match(&payment.card_number) {
    result.add(path(PaymentField::CardNumber), MSG_CARD_NUMBER);
  }
  if !EXPIRY_RE.is_match(&payment.expiry_date) {
    result.add(path(PaymentField::ExpiryDate), MSG_EXPIRY);
  }
  if !CVV_RE.is_match(&payment.cvv) {
    result.add(path(PaymentField::Cvv), MSG_CVV);
  }
  if !payment.agree_to_terms {
    result.add(path(PaymentField::AgreeToTerms), MSG_TERMS);
  }
  result
}

/// The booking form's validator. Stateless; add-ons are always valid.
#[derive(Debug, Clone, Copy, Default)]
pub struct BookingSchema;

impl Validator<BookingRecord> for BookingSchema {
  fn validate(&self, step_id: &str, slice: &BookingSlice) -> ValidationResult<FieldPath> {
    let result = match slice {
      BookingSlice::Passengers(passengers) => validate_passengers(passengers),
      BookingSlice::AddOns(_) => ValidationResult::ok(),
      BookingSlice::Payment(payment) => validate_payment(payment),
    };
    if !result.is_ok() {
      // Field paths only; values may be card data.
      let fields: Vec<String> = result.errors().keys().map(ToString::to_string).collect();
      event!(Level::DEBUG, step_id, ?fields, "Booking step failed validation.");
    }
    result
  }
}

impl BookingSchema {
  /// Validates every step of `record` at once.
  pub fn validate_record(&self, record: &BookingRecord) -> ValidationResult<FieldPath> {
    let mut merged = ValidationResult::ok();
    for step_id in [PASSENGER_STEP, ADDONS_STEP, PAYMENT_STEP] {
      if let Some(slice) = record.slice(step_id) {
        merged.merge(self.validate(step_id, &slice));
      }
    }
    merged
  }
}
