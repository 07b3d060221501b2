// travel_booking/src/booking/record.rs

//! The booking record and its closed set of field paths.

use crate::booking::catalog::{ADDONS_STEP, PASSENGER_STEP, PAYMENT_STEP};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use waypoint::{Record, WizardError, WizardResult};

// --- Record shape ---

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PassengerInfo {
  pub title: String,
  pub first_name: String,
  pub last_name: String,
  pub email: String,
  pub phone: String,
}

impl PassengerInfo {
  pub fn full_name(&self) -> String {
    [self.title.trim(), self.first_name.trim(), self.last_name.trim()]
      .iter()
      .filter(|part| !part.is_empty())
      .copied()
      .collect::<Vec<_>>()
      .join(" ")
  }
}

/// Extra checked-baggage allowance, priced per booking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BaggageTier {
  #[default]
  #[serde(rename = "0kg")]
  None,
  #[serde(rename = "5kg")]
  FiveKg,
  #[serde(rename = "10kg")]
  TenKg,
}

impl BaggageTier {
  pub const ALL: [BaggageTier; 3] = [BaggageTier::None, BaggageTier::FiveKg, BaggageTier::TenKg];

  pub fn as_str(&self) -> &'static str {
    match self {
      BaggageTier::None => "0kg",
      BaggageTier::FiveKg => "5kg",
      BaggageTier::TenKg => "10kg",
    }
  }

  /// Flat price for the whole booking.
  pub fn price(&self) -> u64 {
    match self {
      BaggageTier::None => 0,
      BaggageTier::FiveKg => 1500,
      BaggageTier::TenKg => 2500,
    }
  }
}

impl FromStr for BaggageTier {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    BaggageTier::ALL
      .iter()
      .find(|tier| tier.as_str() == s)
      .copied()
      .ok_or_else(|| format!("unknown baggage tier '{}' (expected 0kg, 5kg or 10kg)", s))
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddOns {
  pub extra_baggage: BaggageTier,
  pub travel_insurance: bool,
}

#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentInfo {
  pub card_holder_name: String,
  pub card_number: String,
  pub expiry_date: String,
  pub cvv: String,
  pub agree_to_terms: bool,
}

impl PaymentInfo {
  pub fn card_last_four(&self) -> String {
    let digits: Vec<char> = self.card_number.chars().filter(char::is_ascii_digit).collect();
    digits[digits.len().saturating_sub(4)..].iter().collect()
  }

  /// A copy safe to print: card number reduced to its last four digits, CVV blanked.
  pub fn masked(&self) -> Self {
    Self {
      card_number: if self.card_number.is_empty() {
        String::new()
      } else {
        format!("**** **** **** {}", self.card_last_four())
      },
      cvv: if self.cvv.is_empty() { String::new() } else { "***".to_string() },
      ..self.clone()
    }
  }
}

// Card data must not end up in logs through `{:?}`.
impl fmt::Debug for PaymentInfo {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("PaymentInfo")
      .field("card_holder_name", &self.card_holder_name)
      .field("card_last_four", &self.card_last_four())
      .field("expiry_date", &self.expiry_date)
      .field("agree_to_terms", &self.agree_to_terms)
      .finish_non_exhaustive()
  }
}

/// Everything the booking wizard collects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
  pub passengers: Vec<PassengerInfo>,
  #[serde(default)]
  pub addons: AddOns,
  #[serde(default)]
  pub payment: PaymentInfo,
}

impl Default for BookingRecord {
  /// One blank passenger, no extras, empty payment details.
  fn default() -> Self {
    Self {
      passengers: vec![PassengerInfo::default()],
      addons: AddOns::default(),
      payment: PaymentInfo::default(),
    }
  }
}

impl BookingRecord {
  pub fn lead_passenger(&self) -> Option<&PassengerInfo> {
    self.passengers.first()
  }

  pub fn masked(&self) -> Self {
    Self {
      payment: self.payment.masked(),
      ..self.clone()
    }
  }
}

// --- Field paths ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PassengerField {
  Title,
  FirstName,
  LastName,
  Email,
  Phone,
}

impl PassengerField {
  pub const ALL: [PassengerField; 5] = [
    PassengerField::Title,
    PassengerField::FirstName,
    PassengerField::LastName,
    PassengerField::Email,
    PassengerField::Phone,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      PassengerField::Title => "title",
      PassengerField::FirstName => "firstName",
      PassengerField::LastName => "lastName",
      PassengerField::Email => "email",
      PassengerField::Phone => "phone",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AddOnField {
  ExtraBaggage,
  TravelInsurance,
}

impl AddOnField {
  pub const ALL: [AddOnField; 2] = [AddOnField::ExtraBaggage, AddOnField::TravelInsurance];

  pub fn as_str(&self) -> &'static str {
    match self {
      AddOnField::ExtraBaggage => "extraBaggage",
      AddOnField::TravelInsurance => "travelInsurance",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PaymentField {
  CardHolderName,
  CardNumber,
  ExpiryDate,
  Cvv,
  AgreeToTerms,
}

impl PaymentField {
  pub const ALL: [PaymentField; 5] = [
    PaymentField::CardHolderName,
    PaymentField::CardNumber,
    PaymentField::ExpiryDate,
    PaymentField::Cvv,
    PaymentField::AgreeToTerms,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      PaymentField::CardHolderName => "cardHolderName",
      PaymentField::CardNumber => "cardNumber",
      PaymentField::ExpiryDate => "expiryDate",
      PaymentField::Cvv => "cvv",
      PaymentField::AgreeToTerms => "agreeToTerms",
    }
  }
}

/// Address of one field (or the passenger list) inside a [`BookingRecord`].
///
/// String form: `passengers`, `passengers.<i>.<field>`, `addons.<field>`, `payment.<field>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldPath {
  Passengers,
  Passenger(usize, PassengerField),
  AddOn(AddOnField),
  Payment(PaymentField),
}

impl FieldPath {
  pub fn passenger(index: usize, field: PassengerField) -> Self {
    FieldPath::Passenger(index, field)
  }
}

impl fmt::Display for FieldPath {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      FieldPath::Passengers => f.write_str("passengers"),
      FieldPath::Passenger(i, field) => write!(f, "passengers.{}.{}", i, field.as_str()),
      FieldPath::AddOn(field) => write!(f, "addons.{}", field.as_str()),
      FieldPath::Payment(field) => write!(f, "payment.{}", field.as_str()),
    }
  }
}

impl FromStr for FieldPath {
  type Err = WizardError;

  fn from_str(s: &str) -> WizardResult<Self> {
    let invalid = |reason: &str| WizardError::InvalidPath {
      path: s.to_string(),
      reason: reason.to_string(),
    };

    let parts: Vec<&str> = s.split('.').collect();
    match parts.as_slice() {
      ["passengers"] => Ok(FieldPath::Passengers),
      ["passengers", index, name] => {
        let index = index
          .parse::<usize>()
          .map_err(|_| invalid("passenger index must be a non-negative integer"))?;
        let field = PassengerField::ALL
          .iter()
          .find(|f| f.as_str() == *name)
          .ok_or_else(|| invalid("unknown passenger field"))?;
        Ok(FieldPath::Passenger(index, *field))
      }
      ["addons", name] => AddOnField::ALL
        .iter()
        .find(|f| f.as_str() == *name)
        .map(|f| FieldPath::AddOn(*f))
        .ok_or_else(|| invalid("unknown add-on field")),
      ["payment", name] => PaymentField::ALL
        .iter()
        .find(|f| f.as_str() == *name)
        .map(|f| FieldPath::Payment(*f))
        .ok_or_else(|| invalid("unknown payment field")),
      _ => Err(invalid("not a booking field")),
    }
  }
}

impl Serialize for FieldPath {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(self)
  }
}

impl<'de> Deserialize<'de> for FieldPath {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(serde::de::Error::custom)
  }
}

// --- Field values ---

/// A value read from or written to a [`FieldPath`].
///
/// Baggage tiers travel as their text form (`"5kg"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
  Flag(bool),
  Text(String),
  Passengers(Vec<PassengerInfo>),
}

impl FieldValue {
  pub fn text(value: impl Into<String>) -> Self {
    FieldValue::Text(value.into())
  }

  pub fn as_text(&self) -> Option<&str> {
    match self {
      FieldValue::Text(s) => Some(s),
      _ => None,
    }
  }

  pub fn as_flag(&self) -> Option<bool> {
    match self {
      FieldValue::Flag(b) => Some(*b),
      _ => None,
    }
  }
}

impl From<&str> for FieldValue {
  fn from(value: &str) -> Self {
    FieldValue::Text(value.to_string())
  }
}

impl From<bool> for FieldValue {
  fn from(value: bool) -> Self {
    FieldValue::Flag(value)
  }
}

impl From<BaggageTier> for FieldValue {
  fn from(value: BaggageTier) -> Self {
    FieldValue::Text(value.as_str().to_string())
  }
}

/// The part of the record one step validates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingSlice {
  Passengers(Vec<PassengerInfo>),
  AddOns(AddOns),
  Payment(PaymentInfo),
}

fn wrong_type(path: &FieldPath, expected: &str, got: &FieldValue) -> WizardError {
  let got = match got {
    FieldValue::Flag(_) => "a flag",
    FieldValue::Text(_) => "text",
    FieldValue::Passengers(_) => "a passenger list",
  };
  WizardError::InvalidValue {
    path: path.to_string(),
    reason: format!("expected {}, got {}", expected, got),
  }
}

fn passenger_field_mut(passenger: &mut PassengerInfo, field: PassengerField) -> &mut String {
  match field {
    PassengerField::Title => &mut passenger.title,
    PassengerField::FirstName => &mut passenger.first_name,
    PassengerField::LastName => &mut passenger.last_name,
    PassengerField::Email => &mut passenger.email,
    PassengerField::Phone => &mut passenger.phone,
  }
}

fn passenger_field(passenger: &PassengerInfo, field: PassengerField) -> &str {
  match field {
    PassengerField::Title => &passenger.title,
    PassengerField::FirstName => &passenger.first_name,
    PassengerField::LastName => &passenger.last_name,
    PassengerField::Email => &passenger.email,
    PassengerField::Phone => &passenger.phone,
  }
}

/// Text payment fields; `None` for the terms flag.
fn payment_text(payment: &PaymentInfo, field: PaymentField) -> Option<&str> {
  match field {
    PaymentField::CardHolderName => Some(&payment.card_holder_name),
    PaymentField::CardNumber => Some(&payment.card_number),
    PaymentField::ExpiryDate => Some(&payment.expiry_date),
    PaymentField::Cvv => Some(&payment.cvv),
    PaymentField::AgreeToTerms => None,
  }
}

fn payment_text_mut(payment: &mut PaymentInfo, field: PaymentField) -> Option<&mut String> {
  match field {
    PaymentField::CardHolderName => Some(&mut payment.card_holder_name),
    PaymentField::CardNumber => Some(&mut payment.card_number),
    PaymentField::ExpiryDate => Some(&mut payment.expiry_date),
    PaymentField::Cvv => Some(&mut payment.cvv),
    PaymentField::AgreeToTerms => None,
  }
}

impl Record for BookingRecord {
  type Path = FieldPath;
  type Value = FieldValue;
  type Slice = BookingSlice;

  fn get(&self, path: &FieldPath) -> FieldValue {
    match path {
      FieldPath::Passengers => FieldValue::Passengers(self.passengers.clone()),
      FieldPath::Passenger(i, field) => FieldValue::Text(
        self
          .passengers
          .get(*i)
          .map(|p| passenger_field(p, *field).to_string())
          .unwrap_or_default(),
      ),
      FieldPath::AddOn(AddOnField::ExtraBaggage) => self.addons.extra_baggage.into(),
      FieldPath::AddOn(AddOnField::TravelInsurance) => FieldValue::Flag(self.addons.travel_insurance),
      FieldPath::Payment(field) => match payment_text(&self.payment, *field) {
        Some(text) => FieldValue::Text(text.to_string()),
        None => FieldValue::Flag(self.payment.agree_to_terms),
      },
    }
  }

  fn set(&mut self, path: &FieldPath, value: FieldValue) -> WizardResult<()> {
    match (path, value) {
      (FieldPath::Passengers, FieldValue::Passengers(list)) => self.passengers = list,
      (FieldPath::Passenger(i, field), FieldValue::Text(text)) => {
        let len = self.passengers.len();
        if *i > len {
          return Err(WizardError::InvalidPath {
            path: path.to_string(),
            reason: format!("passenger index {} is past the end of a list of {}", i, len),
          });
        }
        // Writing one past the end adds a passenger.
        if *i == len {
          self.passengers.push(PassengerInfo::default());
        }
        *passenger_field_mut(&mut self.passengers[*i], *field) = text;
      }
      (FieldPath::AddOn(AddOnField::ExtraBaggage), FieldValue::Text(text)) => {
        self.addons.extra_baggage = text.parse().map_err(|reason| WizardError::InvalidValue {
          path: path.to_string(),
          reason,
        })?;
      }
      (FieldPath::AddOn(AddOnField::TravelInsurance), FieldValue::Flag(flag)) => self.addons.travel_insurance = flag,
      (FieldPath::Payment(PaymentField::AgreeToTerms), FieldValue::Flag(flag)) => self.payment.agree_to_terms = flag,
      (FieldPath::Payment(field), FieldValue::Text(text)) => match payment_text_mut(&mut self.payment, *field) {
        Some(target) => *target = text,
        None => return Err(wrong_type(path, "a flag", &FieldValue::Text(text))),
      },
      (path, value) => {
        let expected = match path {
          FieldPath::Passengers => "a passenger list",
          FieldPath::AddOn(AddOnField::TravelInsurance) | FieldPath::Payment(PaymentField::AgreeToTerms) => "a flag",
          _ => "text",
        };
        return Err(wrong_type(path, expected, &value));
      }
    }
    Ok(())
  }

  fn owning_step(path: &FieldPath) -> &'static str {
    match path {
      FieldPath::Passengers | FieldPath::Passenger(..) => PASSENGER_STEP,
      FieldPath::AddOn(_) => ADDONS_STEP,
      FieldPath::Payment(_) => PAYMENT_STEP,
    }
  }

  fn slice(&self, step_id: &str) -> Option<BookingSlice> {
    match step_id {
      PASSENGER_STEP => Some(BookingSlice::Passengers(self.passengers.clone())),
      ADDONS_STEP => Some(BookingSlice::AddOns(self.addons.clone())),
      PAYMENT_STEP => Some(BookingSlice::Payment(self.payment.clone())),
      _ => None,
    }
  }
}
