// tests/schema_tests.rs
use travel_booking::booking::schema::{validate_passengers, validate_payment};
use travel_booking::booking::{
  BookingRecord, BookingSchema, FieldPath, PassengerField, PassengerInfo, PaymentField, PaymentInfo,
};
use waypoint::{Record, Validator};

fn valid_passenger() -> PassengerInfo {
  PassengerInfo {
    title: "Ms".to_string(),
    first_name: "Ananya".to_string(),
    last_name: "Iyer".to_string(),
    email: "ananya.iyer@example.co.in".to_string(),
    phone: "9988776655".to_string(),
  }
}

fn valid_payment() -> PaymentInfo {
  PaymentInfo {
    card_holder_name: "Ananya Iyer".to_string(),
    card_number: "5500000000000004".to_string(),
    expiry_date: "01/29".to_string(),
    cvv: "321".to_string(),
    agree_to_terms: true,
  }
}

fn passenger_error(passenger: PassengerInfo, field: PassengerField) -> Option<String> {
  validate_passengers(&[passenger])
    .error_for(&FieldPath::passenger(0, field))
    .map(str::to_string)
}

fn payment_error(payment: PaymentInfo, field: PaymentField) -> Option<String> {
  validate_payment(&payment)
    .error_for(&FieldPath::Payment(field))
    .map(str::to_string)
}

#[test]
fn test_valid_slices_pass() {
  assert!(validate_passengers(&[valid_passenger()]).is_ok());
  assert!(validate_payment(&valid_payment()).is_ok());
}

#[test]
fn test_empty_passenger_list() {
  let result = validate_passengers(&[]);
  assert_eq!(
    result.error_for(&FieldPath::Passengers),
    Some("At least one passenger is required")
  );
  assert_eq!(result.len(), 1);
}

#[test]
fn test_blank_passenger_reports_every_field() {
  let result = validate_passengers(&[PassengerInfo::default()]);
  assert_eq!(result.len(), 5);
  assert_eq!(
    result.error_for(&FieldPath::passenger(0, PassengerField::Title)),
    Some("Title is required")
  );
  assert_eq!(
    result.error_for(&FieldPath::passenger(0, PassengerField::FirstName)),
    Some("First name is required")
  );
  assert_eq!(
    result.error_for(&FieldPath::passenger(0, PassengerField::LastName)),
    Some("Last name is required")
  );
  assert_eq!(
    result.error_for(&FieldPath::passenger(0, PassengerField::Email)),
    Some("Invalid email address")
  );
  assert_eq!(
    result.error_for(&FieldPath::passenger(0, PassengerField::Phone)),
    Some("Phone number must be 10 digits")
  );
}

#[test]
fn test_names_need_two_characters() {
  let mut p = valid_passenger();
  p.first_name = "A".to_string();
  p.last_name = "  ".to_string();
  let result = validate_passengers(&[p]);
  assert!(result.error_for(&FieldPath::passenger(0, PassengerField::FirstName)).is_some());
  assert!(result.error_for(&FieldPath::passenger(0, PassengerField::LastName)).is_some());
}

#[test]
fn test_email_format() {
  for bad in ["rohan", "rohan@", "@example.com", "rohan@example", "ro han@example.com"] {
    let mut p = valid_passenger();
    p.email = bad.to_string();
    assert_eq!(
      passenger_error(p, PassengerField::Email).as_deref(),
      Some("Invalid email address"),
      "accepted {}",
      bad
    );
  }
}

#[test]
fn test_phone_must_be_exactly_ten_digits() {
  for bad in ["987654321", "98765432100", "98765-4321", "abcdefghij"] {
    let mut p = valid_passenger();
    p.phone = bad.to_string();
    assert!(passenger_error(p, PassengerField::Phone).is_some(), "accepted {}", bad);
  }
}

#[test]
fn test_card_number_rules() {
  for bad in ["411111111111111", "41111111111111111", "4111 1111 1111 1111", ""] {
    let mut pay = valid_payment();
    pay.card_number = bad.to_string();
    assert_eq!(
      payment_error(pay, PaymentField::CardNumber).as_deref(),
      Some("Invalid card number (must be 16 digits)")
    );
  }
}

#[test]
fn test_expiry_month_range() {
  for (raw, ok) in [("01/29", true), ("12/30", true), ("00/29", false), ("13/29", false), ("1/29", false), ("01/2029", false)] {
    let mut pay = valid_payment();
    pay.expiry_date = raw.to_string();
    assert_eq!(payment_error(pay, PaymentField::ExpiryDate).is_none(), ok, "expiry {}", raw);
  }
}

#[test]
fn test_cvv_terms_and_holder() {
  let mut pay = valid_payment();
  pay.cvv = "12".to_string();
  pay.agree_to_terms = false;
  pay.card_holder_name = "A".to_string();
  let result = validate_payment(&pay);

  assert_eq!(
    result.error_for(&FieldPath::Payment(PaymentField::Cvv)),
    Some("Invalid CVV (must be 3 digits)")
  );
  assert_eq!(
    result.error_for(&FieldPath::Payment(PaymentField::AgreeToTerms)),
    Some("You must agree to terms and conditions")
  );
  assert_eq!(
    result.error_for(&FieldPath::Payment(PaymentField::CardHolderName)),
    Some("Cardholder name is required")
  );
}

#[test]
fn test_non_ascii_digits_are_rejected() {
  // Full-width, Arabic-Indic and Devanagari digits.
  let mut pay = valid_payment();
  pay.card_number = "４１１１１１１１１１１１１１１１".to_string();
  pay.cvv = "١٢٣".to_string();
  pay.expiry_date = "०१/२९".to_string();
  let result = validate_payment(&pay);
  assert!(result.error_for(&FieldPath::Payment(PaymentField::CardNumber)).is_some());
  assert!(result.error_for(&FieldPath::Payment(PaymentField::Cvv)).is_some());
  assert!(result.error_for(&FieldPath::Payment(PaymentField::ExpiryDate)).is_some());

  let mut p = valid_passenger();
  p.phone = "९८७६५४३२१०".to_string();
  assert_eq!(
    passenger_error(p, PassengerField::Phone).as_deref(),
    Some("Phone number must be 10 digits")
  );
}

#[test]
fn test_padded_contact_details_are_rejected() {
  let mut p = valid_passenger();
  p.phone = " 9876543210 ".to_string();
  assert!(passenger_error(p, PassengerField::Phone).is_some());

  let mut p = valid_passenger();
  p.email = " rohan@example.com ".to_string();
  assert_eq!(
    passenger_error(p, PassengerField::Email).as_deref(),
    Some("Invalid email address")
  );
}

#[test]
fn test_schema_dispatches_by_slice() {
  let record = BookingRecord::default();
  let schema = BookingSchema;

  let addons = record.slice("addons").unwrap();
  assert!(schema.validate("addons", &addons).is_ok());

  let passengers = record.slice("passenger").unwrap();
  assert!(!schema.validate("passenger", &passengers).is_ok());

  assert!(record.slice("confirmation").is_none());
}

#[test]
fn test_validate_record_merges_all_steps() {
  let mut record = BookingRecord::default();
  record.payment = valid_payment();
  let result = BookingSchema.validate_record(&record);
  assert_eq!(result.len(), 5);
  assert!(result.errors().keys().all(|k| matches!(k, FieldPath::Passenger(0, _))));

  record.passengers = vec![valid_passenger()];
  assert!(BookingSchema.validate_record(&record).is_ok());
}
