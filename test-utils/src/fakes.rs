//! Randomized field values for users and contacts.
//!
//! The remote application rejects duplicate emails and validates phone,
//! postal code and date formats, so generated values stay inside the
//! accepted shapes while remaining unique per test run.

use chrono::{Datelike, Utc};
use rand::Rng;
use rand::distributions::Alphanumeric;
use uuid::Uuid;

const FIRST_NAMES: &[&str] = &[
    "Alice", "Bruno", "Carmen", "Derek", "Elena", "Felix", "Greta", "Hugo", "Irene", "Jonas",
    "Katja", "Liam", "Mara", "Nina", "Oscar", "Paula", "Quentin", "Rosa", "Stefan", "Tilda",
];

const LAST_NAMES: &[&str] = &[
    "Andersen", "Bergman", "Castillo", "Dvorak", "Eriksen", "Fontaine", "Gallagher", "Hoffmann",
    "Ivanov", "Jansen", "Keller", "Lindgren", "Moreau", "Nakamura", "Olsen", "Petrov", "Quirke",
    "Rossi", "Svensson", "Takacs",
];

const STREET_SUFFIXES: &[&str] = &["Street", "Avenue", "Lane", "Road", "Boulevard", "Way"];

const CITIES: &[&str] = &[
    "Springfield", "Riverton", "Oakdale", "Fairview", "Lakewood", "Milltown", "Ashford",
    "Brookhaven", "Clearwater", "Danbury",
];

const STATES: &[&str] = &[
    "California", "Texas", "Oregon", "Vermont", "Ohio", "Maine", "Nevada", "Kansas", "Georgia",
    "Utah",
];

const COUNTRIES: &[&str] = &[
    "United States", "Canada", "Germany", "France", "Spain", "Norway", "Japan", "Brazil",
    "Australia", "Netherlands",
];

fn pick(pool: &[&str]) -> String {
    let idx = rand::thread_rng().gen_range(0..pool.len());
    pool[idx].to_string()
}

/// Random first name.
#[must_use]
pub fn first_name() -> String {
    pick(FIRST_NAMES)
}

/// Random last name.
#[must_use]
pub fn last_name() -> String {
    pick(LAST_NAMES)
}

/// Random email, unique per call.
///
/// The remote service enforces email uniqueness across users, so a random
/// suffix keeps repeated runs from colliding.
#[must_use]
pub fn email() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!(
        "{}.{}.{}@example.com",
        first_name().to_lowercase(),
        last_name().to_lowercase(),
        &suffix[..8]
    )
}

/// Random 8-character alphanumeric password.
#[must_use]
pub fn password() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(8)
        .map(char::from)
        .collect()
}

/// Random phone number: 10 digits, no leading zero.
#[must_use]
pub fn phone_number() -> String {
    let mut rng = rand::thread_rng();
    let mut digits = String::with_capacity(10);
    digits.push(char::from(b'1' + rng.gen_range(0..9)));
    for _ in 0..9 {
        digits.push(char::from(b'0' + rng.gen_range(0..10)));
    }
    digits
}

/// Random birthdate in `YYYY-MM-DD` form, for an age between 6 and 110.
#[must_use]
pub fn birthdate() -> String {
    let mut rng = rand::thread_rng();
    let age = rng.gen_range(6..=110);
    let year = Utc::now().year() - age;
    let month = rng.gen_range(1..=12);
    // Capped at 28 so the date is valid in every month.
    let day = rng.gen_range(1..=28);
    format!("{year:04}-{month:02}-{day:02}")
}

/// Random street name, e.g. `42 Keller Lane`.
#[must_use]
pub fn street_name() -> String {
    let number = rand::thread_rng().gen_range(1..=999);
    format!("{number} {} {}", last_name(), pick(STREET_SUFFIXES))
}

/// Random city name.
#[must_use]
pub fn city() -> String {
    pick(CITIES)
}

/// Random state or province name.
#[must_use]
pub fn state() -> String {
    pick(STATES)
}

/// Random 5-digit postal code.
#[must_use]
pub fn postal_code() -> String {
    let mut rng = rand::thread_rng();
    (0..5)
        .map(|_| char::from(b'0' + rng.gen_range(0..10)))
        .collect()
}

/// Random country name, capped at the 40 characters the API accepts.
#[must_use]
pub fn country() -> String {
    let mut name = pick(COUNTRIES);
    name.truncate(40);
    name
}
