//! End-to-end suites for the contact-harness.
//!
//! Everything lives under `tests/`; the live suites are `#[ignore]`d and
//! need a deployed instance, `CONTACT_EMAIL`/`CONTACT_PASSWORD` and (for
//! the UI suites) a local Chrome:
//!
//! ```text
//! cargo test -p system-tests -- --ignored
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
