//! Page objects for the contact-management application.
//!
//! Every page object wraps a [`PageHandle`] and exposes the interactions
//! and shape assertions its page supports. Construction never touches the
//! browser; call `open` (or navigate through another page) first.

mod add_contact;
mod base;
mod contact_details;
mod contact_list;
mod edit_contact;
mod login;
mod register;

pub use add_contact::{AddNewContactPage, ContactForm};
pub use base::PageHandle;
pub use contact_details::ContactDetailsPage;
pub use contact_list::ContactListPage;
pub use edit_contact::EditContactPage;
pub use login::LoginPage;
pub use register::RegisterPage;
