//! Route suffixes and CSS selectors per application page.
//!
//! These mirror the deployed application's DOM; a selector change on the
//! remote side breaks here first.

/// Login page (`/login`).
pub mod login {
    /// Route suffix appended to the base URL.
    pub const ROUTE: &str = "login";
    /// The login form.
    pub const FORM: &str = "form";
    /// Button leading to the register page.
    pub const SIGN_UP_BUTTON: &str = "#signup";
    /// Email input.
    pub const EMAIL: &str = "#email";
    /// Password input.
    pub const PASSWORD: &str = "#password";
    /// Submit button.
    pub const SUBMIT: &str = "#submit";
}

/// Register page (`/addUser`).
pub mod register {
    /// Route suffix appended to the base URL.
    pub const ROUTE: &str = "addUser";
    /// The registration form.
    pub const FORM: &str = "#add-user";
    /// First name input.
    pub const FIRST_NAME: &str = "#firstName";
    /// Last name input.
    pub const LAST_NAME: &str = "#lastName";
    /// Email input.
    pub const EMAIL: &str = "#email";
    /// Password input.
    pub const PASSWORD: &str = "#password";
    /// Submit button.
    pub const SUBMIT: &str = "#submit";
    /// Validation error notification.
    pub const ERROR_NOTIFICATION: &str = "#error";
    /// Cancel button.
    pub const CANCEL: &str = "#cancel";
}

/// Contact list page (`/contactList`).
pub mod contact_list {
    /// Route suffix appended to the base URL.
    pub const ROUTE: &str = "contactList";
    /// Button leading to the add-contact page.
    pub const ADD_CONTACT_BUTTON: &str = "#add-contact";
    /// The contact table.
    pub const TABLE: &str = ".contactTable";
    /// Logout button.
    pub const LOGOUT: &str = "#logout";
    /// Full-name cells of every row.
    pub const ROW_FULL_NAMES: &str = "#myTable tr td:nth-child(2)";
    /// Full-name cell of the first row.
    pub const FIRST_ROW: &str = "#myTable tr:first-child td:nth-child(2)";
}

/// Add-contact page (`/addContact`).
pub mod add_contact {
    /// Route suffix appended to the base URL.
    pub const ROUTE: &str = "addContact";
    /// The add-contact form.
    pub const FORM: &str = "#add-contact";
    /// Logout button.
    pub const LOGOUT: &str = "#logout";
    /// Cancel button.
    pub const CANCEL: &str = "#cancel";
    /// Submit button.
    pub const SUBMIT: &str = "#submit";
}

/// Contact details page (`/contactDetails`).
pub mod contact_details {
    /// Route suffix appended to the base URL.
    pub const ROUTE: &str = "contactDetails";
    /// The details form.
    pub const FORM: &str = "#contactDetails";
    /// Logout button.
    pub const LOGOUT: &str = "#logout";
    /// Button back to the contact list.
    pub const RETURN: &str = "#return";
    /// Delete button (guarded by a confirm dialog).
    pub const DELETE: &str = "#delete";
    /// Button leading to the edit page.
    pub const EDIT: &str = "#edit-contact";
}

/// Edit-contact page (`/editContact`).
pub mod edit_contact {
    /// Route suffix appended to the base URL.
    pub const ROUTE: &str = "editContact";
    /// The edit form.
    pub const FORM: &str = "#edit-contact";
    /// Logout button.
    pub const LOGOUT: &str = "#logout";
    /// Cancel button, back to the details page.
    pub const CANCEL: &str = "#cancel";
    /// Submit button.
    pub const SUBMIT: &str = "#submit";
}

/// A contact field as rendered on the details, edit and add pages.
///
/// The application uses the same element ids on every page that shows
/// contact fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    /// First name
    FirstName,
    /// Last name
    LastName,
    /// Birthdate
    Birthdate,
    /// Email address
    Email,
    /// Phone number
    Phone,
    /// Street address, first line
    Street1,
    /// Street address, second line
    Street2,
    /// City
    City,
    /// State or province
    StateProvince,
    /// Postal code
    PostalCode,
    /// Country
    Country,
}

impl ContactField {
    /// CSS selector of the field's element.
    #[must_use]
    pub const fn selector(self) -> &'static str {
        match self {
            Self::FirstName => "#firstName",
            Self::LastName => "#lastName",
            Self::Birthdate => "#birthdate",
            Self::Email => "#email",
            Self::Phone => "#phone",
            Self::Street1 => "#street1",
            Self::Street2 => "#street2",
            Self::City => "#city",
            Self::StateProvince => "#stateProvince",
            Self::PostalCode => "#postalCode",
            Self::Country => "#country",
        }
    }

    /// All fields, in form order.
    #[must_use]
    pub const fn all() -> [Self; 11] {
        [
            Self::FirstName,
            Self::LastName,
            Self::Birthdate,
            Self::Email,
            Self::Phone,
            Self::Street1,
            Self::Street2,
            Self::City,
            Self::StateProvince,
            Self::PostalCode,
            Self::Country,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_selectors_are_ids() {
        for field in ContactField::all() {
            assert!(field.selector().starts_with('#'));
        }
    }

    #[test]
    fn test_field_count_matches_full_contact() {
        assert_eq!(ContactField::all().len(), 11);
    }

    #[test]
    fn test_routes_have_no_leading_slash() {
        // Routes are appended to a base URL that already ends with '/'.
        for route in [
            login::ROUTE,
            register::ROUTE,
            contact_list::ROUTE,
            add_contact::ROUTE,
            contact_details::ROUTE,
            edit_contact::ROUTE,
        ] {
            assert!(!route.starts_with('/'));
        }
    }
}
