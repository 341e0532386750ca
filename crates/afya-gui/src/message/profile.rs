//! Profile form messages.

/// Messages for the profile form.
#[derive(Debug, Clone)]
pub enum ProfileMessage {
    /// First name field changed.
    FirstNameChanged(String),
    /// Last name field changed.
    LastNameChanged(String),
    /// Phone number field changed.
    PhoneChanged(String),
    /// User clicked save.
    SaveClicked,
}
