//! Date display utilities.

use std::fmt;

use jiff::civil::Date;

/// A wrapper around an optional contract date that provides consistent
/// formatting via the `Display` trait.
///
/// Dates print as `YYYY-MM-DD`; a date that has not been set yet prints as
/// `Not set`.
pub struct ContractDate<'a>(pub Option<&'a Date>);

impl<'a> ContractDate<'a> {
    pub fn new(date: &'a Option<Date>) -> Self {
        Self(date.as_ref())
    }
}

impl fmt::Display for ContractDate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(date) => write!(f, "{}", date.strftime("%Y-%m-%d")),
            None => write!(f, "Not set"),
        }
    }
}
