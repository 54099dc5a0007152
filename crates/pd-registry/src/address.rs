//! Postal address of a package destination.

use std::fmt;

/// A destination address as it appears in the package table.
///
/// Only `street` takes part in routing: it is the key looked up in the
/// distance table, byte for byte.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    pub street: String,
    pub city:   String,
    pub state:  String,
    pub zip:    String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        city:   impl Into<String>,
        state:  impl Into<String>,
        zip:    impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            city:   city.into(),
            state:  state.into(),
            zip:    zip.into(),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {} {}", self.street, self.city, self.state, self.zip)
    }
}
