// crates/shared-kernel/src/value_objects/formatted_date.rs
use std::{borrow::Borrow, fmt, ops::Deref};

use serde::{Deserialize, Serialize};

/// Text rendering of an instant in the fixed `dd/mm/yyyy hh:mm:ss` layout.
///
/// Values are produced by the date codec; the wrapper only marks the text as
/// already formatted so it can be compared verbatim against user input.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct FormattedDate(String);

impl FormattedDate {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for FormattedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Deref for FormattedDate {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for FormattedDate {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for FormattedDate {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for FormattedDate {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for FormattedDate {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl From<FormattedDate> for String {
    fn from(value: FormattedDate) -> Self {
        value.0
    }
}
