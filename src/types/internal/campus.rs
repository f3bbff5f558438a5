use std::fmt;
use std::str::FromStr;

use poem_openapi::Enum;

use crate::errors::InternalError;

/// Physical program location; the primary scoping dimension for queries
#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[oai(rename_all = "snake_case")]
pub enum Campus {
    #[default]
    Oahu,
    Hilo,
}

impl Campus {
    /// Value stored in campus columns
    pub fn as_str(&self) -> &'static str {
        match self {
            Campus::Oahu => "oahu",
            Campus::Hilo => "hilo",
        }
    }
}

impl FromStr for Campus {
    type Err = InternalError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "oahu" => Ok(Campus::Oahu),
            "hilo" => Ok(Campus::Hilo),
            other => Err(InternalError::parse("campus", format!("unknown campus '{}'", other))),
        }
    }
}

impl fmt::Display for Campus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Campus filter resolved for a single request
///
/// An explicit query parameter wins over the staff member's home campus.
/// `None` means the query is not scoped.
pub fn resolve_scope(requested: Option<Campus>, home: Option<Campus>) -> Option<Campus> {
    requested.or(home)
}
