use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Sort order carried in list queries as the `sortDir` parameter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SortDirection {
    #[serde(rename = "ASC")]
    Ascending,
    #[serde(rename = "DESC")]
    Descending,
}

impl SortDirection {
    /// Both directions, in the order selection controls present them.
    pub const ALL: [Self; 2] = [Self::Ascending, Self::Descending];

    /// Return the wire representation expected by the API.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }
}

impl Default for SortDirection {
    fn default() -> Self {
        Self::Ascending
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "ASC" => Ok(Self::Ascending),
            "DESC" => Ok(Self::Descending),
            _ => Err("unknown sort direction"),
        }
    }
}
