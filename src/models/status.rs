use serde::{Deserialize, Serialize};

/// Sign state of one log entry. The only transition is Out -> In; a member
/// leaving again gets a fresh entry instead of flipping an old one back.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Out,
    In,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Out => "out",
            Status::In => "in",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "out" => Some(Status::Out),
            "in" => Some(Status::In),
            _ => None,
        }
    }

    pub fn is_out(&self) -> bool {
        matches!(self, Status::Out)
    }

    pub fn is_in(&self) -> bool {
        matches!(self, Status::In)
    }
}
