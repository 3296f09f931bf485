use std::fmt;

use serde::Serialize;
use colored::Colorize;

pub type Amount = f64;

/// One dated payment into the pot, attributed to a single member by
/// name. Contributions are append-only: once recorded they are never
/// edited, deleted or reordered.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct Contribution {
    member: String,
    date: String,
    amount: Amount,
}

impl Contribution {
    /// `date` is an ISO 8601 calendar date (`YYYY-MM-DD`). Callers are
    /// expected to hand in an already-formatted string; the ledger
    /// resolves missing dates through its clock before reaching here.
    pub fn new(member: &str, date: &str, amount: Amount) -> Contribution {
        Contribution {
            member: member.to_owned(),
            date: date.to_owned(),
            amount,
        }
    }

    pub fn member(&self) -> &str {
        &self.member
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }
}

impl fmt::Display for Contribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.date, self.member.bold(), self.amount)
    }
}
