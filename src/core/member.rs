use std::fmt;

use serde::Serialize;

use crate::core::contribution::Amount;

/// A named participant in the shared pot. The name acts as the
/// primary key and is always stored trimmed; `monthly_amount` is a
/// reference figure only and is never checked against what the
/// member actually contributes.
#[derive(Clone, PartialEq, Serialize)]
pub struct Member {
    name: String,
    monthly_amount: Amount,
}

impl Member {
    pub fn new(name: &str, monthly_amount: Amount) -> Member {
        Member { name: name.trim().to_owned(), monthly_amount }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn monthly_amount(&self) -> Amount {
        self.monthly_amount
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Debug for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Member {} ({})", self.name, self.monthly_amount)
    }
}
