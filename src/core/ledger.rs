use crate::core::clock::{Clock, SystemClock};
use crate::core::contribution::{Amount, Contribution};
use crate::core::member::Member;

/// In-memory registry of members plus the append-only contribution
/// log. Mutations report success as a plain bool: a `false` means the
/// ledger was left untouched. Expected failures (duplicate name,
/// unknown member, bad amount) never panic and never return errors.
pub struct Ledger {
    members: Vec<Member>,
    contributions: Vec<Contribution>,
    clock: Box<dyn Clock>,
}

impl Ledger {
    pub fn new() -> Ledger {
        Ledger::with_clock(Box::new(SystemClock))
    }

    pub fn with_clock(clock: Box<dyn Clock>) -> Ledger {
        Ledger { members: Vec::new(), contributions: Vec::new(), clock }
    }

    /// Adds a member under the trimmed name. Fails on an empty name or
    /// a name already taken; the registry is unchanged on failure.
    pub fn register_member(&mut self, name: &str, monthly_amount: Amount) -> bool {
        let name = name.trim();
        if name.is_empty() || self.find_member(name).is_some() {
            return false;
        }
        self.members.push(Member::new(name, monthly_amount));
        return true;
    }

    pub fn find_member(&self, name: &str) -> Option<&Member> {
        let name = name.trim();
        self.members.iter().find(|member| member.name() == name)
    }

    /// Registration order, stable for the lifetime of the ledger.
    pub fn list_members(&self) -> &[Member] {
        &self.members
    }

    /// Appends a contribution for a registered member. `when` is an
    /// ISO date string; omitted, it resolves to today via the clock.
    /// Fails without mutating if the member is unknown or the amount
    /// is not strictly positive.
    pub fn record_contribution(&mut self, member: &str, amount: Amount, when: Option<&str>) -> bool {
        if amount <= 0.0 {
            return false;
        }
        let name = match self.find_member(member) {
            Some(member) => member.name().to_owned(),
            None => return false,
        };
        let date = match when {
            Some(date) => date.to_owned(),
            None => self.clock.today().to_string(),
        };
        self.contributions.push(Contribution::new(&name, &date, amount));
        return true;
    }

    /// The full log in recording order, or the subsequence for one
    /// member. An unknown member yields an empty list, not an error.
    pub fn history(&self, member: Option<&str>) -> Vec<&Contribution> {
        match member {
            None => self.contributions.iter().collect(),
            Some(name) => self.contributions.iter()
                .filter(|contribution| contribution.member() == name)
                .collect(),
        }
    }

    pub fn contributions(&self) -> &[Contribution] {
        &self.contributions
    }

    pub fn total_for_member(&self, member: &str) -> Amount {
        return self.contributions.iter()
            .filter(|contribution| contribution.member() == member)
            .map(|contribution| contribution.amount())
            .sum();
    }

    /// One entry per registered member in registration order; members
    /// without contributions appear with 0. Contributions naming an
    /// unregistered member (possible after hand-edited files) count
    /// towards nobody.
    pub fn totals_by_member(&self) -> Vec<(String, Amount)> {
        let mut totals: Vec<(String, Amount)> = self.members.iter()
            .map(|member| (member.name().to_owned(), 0.0))
            .collect();

        for contribution in &self.contributions {
            if let Some(entry) = totals.iter_mut().find(|(name, _)| name.as_str() == contribution.member()) {
                entry.1 += contribution.amount();
            }
        }
        return totals;
    }
}

impl Default for Ledger {
    fn default() -> Ledger {
        Ledger::new()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::core::clock::FixedClock;
    use crate::core::Ledger;

    fn family_ledger() -> Ledger {
        let mut ledger = Ledger::new();
        assert!(ledger.register_member("Alice", 0.0));
        assert!(ledger.register_member("Bob", 50.0));
        return ledger;
    }

    #[test]
    fn register_and_list_members() {
        let ledger = family_ledger();

        let members = ledger.list_members();
        assert_eq!(members.len(), 2);
        assert_eq!(members[0].name(), "Alice");
        assert_eq!(members[1].name(), "Bob");
        assert_eq!(members[1].monthly_amount(), 50.0);
    }

    #[test]
    fn register_duplicate_fails() {
        let mut ledger = family_ledger();

        assert!(!ledger.register_member("Alice", 10.0));
        assert!(!ledger.register_member("  Alice  ", 10.0));
        assert_eq!(ledger.list_members().len(), 2);
    }

    #[test]
    fn register_blank_name_fails() {
        let mut ledger = Ledger::new();

        assert!(!ledger.register_member("", 0.0));
        assert!(!ledger.register_member("   ", 0.0));
        assert!(ledger.list_members().is_empty());
    }

    #[test]
    fn register_trims_name() {
        let mut ledger = Ledger::new();

        assert!(ledger.register_member("  Carol ", 0.0));
        assert!(ledger.find_member("Carol").is_some());
        assert_eq!(ledger.list_members()[0].name(), "Carol");
    }

    #[test]
    fn find_member_is_exact() {
        let ledger = family_ledger();

        assert!(ledger.find_member("Alice").is_some());
        assert!(ledger.find_member(" Alice ").is_some());
        assert!(ledger.find_member("alice").is_none());
        assert!(ledger.find_member("Ali").is_none());
    }

    #[test]
    fn record_for_unknown_member_fails() {
        let mut ledger = family_ledger();

        assert!(!ledger.record_contribution("Mallory", 10.0, None));
        assert!(ledger.history(None).is_empty());
    }

    #[test]
    fn record_non_positive_amount_fails() {
        let mut ledger = family_ledger();

        assert!(!ledger.record_contribution("Alice", 0.0, None));
        assert!(!ledger.record_contribution("Alice", -5.0, None));
        assert!(ledger.history(None).is_empty());
    }

    #[test]
    fn record_with_explicit_date() {
        let mut ledger = family_ledger();

        assert!(ledger.record_contribution("Alice", 20.0, Some("2025-01-01")));

        let history = ledger.history(None);
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].member(), "Alice");
        assert_eq!(history[0].date(), "2025-01-01");
        assert_eq!(history[0].amount(), 20.0);
    }

    #[test]
    fn record_defaults_to_clock_today() {
        let today = NaiveDate::from_ymd_opt(2025, 9, 15).unwrap();
        let mut ledger = Ledger::with_clock(Box::new(FixedClock(today)));
        ledger.register_member("Alice", 0.0);

        assert!(ledger.record_contribution("Alice", 12.5, None));
        assert_eq!(ledger.history(None)[0].date(), "2025-09-15");
    }

    #[test]
    fn history_filters_by_member_in_order() {
        let mut ledger = family_ledger();
        ledger.record_contribution("Alice", 10.0, Some("2025-01-01"));
        ledger.record_contribution("Bob", 3.0, Some("2025-01-02"));
        ledger.record_contribution("Alice", 5.0, Some("2025-01-03"));

        let alice = ledger.history(Some("Alice"));
        assert_eq!(alice.len(), 2);
        assert_eq!(alice[0].amount(), 10.0);
        assert_eq!(alice[1].amount(), 5.0);

        assert!(ledger.history(Some("Mallory")).is_empty());
        assert_eq!(ledger.history(None).len(), 3);
    }

    #[test]
    fn total_for_single_member() {
        let mut ledger = family_ledger();
        ledger.record_contribution("Alice", 10.0, Some("2025-01-01"));
        ledger.record_contribution("Alice", 5.0, Some("2025-01-02"));
        ledger.record_contribution("Bob", 3.0, Some("2025-01-03"));

        assert_eq!(ledger.total_for_member("Alice"), 15.0);
        assert_eq!(ledger.total_for_member("Bob"), 3.0);
        assert_eq!(ledger.total_for_member("Mallory"), 0.0);
    }

    #[test]
    fn totals_cover_all_registered_members() {
        let mut ledger = family_ledger();
        ledger.register_member("Carol", 0.0);
        ledger.record_contribution("Alice", 10.0, Some("2025-01-01"));
        ledger.record_contribution("Alice", 5.0, Some("2025-01-02"));
        ledger.record_contribution("Bob", 3.0, Some("2025-01-03"));

        let totals = ledger.totals_by_member();
        assert_eq!(totals.len(), 3);
        assert_eq!(totals[0], ("Alice".to_owned(), 15.0));
        assert_eq!(totals[1], ("Bob".to_owned(), 3.0));
        assert_eq!(totals[2], ("Carol".to_owned(), 0.0));
    }
}
