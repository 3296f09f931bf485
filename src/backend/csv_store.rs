use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Deserialize;

use crate::backend::interface::{LedgerStore, Result};
use crate::core::{Amount, Contribution, Ledger, Member};

const MEMBERS_FILE: &str = "members.csv";
const CONTRIBUTIONS_FILE: &str = "contributions.csv";

/// Stores a ledger as two CSV files in one directory: `members.csv`
/// (`name,monthly_amount`) and `contributions.csv`
/// (`member,date,amount`). Both carry a header row and are rewritten
/// in full on every save, rows in ledger order.
#[derive(Debug)]
pub struct CsvStore {
    dir: PathBuf,
}

/// Raw member row as it appears on disk. Amounts stay textual here so
/// malformed values can be coerced instead of failing the whole load.
#[derive(Deserialize)]
struct MemberRow {
    #[serde(default)]
    name: String,
    #[serde(default)]
    monthly_amount: String,
}

#[derive(Deserialize)]
struct ContributionRow {
    #[serde(default)]
    member: String,
    #[serde(default)]
    date: String,
    #[serde(default)]
    amount: String,
}

fn parse_amount(value: &str) -> Amount {
    value.trim().parse().unwrap_or(0.0)
}

impl CsvStore {
    pub fn new(dir: impl AsRef<Path>) -> CsvStore {
        CsvStore { dir: dir.as_ref().to_owned() }
    }

    /// The `data` directory under the working directory. Resolved once
    /// at startup by the caller; there is no other configuration.
    pub fn default_location() -> PathBuf {
        env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join("data")
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn members_path(&self) -> PathBuf {
        self.dir.join(MEMBERS_FILE)
    }

    fn contributions_path(&self) -> PathBuf {
        self.dir.join(CONTRIBUTIONS_FILE)
    }

    fn load_members(&self, ledger: &mut Ledger) -> Result<()> {
        let path = self.members_path();
        if !path.exists() {
            return Ok(());
        }
        let mut reader = csv::Reader::from_path(&path)?;
        for row in reader.deserialize::<MemberRow>() {
            let row = match row {
                Ok(row) => row,
                Err(err) => {
                    warn!("skipping unreadable member row: {}", err);
                    continue;
                }
            };
            if row.name.trim().is_empty() {
                continue;
            }
            let monthly = parse_amount(&row.monthly_amount).max(0.0);
            if !ledger.register_member(&row.name, monthly) {
                warn!("ignoring duplicate member row: {}", row.name.trim());
            }
        }
        return Ok(());
    }

    fn load_contributions(&self, ledger: &mut Ledger) -> Result<()> {
        let path = self.contributions_path();
        if !path.exists() {
            return Ok(());
        }
        let mut reader = csv::Reader::from_path(&path)?;
        for row in reader.deserialize::<ContributionRow>() {
            let row = match row {
                Ok(row) => row,
                Err(err) => {
                    warn!("skipping unreadable contribution row: {}", err);
                    continue;
                }
            };
            let member = row.member.trim();
            let date = row.date.trim();
            let amount = parse_amount(&row.amount);
            if member.is_empty() || date.is_empty() || amount <= 0.0 {
                warn!("skipping malformed contribution row for {:?}", row.member);
                continue;
            }
            if !ledger.record_contribution(member, amount, Some(date)) {
                warn!("skipping contribution for unregistered member {}", member);
            }
        }
        return Ok(());
    }
}

impl LedgerStore for CsvStore {
    /// Builds a fresh ledger from the two files. Missing files count
    /// as empty. Rows that cannot be salvaged (blank names, dates, or
    /// non-positive amounts after coercion, contributions for members
    /// absent from the registry) are dropped with a warning.
    fn load(&self) -> Result<Ledger> {
        let mut ledger = Ledger::new();
        self.load_members(&mut ledger)?;
        self.load_contributions(&mut ledger)?;
        info!(
            "loaded {} members and {} contributions from {}",
            ledger.list_members().len(),
            ledger.contributions().len(),
            self.dir.display()
        );
        return Ok(ledger);
    }

    fn save_members(&self, members: &[Member]) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(self.members_path())?;
        // explicit header so an empty ledger still writes one
        writer.write_record(["name", "monthly_amount"])?;
        for member in members {
            writer.serialize(member)?;
        }
        writer.flush()?;
        return Ok(());
    }

    fn save_contributions(&self, contributions: &[Contribution]) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(self.contributions_path())?;
        writer.write_record(["member", "date", "amount"])?;
        for contribution in contributions {
            writer.serialize(contribution)?;
        }
        writer.flush()?;
        return Ok(());
    }
}
