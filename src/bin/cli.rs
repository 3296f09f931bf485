use chipin::{Ledger,
    backend::{LedgerStore, CsvStore},
    contribution::Amount};

use std::path::PathBuf;
use anyhow::{bail, Context};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;

#[derive(Parser, Debug)]
#[clap(version, about, propagate_version = true)]
struct Cli {
    /// Directory holding the ledger files (defaults to ./data)
    #[clap(short, long, value_parser)]
    data_dir: Option<PathBuf>,

    /// Action to perform
    #[clap(subcommand)]
    action: Subcommands,
}

#[derive(Debug, Subcommand)]
enum Subcommands {
    /// List registered members
    Members,
    /// Register a new member
    AddMember(AddMember),
    /// Record a contribution for a member
    Record(Record),
    /// List contributions, optionally for a single member
    History(History),
    /// Show per-member totals as a bar chart
    Totals,
}

#[derive(Args, Debug)]
struct AddMember {
    /// Name of the member to register
    #[clap(value_parser)]
    name: String,

    /// Reference monthly amount, informational only
    #[clap(short, long, value_parser, default_value_t = 0.0)]
    monthly: Amount,
}

#[derive(Args, Debug)]
struct Record {
    /// Name of the member the contribution belongs to
    #[clap(short, long, value_parser)]
    member: String,

    /// Contributed amount, must be positive
    #[clap(short, long, value_parser)]
    amount: Amount,

    /// Contribution date as YYYY-MM-DD, defaults to today
    #[clap(short, long, value_parser)]
    date: Option<String>,
}

#[derive(Args, Debug)]
struct History {
    /// Restrict the listing to one member
    #[clap(short, long, value_parser)]
    member: Option<String>,
}

fn print_members(ledger: &Ledger) {
    let members = ledger.list_members();
    if members.is_empty() {
        println!("No members yet.");
        return;
    }
    for member in members {
        println!("{} (monthly: {})", member.to_string().bold(), member.monthly_amount());
    }
}

fn print_history(ledger: &Ledger, member: Option<&str>) {
    let history = ledger.history(member);
    if history.is_empty() {
        println!("No contributions yet.");
        return;
    }
    for contribution in history {
        println!("{}", contribution);
    }
    if let Some(name) = member {
        println!("Total: {}", ledger.total_for_member(name));
    }
}

const BAR_WIDTH: usize = 40;

fn print_totals(ledger: &Ledger) {
    let totals = ledger.totals_by_member();
    if totals.is_empty() {
        println!("No members yet.");
        return;
    }
    let max = totals.iter().map(|(_, total)| *total).fold(0.0, Amount::max);
    for (name, total) in &totals {
        let width = if max > 0.0 {
            (total / max * BAR_WIDTH as Amount).round() as usize
        } else {
            0
        };
        println!("{:>12} {} {:.2}", name, "█".repeat(width).green(), total);
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Cli::parse();

    let data_dir = args.data_dir.unwrap_or_else(CsvStore::default_location);
    let store = CsvStore::new(&data_dir);
    let mut ledger = store.load()
        .with_context(|| format!("failed to load ledger from {}", data_dir.display()))?;

    match args.action {
        Subcommands::Members => {
            print_members(&ledger);
        },
        Subcommands::History(history) => {
            print_history(&ledger, history.member.as_deref());
        },
        Subcommands::Totals => {
            print_totals(&ledger);
        },
        Subcommands::AddMember(add_member) => {
            if !ledger.register_member(&add_member.name, add_member.monthly) {
                bail!("member {:?} already exists or the name is empty", add_member.name);
            }
            store.save(&ledger).context("failed to save ledger")?;
            println!("Added member {}", add_member.name.trim().bold());
        },
        Subcommands::Record(record) => {
            if let Some(date) = &record.date {
                NaiveDate::parse_from_str(date, "%Y-%m-%d")
                    .with_context(|| format!("invalid date {:?}, expected YYYY-MM-DD", date))?;
            }
            if !ledger.record_contribution(&record.member, record.amount, record.date.as_deref()) {
                bail!("could not record contribution: check the member name and that the amount is positive");
            }
            store.save(&ledger).context("failed to save ledger")?;
            println!("Recorded {} for {}", record.amount, record.member.bold());
        },
    }

    return Ok(());
}
