//! BillBuddy reporting CLI
//!
//! Reads a group snapshot (JSON with `members`/`expenses`/`payments`
//! keys) and prints balances, settlement suggestions, spending stats, or
//! a data check. All computation lives in `billbuddy-engine`; this binary
//! only parses arguments and formats output.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use billbuddy_engine::{total_outstanding, Snapshot, SnapshotError};

#[derive(Parser, Debug)]
#[command(name = "billbuddy", version, about = "Shared-expense balance and settlement reports")]
struct Cli {
    /// Snapshot JSON file (defaults to stdin)
    #[arg(short = 'i', long = "input")]
    input: Option<String>,

    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Per-member net balances
    Balances,
    /// Who owes whom, with remaining amounts
    Settlements,
    /// Category and payer spending totals
    Stats,
    /// Scan the snapshot for data problems
    Check,
}

fn load_snapshot(input: Option<&str>) -> Result<Snapshot, SnapshotError> {
    let reader: Box<dyn Read> = match input {
        Some(path) => Box::new(File::open(path)?),
        None => Box::new(io::stdin()),
    };
    Snapshot::from_reader(BufReader::new(reader))
}

fn print_balances(snapshot: &Snapshot, json: bool) -> Result<(), SnapshotError> {
    let sheet = snapshot.balances();
    if json {
        println!("{}", serde_json::to_string_pretty(&sheet)?);
        return Ok(());
    }
    if sheet.is_empty() {
        println!("No members.");
        return Ok(());
    }
    println!("{:<20} {:>12} {:>12} {:>12}", "Member", "Paid", "Share", "Balance");
    for (name, balance) in sheet.ranked() {
        println!(
            "{:<20} {:>12.2} {:>12.2} {:>+12.2}",
            name,
            balance.total_paid(),
            balance.total_share(),
            balance.net()
        );
    }
    if sheet.is_settled() {
        println!("\nAll settled up.");
    }
    Ok(())
}

fn print_settlements(snapshot: &Snapshot, json: bool) -> Result<(), SnapshotError> {
    let records = snapshot.settlements();
    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }
    if records.is_empty() {
        println!("All settled up. No one owes anything.");
        return Ok(());
    }
    for record in &records {
        println!(
            "{} owes {} {:.2}  (paid {:.2} of {:.2}) [{}]",
            record.from(),
            record.to(),
            record.remaining_amount(),
            record.paid_amount(),
            record.total_owed(),
            record.status()
        );
        for share in record.expenses() {
            println!(
                "    {} ({}, {}): share {:.2} of {:.2} split {} ways",
                share.description(),
                share.category().unwrap_or("Uncategorized"),
                share.date(),
                share.share(),
                share.total_amount(),
                share.split_count()
            );
        }
        for payment in record.payments() {
            println!("    paid {:.2} on {}", payment.amount(), payment.date());
        }
    }
    println!(
        "\n{} settlement(s), outstanding: {:.2}",
        records.len(),
        total_outstanding(&records)
    );
    Ok(())
}

fn print_stats(snapshot: &Snapshot, json: bool) -> Result<(), SnapshotError> {
    let summary = snapshot.summary();
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }
    println!(
        "Members: {}  Expenses: {}  Payments: {}",
        summary.member_count, summary.expense_count, summary.payment_count
    );
    println!(
        "Total spent: {:.2}  Outstanding: {:.2}",
        summary.total_spent, summary.total_outstanding
    );

    let categories = billbuddy_engine::stats::category_totals(snapshot.expenses());
    if !categories.is_empty() {
        println!("\nBy category:");
        for (category, total) in &categories {
            println!("  {:<20} {:>12.2}", category, total);
        }
    }
    let payers = billbuddy_engine::stats::spending_by_payer(snapshot.expenses());
    if !payers.is_empty() {
        println!("\nBy payer:");
        for (payer, total) in &payers {
            println!("  {:<20} {:>12.2}", payer, total);
        }
    }
    Ok(())
}

fn run_check(snapshot: &Snapshot) -> bool {
    let issues = snapshot.validate();
    if issues.is_empty() {
        println!("Snapshot is clean.");
        return true;
    }
    for issue in &issues {
        println!("warning: {issue}");
    }
    println!("\n{} issue(s) found.", issues.len());
    false
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let snapshot = match load_snapshot(cli.input.as_deref()) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.command {
        Command::Balances => print_balances(&snapshot, cli.json),
        Command::Settlements => print_settlements(&snapshot, cli.json),
        Command::Stats => print_stats(&snapshot, cli.json),
        Command::Check => {
            if run_check(&snapshot) {
                Ok(())
            } else {
                return ExitCode::FAILURE;
            }
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
