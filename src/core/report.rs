//! Dashboard and report generation.
//!
//! This module turns the shop's collections into structured, display-ready
//! data: job cards for the bay overview, ledger summaries, currency and
//! progress-bar formatting. Everything here is read-only.

use crate::{
    core::{
        customers::CustomerDirectory,
        ledger::{Ledger, LedgerTotals},
        tracker::{compute_progress, is_finished},
    },
    entities::{Job, ServiceHistoryItem, Transaction, TransactionKind},
};

/// Vehicle label shown when a job's customer is unknown.
pub const NO_VEHICLE: &str = "Sin Vehículo";

/// One bay on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobCard {
    /// Job id, used to open its tracker
    pub job_id: i64,
    /// Bay label
    pub bay: String,
    /// Customer name, `None` in the degraded "no customer" state
    pub customer_name: Option<String>,
    /// Vehicle description, or [`NO_VEHICLE`]
    pub vehicle: String,
    /// Completion percentage, `None` for a job without steps
    pub progress: Option<u8>,
    /// Every step done
    pub finished: bool,
}

/// Headline numbers for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSummary {
    /// One card per job, in board order
    pub jobs: Vec<JobCard>,
    /// Jobs with work still pending
    pub jobs_in_progress: usize,
    /// Jobs with every step done
    pub jobs_finished: usize,
    /// Customers on file
    pub customer_count: usize,
    /// Ledger aggregates
    pub totals: LedgerTotals,
}

/// Pairs a job with its customer, degrading gracefully if the customer is gone.
#[must_use]
pub fn job_card(job: &Job, customers: &CustomerDirectory) -> JobCard {
    let customer = customers.get(job.customer_id);
    JobCard {
        job_id: job.id,
        bay: job.bay.clone(),
        customer_name: customer.map(|c| c.name.clone()),
        vehicle: customer
            .map(|c| c.vehicle.as_str())
            .filter(|v| !v.is_empty())
            .unwrap_or(NO_VEHICLE)
            .to_string(),
        progress: compute_progress(job),
        finished: is_finished(job),
    }
}

/// Builds the dashboard from the current collections.
#[must_use]
pub fn dashboard(jobs: &[Job], customers: &CustomerDirectory, ledger: &Ledger) -> DashboardSummary {
    let cards: Vec<JobCard> = jobs.iter().map(|j| job_card(j, customers)).collect();
    let jobs_finished = cards.iter().filter(|c| c.finished).count();
    DashboardSummary {
        jobs_in_progress: cards.len() - jobs_finished,
        jobs_finished,
        jobs: cards,
        customer_count: customers.len(),
        totals: ledger.totals(),
    }
}

/// Formats whole Chilean pesos the way the shop prints them: `$450.000`.
#[must_use]
pub fn format_clp(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    if amount < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Generates a progress bar string for visual representation.
///
/// Creates a text-based progress bar like: `[████████░░] 80%`. A job without
/// steps renders an empty bar labelled `--`.
#[must_use]
pub fn format_progress_bar(progress: Option<u8>, bar_length: Option<usize>) -> String {
    let length = bar_length.unwrap_or(10);
    let percent = usize::from(progress.unwrap_or(0).min(100));
    let filled = (percent * length + 50) / 100;
    let empty = length.saturating_sub(filled);

    let filled_str = "█".repeat(filled);
    let empty_str = "░".repeat(empty);
    let label = progress.map_or_else(|| "--".to_string(), |p| format!("{p}%"));

    format!("[{filled_str}{empty_str}] {label}")
}

/// Signed ledger amount: `+$450.000` for income, `-$15.900` for expenses.
#[must_use]
pub fn format_transaction_amount(transaction: &Transaction) -> String {
    let sign = match transaction.kind {
        TransactionKind::Income => '+',
        TransactionKind::Expense => '-',
    };
    let amount = i64::try_from(transaction.amount).unwrap_or(i64::MAX);
    format!("{sign}{}", format_clp(amount))
}

/// One history line: `2026-10-18 • Ventas | +$450.000 | 1x Cerámico`.
#[must_use]
pub fn format_transaction_summary(transaction: &Transaction) -> String {
    format!(
        "{} • {} | {} | {}",
        transaction.date,
        transaction.category,
        format_transaction_amount(transaction),
        transaction.description
    )
}

/// One logbook line: `12 Dic, 2024 • Tratamiento Cerámico 9H (Recubrimiento ...) • 12,400 km ✓`.
#[must_use]
pub fn format_logbook_entry(item: &ServiceHistoryItem) -> String {
    let mark = if item.verified { " ✓" } else { "" };
    format!(
        "{} • {} ({}) • {} km{mark}",
        item.date, item.title, item.subtitle, item.mileage
    )
}
