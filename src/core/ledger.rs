//! Accounting ledger business logic.
//!
//! The ledger is an append-only list kept most-recent-first. Totals are
//! recomputed from the full list on every read; nothing is cached.

use crate::{
    entities::{NewTransaction, Transaction, TransactionKind},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use tracing::info;

/// Categories offered by the expense form.
pub const EXPENSE_CATEGORIES: [&str; 4] = ["Insumos", "Fijos", "Marketing", "Sueldos"];

/// Aggregates derived from the ledger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LedgerTotals {
    /// Sum of income amounts
    pub income: u64,
    /// Sum of expense amounts
    pub expense: u64,
    /// `income - expense`
    pub balance: i64,
}

/// Booked transactions, newest first.
#[derive(Debug, Clone)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    next_id: i64,
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            transactions: Vec::new(),
            next_id: 1,
        }
    }
}

impl Ledger {
    /// Every transaction, most recent first.
    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Number of booked transactions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// True before the first booking.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Books a transaction at the head of the ledger.
    ///
    /// # Errors
    /// Returns a validation error if the description or category is blank.
    pub fn add_transaction(&mut self, new: NewTransaction) -> Result<&Transaction> {
        let transaction = Transaction::book(self.next_id, new)?;
        self.next_id += 1;
        info!(
            transaction_id = transaction.id,
            amount = transaction.amount,
            kind = ?transaction.kind,
            category = %transaction.category,
            "Booked transaction"
        );
        self.transactions.insert(0, transaction);
        Ok(&self.transactions[0])
    }

    /// Books an expense typed into the expense form.
    ///
    /// # Arguments
    /// * `description` - What the money was spent on
    /// * `amount` - Amount as typed, e.g. "15.900" or "$15900"
    /// * `category` - One of [`EXPENSE_CATEGORIES`]
    /// * `date` - Booking date
    ///
    /// # Returns
    /// * `Ok(&Transaction)` - The booked expense, now at the head of the ledger
    ///
    /// # Errors
    /// Returns a validation error for a blank description or a category
    /// outside [`EXPENSE_CATEGORIES`], and [`Error::InvalidAmount`] if the
    /// amount is blank or not a whole number. Nothing is booked on error.
    pub fn record_expense(
        &mut self,
        description: &str,
        amount: &str,
        category: &str,
        date: NaiveDate,
    ) -> Result<&Transaction> {
        if description.trim().is_empty() {
            return Err(Error::validation("Expense description cannot be empty"));
        }
        if !EXPENSE_CATEGORIES.contains(&category) {
            return Err(Error::validation(format!("Unknown expense category '{category}'")));
        }
        let amount = parse_amount(amount)?;
        self.add_transaction(NewTransaction {
            date,
            description: description.to_string(),
            amount,
            kind: TransactionKind::Expense,
            category: category.to_string(),
        })
    }

    /// Income, expense and balance over the whole ledger.
    #[must_use]
    pub fn totals(&self) -> LedgerTotals {
        let (income, expense) =
            self.transactions
                .iter()
                .fold((0_u64, 0_u64), |(income, expense), t| {
                    if t.is_income() {
                        (income.saturating_add(t.amount), expense)
                    } else {
                        (income, expense.saturating_add(t.amount))
                    }
                });
        LedgerTotals {
            income,
            expense,
            balance: signed(income).saturating_sub(signed(expense)),
        }
    }
}

/// Parses a whole currency amount as typed: digits, optionally grouped in
/// thousands with `.` and prefixed with `$` (e.g. "15.900", "$450.000").
///
/// # Arguments
/// * `input` - Raw text from the amount field
///
/// # Returns
/// * `Ok(amount)` - The amount in whole currency units
/// * `Err(Error::InvalidAmount)` - The text is not a whole amount
///
/// # Errors
/// Returns [`Error::InvalidAmount`] for blank or non-numeric input, and for a
/// `.` that is not a thousands separator ("1.5", "1..000", "1.0000").
pub fn parse_amount(input: &str) -> Result<u64> {
    let invalid = || Error::InvalidAmount {
        input: input.to_string(),
    };
    let cleaned = input.trim().trim_start_matches('$').trim();
    let groups: Vec<&str> = cleaned.split('.').collect();
    let (first, rest) = groups.split_first().ok_or_else(invalid)?;

    let all_digits = |g: &str| !g.is_empty() && g.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(*first) {
        return Err(invalid());
    }
    if !rest.is_empty() && (first.len() > 3 || rest.iter().any(|g| g.len() != 3 || !all_digits(*g))) {
        return Err(invalid());
    }

    groups.concat().parse().map_err(|_| invalid())
}

fn signed(amount: u64) -> i64 {
    i64::try_from(amount).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::{income, test_date};

    #[test]
    fn test_add_prepends() {
        let mut ledger = Ledger::default();
        ledger.add_transaction(income("first", 100)).unwrap();
        ledger.add_transaction(income("second", 200)).unwrap();

        assert_eq!(ledger.transactions()[0].description, "second");
        assert_eq!(ledger.transactions()[1].description, "first");
        assert_ne!(ledger.transactions()[0].id, ledger.transactions()[1].id);
    }

    #[test]
    fn test_totals_balance_is_income_minus_expense() {
        let mut ledger = Ledger::default();
        assert_eq!(ledger.totals(), LedgerTotals::default());

        ledger.add_transaction(income("Venta", 450_000)).unwrap();
        ledger
            .record_expense("Insumos Graphene", "120.000", "Insumos", test_date())
            .unwrap();
        ledger
            .record_expense("Arriendo", "500000", "Fijos", test_date())
            .unwrap();

        let totals = ledger.totals();
        assert_eq!(totals.income, 450_000);
        assert_eq!(totals.expense, 620_000);
        assert_eq!(totals.balance, -170_000);
        assert_eq!(
            totals.balance,
            i64::try_from(totals.income).unwrap() - i64::try_from(totals.expense).unwrap()
        );
    }

    #[test]
    fn test_record_expense_validation() {
        let mut ledger = Ledger::default();

        let result = ledger.record_expense("  ", "1000", "Insumos", test_date());
        assert!(matches!(result, Err(Error::Validation { .. })));

        let result = ledger.record_expense("Cera", "", "Insumos", test_date());
        assert!(matches!(result, Err(Error::InvalidAmount { .. })));

        let result = ledger.record_expense("Cera", "-5", "Insumos", test_date());
        assert!(matches!(result, Err(Error::InvalidAmount { .. })));

        let result = ledger.record_expense("Cera", "5000", "Varios", test_date());
        assert!(matches!(result, Err(Error::Validation { .. })));

        let result = ledger.record_expense("Cera", "5000", "", test_date());
        assert!(matches!(result, Err(Error::Validation { .. })));

        assert!(ledger.is_empty());
    }

    #[test]
    fn test_record_expense_books_expense() {
        let mut ledger = Ledger::default();
        let t = ledger
            .record_expense("Sueldo", "$650.000", "Sueldos", test_date())
            .unwrap();
        assert_eq!(t.amount, 650_000);
        assert_eq!(t.kind, TransactionKind::Expense);
        assert_eq!(t.date, test_date());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("15900").unwrap(), 15_900);
        assert_eq!(parse_amount(" 15.900 ").unwrap(), 15_900);
        assert_eq!(parse_amount("$0").unwrap(), 0);
        assert!(parse_amount("12,5").is_err());
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount(".").is_err());
        assert!(parse_amount("99999999999999999999999").is_err());
        assert_eq!(parse_amount("1.234.567").unwrap(), 1_234_567);
    }

    #[test]
    fn test_parse_amount_rejects_misplaced_separators() {
        for input in ["1.5", "12.34.5", "1..000", "1.0000", "1234.567", ".500", "500.", "$", ""] {
            assert!(
                matches!(parse_amount(input), Err(Error::InvalidAmount { .. })),
                "{input:?} should be rejected"
            );
        }
    }
}
