//! # Finance tracker data
//!
//! A [`Ledger`] is an in-memory list of income and expense [`Transaction`]s with
//! derived totals. A [`SavingsPlan`] is the list of [`SavingsGoal`]s. Both are
//! seeded with sample rows on every mount and never persisted.
//!
//! Form input arrives as strings ([`TransactionDraft`], [`GoalDraft`]) and is
//! validated into typed rows; every required field must be present and amounts
//! must be positive.
//!
//! Amounts are [`Decimal`] so `0.1 + 0.2` stays `0.3` in the totals.

use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::group_thousands;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FinanceError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("\"{0}\" is not a positive amount")]
    InvalidAmount(String),
    #[error("\"{0}\" is not a valid date")]
    InvalidDate(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        }
    }

    pub fn sign(&self) -> char {
        match self {
            TransactionKind::Income => '+',
            TransactionKind::Expense => '-',
        }
    }

    /// Parse a `<select>` value. Anything but `"expense"` is income.
    pub fn from_form(value: &str) -> Self {
        match value {
            "expense" => TransactionKind::Expense,
            _ => TransactionKind::Income,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u32,
    pub kind: TransactionKind,
    pub category: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub source: String,
}

impl Transaction {
    /// `"+$1,500"` or `"-$250"`.
    pub fn signed_amount(&self) -> String {
        format!("{}{}", self.kind.sign(), format_money(self.amount))
    }
}

/// Unvalidated transaction form.
#[derive(Clone, Debug, PartialEq)]
pub struct TransactionDraft {
    pub kind: TransactionKind,
    pub category: String,
    pub amount: String,
    pub date: String,
    pub source: String,
}

impl TransactionDraft {
    /// Blank income form dated today.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            kind: TransactionKind::Income,
            category: String::new(),
            amount: String::new(),
            date: today.format("%Y-%m-%d").to_string(),
            source: String::new(),
        }
    }

    pub fn validate(&self, id: u32) -> Result<Transaction, FinanceError> {
        let category = required("Category", &self.category)?;
        let amount = parse_amount(&self.amount)?;
        let date = parse_date(&self.date)?;
        let source = required("Source", &self.source)?;
        Ok(Transaction {
            id,
            kind: self.kind,
            category,
            amount,
            date,
            source,
        })
    }
}

/// Which rows the transactions table shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KindFilter {
    #[default]
    All,
    Only(TransactionKind),
}

impl KindFilter {
    pub fn from_form(value: &str) -> Self {
        match value {
            "income" => KindFilter::Only(TransactionKind::Income),
            "expense" => KindFilter::Only(TransactionKind::Expense),
            _ => KindFilter::All,
        }
    }

    fn matches(&self, kind: TransactionKind) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Only(k) => *k == kind,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    pub kind: KindFilter,
    /// `(year, month)`; `None` shows every month.
    pub month: Option<(i32, u32)>,
}

impl TransactionFilter {
    /// Parse the value of an `<input type="month">` (`"2025-02"`). Blank or bad input clears the filter.
    pub fn parse_month(value: &str) -> Option<(i32, u32)> {
        let date = NaiveDate::parse_from_str(&format!("{}-01", value.trim()), "%Y-%m-%d").ok()?;
        Some((date.year(), date.month()))
    }

    pub fn matches(&self, tx: &Transaction) -> bool {
        let month_ok = match self.month {
            Some((y, m)) => tx.date.year() == y && tx.date.month() == m,
            None => true,
        };
        self.kind.matches(tx.kind) && month_ok
    }
}

/// In-memory list of transactions, newest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    pub fn sample() -> Self {
        use TransactionKind::*;
        let row = |id, kind, category: &str, amount: i64, date, source: &str| Transaction {
            id,
            kind,
            category: category.to_string(),
            amount: Decimal::from(amount),
            date,
            source: source.to_string(),
        };
        Self::new(vec![
            row(1, Income, "Sales", 1500, ymd(2025, 2, 15), "Market"),
            row(2, Expense, "Fertilizer", 250, ymd(2025, 2, 10), "AgriStore"),
            row(3, Income, "Subsidy", 800, ymd(2025, 2, 5), "Government"),
            row(4, Expense, "Seeds", 175, ymd(2025, 1, 30), "Seeds Co."),
            row(5, Expense, "Equipment", 450, ymd(2025, 1, 25), "Farm Supply"),
        ])
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Validate a draft and put it at the top of the list.
    pub fn add(&mut self, draft: &TransactionDraft) -> Result<&Transaction, FinanceError> {
        let tx = draft.validate(self.transactions.len() as u32 + 1)?;
        tracing::debug!("Adding {} transaction {}", tx.kind.as_str(), tx.category);
        self.transactions.insert(0, tx);
        Ok(&self.transactions[0])
    }

    pub fn filtered(&self, filter: &TransactionFilter) -> Vec<&Transaction> {
        self.transactions.iter().filter(|t| filter.matches(t)).collect()
    }

    fn total(&self, kind: TransactionKind) -> Decimal {
        self.transactions
            .iter()
            .filter(|t| t.kind == kind)
            .map(|t| t.amount)
            .sum()
    }

    pub fn total_income(&self) -> Decimal {
        self.total(TransactionKind::Income)
    }

    pub fn total_expenses(&self) -> Decimal {
        self.total(TransactionKind::Expense)
    }

    pub fn net_profit(&self) -> Decimal {
        self.total_income() - self.total_expenses()
    }

    /// Net profit as a rounded percentage of income, 0 without income.
    pub fn profit_margin(&self) -> i64 {
        percent_of(self.net_profit(), self.total_income())
    }

    /// Expenses as a rounded percentage of income, 0 without income.
    pub fn expense_ratio(&self) -> i64 {
        percent_of(self.total_expenses(), self.total_income())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub id: u32,
    pub name: String,
    pub target: Decimal,
    pub current: Decimal,
    pub deadline: NaiveDate,
}

impl SavingsGoal {
    /// Rounded progress, capped at 100.
    pub fn progress_percent(&self) -> u32 {
        percent_of(self.current, self.target).clamp(0, 100) as u32
    }

    pub fn days_left(&self, today: NaiveDate) -> i64 {
        (self.deadline - today).num_days()
    }

    pub fn deadline_label(&self, today: NaiveDate) -> String {
        match self.days_left(today) {
            d if d > 0 => format!("{d} days left"),
            _ => "Deadline passed".to_string(),
        }
    }
}

/// Unvalidated savings goal form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GoalDraft {
    pub name: String,
    pub target: String,
    pub current: String,
    pub deadline: String,
}

impl GoalDraft {
    pub fn validate(&self, id: u32) -> Result<SavingsGoal, FinanceError> {
        let name = required("Goal name", &self.name)?;
        let target = parse_amount(&self.target)?;
        let current = if self.current.trim().is_empty() {
            Decimal::ZERO
        } else {
            let current = Decimal::from_str(self.current.trim())
                .map_err(|_| FinanceError::InvalidAmount(self.current.clone()))?;
            if current.is_sign_negative() {
                return Err(FinanceError::InvalidAmount(self.current.clone()));
            }
            current
        };
        let deadline = parse_date(&self.deadline)?;
        Ok(SavingsGoal {
            id,
            name,
            target,
            current,
            deadline,
        })
    }
}

/// Savings goals in creation order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SavingsPlan {
    goals: Vec<SavingsGoal>,
}

impl SavingsPlan {
    pub fn sample() -> Self {
        let goal = |id, name: &str, target: i64, current: i64, deadline| SavingsGoal {
            id,
            name: name.to_string(),
            target: Decimal::from(target),
            current: Decimal::from(current),
            deadline,
        };
        Self {
            goals: vec![
                goal(1, "New Tractor", 12000, 5500, ymd(2025, 12, 31)),
                goal(2, "Irrigation System", 5000, 2000, ymd(2025, 8, 15)),
            ],
        }
    }

    pub fn goals(&self) -> &[SavingsGoal] {
        &self.goals
    }

    pub fn add(&mut self, draft: &GoalDraft) -> Result<&SavingsGoal, FinanceError> {
        let goal = draft.validate(self.goals.len() as u32 + 1)?;
        self.goals.push(goal);
        Ok(&self.goals[self.goals.len() - 1])
    }
}

/// `$1,500` for whole amounts, `$1,500.25` otherwise.
pub fn format_money(amount: Decimal) -> String {
    let amount = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let whole = amount.trunc().to_i64().unwrap_or_default();
    let cents = ((amount.fract().abs() * Decimal::ONE_HUNDRED).to_i64()).unwrap_or_default();
    let sign = if amount.is_sign_negative() && whole == 0 && cents > 0 { "-" } else { "" };
    if cents == 0 {
        format!("{sign}${}", group_thousands(whole))
    } else {
        format!("{sign}${}.{cents:02}", group_thousands(whole))
    }
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

fn percent_of(part: Decimal, whole: Decimal) -> i64 {
    if whole.is_zero() {
        return 0;
    }
    (part / whole * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or_default()
}

fn required(field: &'static str, value: &str) -> Result<String, FinanceError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FinanceError::MissingField(field));
    }
    Ok(value.to_string())
}

fn parse_amount(value: &str) -> Result<Decimal, FinanceError> {
    if value.trim().is_empty() {
        return Err(FinanceError::MissingField("Amount"));
    }
    match Decimal::from_str(value.trim()) {
        Ok(amount) if amount > Decimal::ZERO => Ok(amount),
        _ => Err(FinanceError::InvalidAmount(value.to_string())),
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, FinanceError> {
    if value.trim().is_empty() {
        return Err(FinanceError::MissingField("Date"));
    }
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| FinanceError::InvalidDate(value.to_string()))
}

/// Month labels shared by the static charts.
pub const MONTHS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];
pub const MONTHLY_INCOME: [f64; 6] = [2200.0, 2500.0, 3000.0, 2800.0, 3200.0, 3500.0];
pub const MONTHLY_EXPENSES: [f64; 6] = [1800.0, 1700.0, 2000.0, 1900.0, 2100.0, 2200.0];
pub const MONTHLY_CASH_FLOW: [f64; 6] = [400.0, 800.0, 1000.0, 900.0, 1100.0, 1300.0];

pub const EXPENSE_BREAKDOWN: [(&str, f64); 6] = [
    ("Seeds", 175.0),
    ("Fertilizer", 450.0),
    ("Equipment", 650.0),
    ("Labor", 500.0),
    ("Fuel", 320.0),
    ("Other", 210.0),
];

pub const INCOME_BY_SOURCE: [(&str, f64); 4] = [
    ("Crop Sales", 4500.0),
    ("Livestock", 1200.0),
    ("Subsidies", 800.0),
    ("Other", 300.0),
];

/// Dashboard doughnut: income, expenses and savings for the season.
pub const SEASON_SUMMARY: [(&str, f64); 3] = [("Income", 4500.0), ("Expenses", 2800.0), ("Savings", 1200.0)];

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_sample_totals() {
        let ledger = Ledger::sample();
        assert_eq!(ledger.total_income(), Decimal::from(2300));
        assert_eq!(ledger.total_expenses(), Decimal::from(875));
        assert_eq!(ledger.net_profit(), Decimal::from(1425));
        assert_eq!(ledger.profit_margin(), 62);
        assert_eq!(ledger.expense_ratio(), 38);
    }

    #[test]
    fn test_ratios_without_income() {
        let ledger = Ledger::default();
        assert_eq!(ledger.profit_margin(), 0);
        assert_eq!(ledger.expense_ratio(), 0);
    }

    #[test]
    fn test_add_prepends_with_next_id() {
        let mut ledger = Ledger::sample();
        let draft = TransactionDraft {
            kind: TransactionKind::Expense,
            category: "Fuel".to_string(),
            amount: "80.50".to_string(),
            date: "2025-03-01".to_string(),
            source: "Depot".to_string(),
        };
        let added = ledger.add(&draft).unwrap();
        assert_eq!(added.id, 6);
        assert_eq!(added.signed_amount(), "-$80.50");

        assert_eq!(ledger.transactions()[0].category, "Fuel");
        assert_eq!(ledger.total_expenses(), Decimal::from_str("955.50").unwrap());
    }

    #[test]
    fn test_draft_requires_every_field() {
        let full = TransactionDraft {
            kind: TransactionKind::Income,
            category: "Sales".to_string(),
            amount: "10".to_string(),
            date: "2025-03-01".to_string(),
            source: "Market".to_string(),
        };
        assert!(full.validate(1).is_ok());

        let mut missing = full.clone();
        missing.category = "  ".to_string();
        assert_eq!(missing.validate(1), Err(FinanceError::MissingField("Category")));

        let mut missing = full.clone();
        missing.source.clear();
        assert_eq!(missing.validate(1), Err(FinanceError::MissingField("Source")));

        let mut zero = full.clone();
        zero.amount = "0".to_string();
        assert!(matches!(zero.validate(1), Err(FinanceError::InvalidAmount(_))));

        let mut bad_date = full;
        bad_date.date = "03/01/2025".to_string();
        assert!(matches!(bad_date.validate(1), Err(FinanceError::InvalidDate(_))));
    }

    #[test]
    fn test_failed_add_leaves_ledger_untouched() {
        let mut ledger = Ledger::sample();
        let draft = TransactionDraft::new(date("2025-03-01"));
        assert!(ledger.add(&draft).is_err());
        assert_eq!(ledger.len(), 5);
    }

    #[test]
    fn test_filters() {
        let ledger = Ledger::sample();

        let expenses = TransactionFilter {
            kind: KindFilter::from_form("expense"),
            month: None,
        };
        assert_eq!(ledger.filtered(&expenses).len(), 3);

        let january = TransactionFilter {
            kind: KindFilter::All,
            month: TransactionFilter::parse_month("2025-01"),
        };
        let rows = ledger.filtered(&january);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|t| t.kind == TransactionKind::Expense));

        assert_eq!(TransactionFilter::parse_month(""), None);
        assert_eq!(ledger.filtered(&TransactionFilter::default()).len(), 5);
    }

    #[test]
    fn test_goal_progress_and_deadline() {
        let plan = SavingsPlan::sample();
        let tractor = &plan.goals()[0];
        assert_eq!(tractor.progress_percent(), 46);
        assert_eq!(plan.goals()[1].progress_percent(), 40);

        assert_eq!(tractor.days_left(date("2025-12-01")), 30);
        assert_eq!(tractor.deadline_label(date("2025-12-01")), "30 days left");
        assert_eq!(tractor.deadline_label(date("2025-12-31")), "Deadline passed");
        assert_eq!(tractor.deadline_label(date("2026-01-05")), "Deadline passed");
    }

    #[test]
    fn test_goal_progress_is_capped() {
        let draft = GoalDraft {
            name: "Fence".to_string(),
            target: "100".to_string(),
            current: "250".to_string(),
            deadline: "2026-01-01".to_string(),
        };
        assert_eq!(draft.validate(3).unwrap().progress_percent(), 100);
    }

    #[test]
    fn test_goal_current_defaults_to_zero() {
        let mut plan = SavingsPlan::sample();
        let draft = GoalDraft {
            name: "Greenhouse".to_string(),
            target: "8000".to_string(),
            current: String::new(),
            deadline: "2026-06-30".to_string(),
        };
        let goal = plan.add(&draft).unwrap();
        assert_eq!(goal.id, 3);
        assert_eq!(goal.current, Decimal::ZERO);
        assert_eq!(plan.goals().last().unwrap().name, "Greenhouse");
    }

    #[test]
    fn test_goal_requires_name_target_deadline() {
        let draft = GoalDraft {
            name: "Barn".to_string(),
            target: String::new(),
            current: String::new(),
            deadline: "2026-06-30".to_string(),
        };
        assert_eq!(draft.validate(1), Err(FinanceError::MissingField("Amount")));

        let draft = GoalDraft {
            deadline: String::new(),
            target: "10".to_string(),
            ..draft
        };
        assert_eq!(draft.validate(1), Err(FinanceError::MissingField("Date")));
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(Decimal::from(4500)), "$4,500");
        assert_eq!(format_money(Decimal::from_str("1234.5").unwrap()), "$1,234.50");
        assert_eq!(format_money(Decimal::from(-1425)), "$-1,425");
        assert_eq!(format_money(Decimal::ZERO), "$0");
    }
}
