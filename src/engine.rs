use crate::schema::{PropertyFile, Transaction};
use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// `num_days_from_ce` of 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i64 = 719_163;

/// A file's ledger split into the numbered payment plan and everything else.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupedTransactions {
    pub payment_plan: Vec<Transaction>,
    pub others: Vec<Transaction>,
}

impl GroupedTransactions {
    pub fn len(&self) -> usize {
        self.payment_plan.len() + self.others.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payment_plan.is_empty() && self.others.is_empty()
    }
}

/// Per-group and grand totals for a statement.
///
/// Group balances are plain differences and may be negative when a group is overpaid.
/// Only `grand_balance` is clamped at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerTotals {
    pub plan_receivable: f64,
    pub plan_received: f64,
    pub plan_surcharge: f64,
    pub other_receivable: f64,
    pub other_received: f64,
    pub grand_receivable: f64,
    pub grand_received: f64,
    pub grand_balance: f64,
}

impl LedgerTotals {
    pub fn plan_balance(&self) -> f64 {
        self.plan_receivable - self.plan_received
    }

    pub fn other_balance(&self) -> f64 {
        self.other_receivable - self.other_received
    }
}

/// Everything the statement renderer needs for one file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    pub file_no: String,
    pub groups: GroupedTransactions,
    pub totals: LedgerTotals,
}

pub struct LedgerAggregator;

impl LedgerAggregator {
    /// Partitions and orders a ledger.
    ///
    /// Payment-plan lines are ordered by installment number, then by receipt date, where a
    /// missing or unreadable receipt date counts as the Unix epoch. Other lines are ordered
    /// by sequence.
    /// Both sorts are stable, so equal keys keep their input order.
    pub fn group(transactions: &[Transaction]) -> GroupedTransactions {
        let (mut payment_plan, mut others): (Vec<Transaction>, Vec<Transaction>) = transactions
            .iter()
            .cloned()
            .partition(Transaction::is_payment_plan);

        payment_plan.sort_by_cached_key(|t| (t.installment_number, receipt_epoch_days(t)));
        others.sort_by_key(|t| t.sequence);

        GroupedTransactions {
            payment_plan,
            others,
        }
    }

    pub fn totals(groups: &GroupedTransactions) -> LedgerTotals {
        let mut totals = LedgerTotals::default();

        for t in &groups.payment_plan {
            totals.plan_receivable += t.receivable_or_zero();
            totals.plan_received += t.paid_or_zero();
            totals.plan_surcharge += t.surcharge_or_zero();
        }

        for t in &groups.others {
            totals.other_receivable += t.receivable_or_zero();
            totals.other_received += t.paid_or_zero();
        }

        totals.grand_receivable = totals.plan_receivable + totals.other_receivable;
        totals.grand_received = totals.plan_received + totals.other_received;
        totals.grand_balance = (totals.grand_receivable - totals.grand_received).max(0.0);

        totals
    }

    pub fn statement(file: &PropertyFile) -> Statement {
        let groups = Self::group(&file.transactions);
        let totals = Self::totals(&groups);

        Statement {
            file_no: file.file_no.clone(),
            groups,
            totals,
        }
    }
}

fn receipt_epoch_days(transaction: &Transaction) -> i64 {
    transaction
        .parsed_receipt_date()
        .map_or(0, |d| i64::from(d.num_days_from_ce()) - UNIX_EPOCH_DAYS_FROM_CE)
}

pub fn build_statement(file: &PropertyFile) -> Statement {
    LedgerAggregator::statement(file)
}
