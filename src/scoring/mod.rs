//! Credit scoring over a UPI transaction ledger, backing the dashboard view.

pub mod features;
pub mod score;

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::UdaanError;

pub use features::{Features, Transaction, TxnType, extract_features};
pub use score::{LoanRecommendation, RiskCategory, credit_score};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub total_income: f64,
    pub total_expense: f64,
    pub transactions: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyCashflow {
    pub date: NaiveDate,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardReport {
    pub snapshot: Snapshot,
    pub cashflow: Vec<DailyCashflow>,
    pub features: Features,
    pub score: u32,
    pub risk: RiskCategory,
    pub loan: LoanRecommendation,
}

impl DashboardReport {
    pub fn build(txns: &[Transaction]) -> Result<Self, UdaanError> {
        txns.iter().try_for_each(Transaction::validate)?;

        let features = extract_features(txns);
        let score = credit_score(&features);
        let risk = RiskCategory::from_score(score);

        // Daily totals ignore direction, matching the cashflow chart.
        let mut daily: BTreeMap<NaiveDate, f64> = BTreeMap::new();
        for t in txns {
            *daily.entry(t.date).or_default() += t.amount;
        }

        // Finite amounts can still sum past f64::MAX.
        if !features.total_credit.is_finite()
            || !features.total_debit.is_finite()
            || daily.values().any(|v| !v.is_finite())
        {
            return Err(UdaanError::InvalidTransaction(
                "transaction totals overflow".to_string(),
            ));
        }
        let loan = LoanRecommendation::new(&features, risk)?;

        Ok(Self {
            snapshot: Snapshot {
                total_income: features.total_credit,
                total_expense: features.total_debit,
                transactions: txns.len(),
            },
            cashflow: daily
                .into_iter()
                .map(|(date, amount)| DailyCashflow { date, amount })
                .collect(),
            loan,
            features,
            score,
            risk,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn report_for_healthy_ledger() {
        let mut txns: Vec<Transaction> = (1..=8)
            .map(|d| Transaction::credit(day(d), 1500.0))
            .collect();
        txns.push(Transaction::debit(day(2), 400.0));
        txns.push(Transaction::debit(day(1), 100.0));

        let report = DashboardReport::build(&txns).unwrap();

        assert_eq!(report.snapshot.total_income, 12000.0);
        assert_eq!(report.snapshot.total_expense, 500.0);
        assert_eq!(report.snapshot.transactions, 10);
        // 300 + 150 + 150 (stability 4) + 150 (avg 1500) + 80
        assert_eq!(report.score, 830);
        assert_eq!(report.risk, RiskCategory::Low);
        assert_eq!(report.loan.eligible_amount, 3600);
        assert_eq!(report.loan.verdict, "Approved for Instant Micro-Loan");

        assert_eq!(report.cashflow.len(), 8);
        assert_eq!(report.cashflow[0], DailyCashflow { date: day(1), amount: 1600.0 });
        assert_eq!(report.cashflow[1], DailyCashflow { date: day(2), amount: 1900.0 });
    }

    #[test]
    fn invalid_transaction_rejects_whole_report() {
        let txns = [
            Transaction::credit(day(1), 100.0),
            Transaction::debit(day(1), -1.0),
        ];
        assert!(matches!(
            DashboardReport::build(&txns),
            Err(UdaanError::InvalidTransaction(_))
        ));
    }

    #[test]
    fn overflowing_totals_are_rejected() {
        let credits = [
            Transaction::credit(day(1), 1e308),
            Transaction::credit(day(1), 1e308),
        ];
        assert!(matches!(
            DashboardReport::build(&credits),
            Err(UdaanError::InvalidTransaction(_))
        ));

        let debits = [
            Transaction::debit(day(1), f64::MAX),
            Transaction::debit(day(2), f64::MAX),
        ];
        assert!(matches!(
            DashboardReport::build(&debits),
            Err(UdaanError::InvalidTransaction(_))
        ));
    }

    #[test]
    fn empty_ledger_is_high_risk() {
        let report = DashboardReport::build(&[]).unwrap();
        assert_eq!(report.score, 300);
        assert_eq!(report.risk, RiskCategory::High);
        assert!(report.cashflow.is_empty());
        assert_eq!(report.loan.eligible_amount, 0);
    }
}
