use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::UdaanError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TxnType {
    Credit,
    Debit,
}

impl<'de> Deserialize<'de> for TxnType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        match raw.to_ascii_uppercase().as_str() {
            "CREDIT" => Ok(TxnType::Credit),
            "DEBIT" => Ok(TxnType::Debit),
            other => Err(serde::de::Error::unknown_variant(other, &["CREDIT", "DEBIT"])),
        }
    }
}

/// One UPI ledger line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub txn_type: TxnType,
    pub amount: f64,
}

impl Transaction {
    pub fn credit(date: NaiveDate, amount: f64) -> Self {
        Self {
            date,
            txn_type: TxnType::Credit,
            amount,
        }
    }

    pub fn debit(date: NaiveDate, amount: f64) -> Self {
        Self {
            date,
            txn_type: TxnType::Debit,
            amount,
        }
    }

    pub fn validate(&self) -> Result<(), UdaanError> {
        if !self.amount.is_finite() || self.amount < 0.0 {
            return Err(UdaanError::InvalidTransaction(format!(
                "amount must be a non-negative number, got {} on {}",
                self.amount, self.date
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Features {
    pub total_credit: f64,
    pub total_debit: f64,
    pub inflow_count: usize,
    pub outflow_count: usize,
    pub avg_ticket_size: f64,
    pub cashflow_stability: f64,
}

pub fn extract_features(txns: &[Transaction]) -> Features {
    let (mut total_credit, mut total_debit) = (0.0, 0.0);
    let (mut inflow_count, mut outflow_count) = (0usize, 0usize);

    for t in txns {
        match t.txn_type {
            TxnType::Credit => {
                total_credit += t.amount;
                inflow_count += 1;
            }
            TxnType::Debit => {
                total_debit += t.amount;
                outflow_count += 1;
            }
        }
    }

    let avg_ticket_size = if inflow_count > 0 {
        total_credit / inflow_count as f64
    } else {
        0.0
    };
    let cashflow_stability = inflow_count as f64 / outflow_count.max(1) as f64;

    Features {
        total_credit,
        total_debit,
        inflow_count,
        outflow_count,
        avg_ticket_size,
        cashflow_stability,
    }
}
