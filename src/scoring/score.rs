use serde::Serialize;

use super::features::Features;
use crate::error::UdaanError;

pub const MIN_SCORE: u32 = 300;
pub const MAX_SCORE: u32 = 900;

/// Share of total inflow offered as a micro-loan.
const LOAN_RATIO: f64 = 0.3;

pub fn credit_score(f: &Features) -> u32 {
    let mut score: i64 = MIN_SCORE as i64;

    score += if f.total_credit > 10000.0 {
        150
    } else if f.total_credit > 5000.0 {
        120
    } else if f.total_credit > 2000.0 {
        70
    } else {
        0
    };

    score += if f.cashflow_stability >= 1.5 {
        150
    } else if f.cashflow_stability >= 1.0 {
        120
    } else if f.cashflow_stability >= 0.8 {
        60
    } else {
        0
    };

    score += if f.avg_ticket_size > 800.0 {
        150
    } else if f.avg_ticket_size > 400.0 {
        100
    } else if f.avg_ticket_size > 200.0 {
        60
    } else {
        0
    };

    score += match f.inflow_count {
        n if n >= 8 => 80,
        n if n >= 5 => 50,
        n if n >= 3 => 25,
        _ => 0,
    };

    if f.outflow_count > f.inflow_count {
        score -= 100;
    }
    if f.total_credit < 500.0 {
        score -= 60;
    }

    score.clamp(MIN_SCORE as i64, MAX_SCORE as i64) as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskCategory {
    #[serde(rename = "Low Risk")]
    Low,
    #[serde(rename = "Moderate Risk")]
    Moderate,
    #[serde(rename = "High Risk")]
    High,
}

impl RiskCategory {
    pub fn from_score(score: u32) -> Self {
        if score >= 720 {
            RiskCategory::Low
        } else if score >= 580 {
            RiskCategory::Moderate
        } else {
            RiskCategory::High
        }
    }

    pub fn verdict(&self) -> &'static str {
        match self {
            RiskCategory::Low => "Approved for Instant Micro-Loan",
            RiskCategory::Moderate => "Eligible with Conditions",
            RiskCategory::High => "Loan Not Recommended",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoanRecommendation {
    pub eligible_amount: u64,
    pub verdict: &'static str,
}

impl LoanRecommendation {
    pub fn new(f: &Features, risk: RiskCategory) -> Result<Self, UdaanError> {
        let eligible = (f.total_credit * LOAN_RATIO).floor();
        // `as u64` would saturate silently
        if !eligible.is_finite() || eligible >= u64::MAX as f64 {
            return Err(UdaanError::InvalidTransaction(format!(
                "total credit {} is too large to score",
                f.total_credit
            )));
        }
        Ok(Self {
            eligible_amount: eligible as u64,
            verdict: risk.verdict(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features(
        total_credit: f64,
        inflow_count: usize,
        outflow_count: usize,
    ) -> Features {
        Features {
            total_credit,
            total_debit: 0.0,
            inflow_count,
            outflow_count,
            avg_ticket_size: if inflow_count > 0 {
                total_credit / inflow_count as f64
            } else {
                0.0
            },
            cashflow_stability: inflow_count as f64 / outflow_count.max(1) as f64,
        }
    }

    #[test]
    fn empty_history_floors_at_minimum() {
        assert_eq!(credit_score(&features(0.0, 0, 0)), MIN_SCORE);
    }

    #[test]
    fn strong_history_caps_at_maximum() {
        // 300 + 150 + 150 + 150 + 80 = 830, below cap
        assert_eq!(credit_score(&features(20000.0, 10, 2)), 830);
        let f = Features {
            avg_ticket_size: 5000.0,
            ..features(50000.0, 10, 1)
        };
        assert!(credit_score(&f) <= MAX_SCORE);
    }

    #[test]
    fn more_debits_than_credits_is_penalised() {
        // 300 + 70 (credit) + 0 (stability 0.75) + 100 (avg 750) + 25 (3 inflows) - 100
        assert_eq!(credit_score(&features(2250.0, 3, 4)), 395);
    }

    #[test]
    fn tiny_inflow_is_penalised() {
        // 300 + 120 (stability 1.0) + 60 (avg 225) - 60
        assert_eq!(credit_score(&features(450.0, 2, 2)), 420);
    }

    /// Only `total_credit` set; 600 clears the small-inflow penalty without reaching a tier.
    fn bare(total_credit: f64) -> Features {
        Features {
            total_credit,
            total_debit: 0.0,
            inflow_count: 0,
            outflow_count: 0,
            avg_ticket_size: 0.0,
            cashflow_stability: 0.0,
        }
    }

    #[test]
    fn total_credit_tiers_are_strict() {
        assert_eq!(credit_score(&bare(10000.01)), 450);
        assert_eq!(credit_score(&bare(10000.0)), 420);
        assert_eq!(credit_score(&bare(5000.01)), 420);
        assert_eq!(credit_score(&bare(5000.0)), 370);
        assert_eq!(credit_score(&bare(2000.01)), 370);
        assert_eq!(credit_score(&bare(2000.0)), 300);
    }

    #[test]
    fn avg_ticket_tiers_are_strict() {
        let with_avg = |avg_ticket_size| Features {
            avg_ticket_size,
            ..bare(600.0)
        };
        assert_eq!(credit_score(&with_avg(800.01)), 450);
        assert_eq!(credit_score(&with_avg(800.0)), 400);
        assert_eq!(credit_score(&with_avg(400.01)), 400);
        assert_eq!(credit_score(&with_avg(400.0)), 360);
        assert_eq!(credit_score(&with_avg(200.01)), 360);
        assert_eq!(credit_score(&with_avg(200.0)), 300);
    }

    #[test]
    fn stability_tiers_are_inclusive() {
        let with_stability = |cashflow_stability| Features {
            cashflow_stability,
            ..bare(600.0)
        };
        assert_eq!(credit_score(&with_stability(1.5)), 450);
        assert_eq!(credit_score(&with_stability(1.49)), 420);
        assert_eq!(credit_score(&with_stability(1.0)), 420);
        assert_eq!(credit_score(&with_stability(0.99)), 360);
        assert_eq!(credit_score(&with_stability(0.8)), 360);
        assert_eq!(credit_score(&with_stability(0.79)), 300);
    }

    #[test]
    fn inflow_count_tiers_are_inclusive() {
        let with_inflows = |inflow_count| Features {
            inflow_count,
            ..bare(600.0)
        };
        assert_eq!(credit_score(&with_inflows(8)), 380);
        assert_eq!(credit_score(&with_inflows(7)), 350);
        assert_eq!(credit_score(&with_inflows(5)), 350);
        assert_eq!(credit_score(&with_inflows(4)), 325);
        assert_eq!(credit_score(&with_inflows(3)), 325);
        assert_eq!(credit_score(&with_inflows(2)), 300);
    }

    #[test]
    fn risk_thresholds() {
        assert_eq!(RiskCategory::from_score(720), RiskCategory::Low);
        assert_eq!(RiskCategory::from_score(719), RiskCategory::Moderate);
        assert_eq!(RiskCategory::from_score(580), RiskCategory::Moderate);
        assert_eq!(RiskCategory::from_score(579), RiskCategory::High);
    }

    #[test]
    fn loan_is_thirty_percent_of_inflow_rounded_down() {
        let loan = LoanRecommendation::new(&features(1001.0, 1, 0), RiskCategory::High).unwrap();
        assert_eq!(loan.eligible_amount, 300);
        assert_eq!(loan.verdict, "Loan Not Recommended");
    }

    #[test]
    fn loan_beyond_u64_range_is_rejected() {
        let err = LoanRecommendation::new(&features(1e300, 1, 0), RiskCategory::Low).unwrap_err();
        assert!(matches!(err, UdaanError::InvalidTransaction(_)));
    }
}
