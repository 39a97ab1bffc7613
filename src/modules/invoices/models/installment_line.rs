use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub type MoveLineId = i64;

/// A receivable move line of a posted invoice (one installment)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallmentLine {
    pub id: MoveLineId,
    /// Position in the payment term schedule (1-based)
    pub sequence: u32,
    pub maturity_date: Option<NaiveDate>,
    pub amount: Decimal,
    /// Reconciliation reference once the installment has been paid
    pub reconciliation: Option<String>,
}

impl InstallmentLine {
    pub fn new(id: MoveLineId, sequence: u32, maturity_date: Option<NaiveDate>, amount: Decimal) -> Self {
        Self {
            id,
            sequence,
            maturity_date,
            amount,
            reconciliation: None,
        }
    }

    pub fn reconciled(mut self, reconciliation: impl Into<String>) -> Self {
        self.reconciliation = Some(reconciliation.into());
        self
    }

    pub fn is_reconciled(&self) -> bool {
        self.reconciliation.is_some()
    }

    /// Identity stamped on accounting lines generated from this installment
    pub fn origin(&self) -> String {
        format!("account.move.line,{}", self.id)
    }
}
