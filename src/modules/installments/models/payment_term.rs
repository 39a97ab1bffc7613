use chrono::{Days, Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// One scheduled payment computed from a payment term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputedInstallment {
    pub date: NaiveDate,
    pub amount: Decimal,
}

impl ComputedInstallment {
    pub fn new(date: NaiveDate, amount: Decimal) -> Self {
        Self { date, amount }
    }
}

/// How a payment term line sizes its installment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum PaymentTermLineKind {
    /// Ratio of the total (0.30 = 30 %)
    Percent(Decimal),
    /// Fixed amount in the invoice currency
    Fixed(Decimal),
    /// Whatever is left once the previous lines are paid
    Remainder,
}

/// A payment term line: an amount rule plus a due-date offset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentTermLine {
    pub kind: PaymentTermLineKind,
    /// Months added to the start date
    pub months: u32,
    /// Days added after the month offset
    pub days: u64,
}

impl PaymentTermLine {
    pub fn new(kind: PaymentTermLineKind, months: u32, days: u64) -> Self {
        Self { kind, months, days }
    }

    /// Due date of this line relative to `start_date`
    pub fn due_date(&self, start_date: NaiveDate) -> Result<NaiveDate> {
        start_date
            .checked_add_months(Months::new(self.months))
            .and_then(|d| d.checked_add_days(Days::new(self.days)))
            .ok_or_else(|| AppError::validation("Failed to calculate due date"))
    }
}

/// Ordered set of rules splitting an invoice total into installments.
///
/// A term with no lines is valid and schedules nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentTerm {
    pub name: String,
    lines: Vec<PaymentTermLine>,
}

impl PaymentTerm {
    /// Build a payment term; a `Remainder` line is only allowed in last position
    pub fn new(name: impl Into<String>, lines: Vec<PaymentTermLine>) -> Result<Self> {
        let name = name.into();
        let last = lines.len().saturating_sub(1);

        for (i, line) in lines.iter().enumerate() {
            match line.kind {
                PaymentTermLineKind::Remainder if i != last => {
                    return Err(AppError::validation(format!(
                        "Payment term '{}': remainder line must be the last line",
                        name
                    )));
                }
                PaymentTermLineKind::Percent(ratio) if ratio < Decimal::ZERO || ratio > Decimal::ONE => {
                    return Err(AppError::validation(format!(
                        "Payment term '{}': percent must be between 0 and 1, got {}",
                        name, ratio
                    )));
                }
                PaymentTermLineKind::Fixed(amount) if amount < Decimal::ZERO => {
                    return Err(AppError::validation(format!(
                        "Payment term '{}': fixed amount cannot be negative",
                        name
                    )));
                }
                _ => {}
            }
        }

        Ok(Self { name, lines })
    }

    /// Everything due on the start date
    pub fn immediate() -> Self {
        Self {
            name: "Immediate".to_string(),
            lines: vec![PaymentTermLine::new(PaymentTermLineKind::Remainder, 0, 0)],
        }
    }

    /// Term without lines; schedules nothing
    pub fn empty() -> Self {
        Self {
            name: "Empty".to_string(),
            lines: Vec::new(),
        }
    }

    /// `count` equal monthly installments, the last one absorbing rounding
    pub fn equal_monthly(count: u32) -> Result<Self> {
        if count == 0 {
            return Err(AppError::validation("Installment count cannot be zero"));
        }

        let share = Decimal::ONE / Decimal::from(count);
        let mut lines: Vec<PaymentTermLine> = (0..count - 1)
            .map(|i| PaymentTermLine::new(PaymentTermLineKind::Percent(share), i, 0))
            .collect();
        lines.push(PaymentTermLine::new(
            PaymentTermLineKind::Remainder,
            count - 1,
            0,
        ));

        Self::new(format!("{} monthly installments", count), lines)
    }

    pub fn lines(&self) -> &[PaymentTermLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
