use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::Currency;
use crate::modules::installments::models::PaymentTerm;
use crate::modules::invoices::models::InstallmentLine;
use crate::modules::sales::models::Sale;

pub type InvoiceId = i64;
pub type CompanyId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,
    /// Accounting currency
    pub currency: Currency,
}

/// Customer invoice, read-only from the commission engine's point of view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: InvoiceId,
    pub number: Option<String>,
    pub currency: Currency,
    pub company: Company,
    pub untaxed_amount: Decimal,
    pub payment_term: PaymentTerm,
    pub invoice_date: NaiveDate,
    /// Ledger move created when the invoice was posted
    pub move_id: Option<String>,
    /// Receivable lines, one per installment
    pub lines_to_pay: Vec<InstallmentLine>,
    /// Sales this invoice was generated from
    pub sales: Vec<Sale>,
}

impl Invoice {
    /// Display label: the invoice number, or `(id)` for unnumbered invoices
    pub fn label(&self) -> String {
        match &self.number {
            Some(number) => number.clone(),
            None => format!("({})", self.id),
        }
    }

    pub fn is_posted(&self) -> bool {
        self.move_id.is_some()
    }
}
