use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::Currency;
use crate::modules::parties::models::PartyId;
use crate::modules::products::models::{AccountId, ProductId, TaxId};

/// Side of the invoice a generated line belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceType {
    /// Supplier invoice (commissions are owed to the middleman)
    In,
    Out,
}

impl InvoiceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceType::In => "in",
            InvoiceType::Out => "out",
        }
    }
}

impl std::fmt::Display for InvoiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for InvoiceType {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        match value.as_str() {
            "in" => Ok(Self::In),
            "out" => Ok(Self::Out),
            _ => Err(format!("Invalid invoice type: {}", value)),
        }
    }
}

/// Field set of a commission line, ready to be persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAccountingLine {
    /// Middleman the commission is owed to
    pub party_id: PartyId,
    pub invoice_type: InvoiceType,
    pub description: String,
    pub product_id: ProductId,
    pub account_id: AccountId,
    pub unit: String,
    pub taxes: Vec<TaxId>,
    pub currency: Currency,
    pub quantity: Decimal,
    /// Rate × commissioned amount
    pub unit_price: Decimal,
    /// Origin identity of the installment this line pays commission on
    pub origin: String,
}

impl NewAccountingLine {
    pub fn amount(&self) -> Decimal {
        self.quantity * self.unit_price
    }
}

/// A persisted commission line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountingLine {
    pub id: String,
    #[serde(flatten)]
    pub line: NewAccountingLine,
    pub created_at: NaiveDateTime,
}

impl AccountingLine {
    /// Stamp a fresh id and creation time on a field set
    pub fn persisted(line: NewAccountingLine) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            line,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }

    pub fn origin(&self) -> &str {
        &self.line.origin
    }
}
