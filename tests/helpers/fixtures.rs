use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use sale_commission::commission_types::{CategoryApplicability, CommissionType, RateTable};
use sale_commission::commissions::{
    CommissionCollector, CommissionEngine, CommissionSettings, InMemoryAccountingLineRepository,
};
use sale_commission::core::{Currency, FixedRateConverter};
use sale_commission::installments::{PaymentTerm, PaymentTermScheduler};
use sale_commission::invoices::{Company, InstallmentLine, Invoice};
use sale_commission::products::Product;
use sale_commission::sales::Sale;

pub const MIDDLEMAN: i64 = 100;
pub const OTHER_MIDDLEMAN: i64 = 101;
pub const CUSTOMER: i64 = 200;
pub const COMMISSION_TYPE: i64 = 10;
pub const CATEGORY: i64 = 1;
pub const RATE_LINE: i64 = 1000;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub fn invoice_date() -> NaiveDate {
    date(2026, 3, 10)
}

/// Commission type "Retail" paying `percent` on `CATEGORY`
pub fn commission_type(percent: Decimal) -> CommissionType {
    CommissionType::new(COMMISSION_TYPE, "Retail")
        .with_line(RATE_LINE, CATEGORY, percent)
        .expect("valid rate line")
}

pub fn rate_table(percent: Decimal) -> RateTable {
    RateTable::new()
        .with_type(commission_type(percent))
        .expect("valid commission type")
}

pub fn commission_product() -> Product {
    Product::new(50, "Sales commission")
        .with_expense_account(6100)
        .with_supplier_taxes([7])
}

pub fn settings() -> CommissionSettings {
    CommissionSettings::new(Some(commission_product()))
}

pub fn unconfigured_settings() -> CommissionSettings {
    CommissionSettings::new(None)
}

/// Confirmed sale in `CATEGORY` earning `commission_type` for `middleman`
pub fn sale(id: i64, middleman: i64, commission_type: i64) -> Sale {
    let mut sale = Sale::new(id, CUSTOMER).with_categories([CATEGORY]);
    sale.set_commission(Some(middleman), Some(commission_type))
        .expect("draft sale");
    sale.confirm().expect("draft sale confirms");
    sale
}

/// Posted USD invoice
pub fn invoice(
    id: i64,
    untaxed_amount: Decimal,
    payment_term: PaymentTerm,
    lines_to_pay: Vec<InstallmentLine>,
    sales: Vec<Sale>,
) -> Invoice {
    Invoice {
        id,
        number: Some(format!("INV/2026/{:04}", id)),
        currency: Currency::USD,
        company: Company {
            id: 1,
            currency: Currency::USD,
        },
        untaxed_amount,
        payment_term,
        invoice_date: invoice_date(),
        move_id: Some(format!("MOVE-{}", id)),
        lines_to_pay,
        sales,
    }
}

/// Single immediate installment for `amount`, paid
pub fn paid_invoice(id: i64, amount: Decimal, sales: Vec<Sale>) -> Invoice {
    let line = InstallmentLine::new(id * 10 + 1, 1, Some(invoice_date()), amount)
        .reconciled(format!("REC-{}", id));
    invoice(id, amount, PaymentTerm::immediate(), vec![line], sales)
}

/// Engine over an in-memory store, with the store kept for inspection
pub struct Harness {
    pub repository: Arc<InMemoryAccountingLineRepository>,
    pub engine: CommissionEngine,
}

pub fn harness(rate_table: RateTable) -> Harness {
    harness_with_converter(rate_table, FixedRateConverter::new())
}

/// Harness converting invoice totals with `converter`
pub fn harness_with_converter(rate_table: RateTable, converter: FixedRateConverter) -> Harness {
    sale_commission::core::telemetry::init_tracing("debug");

    let repository = Arc::new(InMemoryAccountingLineRepository::new());
    let collector = CommissionCollector::new(
        Arc::new(rate_table),
        Arc::new(CategoryApplicability),
        Arc::new(converter),
        Arc::new(PaymentTermScheduler::new()),
        repository.clone(),
    );
    let engine = CommissionEngine::new(collector, repository.clone());

    Harness { repository, engine }
}
