// Commissions module

pub mod models;
pub mod repositories;
pub mod services;

pub use models::{AccountingLine, CommissionRecord, CommissionSettings, GroupKey, InvoiceType, NewAccountingLine};
pub use repositories::{
    AccountingLineRepository, InMemoryAccountingLineRepository, MySqlAccountingLineRepository,
    MySqlSettingsRepository, SettingsRepository, StaticSettings,
};
pub use services::{
    aggregate, CommissionCollector, CommissionEngine, CommissionGroup, CommissionService, LineMaterializer,
    ProcessOutcome,
};
