pub mod accounting_line_repository;
pub mod in_memory_repository;
pub mod settings_repository;

pub use accounting_line_repository::{AccountingLineRepository, MySqlAccountingLineRepository};
pub use in_memory_repository::InMemoryAccountingLineRepository;
pub use settings_repository::{MySqlSettingsRepository, SettingsRepository, StaticSettings};
