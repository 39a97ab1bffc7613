use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::core::{AppError, Result};
use crate::modules::commissions::models::{AccountingLine, NewAccountingLine};
use crate::modules::commissions::repositories::accounting_line_repository::{
    batch_origins, AccountingLineRepository,
};

/// Process-local line store with the same all-or-nothing batch semantics as
/// the database repository
#[derive(Debug, Default)]
pub struct InMemoryAccountingLineRepository {
    lines: Mutex<Vec<AccountingLine>>,
}

impl InMemoryAccountingLineRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every stored line, in creation order
    pub fn all(&self) -> Result<Vec<AccountingLine>> {
        Ok(self.lock()?.clone())
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.lock()?.len())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<AccountingLine>>> {
        self.lines
            .lock()
            .map_err(|_| AppError::internal("Accounting line store lock poisoned"))
    }
}

#[async_trait]
impl AccountingLineRepository for InMemoryAccountingLineRepository {
    async fn exists_by_origin(&self, origin: &str) -> Result<bool> {
        Ok(self.lock()?.iter().any(|l| l.origin() == origin))
    }

    async fn create_batch(&self, lines: &[NewAccountingLine]) -> Result<Vec<AccountingLine>> {
        let mut stored = self.lock()?;

        for origin in batch_origins(lines) {
            if stored.iter().any(|l| l.origin() == origin) {
                return Err(AppError::inconsistency(format!(
                    "Commission lines already exist for origin {}",
                    origin
                )));
            }
        }

        let persisted: Vec<AccountingLine> = lines.iter().cloned().map(AccountingLine::persisted).collect();
        stored.extend(persisted.iter().cloned());
        Ok(persisted)
    }

    async fn find_by_origin(&self, origin: &str) -> Result<Vec<AccountingLine>> {
        Ok(self
            .lock()?
            .iter()
            .filter(|l| l.origin() == origin)
            .cloned()
            .collect())
    }
}
