// Persistence of generated commission lines
//
// Implements:
// - Existence check by installment origin (idempotency key)
// - Atomic batch creation: all lines or none
// - Lookup by origin

use std::collections::BTreeSet;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use sqlx::{FromRow, MySql, MySqlPool, Transaction};

use crate::core::{AppError, Currency, Result};
use crate::modules::commissions::models::{AccountingLine, InvoiceType, NewAccountingLine};

/// Storage for commission lines
#[async_trait]
pub trait AccountingLineRepository: Send + Sync {
    /// Whether any line was already generated for `origin`
    async fn exists_by_origin(&self, origin: &str) -> Result<bool>;

    /// Persist every line or none of them.
    ///
    /// Fails with `DataInconsistency` if lines already exist for one of the
    /// batch's origins, so a concurrent run cannot double-book an installment.
    async fn create_batch(&self, lines: &[NewAccountingLine]) -> Result<Vec<AccountingLine>>;

    async fn find_by_origin(&self, origin: &str) -> Result<Vec<AccountingLine>>;
}

/// Origins of a batch, deduplicated and sorted for stable locking order
pub(crate) fn batch_origins(lines: &[NewAccountingLine]) -> BTreeSet<&str> {
    lines.iter().map(|l| l.origin.as_str()).collect()
}

/// Repository for commission lines stored in MySQL
pub struct MySqlAccountingLineRepository {
    pool: MySqlPool,
}

impl MySqlAccountingLineRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Insert a single line within a transaction
    async fn insert_with_tx(&self, tx: &mut Transaction<'_, MySql>, line: &AccountingLine) -> Result<()> {
        let taxes = serde_json::to_string(&line.line.taxes)?;

        sqlx::query(
            r#"
            INSERT INTO accounting_lines (
                id, party_id, invoice_type, description, product_id, account_id,
                unit, taxes, currency, quantity, unit_price, origin, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&line.id)
        .bind(line.line.party_id)
        .bind(line.line.invoice_type.as_str())
        .bind(&line.line.description)
        .bind(line.line.product_id)
        .bind(line.line.account_id)
        .bind(&line.line.unit)
        .bind(taxes)
        .bind(line.line.currency.as_str())
        .bind(line.line.quantity)
        .bind(line.line.unit_price)
        .bind(&line.line.origin)
        .bind(line.created_at)
        .execute(&mut **tx)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl AccountingLineRepository for MySqlAccountingLineRepository {
    async fn exists_by_origin(&self, origin: &str) -> Result<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM accounting_lines WHERE origin = ?")
            .bind(origin)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }

    async fn create_batch(&self, lines: &[NewAccountingLine]) -> Result<Vec<AccountingLine>> {
        if lines.is_empty() {
            return Ok(Vec::new());
        }

        let mut tx = self.pool.begin().await?;

        for origin in batch_origins(lines) {
            let count: i64 =
                sqlx::query_scalar("SELECT COUNT(*) FROM accounting_lines WHERE origin = ? FOR UPDATE")
                    .bind(origin)
                    .fetch_one(&mut *tx)
                    .await?;

            if count > 0 {
                // Dropping the transaction rolls it back
                return Err(AppError::inconsistency(format!(
                    "Commission lines already exist for origin {}",
                    origin
                )));
            }
        }

        let persisted: Vec<AccountingLine> = lines.iter().cloned().map(AccountingLine::persisted).collect();
        for line in &persisted {
            self.insert_with_tx(&mut tx, line).await?;
        }

        tx.commit().await?;

        Ok(persisted)
    }

    async fn find_by_origin(&self, origin: &str) -> Result<Vec<AccountingLine>> {
        let rows = sqlx::query_as::<_, AccountingLineRow>(
            r#"
            SELECT
                id, party_id, invoice_type, description, product_id, account_id,
                unit, CAST(taxes AS CHAR) AS taxes, currency, quantity, unit_price,
                origin, created_at
            FROM accounting_lines
            WHERE origin = ?
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(origin)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(AccountingLine::try_from).collect()
    }
}

/// Database row representation
#[derive(Debug, FromRow)]
struct AccountingLineRow {
    id: String,
    party_id: i64,
    invoice_type: String,
    description: String,
    product_id: i64,
    account_id: i64,
    unit: String,
    taxes: String,
    currency: String,
    quantity: Decimal,
    unit_price: Decimal,
    origin: String,
    created_at: NaiveDateTime,
}

impl TryFrom<AccountingLineRow> for AccountingLine {
    type Error = AppError;

    fn try_from(row: AccountingLineRow) -> Result<Self> {
        Ok(AccountingLine {
            id: row.id,
            line: NewAccountingLine {
                party_id: row.party_id,
                invoice_type: InvoiceType::try_from(row.invoice_type).map_err(AppError::inconsistency)?,
                description: row.description,
                product_id: row.product_id,
                account_id: row.account_id,
                unit: row.unit,
                taxes: serde_json::from_str(&row.taxes)?,
                currency: row.currency.parse::<Currency>().map_err(AppError::inconsistency)?,
                quantity: row.quantity,
                unit_price: row.unit_price,
                origin: row.origin,
            },
            created_at: row.created_at,
        })
    }
}
