use async_trait::async_trait;
use sqlx::{FromRow, MySqlPool};

use crate::core::{AppError, Result};
use crate::modules::commissions::models::CommissionSettings;
use crate::modules::products::models::Product;

/// Source of the commission settings used for a batch
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    async fn load_settings(&self) -> Result<CommissionSettings>;
}

/// Fixed settings, for embedders that manage configuration themselves
#[derive(Debug, Clone)]
pub struct StaticSettings(pub CommissionSettings);

#[async_trait]
impl SettingsRepository for StaticSettings {
    async fn load_settings(&self) -> Result<CommissionSettings> {
        Ok(self.0.clone())
    }
}

/// Reads the single `sale_configuration` row and its commission product
pub struct MySqlSettingsRepository {
    pool: MySqlPool,
}

impl MySqlSettingsRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SettingsRepository for MySqlSettingsRepository {
    async fn load_settings(&self) -> Result<CommissionSettings> {
        let row = sqlx::query_as::<_, ConfigurationRow>(
            r#"
            SELECT
                p.id AS product_id, p.name, p.unit, p.expense_account_id,
                p.category_expense_account_id,
                CAST(p.supplier_taxes AS CHAR) AS supplier_taxes
            FROM sale_configuration c
            LEFT JOIN products p ON p.id = c.commission_product_id
            WHERE c.id = 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::not_found("Sale configuration"))?;

        Ok(CommissionSettings::new(row.into_product()?))
    }
}

#[derive(Debug, FromRow)]
struct ConfigurationRow {
    product_id: Option<i64>,
    name: Option<String>,
    unit: Option<String>,
    expense_account_id: Option<i64>,
    category_expense_account_id: Option<i64>,
    supplier_taxes: Option<String>,
}

impl ConfigurationRow {
    fn into_product(self) -> Result<Option<Product>> {
        let Some(id) = self.product_id else {
            return Ok(None);
        };

        let supplier_taxes = match self.supplier_taxes {
            Some(raw) => serde_json::from_str(&raw)?,
            None => Vec::new(),
        };

        Ok(Some(Product {
            id,
            name: self.name.unwrap_or_default(),
            unit: self.unit.unwrap_or_else(|| "unit".to_string()),
            expense_account: self.expense_account_id,
            category_expense_account: self.category_expense_account_id,
            supplier_taxes,
        }))
    }
}
