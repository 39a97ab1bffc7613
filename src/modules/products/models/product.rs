use serde::{Deserialize, Serialize};

pub type ProductId = i64;
pub type AccountId = i64;
pub type TaxId = i64;

/// Service product used to book commissions on supplier lines
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Unit of measure copied onto generated lines
    pub unit: String,
    /// Expense account, falling back to the category account when unset
    pub expense_account: Option<AccountId>,
    pub category_expense_account: Option<AccountId>,
    /// Taxes applied when the product is bought
    pub supplier_taxes: Vec<TaxId>,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            unit: "unit".to_string(),
            expense_account: None,
            category_expense_account: None,
            supplier_taxes: Vec::new(),
        }
    }

    pub fn with_expense_account(mut self, account: AccountId) -> Self {
        self.expense_account = Some(account);
        self
    }

    pub fn with_supplier_taxes(mut self, taxes: impl IntoIterator<Item = TaxId>) -> Self {
        self.supplier_taxes.extend(taxes);
        self
    }

    /// Expense account actually used: the product's own, else its category's
    pub fn expense_account_used(&self) -> Option<AccountId> {
        self.expense_account.or(self.category_expense_account)
    }
}
