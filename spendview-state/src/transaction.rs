use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::CategoryId;

/// A single card transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The transaction ID
    pub id: String,
    /// The posting date
    pub date: NaiveDate,
    /// The merchant description
    pub description: String,
    /// The spending category, if the issuer assigned one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
    /// The amount; positive for debits, negative for credits
    pub amount: f64,
}

/// Debit and credit totals for a statement period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    /// Total of all debits
    pub debit: f64,
    /// Total of all credits
    #[serde(default)]
    pub credit: f64,
}

/// The transactions of a statement, with their totals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transactions {
    /// Period totals
    pub totals: Totals,
    /// The individual transactions
    #[serde(default)]
    pub items: Vec<Transaction>,
}
impl Transactions {
    /// Iterate over the transactions in a category, or all of them if `category_id` is `None`.
    pub fn in_category<'a>(
        &'a self,
        category_id: Option<&'a CategoryId>,
    ) -> impl Iterator<Item = &'a Transaction> + 'a {
        self.items
            .iter()
            .filter(move |t| category_id.is_none_or(|id| t.category_id.as_ref() == Some(id)))
    }
}
