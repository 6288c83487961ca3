use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Category, CategoryId, Notice, Transactions};

#[derive(Debug)]
/// An error that can occur when reading a statement.
pub enum StatementError {
    /// The statement could not be parsed.
    DeserializationError(serde_json::Error),
    /// A category has a negative or non-finite amount.
    InvalidAmount {
        /// The offending category
        category_id: CategoryId,
        /// The amount it carried
        amount: f64,
    },
    /// Two categories share the same id.
    DuplicateCategory {
        /// The repeated id
        category_id: CategoryId,
    },
}
impl std::fmt::Display for StatementError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatementError::DeserializationError(e) => write!(f, "Deserialization error: {e}"),
            StatementError::InvalidAmount {
                category_id,
                amount,
            } => write!(f, "Category `{category_id}` has an invalid amount: {amount}"),
            StatementError::DuplicateCategory { category_id } => {
                write!(f, "Category `{category_id}` appears more than once")
            }
        }
    }
}
impl std::error::Error for StatementError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StatementError::DeserializationError(e) => Some(e),
            StatementError::InvalidAmount { .. }
            | StatementError::DuplicateCategory { .. } => None,
        }
    }
}
impl From<serde_json::Error> for StatementError {
    fn from(e: serde_json::Error) -> Self {
        StatementError::DeserializationError(e)
    }
}
/// A result type for statement parsing.
pub type StatementResult<T> = Result<T, StatementError>;

/// Balance figures for the statement period.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountSummary {
    /// The outstanding balance
    pub total_due: f64,
    /// The card's credit limit, if the issuer reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_limit: Option<f64>,
    /// The minimum payment due
    #[serde(default)]
    pub minimum_payment: f64,
    /// When the payment is due
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_due_date: Option<NaiveDate>,
}
impl AccountSummary {
    /// The balance as a percentage of the credit limit.
    ///
    /// Returns 0 when there is no usable credit limit.
    pub fn utilization_percent(&self) -> f64 {
        match self.credit_limit {
            Some(limit) if limit > 0.0 && limit.is_finite() => self.total_due / limit * 100.0,
            _ => 0.0,
        }
    }
}

/// A credit card and everything its statement reports.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// The card's display name
    pub name: String,
    /// The last four digits of the card number
    #[serde(default)]
    pub last_four: String,
    /// Spending per category, in issuer order
    #[serde(default)]
    pub categories: Vec<Category>,
    /// Notices attached to the card
    #[serde(default)]
    pub notices: Vec<Notice>,
    /// The statement's transactions
    #[serde(default)]
    pub transactions: Transactions,
    /// Balance figures
    #[serde(default)]
    pub account_summary: Option<AccountSummary>,
}

/// A credit card statement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreditCardStatement {
    /// The card the statement is for
    pub card: Card,
}
impl CreditCardStatement {
    /// Parse and validate a statement from JSON.
    pub fn from_json_str(json: &str) -> StatementResult<Self> {
        let statement: Self = serde_json::from_str(json)?;
        statement.validate()?;
        Ok(statement)
    }

    /// Check that category ids are unique and every amount is a finite,
    /// non-negative number.
    pub fn validate(&self) -> StatementResult<()> {
        let mut seen = HashSet::new();
        for category in &self.card.categories {
            if !category.amount.is_finite() || category.amount < 0.0 {
                return Err(StatementError::InvalidAmount {
                    category_id: category.id.clone(),
                    amount: category.amount,
                });
            }
            if !seen.insert(&category.id) {
                return Err(StatementError::DuplicateCategory {
                    category_id: category.id.clone(),
                });
            }
        }
        Ok(())
    }
}
