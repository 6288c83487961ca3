//! Totals and shares over a list of categories.
//!
//! Everything here is a pure function of the category list. Categories are
//! compared by value, so two lists with identical contents always aggregate
//! identically.

use spendview_state::{Category, CategoryId};

/// Categories whose share is below this fraction are labelled outside the bar.
pub const DEFAULT_SMALL_THRESHOLD: f64 = 0.1;

/// An error that can occur when computing a share.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateError {
    /// The categories sum to zero, so no share is defined.
    DivisionByZero,
}
impl std::fmt::Display for AggregateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AggregateError::DivisionByZero => write!(f, "total amount is zero"),
        }
    }
}
impl std::error::Error for AggregateError {}

/// The share of a single category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub id: CategoryId,
    pub share: f64,
}

/// Everything derived from a category list for one render pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AggregateResult {
    /// The sum of all amounts; 0 for an empty list.
    pub total: f64,
    /// One entry per category, in list order. Empty when `total` is 0.
    pub shares: Vec<CategoryShare>,
    /// Categories whose share is strictly below the threshold, in list order.
    pub small_categories: Vec<CategoryId>,
}
impl AggregateResult {
    pub fn is_small(&self, id: &CategoryId) -> bool {
        self.small_categories.contains(id)
    }

    pub fn share_of(&self, id: &CategoryId) -> Option<f64> {
        self.shares.iter().find(|s| &s.id == id).map(|s| s.share)
    }
}

/// Sum of all amounts.
pub fn total(categories: &[Category]) -> f64 {
    categories.iter().map(|c| c.amount).sum()
}

/// `category.amount / total(categories)`.
pub fn share(categories: &[Category], category: &Category) -> Result<f64, AggregateError> {
    share_of_total(category.amount, total(categories))
}

fn share_of_total(amount: f64, total: f64) -> Result<f64, AggregateError> {
    if total == 0.0 {
        return Err(AggregateError::DivisionByZero);
    }
    Ok(amount / total)
}

/// Categories whose share is strictly less than `threshold`, in list order.
///
/// A list that sums to zero has no shares, and therefore no small categories.
pub fn small_categories(categories: &[Category], threshold: f64) -> Vec<&Category> {
    let total = total(categories);
    categories
        .iter()
        .filter(|c| share_of_total(c.amount, total).is_ok_and(|share| share < threshold))
        .collect()
}

/// Computes the total, every share, and the small categories in one pass over the list.
pub fn aggregate(categories: &[Category], threshold: f64) -> AggregateResult {
    let total = total(categories);
    if total == 0.0 {
        return AggregateResult::default();
    }

    let shares: Vec<CategoryShare> = categories
        .iter()
        .map(|c| CategoryShare {
            id: c.id.clone(),
            share: c.amount / total,
        })
        .collect();
    let small_categories = shares
        .iter()
        .filter(|s| s.share < threshold)
        .map(|s| s.id.clone())
        .collect();

    AggregateResult {
        total,
        shares,
        small_categories,
    }
}
