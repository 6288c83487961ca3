//! Representations of a credit card statement, as the spending screen cares about it.
//!
//! Separated out so the data model can be used without the view logic.
#![deny(missing_docs)]

mod category;
pub use category::{Category, CategoryColor, CategoryId};

mod notice;
pub use notice::Notice;

mod transaction;
pub use transaction::{Totals, Transaction, Transactions};

mod file_details;
pub use file_details::FileDetails;

mod statement;
pub use statement::{
    AccountSummary, Card, CreditCardStatement, StatementError, StatementResult,
};
