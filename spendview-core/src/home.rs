//! The spending screen's state, and the transitions between states.

use serde::{Deserialize, Serialize};
use spendview_state::{
    AccountSummary, Category, CategoryId, CreditCardStatement, FileDetails, Notice, Transaction,
};

use crate::notices;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomeState {
    pub statement: Option<CreditCardStatement>,
    /// Categories sorted by descending amount; this is the bar's stacking order.
    pub categories: Vec<Category>,
    pub notices: Vec<Notice>,
    pub notices_in_tabs: Vec<Notice>,
    pub account_summary: Option<AccountSummary>,
    /// Total spend for the period, from the statement's debit total.
    pub total_amount: f64,
    /// Balance as a percentage of the credit limit.
    pub utilization: f64,

    pub selected_category: Option<CategoryId>,
    pub showing_transaction_sheet: bool,
    pub is_viewing_total: bool,
    pub show_importing: bool,
    pub current_notice_index: usize,
    pub file_details: Vec<FileDetails>,

    pub error: Option<HomeError>,
}
impl HomeState {
    pub fn selected_category(&self) -> Option<&Category> {
        let id = self.selected_category.as_ref()?;
        self.categories.iter().find(|c| &c.id == id)
    }

    pub fn current_notice(&self) -> Option<&Notice> {
        self.notices_in_tabs.get(self.current_notice_index)
    }

    /// The transactions shown on the sheet: those of the selected category,
    /// or all of them when viewing the total.
    pub fn sheet_transactions(&self) -> Vec<&Transaction> {
        let Some(statement) = &self.statement else {
            return vec![];
        };
        let category_id = if self.is_viewing_total {
            None
        } else {
            self.selected_category.as_ref()
        };
        statement
            .card
            .transactions
            .in_category(category_id)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HomeError {
    LoadStatementFailed { error: String },
    UploadFailed { file_name: String, error: String },
    ListStatementsFailed { error: String },
}
impl HomeError {
    /// Should be paired with [`Self::display_message`]
    pub fn display_name(&self) -> &'static str {
        match self {
            HomeError::LoadStatementFailed { .. } => "Failed to load statement",
            HomeError::UploadFailed { .. } => "Failed to upload statement",
            HomeError::ListStatementsFailed { .. } => "Failed to list statements",
        }
    }

    /// Should be paired with [`Self::display_name`]
    pub fn display_message(&self) -> String {
        match self {
            HomeError::LoadStatementFailed { error } => error.clone(),
            HomeError::UploadFailed { file_name, error } => format!("`{file_name}`: {error}"),
            HomeError::ListStatementsFailed { error } => error.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum HomeEvent {
    StatementLoaded(CreditCardStatement),
    StatementLoadFailed { error: String },
    CategorySelected(CategoryId),
    ViewTotal,
    AddTransaction,
    DismissSheet,
    ImportRequested,
    ImportCancelled,
    UploadFinished(Result<FileDetails, HomeError>),
    StatementsListed(Result<Vec<FileDetails>, HomeError>),
    /// The notice rotation timer fired.
    NoticeTick,
    DismissError,
}

/// Applies `event` to `state`, producing the next state.
pub fn update(mut state: HomeState, event: HomeEvent) -> HomeState {
    match event {
        HomeEvent::StatementLoaded(statement) => {
            let card = &statement.card;

            let mut categories = card.categories.clone();
            categories.sort_by(|a, b| b.amount.total_cmp(&a.amount));

            state.notices = card.notices.clone();
            state.notices_in_tabs = notices::tab_notices(&card.notices);
            state.total_amount = card.transactions.totals.debit;
            state.account_summary = card.account_summary.clone();
            state.utilization = state
                .account_summary
                .as_ref()
                .map(AccountSummary::utilization_percent)
                .unwrap_or_default();
            state.current_notice_index = 0;

            // Keep the selection if the category survived the reload.
            if state
                .selected_category
                .as_ref()
                .is_some_and(|id| !categories.iter().any(|c| &c.id == id))
            {
                state.selected_category = None;
                state.showing_transaction_sheet = state.is_viewing_total;
            }

            state.categories = categories;
            state.statement = Some(statement);
            state.error = None;
        }
        HomeEvent::StatementLoadFailed { error } => {
            state.error = Some(HomeError::LoadStatementFailed { error });
        }
        HomeEvent::CategorySelected(id) => {
            if state.categories.iter().any(|c| c.id == id) {
                state.is_viewing_total = false;
                state.selected_category = Some(id);
                state.showing_transaction_sheet = true;
            }
        }
        HomeEvent::ViewTotal => {
            state.is_viewing_total = true;
            state.selected_category = None;
            state.showing_transaction_sheet = true;
        }
        HomeEvent::AddTransaction => {
            state.showing_transaction_sheet = true;
        }
        HomeEvent::DismissSheet => {
            state.showing_transaction_sheet = false;
            state.is_viewing_total = false;
        }
        HomeEvent::ImportRequested => {
            state.show_importing = true;
        }
        HomeEvent::ImportCancelled => {
            state.show_importing = false;
        }
        HomeEvent::UploadFinished(result) => {
            state.show_importing = false;
            match result {
                Ok(details) => {
                    state.file_details.retain(|f| f.id != details.id);
                    state.file_details.push(details);
                }
                Err(error) => state.error = Some(error),
            }
        }
        HomeEvent::StatementsListed(result) => match result {
            Ok(files) => state.file_details = files,
            Err(error) => state.error = Some(error),
        },
        HomeEvent::NoticeTick => {
            state.current_notice_index = notices::advance_notice_index(
                state.current_notice_index,
                state.notices_in_tabs.len(),
            );
        }
        HomeEvent::DismissError => {
            state.error = None;
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use spendview_state::{Card, CategoryColor, Totals, Transactions};

    fn statement(amounts: &[(&str, f64)]) -> CreditCardStatement {
        CreditCardStatement {
            card: Card {
                name: "Test".to_string(),
                categories: amounts
                    .iter()
                    .map(|(id, amount)| Category::new(id, *id, CategoryColor::default(), *amount))
                    .collect(),
                notices: vec![
                    Notice {
                        id: "info".to_string(),
                        title: "Info".to_string(),
                        message: String::new(),
                        severity: 0,
                    },
                    Notice {
                        id: "due".to_string(),
                        title: "Due".to_string(),
                        message: String::new(),
                        severity: 2,
                    },
                    Notice {
                        id: "limit".to_string(),
                        title: "Limit".to_string(),
                        message: String::new(),
                        severity: 1,
                    },
                ],
                transactions: Transactions {
                    totals: Totals {
                        debit: 300.0,
                        credit: 0.0,
                    },
                    items: vec![],
                },
                account_summary: Some(AccountSummary {
                    total_due: 250.0,
                    credit_limit: Some(1000.0),
                    ..Default::default()
                }),
                ..Default::default()
            },
        }
    }

    fn loaded() -> HomeState {
        update(
            HomeState::default(),
            HomeEvent::StatementLoaded(statement(&[("a", 50.0), ("b", 200.0), ("c", 50.0)])),
        )
    }

    #[test]
    fn test_statement_loaded() {
        let state = loaded();
        let ids: Vec<_> = state.categories.iter().map(|c| c.id.to_string()).collect();
        // Descending by amount; ties keep their original order.
        assert_eq!(ids, ["b", "a", "c"]);
        assert_eq!(state.total_amount, 300.0);
        assert_eq!(state.utilization, 25.0);
        let tab_ids: Vec<_> = state.notices_in_tabs.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(tab_ids, ["due", "limit"]);
        assert_eq!(state.notices.len(), 3);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_select_category() {
        let state = update(loaded(), HomeEvent::ViewTotal);
        assert!(state.is_viewing_total);

        let state = update(state, HomeEvent::CategorySelected(CategoryId::new("a")));
        assert!(!state.is_viewing_total);
        assert!(state.showing_transaction_sheet);
        assert_eq!(state.selected_category().map(|c| c.amount), Some(50.0));

        let state = update(state, HomeEvent::DismissSheet);
        assert!(!state.showing_transaction_sheet);
    }

    #[test]
    fn test_select_unknown_category_is_ignored() {
        let before = loaded();
        let after = update(before.clone(), HomeEvent::CategorySelected(CategoryId::new("zzz")));
        assert_eq!(before, after);
    }

    #[test]
    fn test_reload_drops_missing_selection() {
        let state = update(loaded(), HomeEvent::CategorySelected(CategoryId::new("c")));
        let state = update(
            state,
            HomeEvent::StatementLoaded(statement(&[("a", 1.0), ("b", 2.0)])),
        );
        assert!(state.selected_category.is_none());
        assert!(!state.showing_transaction_sheet);

        let state = update(state, HomeEvent::CategorySelected(CategoryId::new("a")));
        let state = update(
            state,
            HomeEvent::StatementLoaded(statement(&[("a", 3.0), ("b", 2.0)])),
        );
        assert_eq!(state.selected_category, Some(CategoryId::new("a")));
    }

    #[test]
    fn test_notice_tick_rotates() {
        let mut state = loaded();
        assert_eq!(state.current_notice().map(|n| n.id.as_str()), Some("due"));
        state = update(state, HomeEvent::NoticeTick);
        assert_eq!(state.current_notice().map(|n| n.id.as_str()), Some("limit"));
        state = update(state, HomeEvent::NoticeTick);
        assert_eq!(state.current_notice().map(|n| n.id.as_str()), Some("due"));

        let empty = update(HomeState::default(), HomeEvent::NoticeTick);
        assert_eq!(empty.current_notice_index, 0);
        assert!(empty.current_notice().is_none());
    }

    #[test]
    fn test_upload_and_errors() {
        let file = FileDetails {
            id: "march.pdf".to_string(),
            name: "march.pdf".to_string(),
            size_bytes: 10,
            uploaded_at: None,
        };
        let state = update(loaded(), HomeEvent::ImportRequested);
        assert!(state.show_importing);

        let state = update(state, HomeEvent::UploadFinished(Ok(file.clone())));
        let state = update(state, HomeEvent::UploadFinished(Ok(file.clone())));
        assert!(!state.show_importing);
        assert_eq!(state.file_details, vec![file]);

        let error = HomeError::UploadFailed {
            file_name: "x.txt".to_string(),
            error: "not a PDF".to_string(),
        };
        let state = update(state, HomeEvent::UploadFinished(Err(error.clone())));
        assert_eq!(state.error, Some(error));
        assert_eq!(state.file_details.len(), 1);

        let state = update(state, HomeEvent::DismissError);
        assert!(state.error.is_none());

        let state = update(
            state,
            HomeEvent::StatementLoadFailed {
                error: "boom".to_string(),
            },
        );
        assert_eq!(
            state.error.as_ref().map(HomeError::display_name),
            Some("Failed to load statement")
        );
        // The previously loaded statement is kept.
        assert!(state.statement.is_some());
    }
}
