use std::path::Path;

use crate::{
    aggregate::{self, AggregateResult},
    config,
    home::{self, HomeError, HomeEvent, HomeState},
    locate::{self, LinearScale, PointerEvent},
    repository::{LocalStatementRepository, MockStatementRepository, StatementRepository},
};

/// Owns the screen state and the statement repository, and turns host
/// requests into [`HomeEvent`]s.
pub struct Logic {
    repository: Box<dyn StatementRepository>,
    state: HomeState,
    small_category_threshold: f64,
}
impl Logic {
    pub fn new(repository: Box<dyn StatementRepository>, general: &config::General) -> Self {
        Self {
            repository,
            state: HomeState::default(),
            small_category_threshold: general.small_category_threshold,
        }
    }

    /// Builds the repository described by the config.
    pub fn from_config(general: &config::General, repository: &config::Repository) -> Self {
        let repository: Box<dyn StatementRepository> = match repository.kind {
            config::RepositoryKind::Mock => Box::new(MockStatementRepository::new()),
            config::RepositoryKind::Local => {
                Box::new(LocalStatementRepository::new(repository.root.clone()))
            }
        };
        Self::new(repository, general)
    }

    pub fn state(&self) -> &HomeState {
        &self.state
    }

    pub fn dispatch(&mut self, event: HomeEvent) {
        tracing::trace!(?event, "dispatching");
        self.state = home::update(std::mem::take(&mut self.state), event);
    }

    /// The aggregate for the categories currently on screen.
    pub fn aggregate(&self) -> AggregateResult {
        aggregate::aggregate(&self.state.categories, self.small_category_threshold)
    }

    pub fn load_statement(&mut self) {
        match self.repository.load_statement() {
            Ok(statement) => {
                tracing::info!(
                    "loaded statement for {} with {} categories",
                    statement.card.name,
                    statement.card.categories.len()
                );
                self.dispatch(HomeEvent::StatementLoaded(statement));
            }
            Err(e) => {
                tracing::warn!("failed to load statement: {e}");
                self.dispatch(HomeEvent::StatementLoadFailed {
                    error: e.to_string(),
                });
            }
        }
    }

    pub fn refresh_statements(&mut self) {
        let result = self.repository.list_statements().map_err(|e| {
            tracing::warn!("failed to list statements: {e}");
            HomeError::ListStatementsFailed {
                error: e.to_string(),
            }
        });
        self.dispatch(HomeEvent::StatementsListed(result));
    }

    /// Reads the file at `path` and stores it in the repository.
    pub fn upload_statement(&mut self, path: &Path) {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let result = std::fs::read(path)
            .map_err(|e| e.to_string())
            .and_then(|data| {
                self.repository
                    .upload_statement(&file_name, &data)
                    .map_err(|e| e.to_string())
            })
            .map_err(|error| {
                tracing::warn!("failed to upload {}: {error}", path.display());
                HomeError::UploadFailed {
                    file_name: file_name.clone(),
                    error,
                }
            });
        if let Ok(details) = &result {
            tracing::info!("uploaded {} ({} bytes)", details.name, details.size_bytes);
        }
        self.dispatch(HomeEvent::UploadFinished(result));
    }

    /// Selects the category under the pointer, if any, using `pixel_to_value`
    /// to convert plot offsets to amounts.
    ///
    /// Returns whether a category was selected.
    pub fn select_at(
        &mut self,
        event: &PointerEvent,
        pixel_to_value: impl Fn(f64) -> f64,
    ) -> bool {
        let mut selected = None;
        locate::select_category(&self.state.categories, event, pixel_to_value, |category| {
            selected = Some(category.id.clone());
        });
        match selected {
            Some(id) => {
                tracing::debug!("selected category {id}");
                self.dispatch(HomeEvent::CategorySelected(id));
                true
            }
            None => false,
        }
    }

    /// Selects the category under the pointer on a bar scaled linearly to the total.
    ///
    /// Nothing is drawn when the total is zero, so nothing can be selected.
    pub fn select_on_bar(&mut self, event: &PointerEvent) -> bool {
        let total = aggregate::total(&self.state.categories);
        if total == 0.0 {
            tracing::debug!("ignoring click on an empty bar");
            return false;
        }
        let scale = LinearScale::new(total, event.plot_width);
        self.select_at(event, |offset| scale.value_at(offset))
    }

    /// Moves the selection `delta` categories along the bar, wrapping around.
    pub fn select_adjacent(&mut self, delta: isize) {
        let categories = &self.state.categories;
        if categories.is_empty() {
            return;
        }
        let len = categories.len() as isize;
        let next = match self.state.selected_category.as_ref() {
            Some(id) => match categories.iter().position(|c| &c.id == id) {
                Some(current) => (current as isize + delta).rem_euclid(len),
                None => 0,
            },
            None if delta < 0 => len - 1,
            None => 0,
        };
        let id = categories[next as usize].id.clone();
        self.dispatch(HomeEvent::CategorySelected(id));
    }

    pub fn rotate_notice(&mut self) {
        self.dispatch(HomeEvent::NoticeTick);
    }
}
