//! Sources of statements and stores for uploaded statement PDFs.

use std::{
    path::{Path, PathBuf},
    sync::Mutex,
};

use chrono::{DateTime, Utc};
use spendview_state::{CreditCardStatement, FileDetails, StatementError};

#[derive(Debug)]
/// An error that can occur when talking to a statement repository.
pub enum RepositoryError {
    /// Reading or writing the backing store failed.
    Io(std::io::Error),
    /// The stored statement could not be read.
    Statement(StatementError),
    /// The uploaded file is not a PDF.
    NotPdf { file_name: String },
    /// The uploaded file is empty.
    EmptyFile { file_name: String },
}
impl std::fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RepositoryError::Io(e) => write!(f, "I/O error: {e}"),
            RepositoryError::Statement(e) => write!(f, "Statement error: {e}"),
            RepositoryError::NotPdf { file_name } => write!(f, "`{file_name}` is not a PDF"),
            RepositoryError::EmptyFile { file_name } => write!(f, "`{file_name}` is empty"),
        }
    }
}
impl std::error::Error for RepositoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RepositoryError::Io(e) => Some(e),
            RepositoryError::Statement(e) => Some(e),
            _ => None,
        }
    }
}
impl From<std::io::Error> for RepositoryError {
    fn from(e: std::io::Error) -> Self {
        RepositoryError::Io(e)
    }
}
impl From<StatementError> for RepositoryError {
    fn from(e: StatementError) -> Self {
        RepositoryError::Statement(e)
    }
}
/// A result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Fetches the current statement and stores uploaded statement PDFs.
pub trait StatementRepository {
    /// Load the statement to display.
    fn load_statement(&self) -> RepositoryResult<CreditCardStatement>;
    /// List the statement PDFs that have been uploaded.
    fn list_statements(&self) -> RepositoryResult<Vec<FileDetails>>;
    /// Store a statement PDF under `file_name`.
    fn upload_statement(&self, file_name: &str, data: &[u8]) -> RepositoryResult<FileDetails>;
}

const PDF_MAGIC: &[u8] = b"%PDF-";

/// Checks that an upload looks like a PDF, and returns the bare file name to store it under.
fn validate_upload<'a>(file_name: &'a str, data: &[u8]) -> RepositoryResult<&'a str> {
    let bare_name = Path::new(file_name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(file_name);

    let has_pdf_extension = Path::new(bare_name)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
    if !has_pdf_extension {
        return Err(RepositoryError::NotPdf {
            file_name: file_name.to_string(),
        });
    }
    if data.is_empty() {
        return Err(RepositoryError::EmptyFile {
            file_name: file_name.to_string(),
        });
    }
    if !data.starts_with(PDF_MAGIC) {
        return Err(RepositoryError::NotPdf {
            file_name: file_name.to_string(),
        });
    }
    Ok(bare_name)
}

/// Serves the built-in sample statement and keeps uploads in memory.
#[derive(Default)]
pub struct MockStatementRepository {
    uploads: Mutex<Vec<FileDetails>>,
}
impl MockStatementRepository {
    pub const MOCK_STATEMENT: &str = include_str!("../assets/mock_statement.json");

    pub fn new() -> Self {
        Self::default()
    }
}
impl StatementRepository for MockStatementRepository {
    fn load_statement(&self) -> RepositoryResult<CreditCardStatement> {
        Ok(CreditCardStatement::from_json_str(Self::MOCK_STATEMENT)?)
    }

    fn list_statements(&self) -> RepositoryResult<Vec<FileDetails>> {
        Ok(self.uploads.lock().unwrap().clone())
    }

    fn upload_statement(&self, file_name: &str, data: &[u8]) -> RepositoryResult<FileDetails> {
        let name = validate_upload(file_name, data)?;
        let mut uploads = self.uploads.lock().unwrap();
        let details = FileDetails {
            id: format!("mock-{}", uploads.len() + 1),
            name: name.to_string(),
            size_bytes: data.len() as u64,
            uploaded_at: Some(Utc::now()),
        };
        uploads.push(details.clone());
        tracing::info!("stored {name} ({} bytes) in memory", data.len());
        Ok(details)
    }
}

/// A directory holding `statement.json` and the uploaded PDFs next to it.
pub struct LocalStatementRepository {
    root: PathBuf,
}
impl LocalStatementRepository {
    pub const STATEMENT_FILENAME: &str = "statement.json";

    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn file_details(path: &Path) -> RepositoryResult<FileDetails> {
        let metadata = std::fs::metadata(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(FileDetails {
            id: name.clone(),
            name,
            size_bytes: metadata.len(),
            uploaded_at: metadata.modified().ok().map(DateTime::<Utc>::from),
        })
    }
}
impl StatementRepository for LocalStatementRepository {
    fn load_statement(&self) -> RepositoryResult<CreditCardStatement> {
        let path = self.root.join(Self::STATEMENT_FILENAME);
        let contents = std::fs::read_to_string(&path)?;
        let statement = CreditCardStatement::from_json_str(&contents)?;
        tracing::info!("loaded statement from {}", path.display());
        Ok(statement)
    }

    fn list_statements(&self) -> RepositoryResult<Vec<FileDetails>> {
        let entries = match std::fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(vec![]),
            Err(e) => return Err(e.into()),
        };

        let mut files = vec![];
        for entry in entries {
            let path = entry?.path();
            let is_pdf = path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
            if is_pdf {
                files.push(Self::file_details(&path)?);
            }
        }
        files.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(files)
    }

    fn upload_statement(&self, file_name: &str, data: &[u8]) -> RepositoryResult<FileDetails> {
        let name = validate_upload(file_name, data)?;
        std::fs::create_dir_all(&self.root)?;
        let path = self.root.join(name);
        std::fs::write(&path, data)?;
        tracing::info!("stored {name} ({} bytes) at {}", data.len(), path.display());
        Self::file_details(&path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PDF: &[u8] = b"%PDF-1.7\n%fake statement\n";

    #[test]
    fn test_mock_statement_loads() {
        let statement = MockStatementRepository::new().load_statement().unwrap();
        assert!(!statement.card.categories.is_empty());
        assert!(statement.card.account_summary.is_some());
        assert!(statement.card.transactions.totals.debit > 0.0);
    }

    #[test]
    fn test_mock_upload_is_listed() {
        let repository = MockStatementRepository::new();
        assert!(repository.list_statements().unwrap().is_empty());

        let details = repository
            .upload_statement("/home/me/Downloads/march.pdf", PDF)
            .unwrap();
        assert_eq!(details.name, "march.pdf");
        assert_eq!(details.size_bytes, PDF.len() as u64);
        assert_eq!(repository.list_statements().unwrap(), vec![details]);
    }

    #[test]
    fn test_upload_validation() {
        let repository = MockStatementRepository::new();
        assert!(matches!(
            repository.upload_statement("notes.txt", PDF),
            Err(RepositoryError::NotPdf { .. })
        ));
        assert!(matches!(
            repository.upload_statement("empty.pdf", b""),
            Err(RepositoryError::EmptyFile { .. })
        ));
        assert!(matches!(
            repository.upload_statement("fake.pdf", b"hello"),
            Err(RepositoryError::NotPdf { .. })
        ));
        assert!(repository.upload_statement("UPPER.PDF", PDF).is_ok());
    }

    #[test]
    fn test_local_repository_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("statements");
        let repository = LocalStatementRepository::new(&root);

        // A missing root lists nothing rather than failing.
        assert!(repository.list_statements().unwrap().is_empty());
        assert!(matches!(
            repository.load_statement(),
            Err(RepositoryError::Io(_))
        ));

        repository.upload_statement("b.pdf", PDF).unwrap();
        repository.upload_statement("../escape/a.pdf", PDF).unwrap();
        std::fs::write(root.join("readme.txt"), "not a statement").unwrap();

        let names: Vec<_> = repository
            .list_statements()
            .unwrap()
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, ["a.pdf", "b.pdf"]);
        assert!(!dir.path().join("escape").exists());

        std::fs::write(
            root.join(LocalStatementRepository::STATEMENT_FILENAME),
            MockStatementRepository::MOCK_STATEMENT,
        )
        .unwrap();
        let statement = repository.load_statement().unwrap();
        assert_eq!(
            statement,
            MockStatementRepository::new().load_statement().unwrap()
        );
    }

    #[test]
    fn test_local_repository_rejects_bad_statement() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(LocalStatementRepository::STATEMENT_FILENAME),
            "{}",
        )
        .unwrap();
        let repository = LocalStatementRepository::new(dir.path());
        assert!(matches!(
            repository.load_statement(),
            Err(RepositoryError::Statement(_))
        ));
    }
}
