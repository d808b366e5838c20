//! Data storage layer
//!
//! - `filters` - Query-string filter conditions and their SQL rendering
//! - `sqlite` - Embedded database for case and reimbursement records
//! - `types` - Row and query types shared by repositories and handlers
//! - `traits` - Repository traits consumed by the API layer
//! - `error` - Unified error type

pub mod error;
pub mod filters;
pub mod sqlite;
pub mod traits;
pub mod types;

pub use error::DataError;
pub use sqlite::SqliteService;
pub use traits::{CaseRepository, ReimbursementRepository};

use std::path::Path;
use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Transactional database service
///
/// Owns the backend service and hands out repository trait objects.
/// Cloning shares the underlying pool.
#[derive(Clone)]
pub struct TransactionalService {
    sqlite: Arc<SqliteService>,
}

impl TransactionalService {
    /// Open the SQLite database at `db_path`
    pub async fn init(db_path: &Path) -> Result<Self, DataError> {
        let service = SqliteService::init(db_path).await?;
        Ok(Self {
            sqlite: Arc::new(service),
        })
    }

    /// Wrap an already-open SQLite service
    pub fn from_sqlite(sqlite: Arc<SqliteService>) -> Self {
        Self { sqlite }
    }

    pub fn cases(&self) -> Box<dyn CaseRepository> {
        Box::new(Arc::clone(&self.sqlite))
    }

    pub fn reimbursements(&self) -> Box<dyn ReimbursementRepository> {
        Box::new(Arc::clone(&self.sqlite))
    }

    /// Start periodic WAL checkpointing until shutdown is signalled
    pub fn start_background_tasks(&self, shutdown_rx: watch::Receiver<bool>) -> JoinHandle<()> {
        self.sqlite.start_checkpoint_task(shutdown_rx)
    }

    /// Flush the WAL and close the pool
    pub async fn close(&self) {
        if let Err(e) = self.sqlite.checkpoint().await {
            tracing::warn!(error = %e, "Final WAL checkpoint failed");
        }
        self.sqlite.close().await;
    }
}
