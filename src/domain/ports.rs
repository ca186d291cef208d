use super::application::{LoanApplication, Ticket};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Durable mapping from application id to application record.
///
/// `fetch` of an id with no record fails with
/// [`LoanError::TicketNotFound`](crate::error::LoanError), never a generic
/// I/O error; the status and approval flows depend on catching exactly that.
#[async_trait]
pub trait ApplicationStore: Send + Sync {
    /// Persists the application, overwriting any record at the same id.
    async fn store(&self, application: LoanApplication) -> Result<Ticket>;
    /// Retrieves the record for `id`.
    async fn fetch(&self, id: u64) -> Result<LoanApplication>;
    /// Fetches the record for `id`, flips `approved` to true and re-persists it.
    async fn approve(&self, id: u64) -> Result<Ticket>;
    /// Highest id currently persisted, 0 when the store is empty. Used to
    /// re-seed the id generator at startup.
    async fn last_id(&self) -> Result<u64>;
}

pub type SharedApplicationStore = Arc<dyn ApplicationStore>;
