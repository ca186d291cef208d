use crate::domain::application::{LoanApplication, Ticket};
use crate::domain::ports::ApplicationStore;
use crate::error::{LoanError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory store for loan applications.
///
/// Uses `Arc<RwLock<HashMap<u64, LoanApplication>>>` for shared concurrent
/// access. Backs ephemeral runs and the test suite; records do not survive
/// the process.
#[derive(Default, Clone)]
pub struct InMemoryStore {
    applications: Arc<RwLock<HashMap<u64, LoanApplication>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ApplicationStore for InMemoryStore {
    async fn store(&self, application: LoanApplication) -> Result<Ticket> {
        let id = application.id;
        let mut applications = self.applications.write().await;
        applications.insert(id, application);
        Ok(Ticket::new(id))
    }

    async fn fetch(&self, id: u64) -> Result<LoanApplication> {
        let applications = self.applications.read().await;
        applications
            .get(&id)
            .cloned()
            .ok_or(LoanError::TicketNotFound(id))
    }

    async fn approve(&self, id: u64) -> Result<Ticket> {
        let mut applications = self.applications.write().await;
        let application = applications
            .get_mut(&id)
            .ok_or(LoanError::TicketNotFound(id))?;
        application.approved = true;
        Ok(Ticket::new(id))
    }

    async fn last_id(&self) -> Result<u64> {
        let applications = self.applications.read().await;
        Ok(applications.keys().copied().max().unwrap_or(0))
    }
}
