use super::pipeline::Step;
use crate::domain::message::Message;
use crate::domain::ports::{ApplicationStore, SharedApplicationStore};
use crate::error::{LoanError, Result};
use async_trait::async_trait;

/// Pass-through placeholder for real request validation.
pub struct CheckRequestValidity;

#[async_trait]
impl Step for CheckRequestValidity {
    async fn invoke(&self, input: Message) -> Result<Message> {
        Ok(input)
    }
}

/// Persists a submitted application and answers with its ticket.
pub struct ApplyForLoan {
    store: SharedApplicationStore,
}

impl ApplyForLoan {
    pub fn new(store: SharedApplicationStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Step for ApplyForLoan {
    async fn invoke(&self, input: Message) -> Result<Message> {
        match input {
            Message::Application(application) => {
                let ticket = self.store.store(application).await?;
                Ok(Message::Ticket(ticket))
            }
            _ => Err(LoanError::UnexpectedMessage("apply")),
        }
    }
}

/// Looks up the current record for a status query.
pub struct CheckStatus {
    store: SharedApplicationStore,
}

impl CheckStatus {
    pub fn new(store: SharedApplicationStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Step for CheckStatus {
    async fn invoke(&self, input: Message) -> Result<Message> {
        match input {
            Message::StatusRequest(id) => {
                let application = self.store.fetch(id).await?;
                Ok(Message::Application(application))
            }
            _ => Err(LoanError::UnexpectedMessage("status")),
        }
    }
}

/// Marks an application approved and answers with the approved record.
pub struct ApproveLoan {
    store: SharedApplicationStore,
}

impl ApproveLoan {
    pub fn new(store: SharedApplicationStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Step for ApproveLoan {
    async fn invoke(&self, input: Message) -> Result<Message> {
        match input {
            Message::ApprovalRequest(id) => {
                let ticket = self.store.approve(id).await?;
                let application = self.store.fetch(ticket.id).await?;
                Ok(Message::Application(application))
            }
            _ => Err(LoanError::UnexpectedMessage("approve")),
        }
    }
}

/// Pass-through placeholder for real credential validation.
pub struct CheckCredentials;

#[async_trait]
impl Step for CheckCredentials {
    async fn invoke(&self, input: Message) -> Result<Message> {
        Ok(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::application::LoanApplication;
    use crate::infrastructure::in_memory::InMemoryStore;
    use std::sync::Arc;

    fn store() -> SharedApplicationStore {
        Arc::new(InMemoryStore::new())
    }

    #[tokio::test]
    async fn test_validity_check_passes_message_through() {
        let input = Message::StatusRequest(5);
        let output = CheckRequestValidity.invoke(input.clone()).await.unwrap();
        assert_eq!(output, input);
    }

    #[tokio::test]
    async fn test_apply_persists_and_returns_ticket() {
        let store = store();
        let step = ApplyForLoan::new(store.clone());
        let application = LoanApplication::new(1, 5000, "a@b.com", "555-1212");

        let output = step
            .invoke(Message::Application(application.clone()))
            .await
            .unwrap();

        match output {
            Message::Ticket(ticket) => assert_eq!(ticket.id, 1),
            other => panic!("expected ticket, got {other:?}"),
        }
        assert_eq!(store.fetch(1).await.unwrap(), application);
    }

    #[tokio::test]
    async fn test_status_propagates_not_found() {
        let step = CheckStatus::new(store());
        let err = step.invoke(Message::StatusRequest(99)).await.unwrap_err();
        assert!(matches!(err, LoanError::TicketNotFound(99)));
    }

    #[tokio::test]
    async fn test_approve_returns_approved_record() {
        let store = store();
        store
            .store(LoanApplication::new(3, 100, "a@b.com", "555"))
            .await
            .unwrap();

        let step = ApproveLoan::new(store);
        let output = step.invoke(Message::ApprovalRequest(3)).await.unwrap();

        match output {
            Message::Application(application) => {
                assert_eq!(application.id, 3);
                assert!(application.approved);
            }
            other => panic!("expected application, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_wrong_variant_is_rejected() {
        let step = ApplyForLoan::new(store());
        let err = step.invoke(Message::StatusRequest(1)).await.unwrap_err();
        assert!(matches!(err, LoanError::UnexpectedMessage("apply")));
    }
}
