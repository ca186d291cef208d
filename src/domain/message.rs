use crate::domain::application::{Credentials, LoanApplication, Ticket};

/// Envelope threaded through a service pipeline.
///
/// One variant per request or response shape. A step consumes one variant
/// and may emit another; a step handed a variant it does not understand
/// fails with [`LoanError::UnexpectedMessage`](crate::error::LoanError).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A loan application, either freshly submitted or fetched from the store.
    Application(LoanApplication),
    /// A status query for a previously issued application id.
    StatusRequest(u64),
    /// An approval request for an application id.
    ApprovalRequest(u64),
    /// Handle returned after persisting an application.
    Ticket(Ticket),
    /// Credentials for the login stub.
    Login(Credentials),
}
