use super::pipeline::Pipeline;
use super::steps::{ApplyForLoan, ApproveLoan, CheckCredentials, CheckRequestValidity, CheckStatus};
use crate::domain::application::{Credentials, LoanApplication, Ticket};
use crate::domain::message::Message;
use crate::domain::ports::SharedApplicationStore;
use crate::error::{LoanError, Result};

/// Accepts a loan application and answers with a ticket for it.
pub struct SubmitService {
    pipeline: Pipeline,
}

impl SubmitService {
    pub fn new(store: SharedApplicationStore) -> Self {
        let pipeline = Pipeline::new()
            .register(CheckRequestValidity)
            .register(ApplyForLoan::new(store));
        Self { pipeline }
    }

    pub async fn invoke(&self, msg: Message) -> Result<Ticket> {
        match self.pipeline.execute(msg).await? {
            Some(Message::Ticket(ticket)) => Ok(ticket),
            _ => Err(LoanError::UnexpectedMessage("submit")),
        }
    }
}

/// Answers a status query with the current state of the application.
pub struct StatusService {
    pipeline: Pipeline,
}

impl StatusService {
    pub fn new(store: SharedApplicationStore) -> Self {
        let pipeline = Pipeline::new().register(CheckStatus::new(store));
        Self { pipeline }
    }

    pub async fn invoke(&self, msg: Message) -> Result<LoanApplication> {
        match self.pipeline.execute(msg).await? {
            Some(Message::Application(application)) => Ok(application),
            _ => Err(LoanError::UnexpectedMessage("status")),
        }
    }
}

/// Approves an application and answers with the approved record.
pub struct ApprovalService {
    pipeline: Pipeline,
}

impl ApprovalService {
    pub fn new(store: SharedApplicationStore) -> Self {
        let pipeline = Pipeline::new().register(ApproveLoan::new(store));
        Self { pipeline }
    }

    pub async fn invoke(&self, msg: Message) -> Result<LoanApplication> {
        match self.pipeline.execute(msg).await? {
            Some(Message::Application(application)) => Ok(application),
            _ => Err(LoanError::UnexpectedMessage("approve")),
        }
    }
}

/// Login stub: runs the credential check and echoes the credentials back.
pub struct LoginService {
    pipeline: Pipeline,
}

impl Default for LoginService {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginService {
    pub fn new() -> Self {
        let pipeline = Pipeline::new().register(CheckCredentials);
        Self { pipeline }
    }

    pub async fn invoke(&self, msg: Message) -> Result<Credentials> {
        match self.pipeline.execute(msg).await? {
            Some(Message::Login(credentials)) => Ok(credentials),
            _ => Err(LoanError::UnexpectedMessage("login")),
        }
    }
}
