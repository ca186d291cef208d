use thiserror::Error;

pub type Result<T> = std::result::Result<T, LoanError>;

#[derive(Error, Debug)]
pub enum LoanError {
    #[error("ticket {0} not found")]
    TicketNotFound(u64),
    #[error("could not access application record: {0}")]
    Storage(#[from] std::io::Error),
    #[error("malformed application record: {0}")]
    Record(#[from] serde_json::Error),
    #[error("pipeline for {0} returned an unexpected message")]
    UnexpectedMessage(&'static str),
}
