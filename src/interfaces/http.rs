//! HTTP surface. Decodes requests into messages, invokes the matching
//! service and encodes the result; no business logic lives here.

use crate::application::services::{ApprovalService, LoginService, StatusService, SubmitService};
use crate::domain::application::{Credentials, LoanApplication, Ticket};
use crate::domain::id::IdGenerator;
use crate::domain::message::Message;
use crate::domain::ports::SharedApplicationStore;
use crate::error::LoanError;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared application state: one service per use case plus the id source.
#[derive(Clone)]
pub struct AppState {
    submit: Arc<SubmitService>,
    status: Arc<StatusService>,
    approval: Arc<ApprovalService>,
    login: Arc<LoginService>,
    ids: Arc<IdGenerator>,
}

impl AppState {
    pub fn new(store: SharedApplicationStore, ids: Arc<IdGenerator>) -> Self {
        Self {
            submit: Arc::new(SubmitService::new(store.clone())),
            status: Arc::new(StatusService::new(store.clone())),
            approval: Arc::new(ApprovalService::new(store)),
            login: Arc::new(LoginService::new()),
            ids,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/loans", post(submit))
        .route("/loans/:id", get(status).put(approve))
        .route("/login", post(login))
        .with_state(state)
}

/// Application fields as submitted over the wire; the id is server-assigned.
#[derive(Debug, Deserialize)]
struct SubmitRequest {
    amount: i64,
    email: String,
    contact: String,
}

#[derive(Debug, Deserialize)]
struct LoginRequest {
    login: String,
    password: String,
}

#[derive(Debug, Serialize)]
struct LoginResponse {
    user: String,
}

async fn submit(
    State(state): State<AppState>,
    Json(request): Json<SubmitRequest>,
) -> Result<Json<Ticket>, ApiError> {
    let id = state.ids.next();
    let application = LoanApplication::new(id, request.amount, request.email, request.contact);
    let ticket = state.submit.invoke(Message::Application(application)).await?;
    tracing::info!(id = ticket.id, "application submitted");
    Ok(Json(ticket))
}

async fn status(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<LoanApplication>, ApiError> {
    let application = state.status.invoke(Message::StatusRequest(id)).await?;
    Ok(Json(application))
}

/// The request body is accepted and ignored; only the path id matters.
async fn approve(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<LoanApplication>, ApiError> {
    let application = state.approval.invoke(Message::ApprovalRequest(id)).await?;
    tracing::info!(id, "application approved");
    Ok(Json(application))
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let credentials = Credentials::new(request.login, request.password);
    let credentials = state.login.invoke(Message::Login(credentials)).await?;
    Ok(Json(LoginResponse {
        user: credentials.login,
    }))
}

/// Maps a core failure onto a wire status: NotFound becomes 404, everything
/// else is fatal to the request.
pub struct ApiError(LoanError);

impl From<LoanError> for ApiError {
    fn from(err: LoanError) -> Self {
        Self(err)
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            LoanError::TicketNotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        }
        let body = ErrorBody {
            error: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
