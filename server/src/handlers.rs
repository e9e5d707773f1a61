//! HTTP Request Handlers
//!
//! Handlers orchestrate validate -> store/retrieve -> encode -> respond.
//! All errors are resolved into a status code here; none propagate past
//! the HTTP boundary, and each is logged with request context first.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{ConnectInfo, State};
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Json, Response};
use tracing::{error, info, warn};

use vigil_core::{extract_identifier, Endpoint, EndpointPayload};
use vigil_ports::{EndpointRepository, EndpointRepositoryError};

/// Shared application state
///
/// The repository is an injected trait object so tests can substitute
/// the in-memory implementation.
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn EndpointRepository>,
}

/// GET /endpoints/{identifier}
pub async fn get_endpoint(
    State(state): State<AppState>,
    ConnectInfo(remote): ConnectInfo<SocketAddr>,
    uri: Uri,
) -> Response {
    info!("GET {uri} from {remote}");

    let identifier = match extract_identifier(uri.path()) {
        Ok(identifier) => identifier,
        Err(err) => {
            warn!("extract endpoint identifier of {uri}: {err}");
            return StatusCode::BAD_REQUEST.into_response();
        }
    };

    match state.repository.fetch(identifier).await {
        Ok(fields) => Json(EndpointPayload::from_fields(&fields)).into_response(),
        Err(EndpointRepositoryError::NotFound(_)) => {
            warn!("no such endpoint {identifier:?}");
            StatusCode::NOT_FOUND.into_response()
        }
        Err(err) => {
            error!("fetch endpoint {identifier:?}: {err}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// POST /endpoints/{identifier}
///
/// Full-replace upsert. The existence check only decides the response
/// code (201 on create, 204 on replace) and races against concurrent
/// writers; the distinction is best-effort, matching the store's
/// single-key atomicity.
pub async fn upsert_endpoint(
    State(state): State<AppState>,
    ConnectInfo(remote): ConnectInfo<SocketAddr>,
    uri: Uri,
    body: Result<Json<EndpointPayload>, JsonRejection>,
) -> Response {
    info!("POST {uri} from {remote}");

    let Json(payload) = match body {
        Ok(body) => body,
        Err(err) => {
            warn!("parse JSON body: {err}");
            return StatusCode::BAD_REQUEST.into_response();
        }
    };

    let endpoint = match Endpoint::try_from(payload) {
        Ok(endpoint) => endpoint,
        Err(err) => {
            warn!("validate endpoint: {err}");
            return StatusCode::BAD_REQUEST.into_response();
        }
    };

    // A valid path identifier must agree with the body; an absent or
    // invalid one leaves the body authoritative.
    if let Ok(path_identifier) = extract_identifier(uri.path()) {
        if path_identifier != endpoint.identifier {
            warn!(
                "identifier mismatch (resource: {path_identifier}, body: {})",
                endpoint.identifier
            );
            return StatusCode::BAD_REQUEST.into_response();
        }
    }

    let existed = match state.repository.exists(&endpoint.identifier).await {
        Ok(existed) => existed,
        Err(err) => {
            error!("check existence of {:?}: {err}", endpoint.identifier);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    if let Err(err) = state
        .repository
        .store(&endpoint.identifier, &endpoint.to_fields())
        .await
    {
        error!("store endpoint {:?}: {err}", endpoint.identifier);
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }

    if existed {
        StatusCode::NO_CONTENT.into_response()
    } else {
        StatusCode::CREATED.into_response()
    }
}

/// GET /endpoints
///
/// Per-key read failures are skipped rather than failing the whole
/// request; partial results are acceptable.
pub async fn list_endpoints(
    State(state): State<AppState>,
    ConnectInfo(remote): ConnectInfo<SocketAddr>,
    uri: Uri,
) -> Response {
    info!("GET {uri} from {remote}");

    let identifiers = match state.repository.list_identifiers().await {
        Ok(identifiers) => identifiers,
        Err(err) => {
            error!("list endpoint identifiers: {err}");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let mut payloads = Vec::with_capacity(identifiers.len());
    for identifier in identifiers {
        match state.repository.fetch(&identifier).await {
            Ok(fields) => payloads.push(EndpointPayload::from_fields(&fields)),
            Err(err) => {
                warn!("fetch endpoint {identifier:?}: {err}");
            }
        }
    }

    Json(payloads).into_response()
}
