use axum::extract::{Query, State};
use axum::http::{header, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use std::sync::Arc;

use crate::api::ApiState;
use crate::storage::ListQuery;

/// Query-Parameter für GET /list
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Pflichtparameter; ein leerer Wert wird unverändert durchgereicht
    #[serde(rename = "tableName", default)]
    pub table_name: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// GET /list – Liste oder filtere die Einträge einer Tabelle
pub async fn list(
    State(state): State<Arc<ApiState>>,
    method: Method,
    Query(params): Query<ListParams>,
) -> Result<Response, (StatusCode, String)> {
    if method != Method::GET {
        return Err((
            StatusCode::NOT_FOUND,
            "404 not found, method not supported.".to_string(),
        ));
    }

    let query = ListQuery::from_params(params.name, params.status);

    let entries = match query.filter() {
        Some(filter) => state.store.scan_filtered(&params.table_name, &filter).await,
        None => state.store.scan_all(&params.table_name).await,
    }
    .map_err(|e| {
        tracing::error!(table = %params.table_name, "Failed to scan table: {}", e);
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;

    let body = serde_json::to_string_pretty(&entries).map_err(|e| {
        tracing::error!("Failed to serialize list response: {}", e);
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}
