use axum::extract::{Query, State};
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use std::sync::Arc;

use crate::api::ApiState;
use crate::storage::Entry;

/// Query-Parameter für POST /deactivate
#[derive(Debug, Deserialize)]
pub struct DeactivateParams {
    #[serde(rename = "tableName", default)]
    pub table_name: String,
    /// Schlüssel des Eintrags als UTF-8 String
    #[serde(default)]
    pub index: Option<String>,
}

/// POST /deactivate – Setze einen Eintrag auf inaktiv
///
/// Ist der Eintrag schon inaktiv, wird nichts geschrieben und der aktuelle
/// Stand zurückgegeben. Nebenläufige Aufrufe auf denselben Schlüssel können
/// doppelt schreiben; das Ergebnis bleibt idempotent.
pub async fn deactivate(
    State(state): State<Arc<ApiState>>,
    method: Method,
    Query(params): Query<DeactivateParams>,
) -> Result<Response, (StatusCode, String)> {
    if method != Method::POST {
        return Err((
            StatusCode::NOT_FOUND,
            "404 not found, method not supported.".to_string(),
        ));
    }

    // Ohne Schlüssel keine Aktion, leere 200-Antwort
    let Some(index) = params.index.filter(|i| !i.is_empty()) else {
        return Ok(().into_response());
    };

    let current = state
        .store
        .get_entry(&params.table_name, &index)
        .await
        .map_err(|e| {
            tracing::error!(table = %params.table_name, "Failed to fetch entry: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        })?
        .unwrap_or_default(); // absent row behaves like an inactive zero entry

    if !current.active {
        tracing::info!(index = %index, "Entry is already inactive");
        let body = render(&current)?;
        return Ok(format!(
            "The deactivate request failed: Specified entry is already inactive \n{body}"
        )
        .into_response());
    }

    let updated = state
        .store
        .deactivate_entry(&params.table_name, &index)
        .await
        .map_err(|e| {
            tracing::error!(table = %params.table_name, index = %index, "Failed to deactivate entry: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        })?;

    let body = render(&updated)?;
    Ok(format!(
        "Successfully deactivated the specified entry, setting active status to false: \n{body}"
    )
    .into_response())
}

fn render(entry: &Entry) -> Result<String, (StatusCode, String)> {
    serde_json::to_string_pretty(entry).map_err(|e| {
        tracing::error!("Failed to serialize entry: {}", e);
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })
}
