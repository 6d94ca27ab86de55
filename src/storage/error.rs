use thiserror::Error;

/// Fehler der Storage-Schicht.
///
/// Ein fehlender Eintrag ist kein Fehler (`get_entry` liefert `Ok(None)`);
/// Serialisierungsfehler der HTTP-Antwort gehören in die Handler-Schicht.
#[derive(Debug, Error)]
pub enum StoreError {
    /// DynamoDB nicht erreichbar oder Request abgelehnt
    #[error("store request failed: {0}")]
    Unavailable(String),

    /// Gespeicherte Zeile passt nicht zum Entry-Schema
    #[error("invalid attribute `{0}` on stored entry")]
    Decode(&'static str),
}
