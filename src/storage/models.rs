use serde::{Deserialize, Serialize};

/// DynamoDB Entry Item
///
/// Direkte Abbildung einer Zeile der Tabelle. `index` ist der Primärschlüssel
/// (Binary-Attribut in der Tabelle, hier als UTF-8 String geführt).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub index: String,
    pub name: String,
    pub users: Vec<String>, // DynamoDB list of strings
    pub active: bool,
}

impl Entry {
    /// Attribute, die bei gefilterten Scans projiziert werden
    pub const FIELDS: [&'static str; 4] = ["index", "name", "users", "active"];
}

/// Status-Filter aus dem `status` Query-Parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStatus {
    Active,
    Inactive,
}

impl EntryStatus {
    /// Parse den Query-Parameter; alles außer "active"/"inactive" zählt als
    /// nicht gesetzt (kein Filter, kein Fehler).
    pub fn from_param(raw: &str) -> Option<Self> {
        match raw {
            "active" => Some(EntryStatus::Active),
            "inactive" => Some(EntryStatus::Inactive),
            _ => None,
        }
    }

    pub fn is_active(self) -> bool {
        matches!(self, EntryStatus::Active)
    }
}
