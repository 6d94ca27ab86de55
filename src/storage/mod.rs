pub mod dynamodb;
pub mod error;
pub mod models;
pub mod query;

pub use dynamodb::DynamoStore;
pub use error::StoreError;
pub use models::{Entry, EntryStatus};
pub use query::{ListQuery, ScanFilter};

use async_trait::async_trait;

/// Zugriff auf die Entry-Tabelle
///
/// Trait-Naht vor dem SDK-Client, damit die Handler gegen einen Mock laufen
/// können. Der Tabellenname kommt pro Aufruf aus dem Request, nicht aus dem
/// Store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntryStore: Send + Sync {
    /// Voller Tabellenscan
    async fn scan_all(&self, table: &str) -> Result<Vec<Entry>, StoreError>;

    /// Scan mit Filter-Expression und fester Projektion
    async fn scan_filtered(
        &self,
        table: &str,
        filter: &ScanFilter,
    ) -> Result<Vec<Entry>, StoreError>;

    /// Einzelnen Eintrag per Schlüssel lesen; `None` wenn nicht vorhanden
    async fn get_entry(&self, table: &str, index: &str) -> Result<Option<Entry>, StoreError>;

    /// Setze `active = false` und liefere die Zeile nach dem Update
    async fn deactivate_entry(&self, table: &str, index: &str) -> Result<Entry, StoreError>;
}
