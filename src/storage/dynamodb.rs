use async_trait::async_trait;
use aws_sdk_dynamodb::primitives::Blob;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use aws_sdk_dynamodb::Client;
use std::collections::HashMap;

use crate::storage::models::Entry;
use crate::storage::query::ScanFilter;
use crate::storage::{EntryStore, StoreError};

/// DynamoDB Storage Layer
pub struct DynamoStore {
    client: Client,
}

impl DynamoStore {
    /// Erstelle neuen Store auf einer fertigen SDK-Konfiguration
    pub fn new(sdk_config: &aws_config::SdkConfig) -> Self {
        Self {
            client: Client::new(sdk_config),
        }
    }

    /// Scan der Tabelle, optional mit Filter; folgt `LastEvaluatedKey` bis
    /// die Tabelle durch ist.
    async fn scan(
        &self,
        table: &str,
        filter: Option<&ScanFilter>,
    ) -> Result<Vec<Entry>, StoreError> {
        let mut entries = Vec::new();
        let mut last_evaluated_key = None;

        loop {
            let mut scan = self.client.scan().table_name(table);

            if let Some(filter) = filter {
                scan = scan
                    .filter_expression(filter.expression.as_str())
                    .projection_expression(filter.projection.as_str())
                    .set_expression_attribute_names(Some(filter.attribute_names.clone()))
                    .set_expression_attribute_values(Some(filter.attribute_values.clone()));
            }

            if let Some(key) = last_evaluated_key {
                scan = scan.set_exclusive_start_key(Some(key));
            }

            let response = scan
                .send()
                .await
                .map_err(|e| StoreError::Unavailable(e.to_string()))?;

            for item in response.items.unwrap_or_default() {
                entries.push(item_to_entry(&item)?);
            }

            last_evaluated_key = response.last_evaluated_key;
            if last_evaluated_key.is_none() {
                break;
            }
        }

        Ok(entries)
    }

    fn key_attribute(index: &str) -> AttributeValue {
        AttributeValue::B(Blob::new(index.as_bytes()))
    }
}

#[async_trait]
impl EntryStore for DynamoStore {
    async fn scan_all(&self, table: &str) -> Result<Vec<Entry>, StoreError> {
        self.scan(table, None).await
    }

    async fn scan_filtered(
        &self,
        table: &str,
        filter: &ScanFilter,
    ) -> Result<Vec<Entry>, StoreError> {
        self.scan(table, Some(filter)).await
    }

    async fn get_entry(&self, table: &str, index: &str) -> Result<Option<Entry>, StoreError> {
        let response = self
            .client
            .get_item()
            .table_name(table)
            .key("index", Self::key_attribute(index))
            .send()
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        match response.item {
            Some(item) => Ok(Some(item_to_entry(&item)?)),
            None => Ok(None),
        }
    }

    async fn deactivate_entry(&self, table: &str, index: &str) -> Result<Entry, StoreError> {
        let response = self
            .client
            .update_item()
            .table_name(table)
            .key("index", Self::key_attribute(index))
            .update_expression("SET #active = :active")
            .expression_attribute_names("#active", "active")
            .expression_attribute_values(":active", AttributeValue::Bool(false))
            .return_values(ReturnValue::AllNew)
            .send()
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        item_to_entry(&response.attributes.unwrap_or_default())
    }
}

/// Konvertiere ein AttributeValue-Item in einen Entry.
///
/// Fehlende Attribute werden zu Null-Werten, vorhandene müssen zum Schema
/// passen.
pub(crate) fn item_to_entry(item: &HashMap<String, AttributeValue>) -> Result<Entry, StoreError> {
    Ok(Entry {
        index: index_attr(item)?,
        name: string_attr(item, "name")?,
        users: list_attr(item, "users")?,
        active: bool_attr(item, "active")?,
    })
}

// The table stores the key as a Binary attribute; the service renders it as
// a UTF-8 string.
fn index_attr(item: &HashMap<String, AttributeValue>) -> Result<String, StoreError> {
    match item.get("index") {
        None => Ok(String::new()),
        Some(AttributeValue::B(blob)) => {
            String::from_utf8(blob.clone().into_inner()).map_err(|_| StoreError::Decode("index"))
        }
        Some(_) => Err(StoreError::Decode("index")),
    }
}

fn string_attr(
    item: &HashMap<String, AttributeValue>,
    key: &'static str,
) -> Result<String, StoreError> {
    match item.get(key) {
        None => Ok(String::new()),
        Some(value) => value.as_s().cloned().map_err(|_| StoreError::Decode(key)),
    }
}

fn bool_attr(
    item: &HashMap<String, AttributeValue>,
    key: &'static str,
) -> Result<bool, StoreError> {
    match item.get(key) {
        None => Ok(false),
        Some(value) => value.as_bool().map(|b| *b).map_err(|_| StoreError::Decode(key)),
    }
}

// Accepts both list-of-strings and string-set encodings for `users`.
fn list_attr(
    item: &HashMap<String, AttributeValue>,
    key: &'static str,
) -> Result<Vec<String>, StoreError> {
    match item.get(key) {
        None => Ok(Vec::new()),
        Some(AttributeValue::Ss(users)) => Ok(users.clone()),
        Some(AttributeValue::L(values)) => values
            .iter()
            .map(|value| value.as_s().cloned().map_err(|_| StoreError::Decode(key)))
            .collect(),
        Some(_) => Err(StoreError::Decode(key)),
    }
}
