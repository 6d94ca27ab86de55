use aws_sdk_dynamodb::types::AttributeValue;
use std::collections::HashMap;

use crate::storage::models::{Entry, EntryStatus};

/// Pro-Request Filterzustand für /list, aus den URL-Parametern gebaut
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub name: Option<String>,
    pub status: Option<EntryStatus>,
}

impl ListQuery {
    /// Normalisiere die rohen Query-Parameter: leere Strings und unbekannte
    /// Status-Werte zählen als nicht gesetzt.
    pub fn from_params(name: Option<String>, status: Option<String>) -> Self {
        Self {
            name: name.filter(|n| !n.is_empty()),
            status: status.as_deref().and_then(EntryStatus::from_param),
        }
    }

    /// Baue den Scan-Filter; `None` heißt voller Scan ohne Filter-Expression.
    pub fn filter(&self) -> Option<ScanFilter> {
        let mut values = HashMap::new();

        let expression = match (&self.name, self.status) {
            (Some(name), Some(status)) => {
                values.insert(":name".to_string(), AttributeValue::S(name.clone()));
                values.insert(
                    ":active".to_string(),
                    AttributeValue::Bool(status.is_active()),
                );
                "#name = :name AND #active = :active".to_string()
            }
            (Some(name), None) => {
                values.insert(":name".to_string(), AttributeValue::S(name.clone()));
                "#name = :name".to_string()
            }
            (None, Some(status)) => {
                values.insert(
                    ":active".to_string(),
                    AttributeValue::Bool(status.is_active()),
                );
                "#active = :active".to_string()
            }
            (None, None) => return None,
        };

        Some(ScanFilter {
            expression,
            attribute_names: attribute_names(),
            attribute_values: values,
            projection: projection(),
        })
    }
}

/// Store-nativer Scan-Filter samt fester Projektion auf die Entry-Attribute
#[derive(Debug, Clone)]
pub struct ScanFilter {
    pub expression: String,
    pub attribute_names: HashMap<String, String>,
    pub attribute_values: HashMap<String, AttributeValue>,
    pub projection: String,
}

// "name" and "index" are DynamoDB reserved words, so every attribute goes
// through a # alias in both filter and projection.
fn attribute_names() -> HashMap<String, String> {
    Entry::FIELDS
        .iter()
        .map(|field| (format!("#{field}"), field.to_string()))
        .collect()
}

fn projection() -> String {
    Entry::FIELDS
        .iter()
        .map(|field| format!("#{field}"))
        .collect::<Vec<_>>()
        .join(", ")
}
