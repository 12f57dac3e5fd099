//! Kind-erased record views.

use std::collections::HashMap;

use super::{RecordForm, SelectOption};
use crate::domain::entities::ResourceKind;

/// Display form of one record, independent of its entity type.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct RecordCard {
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub status: Option<String>,
    /// Label/value rows.
    pub lines: Vec<(String, String)>,
    /// Editable state used to prefill the edit form.
    pub form: RecordForm,
    pub share: Option<ShareMessage>,
}

/// Options of referenced collections, keyed by kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct References(HashMap<ResourceKind, Vec<SelectOption>>);

impl References {
    /// Stores the options for `kind`.
    pub fn insert(&mut self, kind: ResourceKind, options: Vec<SelectOption>) {
        self.0.insert(kind, options);
    }

    /// Returns the options for `kind`.
    #[must_use]
    pub fn options(&self, kind: ResourceKind) -> &[SelectOption] {
        self.0.get(&kind).map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns the label of record `id` of `kind`.
    #[must_use]
    pub fn label(&self, kind: ResourceKind, id: &str) -> Option<&str> {
        self.options(kind)
            .iter()
            .find(|o| o.value == id)
            .map(|o| o.label.as_str())
    }
}

/// Loaded collection ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct RecordSet {
    pub kind: ResourceKind,
    pub cards: Vec<RecordCard>,
    pub references: References,
}

/// Pre-rendered share texts of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct ShareMessage {
    /// What is being shared, e.g. `Invoice INV-001`.
    pub label: String,
    pub email_to: Option<String>,
    pub email_subject: String,
    pub email_body: String,
    pub sms: String,
    pub clipboard: String,
}

impl ShareMessage {
    /// Returns the `mailto:` URI with encoded subject and body.
    #[must_use]
    pub fn mailto_uri(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.email_to.as_deref().unwrap_or_default(),
            urlencoding::encode(&self.email_subject),
            urlencoding::encode(&self.email_body)
        )
    }

    /// Returns the `sms:` URI with encoded body.
    #[must_use]
    pub fn sms_uri(&self) -> String {
        format!("sms:?body={}", urlencoding::encode(&self.sms))
    }
}
