//! Form description and staging DTOs.

use std::collections::BTreeMap;

use crate::domain::entities::{LineItem, ResourceKind};

/// One choice of a select or reference field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Value submitted to the API.
    pub value: String,
    /// Text shown to the user.
    pub label: String,
}

impl SelectOption {
    /// Creates new option.
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Input widget kind of a form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line text.
    Text,
    /// Multi-line text.
    Multiline,
    /// Non-negative decimal; invalid input reads as zero.
    Number,
    /// `YYYY-MM-DD` date.
    Date,
    /// Fixed list of choices.
    Select(Vec<SelectOption>),
    /// Record of another collection, options supplied at load time.
    Reference(ResourceKind),
}

/// Description of one form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Key into [`FormValues`].
    pub key: &'static str,
    /// Field caption.
    pub label: &'static str,
    /// Input kind.
    pub kind: FieldKind,
    /// Whether submission requires a non-blank value.
    pub required: bool,
}

impl FieldSpec {
    fn new(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            label,
            kind,
            required: false,
        }
    }

    /// Creates text field.
    #[must_use]
    pub fn text(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldKind::Text)
    }

    /// Creates multi-line text field.
    #[must_use]
    pub fn multiline(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldKind::Multiline)
    }

    /// Creates number field.
    #[must_use]
    pub fn number(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldKind::Number)
    }

    /// Creates date field.
    #[must_use]
    pub fn date(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldKind::Date)
    }

    /// Creates select field.
    #[must_use]
    pub fn select(key: &'static str, label: &'static str, options: Vec<SelectOption>) -> Self {
        Self::new(key, label, FieldKind::Select(options))
    }

    /// Creates reference field.
    #[must_use]
    pub fn reference(key: &'static str, label: &'static str, kind: ResourceKind) -> Self {
        Self::new(key, label, FieldKind::Reference(kind))
    }

    /// Marks the field as required.
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Field layout of an entity form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSpec {
    /// Fields in display order.
    pub fields: Vec<FieldSpec>,
    /// Whether the form carries an invoice line-item editor.
    pub line_items: bool,
}

impl FormSpec {
    /// Returns labels of required fields left blank.
    #[must_use]
    pub fn missing_required(&self, form: &RecordForm) -> Vec<&'static str> {
        self.fields
            .iter()
            .filter(|f| f.required && form.values.get(f.key).trim().is_empty())
            .map(|f| f.label)
            .collect()
    }
}

/// Raw string values of a form, keyed by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues(BTreeMap<String, String>);

impl FormValues {
    /// Returns the value for `key`, or an empty string.
    #[must_use]
    pub fn get(&self, key: &str) -> &str {
        self.0.get(key).map_or("", String::as_str)
    }

    /// Returns the trimmed value, or `None` when blank.
    #[must_use]
    pub fn optional(&self, key: &str) -> Option<String> {
        let value = self.get(key).trim();
        (!value.is_empty()).then(|| value.to_string())
    }

    /// Sets the value for `key`.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.0.insert(key.to_string(), value.into());
    }

    /// Builder form of [`Self::set`].
    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }
}

/// Staged edit of a record: field values plus invoice line items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordForm {
    /// Field values.
    pub values: FormValues,
    /// Line items; empty for kinds without them.
    pub items: Vec<LineItem>,
}

impl RecordForm {
    /// Creates form from values only.
    #[must_use]
    pub fn from_values(values: FormValues) -> Self {
        Self {
            values,
            items: Vec::new(),
        }
    }
}
