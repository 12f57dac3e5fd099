//! Catalog material entity.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Entity, ResourceKind};
use crate::domain::serde_utils::api_datetime;

/// Categories offered by the material form, as `(value, label)`.
pub const MATERIAL_CATEGORIES: [(&str, &str); 8] = [
    ("lumber", "Lumber"),
    ("concrete", "Concrete"),
    ("steel", "Steel"),
    ("plumbing", "Plumbing"),
    ("electrical", "Electrical"),
    ("insulation", "Insulation"),
    ("roofing", "Roofing"),
    ("flooring", "Flooring"),
];

/// Units offered by the material form, as `(value, label)`.
pub const MATERIAL_UNITS: [(&str, &str); 7] = [
    ("sq ft", "Square Feet"),
    ("linear ft", "Linear Feet"),
    ("each", "Each"),
    ("lb", "Pounds"),
    ("yard", "Yard"),
    ("ton", "Ton"),
    ("gallon", "Gallon"),
];

/// Priced building material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct Material {
    pub id: String,
    pub name: String,
    pub category: String,
    /// Pricing unit such as `sq ft` or `each`.
    pub unit: String,
    #[serde(default)]
    pub cost_per_unit: Decimal,
    #[serde(default)]
    pub supplier: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, with = "api_datetime::option")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, with = "api_datetime::option")]
    pub updated_at: Option<NaiveDateTime>,
}

/// Create/update body for a material.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct MaterialDraft {
    pub name: String,
    pub category: String,
    pub unit: String,
    pub cost_per_unit: Decimal,
    pub supplier: Option<String>,
    pub description: Option<String>,
}

impl Entity for Material {
    type Draft = MaterialDraft;

    const KIND: ResourceKind = ResourceKind::Materials;

    fn id(&self) -> &str {
        &self.id
    }

    fn to_draft(&self) -> MaterialDraft {
        MaterialDraft {
            name: self.name.clone(),
            category: self.category.clone(),
            unit: self.unit.clone(),
            cost_per_unit: self.cost_per_unit,
            supplier: self.supplier.clone(),
            description: self.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_material() {
        let json = r#"{"id":"m-1","name":"2x4 Stud","category":"lumber","unit":"each",
            "cost_per_unit":3.98,"supplier":"Mill Co","created_at":"2025-01-02T03:04:05"}"#;

        let material: Material = serde_json::from_str(json).unwrap();

        assert_eq!(material.cost_per_unit, Decimal::new(398, 2));
        assert_eq!(material.supplier.as_deref(), Some("Mill Co"));
        assert!(material.description.is_none());
        assert!(
            MATERIAL_CATEGORIES
                .iter()
                .any(|(value, _)| *value == material.category)
        );
    }
}
