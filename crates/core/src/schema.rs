//! Explicit per-field schema for the customer form.
//!
//! One table drives both the validator and any form renderer, so "which
//! fields are numeric" is stated once instead of being re-derived from
//! naming conventions at every call site.

use serde::Serialize;

/// The data kind of a customer form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Free text, required when the schema says so.
    Text,
    /// Non-negative integer count. A blank input reads as zero.
    Count,
    /// Absolute URL, checked for well-formedness when non-empty.
    Url,
}

/// Definition of a single customer form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldDef {
    /// Wire name, as the REST backend and the form inputs use it.
    pub name: &'static str,
    /// Human-readable display label.
    pub label: &'static str,
    /// Data kind, consumed by the validator.
    pub kind: FieldKind,
    /// Whether submission requires a non-blank value.
    pub required: bool,
}

/// The canonical customer field set, in display order.
pub const CUSTOMER_FIELDS: &[FieldDef] = &[
    FieldDef {
        name: "name",
        label: "Name",
        kind: FieldKind::Text,
        required: true,
    },
    FieldDef {
        name: "address",
        label: "Address",
        kind: FieldKind::Text,
        required: true,
    },
    FieldDef {
        name: "noRigs",
        label: "Number of rigs",
        kind: FieldKind::Count,
        required: false,
    },
    FieldDef {
        name: "noJackups",
        label: "Number of jack ups",
        kind: FieldKind::Count,
        required: false,
    },
    FieldDef {
        name: "noModus",
        label: "Number of MODUs",
        kind: FieldKind::Count,
        required: false,
    },
    FieldDef {
        name: "siteUrl",
        label: "Site URL",
        kind: FieldKind::Url,
        required: true,
    },
];

/// Look up a field definition by its wire name.
pub fn field_def(name: &str) -> Option<&'static FieldDef> {
    CUSTOMER_FIELDS.iter().find(|f| f.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_contains_all_form_fields() {
        let names: Vec<&str> = CUSTOMER_FIELDS.iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            vec!["name", "address", "noRigs", "noJackups", "noModus", "siteUrl"]
        );
    }

    #[test]
    fn count_fields_are_not_required() {
        for field in CUSTOMER_FIELDS {
            if field.kind == FieldKind::Count {
                assert!(!field.required, "{} should not be required", field.name);
            }
        }
    }

    #[test]
    fn field_def_lookup() {
        assert_eq!(field_def("noRigs").map(|f| f.kind), Some(FieldKind::Count));
        assert_eq!(field_def("siteUrl").map(|f| f.kind), Some(FieldKind::Url));
        assert!(field_def("unknown").is_none());
    }
}
