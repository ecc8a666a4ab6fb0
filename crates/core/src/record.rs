//! Customer record and draft types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::schema::{FieldKind, CUSTOMER_FIELDS};
use crate::types::CustomerId;
use crate::validate::validate_field;

/// The editable attributes of a customer, without the identifier.
///
/// Serializes with the camelCase keys the REST backend speaks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerFields {
    pub name: String,
    pub address: String,
    pub no_rigs: i64,
    pub no_jackups: i64,
    pub no_modus: i64,
    pub site_url: String,
}

/// One customer entity with its server-assigned identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    #[serde(flatten)]
    pub fields: CustomerFields,
}

/// An in-progress, unsaved customer used while creating or editing.
///
/// Holds the raw string value of every form field plus a parallel map of
/// validation messages (empty string = valid), recomputed per field on every
/// change. Drafts are transient: discarded on cancel and reset after a
/// successful creation.
#[derive(Debug, Clone)]
pub struct Draft {
    values: BTreeMap<String, String>,
    errors: BTreeMap<String, String>,
}

impl Draft {
    /// Blank draft for the "new customer" form.
    ///
    /// Counts start at zero and the site URL is seeded with a scheme prefix
    /// so the user only types the host part.
    pub fn new_entry() -> Self {
        let mut values = BTreeMap::new();
        for field in CUSTOMER_FIELDS {
            let initial = match field.kind {
                FieldKind::Text => "",
                FieldKind::Count => "0",
                FieldKind::Url => "https://",
            };
            values.insert(field.name.to_string(), initial.to_string());
        }
        Self {
            values,
            errors: BTreeMap::new(),
        }
    }

    /// Draft seeded from an existing record, for the edit form.
    pub fn from_fields(fields: &CustomerFields) -> Self {
        let mut values = BTreeMap::new();
        values.insert("name".to_string(), fields.name.clone());
        values.insert("address".to_string(), fields.address.clone());
        values.insert("noRigs".to_string(), fields.no_rigs.to_string());
        values.insert("noJackups".to_string(), fields.no_jackups.to_string());
        values.insert("noModus".to_string(), fields.no_modus.to_string());
        values.insert("siteUrl".to_string(), fields.site_url.clone());
        Self {
            values,
            errors: BTreeMap::new(),
        }
    }

    /// Record a field edit: stores the raw value and recomputes that field's
    /// validation message.
    pub fn set_field(&mut self, name: &str, value: &str) {
        let message = validate_field(name, value);
        self.values.insert(name.to_string(), value.to_string());
        self.errors.insert(name.to_string(), message);
    }

    /// Raw value of a field, empty if never set.
    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map_or("", String::as_str)
    }

    /// Current validation message for a field, empty when valid.
    pub fn error(&self, name: &str) -> &str {
        self.errors.get(name).map_or("", String::as_str)
    }

    /// The full field -> message map for the open editor.
    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    /// `true` when any required field is blank.
    ///
    /// Counts may be blank (they read as zero); name, address and the site
    /// URL must be filled in before a create is attempted.
    pub fn has_blank_required(&self) -> bool {
        CUSTOMER_FIELDS
            .iter()
            .filter(|f| f.required)
            .any(|f| self.value(f.name).trim().is_empty())
    }

    /// `true` when any recorded validation message is non-empty.
    pub fn has_errors(&self) -> bool {
        self.errors.values().any(|e| !e.is_empty())
    }

    /// Convert the raw values into typed fields.
    ///
    /// Count fields parse leniently: a blank input reads as zero, and
    /// fractional input is truncated toward zero.
    pub fn to_fields(&self) -> Result<CustomerFields, CoreError> {
        Ok(CustomerFields {
            name: self.value("name").to_string(),
            address: self.value("address").to_string(),
            no_rigs: self.parse_count("noRigs")?,
            no_jackups: self.parse_count("noJackups")?,
            no_modus: self.parse_count("noModus")?,
            site_url: self.value("siteUrl").to_string(),
        })
    }

    fn parse_count(&self, name: &str) -> Result<i64, CoreError> {
        let raw = self.value(name).trim();
        if raw.is_empty() {
            return Ok(0);
        }
        let n: f64 = raw
            .parse()
            .map_err(|_| CoreError::Validation(format!("Field '{name}' is not a number")))?;
        if n.is_nan() || n < 0.0 {
            return Err(CoreError::Validation(format!(
                "Field '{name}' must be a non-negative number"
            )));
        }
        Ok(n as i64)
    }
}
