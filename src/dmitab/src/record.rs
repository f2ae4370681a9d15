//! Structured record types produced by report parsing

use std::collections::BTreeMap;

use serde::Serialize;

/// Attribute value within a record: either a single string or an ordered
/// list collected from an indented sub-block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AttrValue {
    Scalar(String),
    List(Vec<String>),
}

impl AttrValue {
    /// Get the scalar string, if this is a scalar attribute
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            AttrValue::Scalar(s) => Some(s),
            AttrValue::List(_) => None,
        }
    }

    /// Get the list items, if this is a list attribute
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            AttrValue::Scalar(_) => None,
            AttrValue::List(items) => Some(items),
        }
    }
}

/// One parsed DMI table entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    /// Handle identifier, e.g. `0x0001`. Unique within one report.
    pub handle: String,
    /// Numeric DMI type code. 0-42 for standard entries; not validated.
    pub dmi_type: u8,
    /// Declared byte size of the raw table entry
    pub size: u32,
    /// Human-readable label, e.g. `BIOS Information`
    pub name: String,
    /// Key/value attributes. Later lines with the same key win.
    pub attributes: BTreeMap<String, AttrValue>,
}

impl Record {
    /// Look up an attribute by key
    pub fn attr(&self, key: &str) -> Option<&AttrValue> {
        self.attributes.get(key)
    }
}

/// Full parse result: handle -> record, ordered by handle
pub type ParsedReport = BTreeMap<String, Record>;
