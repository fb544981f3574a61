//! Module: mapping
//! Responsibility: immutable descriptors placing one logical field into
//! wide-column physical storage.
//! Does not own: row-key encoding or column value serialization.
//! Boundary: schema loaders build mappings once; scan/put planners read them.

mod descriptor;
mod fingerprint;


use crate::error::Error;
use std::{
    fmt::{self, Display},
    str::FromStr,
};

pub use descriptor::FieldMappingDescriptor;

///
/// CONSTANTS
///

/// Column family reserved for system columns.
pub const SYSTEM_COLUMN_FAMILY: &str = "_s";

/// Qualifier of the optimistic-concurrency version column.
pub const OCC_QUALIFIER: &str = "w";

///
/// MappingType
///
/// Placement strategy for one field. Exactly one applies per mapping.
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum MappingType {
    /// Component of the composite row key.
    Key,
    /// One column at `family:qualifier`.
    Column,
    /// Map or record fanned out into one family, each entry key a qualifier.
    KeyAsColumn,
    /// Atomically incrementable column.
    Counter,
    /// Reserved column holding the optimistic-concurrency version stamp.
    OccVersion,
}

impl MappingType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Key => "key",
            Self::Column => "column",
            Self::KeyAsColumn => "keyAsColumn",
            Self::Counter => "counter",
            Self::OccVersion => "occVersion",
        }
    }
}

impl Display for MappingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MappingType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "key" => Ok(Self::Key),
            "column" => Ok(Self::Column),
            "keyAsColumn" => Ok(Self::KeyAsColumn),
            "counter" => Ok(Self::Counter),
            "occVersion" => Ok(Self::OccVersion),
            other => Err(Error::mapping_invalid(format!(
                "unknown mapping type: '{other}'"
            ))),
        }
    }
}

///
/// ColumnName
///
/// Family or qualifier identifier kept in both text and UTF-8 byte form.
/// The two forms are produced together and never diverge.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
struct ColumnName {
    text: String,
    bytes: Box<[u8]>,
}

impl ColumnName {
    fn encode(text: String) -> Self {
        let bytes = text.as_bytes().into();

        Self { text, bytes }
    }
}

///
/// FieldMapping
///
/// Immutable description of where one logical field lives physically.
/// Equality and hashing are structural, so independently parsed copies of
/// the same metadata compare and hash equal.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct FieldMapping {
    field_name: String,
    mapping_type: MappingType,
    family: Option<ColumnName>,
    qualifier: Option<ColumnName>,
    prefix: Option<String>,
}

impl FieldMapping {
    fn new(
        field_name: impl Into<String>,
        mapping_type: MappingType,
        family: Option<String>,
        qualifier: Option<String>,
        prefix: Option<String>,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            mapping_type,
            family: family.map(ColumnName::encode),
            qualifier: qualifier.map(ColumnName::encode),
            prefix,
        }
    }

    #[must_use]
    pub fn key(name: impl Into<String>) -> Self {
        Self::new(name, MappingType::Key, None, None, None)
    }

    #[must_use]
    pub fn column(
        name: impl Into<String>,
        family: impl Into<String>,
        qualifier: impl Into<String>,
    ) -> Self {
        Self::new(
            name,
            MappingType::Column,
            Some(family.into()),
            Some(qualifier.into()),
            None,
        )
    }

    #[must_use]
    pub fn key_as_column(name: impl Into<String>, family: impl Into<String>) -> Self {
        Self::new(
            name,
            MappingType::KeyAsColumn,
            Some(family.into()),
            None,
            None,
        )
    }

    /// Key-as-column mapping whose generated qualifiers start with `prefix`.
    #[must_use]
    pub fn key_as_column_with_prefix(
        name: impl Into<String>,
        family: impl Into<String>,
        prefix: impl Into<String>,
    ) -> Self {
        Self::new(
            name,
            MappingType::KeyAsColumn,
            Some(family.into()),
            None,
            Some(prefix.into()),
        )
    }

    #[must_use]
    pub fn counter(
        name: impl Into<String>,
        family: impl Into<String>,
        qualifier: impl Into<String>,
    ) -> Self {
        Self::new(
            name,
            MappingType::Counter,
            Some(family.into()),
            Some(qualifier.into()),
            None,
        )
    }

    /// Version-stamp mapping at the reserved `_s:w` column.
    #[must_use]
    pub fn occ(name: impl Into<String>) -> Self {
        Self::new(
            name,
            MappingType::OccVersion,
            Some(SYSTEM_COLUMN_FAMILY.to_string()),
            Some(OCC_QUALIFIER.to_string()),
            None,
        )
    }

    /// Alias of [`FieldMapping::occ`].
    #[must_use]
    pub fn version(name: impl Into<String>) -> Self {
        Self::occ(name)
    }

    #[must_use]
    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    #[must_use]
    pub const fn mapping_type(&self) -> MappingType {
        self.mapping_type
    }

    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    #[must_use]
    pub fn family(&self) -> Option<&[u8]> {
        self.family.as_ref().map(|name| &*name.bytes)
    }

    #[must_use]
    pub fn family_as_str(&self) -> Option<&str> {
        self.family.as_ref().map(|name| name.text.as_str())
    }

    #[must_use]
    pub fn qualifier(&self) -> Option<&[u8]> {
        self.qualifier.as_ref().map(|name| &*name.bytes)
    }

    #[must_use]
    pub fn qualifier_as_str(&self) -> Option<&str> {
        self.qualifier.as_ref().map(|name| name.text.as_str())
    }

    #[must_use]
    pub const fn is_key(&self) -> bool {
        matches!(self.mapping_type, MappingType::Key)
    }

    #[must_use]
    pub const fn is_counter(&self) -> bool {
        matches!(self.mapping_type, MappingType::Counter)
    }

    #[must_use]
    pub const fn is_occ_version(&self) -> bool {
        matches!(self.mapping_type, MappingType::OccVersion)
    }

    /// Physical qualifier holding one entry of a key-as-column field.
    ///
    /// Returns `None` for every other mapping type.
    #[must_use]
    pub fn qualifier_for_map_key(&self, key: &str) -> Option<Vec<u8>> {
        if self.mapping_type != MappingType::KeyAsColumn {
            return None;
        }

        let prefix = self.prefix.as_deref().unwrap_or_default();
        let mut qualifier = Vec::with_capacity(prefix.len() + key.len());
        qualifier.extend_from_slice(prefix.as_bytes());
        qualifier.extend_from_slice(key.as_bytes());

        Some(qualifier)
    }

    /// Recover the map entry key from a physical qualifier.
    ///
    /// `Ok(None)` means the qualifier does not belong to this field: wrong
    /// mapping type, or the qualifier lacks the configured prefix.
    pub fn map_key_for_qualifier(&self, qualifier: &[u8]) -> Result<Option<String>, Error> {
        if self.mapping_type != MappingType::KeyAsColumn {
            return Ok(None);
        }

        let prefix = self.prefix.as_deref().unwrap_or_default();
        let Some(rest) = qualifier.strip_prefix(prefix.as_bytes()) else {
            return Ok(None);
        };

        decode_utf8(rest).map(Some)
    }
}

impl Display for FieldMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.field_name, self.mapping_type)?;

        match (self.family_as_str(), self.qualifier_as_str()) {
            (Some(family), Some(qualifier)) => write!(f, "({family}:{qualifier})"),
            (Some(family), None) => {
                write!(f, "({family}:{}*)", self.prefix.as_deref().unwrap_or_default())
            }
            _ => Ok(()),
        }
    }
}

// Decode physical name bytes back to text; non-UTF-8 bytes mean the stored
// layout does not match the mapping and cannot be recovered.
pub(crate) fn decode_utf8(bytes: &[u8]) -> Result<String, Error> {
    std::str::from_utf8(bytes)
        .map(str::to_string)
        .map_err(|err| Error::mapping_fatal(format!("[FATAL] Cannot decode UTF-8: {err}")))
}
