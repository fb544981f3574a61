use crate::mapping::{FieldMapping, MappingType};
use serde::{Deserialize, Serialize};

///
/// FieldMappingDescriptor
///
/// Text form of a mapping as it appears in dataset metadata.
/// Decoding always goes through the `FieldMapping` factories, so byte and
/// text forms stay aligned and the version column is always the reserved one.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FieldMappingDescriptor {
    Key {
        source: String,
    },
    Column {
        source: String,
        family: String,
        qualifier: String,
    },
    KeyAsColumn {
        source: String,
        family: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        prefix: Option<String>,
    },
    Counter {
        source: String,
        family: String,
        qualifier: String,
    },
    OccVersion {
        source: String,
    },
}

impl From<FieldMappingDescriptor> for FieldMapping {
    fn from(descriptor: FieldMappingDescriptor) -> Self {
        match descriptor {
            FieldMappingDescriptor::Key { source } => Self::key(source),
            FieldMappingDescriptor::Column {
                source,
                family,
                qualifier,
            } => Self::column(source, family, qualifier),
            FieldMappingDescriptor::KeyAsColumn {
                source,
                family,
                prefix: None,
            } => Self::key_as_column(source, family),
            FieldMappingDescriptor::KeyAsColumn {
                source,
                family,
                prefix: Some(prefix),
            } => Self::key_as_column_with_prefix(source, family, prefix),
            FieldMappingDescriptor::Counter {
                source,
                family,
                qualifier,
            } => Self::counter(source, family, qualifier),
            FieldMappingDescriptor::OccVersion { source } => Self::occ(source),
        }
    }
}

impl From<FieldMapping> for FieldMappingDescriptor {
    fn from(mapping: FieldMapping) -> Self {
        let source = mapping.field_name().to_string();
        let family = mapping.family_as_str().unwrap_or_default().to_string();
        let qualifier = mapping.qualifier_as_str().unwrap_or_default().to_string();

        match mapping.mapping_type() {
            MappingType::Key => Self::Key { source },
            MappingType::Column => Self::Column {
                source,
                family,
                qualifier,
            },
            MappingType::KeyAsColumn => Self::KeyAsColumn {
                source,
                family,
                prefix: mapping.prefix().map(str::to_string),
            },
            MappingType::Counter => Self::Counter {
                source,
                family,
                qualifier,
            },
            MappingType::OccVersion => Self::OccVersion { source },
        }
    }
}

impl Serialize for FieldMapping {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        FieldMappingDescriptor::from(self.clone()).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for FieldMapping {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        FieldMappingDescriptor::deserialize(deserializer).map(Self::from)
    }
}
