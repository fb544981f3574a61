//! Stable digest of a field mapping for persistent metadata caches.
#![expect(clippy::cast_possible_truncation)]

use crate::mapping::{FieldMapping, MappingType};
use sha2::{Digest, Sha256};

const FINGERPRINT_VERSION: u8 = 1;

impl FieldMapping {
    /// SHA-256 digest of the mapping's structural identity.
    ///
    /// Unlike `Hash`, the digest is stable across processes and builds, so it
    /// can key mappings that survive a metadata reload.
    #[must_use]
    pub fn fingerprint(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();

        write_tag(&mut hasher, FINGERPRINT_VERSION);
        write_str(&mut hasher, self.field_name());
        write_tag(&mut hasher, mapping_type_tag(self.mapping_type()));
        write_opt_bytes(&mut hasher, self.family());
        write_opt_bytes(&mut hasher, self.qualifier());
        write_opt_bytes(&mut hasher, self.prefix().map(str::as_bytes));

        hasher.finalize().into()
    }
}

const fn mapping_type_tag(kind: MappingType) -> u8 {
    match kind {
        MappingType::Key => 0x01,
        MappingType::Column => 0x02,
        MappingType::KeyAsColumn => 0x03,
        MappingType::Counter => 0x04,
        MappingType::OccVersion => 0x05,
    }
}

fn write_tag(hasher: &mut Sha256, tag: u8) {
    hasher.update([tag]);
}

fn write_u32(hasher: &mut Sha256, value: u32) {
    hasher.update(value.to_be_bytes());
}

fn write_str(hasher: &mut Sha256, value: &str) {
    write_u32(hasher, value.len() as u32);
    hasher.update(value.as_bytes());
}

// Absent and empty must hash differently.
fn write_opt_bytes(hasher: &mut Sha256, value: Option<&[u8]>) {
    match value {
        None => write_tag(hasher, 0x00),
        Some(bytes) => {
            write_tag(hasher, 0x01);
            write_u32(hasher, bytes.len() as u32);
            hasher.update(bytes);
        }
    }
}
