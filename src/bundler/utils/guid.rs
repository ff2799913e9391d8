//! Deterministic package GUIDs.
//!
//! Windows Installer identifies a product line by an upgrade GUID that must
//! stay the same from one release to the next. Instead of asking users to
//! keep one around, it is derived from the publisher id and app id as an
//! RFC 4122 version 5 (SHA-1, name based) UUID under a fixed namespace.
//!
//! Windows stores GUIDs in a mixed-endian layout: the first three fields
//! (4, 2 and 2 bytes) are little-endian while the last 8 bytes are kept in
//! order. The hash has to run over the network-order bytes, so the namespace
//! is swapped into network order first and the result swapped back.

use sha1::{Digest, Sha1};
use uuid::Uuid;

/// Namespace every derived package GUID lives under.
pub const PACKAGE_NAMESPACE: Uuid = uuid::uuid!("2754bd46-1ef3-467b-b72a-aaa778a62bbb");

/// A GUID in both the canonical and the Windows on-the-wire layout.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Guid(Uuid);

impl Guid {
    /// Parses a GUID in its canonical hyphenated (or braced/simple) form.
    pub fn parse(text: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(text).map(Self)
    }

    /// Builds a GUID from bytes in the Windows mixed-endian layout.
    pub fn from_wire_bytes(bytes: [u8; 16]) -> Self {
        let mut bytes = bytes;
        swap_leading_fields(&mut bytes);
        Self(Uuid::from_bytes(bytes))
    }

    /// Bytes in the Windows mixed-endian layout.
    pub fn to_wire_bytes(self) -> [u8; 16] {
        let mut bytes = *self.0.as_bytes();
        swap_leading_fields(&mut bytes);
        bytes
    }

    /// The underlying [`Uuid`].
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for Guid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.hyphenated().fmt(f)
    }
}

/// Derives a version 5 GUID for `name` under `namespace`.
///
/// Pure: the same inputs always produce the same GUID.
pub fn derive(namespace: Guid, name: &str) -> Guid {
    // Namespace in wire layout, reordered to network order for hashing.
    let mut ns = namespace.to_wire_bytes();
    swap_leading_fields(&mut ns);

    let mut hasher = Sha1::new();
    hasher.update(ns);
    hasher.update(name.as_bytes());
    let digest = hasher.finalize();

    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&digest[..16]);

    bytes[6] = (bytes[6] & 0x0F) | 0x50;
    bytes[8] = (bytes[8] & 0x3F) | 0x80;

    // Digest bytes are in network order; to_wire_bytes() swaps them back.
    Guid(Uuid::from_bytes(bytes))
}

/// Package GUID for an application.
///
/// An explicit id is returned verbatim; otherwise the GUID is derived from
/// `<publisher_id>_<app_id>` under [`PACKAGE_NAMESPACE`].
pub fn package_guid(explicit: Option<&str>, publisher_id: &str, app_id: &str) -> String {
    match explicit.map(str::trim).filter(|id| !id.is_empty()) {
        Some(id) => id.to_string(),
        None => derive(
            Guid(PACKAGE_NAMESPACE),
            &format!("{}_{}", publisher_id, app_id),
        )
        .to_string(),
    }
}

/// Reverses the byte order of the 4-, 2- and 2-byte leading fields in place.
///
/// The operation is its own inverse.
fn swap_leading_fields(bytes: &mut [u8; 16]) {
    bytes[0..4].reverse();
    bytes[4..6].reverse();
    bytes[6..8].reverse();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn namespace() -> Guid {
        Guid(PACKAGE_NAMESPACE)
    }

    #[test]
    fn derivation_matches_regression_anchor() {
        let guid = derive(namespace(), "acme_myapp");
        assert_eq!(guid.to_string(), "8cd9e82f-25b1-5468-ae73-b554652b01be");
        assert_eq!(
            guid.to_wire_bytes(),
            [
                0x2f, 0xe8, 0xd9, 0x8c, 0xb1, 0x25, 0x68, 0x54, 0xae, 0x73, 0xb5, 0x54, 0x65,
                0x2b, 0x01, 0xbe
            ]
        );
    }

    #[test]
    fn wire_bytes_reverse_the_leading_fields_of_the_digest() {
        let guid = derive(namespace(), "acme_myapp");
        let network = *guid.as_uuid().as_bytes();
        let wire = guid.to_wire_bytes();

        assert_eq!(&wire[..4], &[network[3], network[2], network[1], network[0]]);
        assert_eq!(&wire[4..6], &[network[5], network[4]]);
        assert_eq!(&wire[6..8], &[network[7], network[6]]);
        assert_eq!(&wire[8..], &network[8..]);
    }

    #[test]
    fn derivation_is_deterministic() {
        assert_eq!(derive(namespace(), "acme_myapp"), derive(namespace(), "acme_myapp"));
    }

    #[test]
    fn derivation_agrees_with_rfc4122_v5() {
        for name in ["acme_myapp", "", "publisher_com.example.app", "ünïcødé_name"] {
            assert_eq!(
                derive(namespace(), name).as_uuid(),
                &Uuid::new_v5(&PACKAGE_NAMESPACE, name.as_bytes())
            );
        }
    }

    #[test]
    fn version_and_variant_bits_are_set() {
        let uuid = *derive(namespace(), "acme_myapp").as_uuid();
        assert_eq!(uuid.get_version_num(), 5);
        assert_eq!(uuid.get_variant(), uuid::Variant::RFC4122);
    }

    #[test]
    fn changing_either_id_changes_the_guid() {
        let base = package_guid(None, "acme", "myapp");
        assert_eq!(base, "8cd9e82f-25b1-5468-ae73-b554652b01be");
        assert_eq!(
            package_guid(None, "acme", "otherapp"),
            "36b1ecb1-d7b8-5dce-8f67-435d5cf6e58b"
        );
        assert_eq!(
            package_guid(None, "globex", "myapp"),
            "67488938-6a87-51a5-92a2-7b99fd085674"
        );
    }

    #[test]
    fn explicit_id_is_used_verbatim() {
        let explicit = "{D6A1F1D2-0000-4000-8000-ABCDEF012345}";
        assert_eq!(package_guid(Some(explicit), "acme", "myapp"), explicit);
        assert_eq!(
            package_guid(Some("  "), "acme", "myapp"),
            package_guid(None, "acme", "myapp")
        );
    }

    #[test]
    fn wire_layout_round_trips() {
        let guid = Guid::parse("2754bd46-1ef3-467b-b72a-aaa778a62bbb").unwrap();
        let wire = guid.to_wire_bytes();
        assert_eq!(&wire[..4], &[0x46, 0xbd, 0x54, 0x27]);
        assert_eq!(wire, guid.as_uuid().to_bytes_le());
        assert_eq!(Guid::from_wire_bytes(wire), guid);
    }
}
