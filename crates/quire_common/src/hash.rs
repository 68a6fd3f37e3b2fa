//! Content hashing for template cache keys.

use std::fmt;

/// A 128-bit hash computed using XXH3.
///
/// Loaders hash the full path of a resolved template to produce the key a
/// compiled-template cache is stored under, so the key only changes when a
/// name resolves to a different file.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentHash([u8; 16]);

impl ContentHash {
    /// Computes a hash from a byte slice using XXH3-128.
    pub fn from_bytes(data: &[u8]) -> Self {
        let hash = xxhash_rust::xxh3::xxh3_128(data);
        Self(hash.to_le_bytes())
    }

    /// Returns the lowercase hex form used as a template cache key.
    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentHash({:02x}{:02x}..)", self.0[0], self.0[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_path_same_key() {
        let a = ContentHash::from_bytes(b"source/_views/index.html.twig");
        let b = ContentHash::from_bytes(b"source/_views/index.html.twig");
        assert_eq!(a, b);
        assert_eq!(a.to_hex(), b.to_hex());
    }

    #[test]
    fn different_paths_differ() {
        let a = ContentHash::from_bytes(b"themes/a/_views/index.html");
        let b = ContentHash::from_bytes(b"themes/b/_views/index.html");
        assert_ne!(a, b);
    }

    #[test]
    fn hex_format() {
        let h = ContentHash::from_bytes(b"layout.twig");
        let s = h.to_hex();
        assert_eq!(s.len(), 32, "hex key should be 32 chars");
        assert!(s.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn debug_abbreviated() {
        let h = ContentHash::from_bytes(b"test");
        let s = format!("{h:?}");
        assert!(s.starts_with("ContentHash("));
        assert!(s.ends_with("..)"));
    }
}
