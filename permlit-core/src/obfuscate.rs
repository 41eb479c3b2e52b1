//! Deterministic name obfuscation
//!
//! Replaces a canonical permission name with a short opaque token derived
//! from its digest. The mapping is one-way and stable across runs and
//! processes, which keeps generated output reproducible.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use sha2::{Digest, Sha256};

/// Width of an obfuscated token.
pub const TOKEN_LEN: usize = 5;

/// Obfuscate a canonical name into a fixed-width opaque token.
///
/// SHA-256 of the UTF-8 bytes, base64-encoded, with every `+`, `/` and `=`
/// deleted; when the stripped encoding is longer than ten characters the
/// first five are taken, otherwise it is right-padded with `'0'` to five.
/// Total over all inputs, the empty string included.
///
/// The five-character space is deliberately small and NOT collision
/// resistant: two different names can map to the same token. Collisions are
/// not validated here; downstream uniqueness is a consumer concern.
pub fn obfuscate(name: &str) -> String {
    let digest = Sha256::digest(name.as_bytes());
    let encoded = BASE64.encode(digest);
    let stripped: String = encoded
        .chars()
        .filter(|c| !matches!(c, '+' | '/' | '='))
        .collect();

    // Base64 output is ASCII, so byte indexing is safe here.
    if stripped.len() > 10 {
        stripped[..TOKEN_LEN].to_string()
    } else {
        let mut token = stripped;
        while token.len() < TOKEN_LEN {
            token.push('0');
        }
        token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_golden_values() {
        // Recorded fixed points; these must never drift between releases.
        assert_eq!(obfuscate("sample.permission"), "aihuI");
        assert_eq!(obfuscate("data.user.lorescopes.read"), "rGzP7");
        assert_eq!(obfuscate(""), "47DEQ");
    }

    #[test]
    fn test_deterministic_across_runs() {
        assert_eq!(obfuscate("some.name"), obfuscate("some.name"));
    }

    #[test]
    fn test_token_length_invariant() {
        for input in ["", "a", "sample.permission", "a.much.longer.permission.name"] {
            assert_eq!(obfuscate(input).len(), TOKEN_LEN);
        }
    }

    #[test]
    fn test_token_is_alphanumeric() {
        for ch in obfuscate("data.user.lorescopes.read").chars() {
            assert!(ch.is_ascii_alphanumeric());
        }
    }
}
