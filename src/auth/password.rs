// Password hashing and verification
//
// Passwords are hashed with HMAC-SHA-512 keyed by a fresh random 128-byte key.
// The key doubles as the salt and is stored next to the hash.

use hmac::{digest::Key, Hmac, Mac};
use rand::{rngs::OsRng, RngCore};
use sha2::Sha512;

type HmacSha512 = Hmac<Sha512>;

/// Salt (HMAC key) length in bytes, the SHA-512 block size
pub const SALT_LEN: usize = 128;

/// Hash length in bytes, the SHA-512 output size
pub const HASH_LEN: usize = 64;

/// Hash and salt produced together from one plaintext password
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordHash {
    pub hash: Vec<u8>,
    pub salt: Vec<u8>,
}

/// Password service for hashing and verification
pub struct PasswordService;

impl PasswordService {
    /// Hash a password under a freshly generated random salt
    ///
    /// The salt is exactly one key block, so keying cannot fail.
    pub fn create_hash(password: &str) -> PasswordHash {
        let mut salt = [0u8; SALT_LEN];
        OsRng.fill_bytes(&mut salt);

        let mut mac = HmacSha512::new(Key::<HmacSha512>::from_slice(&salt));
        mac.update(password.as_bytes());
        let hash = mac.finalize().into_bytes().to_vec();

        PasswordHash {
            hash,
            salt: salt.to_vec(),
        }
    }

    /// Verify a password against a stored hash and salt
    ///
    /// The comparison is constant-time with respect to the mismatch position.
    pub fn verify(password: &str, stored_hash: &[u8], stored_salt: &[u8]) -> bool {
        let Ok(mut mac) = HmacSha512::new_from_slice(stored_salt) else {
            return false;
        };
        mac.update(password.as_bytes());
        mac.verify_slice(stored_hash).is_ok()
    }

    /// Burn one keyed-hash computation for a sign-in against an unknown email
    pub fn verify_dummy(password: &str) -> bool {
        Self::verify(password, &[0u8; HASH_LEN], &[0u8; SALT_LEN])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_hash_and_salt_lengths() {
        let credentials = PasswordService::create_hash("Secret123");
        assert_eq!(credentials.hash.len(), HASH_LEN);
        assert_eq!(credentials.salt.len(), SALT_LEN);
    }

    #[test]
    fn test_correct_password_verifies() {
        let credentials = PasswordService::create_hash("Secret123");
        assert!(PasswordService::verify(
            "Secret123",
            &credentials.hash,
            &credentials.salt
        ));
    }

    #[test]
    fn test_wrong_password_rejected() {
        let credentials = PasswordService::create_hash("Secret123");
        assert!(!PasswordService::verify("secret123", &credentials.hash, &credentials.salt));
        assert!(!PasswordService::verify("", &credentials.hash, &credentials.salt));
    }

    #[test]
    fn test_salt_is_fresh_per_call() {
        let first = PasswordService::create_hash("same password");
        let second = PasswordService::create_hash("same password");

        assert_ne!(first.salt, second.salt);
        assert_ne!(first.hash, second.hash);
    }

    #[test]
    fn test_truncated_or_swapped_material_rejected() {
        let credentials = PasswordService::create_hash("Secret123");

        assert!(!PasswordService::verify("Secret123", &credentials.hash[..32], &credentials.salt));
        assert!(!PasswordService::verify("Secret123", &credentials.salt, &credentials.hash));
        assert!(!PasswordService::verify("Secret123", &[], &credentials.salt));
    }

    #[test]
    fn test_matches_reference_hmac_sha512() {
        // RFC 4231 test case 2
        let key = b"Jefe";
        let expected = "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea250554\
                        9758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737";
        let expected: Vec<u8> = (0..expected.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&expected[i..i + 2], 16).unwrap())
            .collect();

        assert!(PasswordService::verify("what do ya want for nothing?", &expected, key));
    }

    #[test]
    fn test_hash_matches_slice_keyed_hmac() {
        let credentials = PasswordService::create_hash("Secret123");

        let mut mac = HmacSha512::new_from_slice(&credentials.salt).unwrap();
        mac.update(b"Secret123");
        assert_eq!(mac.finalize().into_bytes().to_vec(), credentials.hash);
    }

    #[test]
    fn test_dummy_verification_never_succeeds() {
        assert!(!PasswordService::verify_dummy("Secret123"));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_hash_then_verify(password in "\\PC{0,64}") {
            let credentials = PasswordService::create_hash(&password);
            prop_assert!(PasswordService::verify(&password, &credentials.hash, &credentials.salt));
        }

        #[test]
        fn prop_different_password_fails(p in "[a-zA-Z0-9]{1,32}", q in "[a-zA-Z0-9]{1,32}") {
            prop_assume!(p != q);
            let credentials = PasswordService::create_hash(&p);
            prop_assert!(!PasswordService::verify(&q, &credentials.hash, &credentials.salt));
        }
    }
}
