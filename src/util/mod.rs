
use rand::{TryRngCore, CryptoRng};
use rand::rngs::OsRng;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

pub const PUBLIC_ID_PREFIX: &str = "g_";
pub const API_KEY_PREFIX: &str = "sk_";

/// Random bytes behind a game's public identifier.
pub const PUBLIC_ID_BYTES: usize = 12;
/// Random bytes behind a game's secret API key.
pub const API_KEY_BYTES: usize = 32;

/// Generates a fresh public identifier for a game, such as
/// `g_3q2-7wEkZ_Vd1tXc`. Uses the operating system's default source
/// of randomness.
pub fn generate_public_id() -> String {
  generate_key_with(PUBLIC_ID_PREFIX, PUBLIC_ID_BYTES, &mut OsRng.unwrap_err())
}

/// Generates a fresh secret API key for a game owner. Uses the
/// operating system's default source of randomness.
pub fn generate_api_key() -> String {
  generate_key_with(API_KEY_PREFIX, API_KEY_BYTES, &mut OsRng.unwrap_err())
}

/// Generates `prefix` followed by the base64 encoding of `len` random
/// bytes, appropriate for use as an identifier or a secret key.
pub fn generate_key_with(prefix: &str, len: usize, rng: &mut impl CryptoRng) -> String {
  let mut bytes = vec![0u8; len];
  rng.fill_bytes(&mut bytes);
  let mut key = String::with_capacity(prefix.len() + len.div_ceil(3) * 4);
  key.push_str(prefix);
  URL_SAFE_NO_PAD.encode_string(bytes, &mut key);
  key
}

#[cfg(test)]
mod tests {
  use super::*;

  use std::collections::HashSet;

  #[test]
  fn public_ids_have_prefix_and_fixed_length() {
    let public_id = generate_public_id();
    assert!(public_id.starts_with(PUBLIC_ID_PREFIX));
    assert_eq!(public_id.len(), PUBLIC_ID_PREFIX.len() + 16);
  }

  #[test]
  fn api_keys_have_prefix_and_fixed_length() {
    let api_key = generate_api_key();
    assert!(api_key.starts_with(API_KEY_PREFIX));
    assert_eq!(api_key.len(), API_KEY_PREFIX.len() + 43);
  }

  #[test]
  fn keys_are_url_safe() {
    let api_key = generate_api_key();
    assert!(api_key.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
  }

  #[test]
  fn generated_keys_never_repeat() {
    let mut public_ids = HashSet::new();
    let mut api_keys = HashSet::new();
    for _ in 0..5000 {
      assert!(public_ids.insert(generate_public_id()));
      assert!(api_keys.insert(generate_api_key()));
    }
  }
}
