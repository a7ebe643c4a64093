//! Base64 and digest primitives shared by the provider adapters.
//!
//! All three providers reduce to string formatting plus one of these
//! primitives: Payme embeds base64 in its checkout path and decodes it from
//! Basic Auth headers, Click signs with keyed MD5, Octo with keyed SHA-256.
//! Digests always render as lowercase hex, matching what the providers
//! compare against.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as b64;
use md5::Md5;
use sha2::{Digest, Sha256};

use crate::error::DecodeError;

/// Base64-encodes `input` with the standard alphabet, padded.
///
/// This is the exact variant the Payme checkout page decodes; URL-safe or
/// unpadded output would be rejected upstream.
#[must_use]
pub fn base64_encode<T: AsRef<[u8]>>(input: T) -> String {
    b64.encode(input.as_ref())
}

/// Decodes a base64 token into a UTF-8 string.
///
/// # Errors
///
/// Returns [`DecodeError`] when the token is not valid base64 or the decoded
/// bytes are not valid UTF-8.
pub fn base64_decode_utf8(token: &str) -> Result<String, DecodeError> {
    let bytes = b64.decode(token)?;
    Ok(String::from_utf8(bytes)?)
}

/// MD5 digest of `input`'s UTF-8 bytes as lowercase hex.
#[must_use]
pub fn md5_hex(input: &str) -> String {
    hex::encode(Md5::digest(input.as_bytes()))
}

/// SHA-256 digest of `input`'s UTF-8 bytes as lowercase hex.
#[must_use]
pub fn sha256_hex(input: &str) -> String {
    hex::encode(Sha256::digest(input.as_bytes()))
}
