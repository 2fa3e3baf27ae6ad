//! Advisory step tracing for signing and verification.
//!
//! Every event is emitted at `debug` under this module's target. Nothing here
//! feeds back into a signing or verification decision. Key material is only
//! ever described by kind, size and public-key fingerprint.

use rsa::RsaPublicKey;
use rsa::pkcs8::EncodePublicKey;
use rsa::traits::PublicKeyParts;
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::codec;
use crate::keys::KeyKind;
use crate::policy::AlgorithmPolicy;

/// SHA-256 over SPKI DER, lowercase hex.
pub fn fingerprint(spki_der: &[u8]) -> String {
    hex::encode(Sha256::digest(spki_der))
}

/// Hex of at most `max` leading bytes, with an ellipsis when truncated.
pub fn hex_preview(bytes: &[u8], max: usize) -> String {
    if bytes.len() <= max {
        hex::encode(bytes)
    } else {
        format!("{}...", hex::encode(&bytes[..max]))
    }
}

fn public_key_fingerprint(key: &RsaPublicKey) -> String {
    match key.to_public_key_der() {
        Ok(der) => fingerprint(der.as_bytes()),
        Err(_) => "unavailable".to_string(),
    }
}

pub(crate) fn key_loaded(role: &str, kind: KeyKind, key: &RsaPublicKey) {
    debug!(
        role,
        kind = %kind,
        bits = key.size() * 8,
        fingerprint = %public_key_fingerprint(key),
        "loaded key"
    );
}

pub(crate) fn data_hashed(policy: AlgorithmPolicy, data: &[u8], digest: &[u8]) {
    debug!(
        algorithm = policy.identifier(),
        data_len = data.len(),
        data_head = %hex_preview(data, 16),
        digest = %hex::encode(digest),
        "hashed data"
    );
}

pub(crate) fn signature_produced(signature: &[u8]) {
    debug!(
        len = signature.len(),
        encoded = %codec::encode(signature),
        "produced signature"
    );
}

pub(crate) fn verification_finished(policy: AlgorithmPolicy, signature: &[u8], valid: bool) {
    debug!(
        algorithm = policy.identifier(),
        signature_len = signature.len(),
        signature_head = %hex_preview(signature, 16),
        valid,
        "verification finished"
    );
}
