mod rsa;
mod signer;
mod verifier;

pub use self::rsa::RsaSigner;
pub use signer::ArtifactSigner;
pub use verifier::RsaVerifier;

use crate::error::Result;
use crate::policy::AlgorithmPolicy;

/// Signs `data` with a PEM private key under `policy`.
pub fn sign(policy: AlgorithmPolicy, data: &[u8], private_key_pem: &[u8]) -> Result<Vec<u8>> {
    RsaSigner::from_pem(policy, private_key_pem)?.sign(data)
}

/// Checks `signature` over `data` against a PEM public key or certificate.
///
/// Errors only when the key cannot be used. A rejected signature is `Ok(false)`.
pub fn verify(
    policy: AlgorithmPolicy,
    data: &[u8],
    signature: &[u8],
    public_key_pem: &[u8],
) -> Result<bool> {
    Ok(RsaVerifier::from_pem(policy, public_key_pem)?.verify(data, signature))
}
