use crate::error::Result;
use crate::policy::AlgorithmPolicy;

/// Trait for producing detached signatures over a data buffer.
///
/// Implementations are sync: signing is CPU-bound.
/// For async callers, use `spawn_blocking`.
pub trait ArtifactSigner: Send + Sync {
    /// Sign the data under `algorithm()`. Returns raw signature bytes.
    fn sign(&self, data: &[u8]) -> Result<Vec<u8>>;

    /// SPKI DER of the public half of the signing key.
    fn public_key_der(&self) -> Result<Vec<u8>>;

    /// Policy this signer is bound to.
    fn algorithm(&self) -> AlgorithmPolicy;
}
