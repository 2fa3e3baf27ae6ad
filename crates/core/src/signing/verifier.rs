use rsa::RsaPublicKey;

use crate::diagnostics;
use crate::error::Result;
use crate::keys::load_public_key;
use crate::policy::AlgorithmPolicy;

/// RSA PKCS#1 v1.5 verifier over the digest chosen by its policy.
pub struct RsaVerifier {
    policy: AlgorithmPolicy,
    public_key: RsaPublicKey,
}

impl RsaVerifier {
    /// Accepts SPKI or PKCS#1 public key PEM, or an X.509 certificate PEM.
    /// For a certificate chain the first certificate's key is used.
    pub fn from_pem(policy: AlgorithmPolicy, public_key_pem: &[u8]) -> Result<Self> {
        let (public_key, kind) = load_public_key(public_key_pem)?;
        diagnostics::key_loaded("verifier", kind, &public_key);
        Ok(Self { policy, public_key })
    }

    /// `true` only for a valid signature over exactly `data`. Any malformed,
    /// truncated or mismatched signature is `false`.
    pub fn verify(&self, data: &[u8], signature: &[u8]) -> bool {
        let digest = self.policy.digest(data);
        diagnostics::data_hashed(self.policy, data, &digest);

        let valid = self
            .public_key
            .verify(self.policy.padding(), &digest, signature)
            .is_ok();

        diagnostics::verification_finished(self.policy, signature, valid);
        valid
    }

    pub fn public_key(&self) -> &RsaPublicKey {
        &self.public_key
    }
}
