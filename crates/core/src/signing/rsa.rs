use rsa::pkcs8::EncodePublicKey;
use rsa::rand_core::OsRng;
use rsa::{RsaPrivateKey, RsaPublicKey};

use super::signer::ArtifactSigner;
use crate::diagnostics;
use crate::error::{Error, Result};
use crate::keys::load_private_key;
use crate::policy::AlgorithmPolicy;

/// RSA PKCS#1 v1.5 signer over the digest chosen by its policy.
///
/// Built from PEM private key material. The decoded key lives only as long
/// as the signer. Signing is blinded, the output stays deterministic.
pub struct RsaSigner {
    policy: AlgorithmPolicy,
    private_key: RsaPrivateKey,
}

impl RsaSigner {
    pub fn from_pem(policy: AlgorithmPolicy, private_key_pem: &[u8]) -> Result<Self> {
        let (private_key, kind) = load_private_key(private_key_pem)?;
        diagnostics::key_loaded("signer", kind, &private_key.to_public_key());
        Ok(Self { policy, private_key })
    }

    pub fn public_key(&self) -> RsaPublicKey {
        self.private_key.to_public_key()
    }
}

impl ArtifactSigner for RsaSigner {
    fn sign(&self, data: &[u8]) -> Result<Vec<u8>> {
        let digest = self.policy.digest(data);
        diagnostics::data_hashed(self.policy, data, &digest);

        let signature = self
            .private_key
            .sign_with_rng(&mut OsRng, self.policy.padding(), &digest)
            .map_err(|e| Error::Signing(format!("{}: {e}", self.policy)))?;

        diagnostics::signature_produced(&signature);
        Ok(signature)
    }

    fn public_key_der(&self) -> Result<Vec<u8>> {
        self.public_key()
            .to_public_key_der()
            .map(|der| der.into_vec())
            .map_err(|e| Error::Signing(format!("encoding RSA public key to DER: {e}")))
    }

    fn algorithm(&self) -> AlgorithmPolicy {
        self.policy
    }
}
