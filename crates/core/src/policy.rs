use std::fmt;

use rsa::Pkcs1v15Sign;
use sha2::{Digest, Sha256, Sha384, Sha512};

/// The hash and signature scheme both parties agree on out of band.
///
/// The identifier is never written into the artifact and never inferred from
/// key material. Switching variants is a breaking change for every participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum AlgorithmPolicy {
    /// RSASSA-PKCS1-v1_5 over SHA-256.
    #[default]
    RsaSha256,
    /// RSASSA-PKCS1-v1_5 over SHA-384.
    RsaSha384,
    /// RSASSA-PKCS1-v1_5 over SHA-512.
    RsaSha512,
}

impl AlgorithmPolicy {
    pub const ALL: [AlgorithmPolicy; 3] = [Self::RsaSha256, Self::RsaSha384, Self::RsaSha512];

    pub const fn identifier(&self) -> &'static str {
        match self {
            Self::RsaSha256 => "RSA-SHA256",
            Self::RsaSha384 => "RSA-SHA384",
            Self::RsaSha512 => "RSA-SHA512",
        }
    }

    /// Exact, case-sensitive lookup by identifier.
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|policy| policy.identifier() == identifier)
    }

    /// Hash of `data` under this policy. This is what the RSA primitive signs.
    pub fn digest(&self, data: &[u8]) -> Vec<u8> {
        match self {
            Self::RsaSha256 => Sha256::digest(data).to_vec(),
            Self::RsaSha384 => Sha384::digest(data).to_vec(),
            Self::RsaSha512 => Sha512::digest(data).to_vec(),
        }
    }

    /// PKCS#1 v1.5 padding carrying this policy's DigestInfo prefix.
    pub fn padding(&self) -> Pkcs1v15Sign {
        match self {
            Self::RsaSha256 => Pkcs1v15Sign::new::<Sha256>(),
            Self::RsaSha384 => Pkcs1v15Sign::new::<Sha384>(),
            Self::RsaSha512 => Pkcs1v15Sign::new::<Sha512>(),
        }
    }
}

impl fmt::Display for AlgorithmPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}
