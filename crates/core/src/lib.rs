pub mod codec;
pub mod diagnostics;
pub mod error;
pub mod keys;
pub mod policy;
pub mod signing;

pub use codec::{ArtifactCodec, ArtifactEncoding};
pub use error::{Error, Result};
pub use keys::KeyKind;
pub use policy::AlgorithmPolicy;
pub use signing::{ArtifactSigner, RsaSigner, RsaVerifier, sign, verify};
