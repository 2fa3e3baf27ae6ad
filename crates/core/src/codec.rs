use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::{Error, Result};

/// Text form of a signature artifact.
///
/// Like the algorithm, the encoding is agreed out of band and not recorded in
/// the artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ArtifactEncoding {
    /// RFC 4648 standard alphabet with padding.
    #[default]
    Base64,
    /// Lowercase hexadecimal.
    Hex,
}

/// Converts raw signatures to and from their transport text.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArtifactCodec {
    encoding: ArtifactEncoding,
}

impl ArtifactCodec {
    pub const fn new(encoding: ArtifactEncoding) -> Self {
        Self { encoding }
    }

    pub const fn encoding(&self) -> ArtifactEncoding {
        self.encoding
    }

    /// Encodes with no framing and no trailing newline.
    pub fn encode(&self, signature: &[u8]) -> String {
        match self.encoding {
            ArtifactEncoding::Base64 => STANDARD.encode(signature),
            ArtifactEncoding::Hex => hex::encode(signature),
        }
    }

    /// Decodes artifact text. Leading and trailing ASCII whitespace is ignored;
    /// anything else that is not valid for the encoding is rejected.
    pub fn decode(&self, text: &str) -> Result<Vec<u8>> {
        let text = text.trim_matches(|c: char| c.is_ascii_whitespace());
        match self.encoding {
            ArtifactEncoding::Base64 => STANDARD
                .decode(text)
                .map_err(|e| Error::Codec(format!("base64: {e}"))),
            ArtifactEncoding::Hex => {
                hex::decode(text).map_err(|e| Error::Codec(format!("hex: {e}")))
            }
        }
    }
}

/// Encodes with the default (base64) codec.
pub fn encode(signature: &[u8]) -> String {
    ArtifactCodec::default().encode(signature)
}

/// Decodes with the default (base64) codec.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    ArtifactCodec::default().decode(text)
}
