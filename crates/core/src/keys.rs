//! PEM key loading for the RSA family.
//!
//! Dispatch happens on the PEM label, so a key of the wrong form fails with a
//! message naming the label instead of a generic ASN.1 error. Error messages
//! never include key bytes.

use std::fmt;

use rsa::pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey};
use rsa::pkcs8::der::pem;
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey};
use rsa::{RsaPrivateKey, RsaPublicKey};
use x509_cert::Certificate;
use x509_cert::der::Encode;

use crate::error::{Error, Result};

const PKCS8_PRIVATE_LABEL: &str = "PRIVATE KEY";
const PKCS1_PRIVATE_LABEL: &str = "RSA PRIVATE KEY";
const ENCRYPTED_PRIVATE_LABEL: &str = "ENCRYPTED PRIVATE KEY";
const SPKI_PUBLIC_LABEL: &str = "PUBLIC KEY";
const PKCS1_PUBLIC_LABEL: &str = "RSA PUBLIC KEY";
const CERTIFICATE_LABEL: &str = "CERTIFICATE";

/// Which PEM form a key was loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    Pkcs8PrivateKey,
    Pkcs1PrivateKey,
    SpkiPublicKey,
    Pkcs1PublicKey,
    Certificate,
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pkcs8PrivateKey => "pkcs8-private-key",
            Self::Pkcs1PrivateKey => "pkcs1-private-key",
            Self::SpkiPublicKey => "spki-public-key",
            Self::Pkcs1PublicKey => "pkcs1-public-key",
            Self::Certificate => "x509-certificate",
        };
        f.write_str(name)
    }
}

/// Loads an RSA private key from PKCS#8 or PKCS#1 PEM.
pub fn load_private_key(pem_bytes: &[u8]) -> Result<(RsaPrivateKey, KeyKind)> {
    let pem_bytes = pem_bytes.trim_ascii();
    let text = pem_text(pem_bytes)?;
    match pem_label(pem_bytes)? {
        PKCS8_PRIVATE_LABEL => RsaPrivateKey::from_pkcs8_pem(text)
            .map(|key| (key, KeyKind::Pkcs8PrivateKey))
            .map_err(|e| Error::key_parse(format!("PKCS#8 RSA private key: {e}"))),
        PKCS1_PRIVATE_LABEL => RsaPrivateKey::from_pkcs1_pem(text)
            .map(|key| (key, KeyKind::Pkcs1PrivateKey))
            .map_err(|e| Error::key_parse(format!("PKCS#1 RSA private key: {e}"))),
        ENCRYPTED_PRIVATE_LABEL => Err(Error::key_parse(
            "encrypted private keys are not supported; decrypt the key first",
        )),
        other => Err(Error::key_parse(format!(
            "unsupported PEM label `{other}` for a private key"
        ))),
    }
}

/// Loads an RSA public key from SPKI or PKCS#1 PEM, or from the subject key of
/// an X.509 certificate. The certificate itself is not validated. A file
/// holding a certificate chain yields the key of its first certificate.
pub fn load_public_key(pem_bytes: &[u8]) -> Result<(RsaPublicKey, KeyKind)> {
    let pem_bytes = pem_bytes.trim_ascii();
    let text = pem_text(pem_bytes)?;
    match pem_label(pem_bytes)? {
        SPKI_PUBLIC_LABEL => RsaPublicKey::from_public_key_pem(text)
            .map(|key| (key, KeyKind::SpkiPublicKey))
            .map_err(|e| Error::key_parse(format!("SPKI RSA public key: {e}"))),
        PKCS1_PUBLIC_LABEL => RsaPublicKey::from_pkcs1_pem(text)
            .map(|key| (key, KeyKind::Pkcs1PublicKey))
            .map_err(|e| Error::key_parse(format!("PKCS#1 RSA public key: {e}"))),
        CERTIFICATE_LABEL => {
            certificate_public_key(pem_bytes).map(|key| (key, KeyKind::Certificate))
        }
        other => Err(Error::key_parse(format!(
            "unsupported PEM label `{other}` for a public key"
        ))),
    }
}

fn certificate_public_key(pem_bytes: &[u8]) -> Result<RsaPublicKey> {
    let chain = Certificate::load_pem_chain(pem_bytes)
        .map_err(|e| Error::key_parse(format!("X.509 certificate: {e}")))?;
    let certificate = chain
        .first()
        .ok_or_else(|| Error::key_parse("X.509 certificate: no certificate in PEM input"))?;
    let spki_der = certificate
        .tbs_certificate
        .subject_public_key_info
        .to_der()
        .map_err(|e| Error::key_parse(format!("certificate public key: {e}")))?;
    RsaPublicKey::from_public_key_der(&spki_der)
        .map_err(|e| Error::key_parse(format!("certificate does not hold an RSA key: {e}")))
}

fn pem_text(pem_bytes: &[u8]) -> Result<&str> {
    std::str::from_utf8(pem_bytes).map_err(|_| Error::key_parse("key material is not UTF-8 PEM text"))
}

fn pem_label(pem_bytes: &[u8]) -> Result<&str> {
    pem::decode_label(pem_bytes).map_err(|e| Error::key_parse(format!("malformed PEM: {e}")))
}
