use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use detached_sig::{AlgorithmPolicy, ArtifactCodec, ArtifactEncoding, Error};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Verify a detached signature artifact over a data file with a PEM public key or certificate.
#[derive(Debug, Parser)]
#[clap(name = "verify", version)]
pub struct Args {
    /// File whose bytes were signed.
    pub data: PathBuf,
    /// Encoded signature artifact produced by `sign`.
    pub signature: PathBuf,
    /// PEM public key (SPKI or PKCS#1 RSA) or X.509 certificate.
    pub public_key: PathBuf,

    #[clap(long, env = "VERIFY_ALGORITHM", default_value = "rsa-sha256")]
    pub algorithm: AlgorithmPolicy,
    #[clap(long, env = "VERIFY_ENCODING", default_value = "base64")]
    pub encoding: ArtifactEncoding,

    /// Raise log verbosity (-v info, -vv debug diagnostics).
    #[clap(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Result of a verification that could be carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Valid,
    Invalid,
}

impl Outcome {
    pub fn exit_status(&self) -> u8 {
        match self {
            Self::Valid => 0,
            Self::Invalid => 1,
        }
    }
}

/// Exit status for a verification that could not be carried out at all.
pub const UNCHECKED_EXIT_STATUS: u8 = 2;

/// Reads the data, the artifact, then the key, and checks the signature.
///
/// `Err` means the signature could not be checked (I/O, key or artifact
/// problems). A checked-and-rejected signature is `Ok(Outcome::Invalid)`.
pub async fn run(args: &Args) -> Result<Outcome> {
    let data = tokio::fs::read(&args.data)
        .await
        .with_context(|| format!("reading data file {}", args.data.display()))?;
    let artifact = tokio::fs::read(&args.signature)
        .await
        .with_context(|| format!("reading signature {}", args.signature.display()))?;
    let public_key = tokio::fs::read(&args.public_key)
        .await
        .with_context(|| format!("reading public key {}", args.public_key.display()))?;

    let artifact = String::from_utf8(artifact)
        .map_err(|_| Error::Codec("signature artifact is not UTF-8 text".into()))?;
    let signature = ArtifactCodec::new(args.encoding).decode(&artifact)?;

    let policy = args.algorithm;
    let valid = tokio::task::spawn_blocking(move || {
        detached_sig::verify(policy, &data, &signature, &public_key)
    })
    .await
    .context("verification task failed")??;

    let outcome = if valid { Outcome::Valid } else { Outcome::Invalid };
    info!(algorithm = %policy, ?outcome, "verification finished");
    Ok(outcome)
}

pub fn init_tracing(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "warn,detached_sig=info,detached_sig_verifier=info",
        _ => "warn,detached_sig=debug,detached_sig_verifier=debug",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();
}
