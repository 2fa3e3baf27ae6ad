use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use detached_sig::{AlgorithmPolicy, ArtifactCodec, ArtifactEncoding};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Sign a data file with a PEM private key and write a detached signature artifact.
#[derive(Debug, Parser)]
#[clap(name = "sign", version)]
pub struct Args {
    /// File whose bytes are signed.
    pub data: PathBuf,
    /// PEM private key (PKCS#8 or PKCS#1 RSA).
    pub private_key: PathBuf,
    /// Where the encoded signature is written.
    pub signature_out: PathBuf,

    #[clap(long, env = "SIGN_ALGORITHM", default_value = "rsa-sha256")]
    pub algorithm: AlgorithmPolicy,
    #[clap(long, env = "SIGN_ENCODING", default_value = "base64")]
    pub encoding: ArtifactEncoding,

    /// Raise log verbosity (-v info, -vv debug diagnostics).
    #[clap(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Reads the data, then the key, signs, and writes the artifact.
///
/// The artifact holds exactly the encoded signature: no newline, no metadata.
pub async fn run(args: &Args) -> Result<()> {
    let data = tokio::fs::read(&args.data)
        .await
        .with_context(|| format!("reading data file {}", args.data.display()))?;
    let private_key = tokio::fs::read(&args.private_key)
        .await
        .with_context(|| format!("reading private key {}", args.private_key.display()))?;

    let policy = args.algorithm;
    let signature =
        tokio::task::spawn_blocking(move || detached_sig::sign(policy, &data, &private_key))
            .await
            .context("signing task failed")??;

    let artifact = ArtifactCodec::new(args.encoding).encode(&signature);
    tokio::fs::write(&args.signature_out, &artifact)
        .await
        .with_context(|| format!("writing signature to {}", args.signature_out.display()))?;

    info!(
        algorithm = %policy,
        encoding = ?args.encoding,
        signature_len = signature.len(),
        out = %args.signature_out.display(),
        "wrote signature"
    );
    Ok(())
}

pub fn init_tracing(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "warn,detached_sig=info,detached_sig_signer=info",
        _ => "warn,detached_sig=debug,detached_sig_signer=debug",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();
}
