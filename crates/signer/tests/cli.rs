use std::path::{Path, PathBuf};

use detached_sig::{AlgorithmPolicy, ArtifactCodec, ArtifactEncoding, Error, codec, verify};
use detached_sig_signer::{Args, run};
use tempfile::TempDir;

const PRIVATE_KEY: &str = include_str!("../../core/tests/fixtures/rsa2048_a_private.pem");
const PUBLIC_KEY: &str = include_str!("../../core/tests/fixtures/rsa2048_a_public.pem");
const EC_PRIVATE_KEY: &str = include_str!("../../core/tests/fixtures/p256_private.pem");
const OPENSSL_HELLO_WORLD_SIG: &str =
    include_str!("../../core/tests/fixtures/hello_world.sig.b64");

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        Self { dir: tempfile::tempdir().unwrap() }
    }

    fn file(&self, name: &str, contents: &[u8]) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn args(&self, data: &Path, key: &Path) -> Args {
        Args {
            data: data.to_path_buf(),
            private_key: key.to_path_buf(),
            signature_out: self.path("out.sig"),
            algorithm: AlgorithmPolicy::RsaSha256,
            encoding: ArtifactEncoding::Base64,
            verbose: 0,
        }
    }
}

#[tokio::test]
async fn writes_base64_artifact_that_verifies() {
    let ws = Workspace::new();
    let data = ws.file("data.txt", b"hello world");
    let key = ws.file("key.pem", PRIVATE_KEY.as_bytes());
    let args = ws.args(&data, &key);

    run(&args).await.unwrap();

    let artifact = std::fs::read_to_string(&args.signature_out).unwrap();
    assert!(!artifact.ends_with('\n'));
    assert_eq!(artifact, OPENSSL_HELLO_WORLD_SIG.trim());

    let signature = codec::decode(&artifact).unwrap();
    let valid = verify(AlgorithmPolicy::RsaSha256, b"hello world", &signature, PUBLIC_KEY.as_bytes());
    assert!(valid.unwrap());
}

#[tokio::test]
async fn hex_encoding_and_other_policy() {
    let ws = Workspace::new();
    let data = ws.file("data.bin", &[0, 1, 2, 3, 255]);
    let key = ws.file("key.pem", PRIVATE_KEY.as_bytes());
    let args = Args {
        algorithm: AlgorithmPolicy::RsaSha384,
        encoding: ArtifactEncoding::Hex,
        ..ws.args(&data, &key)
    };

    run(&args).await.unwrap();

    let artifact = std::fs::read_to_string(&args.signature_out).unwrap();
    assert_eq!(artifact.len(), 512);
    let signature = ArtifactCodec::new(ArtifactEncoding::Hex).decode(&artifact).unwrap();
    assert!(
        verify(AlgorithmPolicy::RsaSha384, &[0, 1, 2, 3, 255], &signature, PUBLIC_KEY.as_bytes())
            .unwrap()
    );
}

#[tokio::test]
async fn empty_data_file_is_signed() {
    let ws = Workspace::new();
    let data = ws.file("empty", b"");
    let key = ws.file("key.pem", PRIVATE_KEY.as_bytes());
    let args = ws.args(&data, &key);

    run(&args).await.unwrap();

    let signature = codec::decode(&std::fs::read_to_string(&args.signature_out).unwrap()).unwrap();
    assert!(verify(AlgorithmPolicy::RsaSha256, b"", &signature, PUBLIC_KEY.as_bytes()).unwrap());
}

#[tokio::test]
async fn missing_data_file_names_the_path() {
    let ws = Workspace::new();
    let key = ws.file("key.pem", PRIVATE_KEY.as_bytes());
    let args = ws.args(&ws.path("absent.txt"), &key);

    let err = run(&args).await.unwrap_err();
    assert!(format!("{err:#}").contains("absent.txt"));
    assert!(!args.signature_out.exists());
}

#[tokio::test]
async fn missing_key_file_names_the_path() {
    let ws = Workspace::new();
    let data = ws.file("data.txt", b"data");
    let args = ws.args(&data, &ws.path("absent.pem"));

    let err = run(&args).await.unwrap_err();
    assert!(format!("{err:#}").contains("absent.pem"));
}

#[tokio::test]
async fn wrong_family_key_is_key_parse_error_and_writes_nothing() {
    let ws = Workspace::new();
    let data = ws.file("data.txt", b"data");
    let key = ws.file("key.pem", EC_PRIVATE_KEY.as_bytes());
    let args = ws.args(&data, &key);

    let err = run(&args).await.unwrap_err();
    assert!(matches!(err.downcast_ref::<Error>(), Some(Error::KeyParse(_))));
    assert!(!args.signature_out.exists());
}

#[tokio::test]
async fn unwritable_output_is_an_error() {
    let ws = Workspace::new();
    let data = ws.file("data.txt", b"data");
    let key = ws.file("key.pem", PRIVATE_KEY.as_bytes());
    let args = Args {
        signature_out: ws.path("no-such-dir").join("out.sig"),
        ..ws.args(&data, &key)
    };

    let err = run(&args).await.unwrap_err();
    assert!(format!("{err:#}").contains("writing signature"));
}
