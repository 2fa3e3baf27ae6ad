use std::process::ExitCode;

use clap::Parser;
use detached_sig_signer::{Args, init_tracing, run};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("sign: {e:#}");
            ExitCode::FAILURE
        }
    }
}
