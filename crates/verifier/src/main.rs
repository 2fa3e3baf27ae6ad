use std::process::ExitCode;

use clap::Parser;
use detached_sig_verifier::{Args, Outcome, UNCHECKED_EXIT_STATUS, init_tracing, run};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args).await {
        Ok(outcome) => {
            match outcome {
                Outcome::Valid => println!("signature OK"),
                Outcome::Invalid => println!("signature INVALID"),
            }
            ExitCode::from(outcome.exit_status())
        }
        Err(e) => {
            eprintln!("verify: {e:#}");
            ExitCode::from(UNCHECKED_EXIT_STATUS)
        }
    }
}
