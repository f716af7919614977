use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    wharfmap::cli::run().await
}
