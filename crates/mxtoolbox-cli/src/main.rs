//! mxapi - MxToolbox lookups from the command line.

use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    mxtoolbox_cli::run().await
}
