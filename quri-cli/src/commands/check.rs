//! `quri check` command - Verify that URIs resolve.

use quri_resolve::resolve;

use crate::cli::CheckArgs;
use crate::error::{CliError, CliResult};
use crate::output;

/// Run the check command
pub async fn run(args: CheckArgs) -> CliResult<()> {
    let total = args.uris.len();
    let mut failed = 0;

    for (i, uri) in args.uris.iter().enumerate() {
        match resolve(uri) {
            Ok(descriptor) => output::success(&descriptor.to_string()),
            Err(e) => {
                failed += 1;
                // The raw input may carry a password, so refer to it by position.
                output::error(&format!("URI #{}: {}", i + 1, e));
            }
        }
    }

    if failed > 0 {
        return Err(CliError::CheckFailed { failed, total });
    }

    Ok(())
}
