//! `quri version` command - Display version information.

use quri_resolve::Scheme;

use crate::error::CliResult;
use crate::output::{self, kv};

/// Package version
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name
const NAME: &str = env!("CARGO_PKG_NAME");

/// Run the version command
pub async fn run() -> CliResult<()> {
    output::section("quri");

    kv("Version", VERSION);
    kv("Binary", NAME);

    #[cfg(debug_assertions)]
    let build_mode = "debug";
    #[cfg(not(debug_assertions))]
    let build_mode = "release";

    kv("Build", build_mode);

    let schemes: Vec<&str> = Scheme::ALL.iter().map(Scheme::name).collect();
    kv("Schemes", &schemes.join(", "));

    output::newline();
    output::dim("https://github.com/quri-rs/quri");

    Ok(())
}
