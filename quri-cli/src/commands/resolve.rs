//! `quri resolve` command - Print the descriptor a URI resolves to.

use quri_resolve::ConnectionDescriptor;
use tracing::debug;

use crate::cli::{OutputFormat, ResolveArgs};
use crate::config::{Config, Selection};
use crate::error::CliResult;
use crate::output::{self, kv};

/// Run the resolve command
pub async fn run(args: ResolveArgs) -> CliResult<()> {
    let config = Config::discover(args.config.as_deref()).await?;
    let selection = Selection::choose(args.uri.as_deref(), &args.redis, &config.redis);
    debug!(source = selection.label(), "Connection settings selected");

    let descriptor = selection.into_descriptor()?;
    let shown = if args.show_secrets {
        descriptor
    } else {
        descriptor.redacted()
    };

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&shown)?),
        OutputFormat::Text => print_text(&shown),
    }

    Ok(())
}

fn print_text(descriptor: &ConnectionDescriptor) {
    output::section(kind_label(descriptor));
    kv("Scheme", descriptor.scheme().name());
    kv("Network", descriptor.network().name());

    match descriptor {
        ConnectionDescriptor::Direct(opts) => {
            kv("Address", &opts.addr);
            kv("Password", secret(opts.password.as_deref()));
        }
        ConnectionDescriptor::DirectTls(opts) => {
            kv("Address", &opts.tcp.addr);
            kv("Password", secret(opts.tcp.password.as_deref()));
            kv("TLS server name", &opts.server_name);
        }
        ConnectionDescriptor::UnixSocket(opts) => {
            kv("Path", &opts.path);
            kv("Password", secret(opts.password.as_deref()));
        }
        ConnectionDescriptor::Sentinel(opts) => {
            output::list("Sentinels", &opts.sentinel_addrs);
            kv("Master name", &opts.master_name);
            kv("Sentinel password", secret(opts.sentinel_password.as_deref()));
            kv("Username", opts.username.as_deref().unwrap_or("(none)"));
            kv("Password", secret(opts.password.as_deref()));
        }
    }

    kv("Database", &descriptor.db().to_string());
}

fn kind_label(descriptor: &ConnectionDescriptor) -> &'static str {
    match descriptor {
        ConnectionDescriptor::Direct(_) => "Direct",
        ConnectionDescriptor::DirectTls(_) => "Direct (TLS)",
        ConnectionDescriptor::UnixSocket(_) => "Unix socket",
        ConnectionDescriptor::Sentinel(_) => "Sentinel",
    }
}

fn secret(password: Option<&str>) -> &str {
    password.unwrap_or("(none)")
}
