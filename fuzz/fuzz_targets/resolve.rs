//! Fuzz target for URI resolution.
//!
//! Feeds arbitrary strings to the resolver to find panics. Whatever
//! resolves must render to a URI that resolves to the same descriptor.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_resolve
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use quri_resolve::{ConnectionDescriptor, resolve};

/// False for descriptors whose URI form cannot carry every field.
fn renders_losslessly(desc: &ConnectionDescriptor) -> bool {
    match desc {
        ConnectionDescriptor::DirectTls(opts) => {
            let addr = opts.tcp.addr.as_str();
            let host = addr.rsplit_once(':').map_or(addr, |(host, _)| host);
            host.trim_start_matches('[').trim_end_matches(']') == opts.server_name
                || addr == opts.server_name
        }
        ConnectionDescriptor::UnixSocket(opts) => opts.path.starts_with('/'),
        _ => true,
    }
}

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(desc) = resolve(input) {
            let _ = desc.to_string();
            if renders_losslessly(&desc) {
                assert_eq!(resolve(&desc.to_uri()), Ok(desc), "input: {input:?}");
            }
        }
    }
});
