//! Structured fuzz target for URI resolution.
//!
//! Builds URIs from scheme, credential, host, path and query pieces so
//! the fuzzer spends its time past scheme dispatch.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_resolve_structured
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use quri_resolve::{Scheme, resolve};

#[derive(Debug, Arbitrary)]
struct FuzzUri {
    scheme: u8,
    password: Option<String>,
    hosts: Vec<String>,
    path: String,
    query: Vec<(String, String)>,
}

impl FuzzUri {
    fn to_uri(&self) -> String {
        let scheme = Scheme::ALL[self.scheme as usize % Scheme::ALL.len()];
        let mut uri = format!("{}://", scheme.name());

        if let Some(ref password) = self.password {
            uri.push(':');
            uri.push_str(password);
            uri.push('@');
        }
        uri.push_str(&self.hosts.join(","));
        uri.push_str(&self.path);

        if !self.query.is_empty() {
            let pairs: Vec<String> = self.query.iter().map(|(k, v)| format!("{k}={v}")).collect();
            uri.push('?');
            uri.push_str(&pairs.join("&"));
        }

        uri
    }
}

fuzz_target!(|input: FuzzUri| {
    let _ = resolve(&input.to_uri());
});
