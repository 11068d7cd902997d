pub mod candidates;
pub mod config;
pub mod contract;
pub mod core_service;
pub mod desktop_entry;
pub mod icon_search;
pub mod layout;
pub mod logging;
pub mod model;
pub mod normalize;
pub mod process;
pub mod resolver;
pub mod runtime;
pub mod theme;
pub mod windows;

#[cfg(test)]
mod tests {
    mod resolve_latency_test {
        include!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../../tests/perf/resolve_latency_test.rs"
        ));
    }
}
