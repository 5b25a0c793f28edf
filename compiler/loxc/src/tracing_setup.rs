//! Logging setup for the `lox` binary.
//!
//! Silent unless `LOX_LOG` (or `RUST_LOG`) holds a filter directive, e.g.
//! `LOX_LOG=lox_lexer=trace`. `LOX_LOG_TREE=1` switches to an indented
//! span tree. Everything goes to stderr.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use tracing_tree::HierarchicalLayer;

static TRACING_INIT: Once = Once::new();

/// Filter variables, most specific first.
const FILTER_VARS: [&str; 2] = ["LOX_LOG", "RUST_LOG"];

/// Install the global subscriber once. Later calls do nothing.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let Some(directives) = filter_directives(|var| std::env::var(var).ok()) else {
            return;
        };
        let filter = EnvFilter::new(directives);

        if tree_requested(std::env::var("LOX_LOG_TREE").ok().as_deref()) {
            tracing_subscriber::registry()
                .with(
                    HierarchicalLayer::new(2)
                        .with_writer(std::io::stderr)
                        .with_targets(true)
                        .with_indent_lines(true),
                )
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

fn filter_directives(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    FILTER_VARS.iter().find_map(|var| lookup(var))
}

fn tree_requested(value: Option<&str>) -> bool {
    matches!(value, Some(v) if v == "1" || v.eq_ignore_ascii_case("true"))
}
