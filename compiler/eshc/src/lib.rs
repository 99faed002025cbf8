//! esh command-line front end.
//!
//! The binary in `main.rs` only dispatches on the command name; everything
//! it runs lives in [`commands`] so it can be tested without a process.

pub mod commands;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber if `RUST_LOG` is set.
///
/// Grammar rules open nested spans, so output goes through
/// `tracing-tree` to show them indented by depth.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(HierarchicalLayer::new(2).with_targets(true))
                .with(filter)
                .init();
        }
    });
}
