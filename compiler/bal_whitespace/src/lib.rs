//! Bal Whitespace
//!
//! Recovers the exact whitespace and comments around parsed constructs so a
//! tool can re-emit source byte-for-byte after parsing it.
//!
//! # Architecture
//!
//! Data flows leaf-first through five pieces:
//!
//! 1. **Classifier** ([`classify`]): significant token or trivia
//! 2. **Boundary resolver** ([`boundary`]): node + [`Selector`] → anchor token
//! 3. **Trivia collector** ([`collect`]): anchor + [`Direction`] → literal text
//! 4. **Rule table** ([`rules`]): construct kind → ordered [`Rule`] list
//! 5. **Assembler** ([`WhitespaceExtractor`]): node → [`WhitespaceDescriptor`]
//!
//! Everything is a read-only projection over an immutable
//! [`bal_ir::TokenStream`] and [`bal_ir::SyntaxTree`]; independent nodes can
//! be assembled in parallel with [`WhitespaceExtractor::assemble_all`].
//!
//! # Debugging
//!
//! - `RUST_LOG=bal_whitespace=debug`: one event per assembled descriptor
//! - `RUST_LOG=bal_whitespace=trace`: every resolved boundary and collected run
//!
//! Call [`init_tracing`] once at startup to install the subscriber.

pub mod assemble;
pub mod boundary;
pub mod classify;
pub mod collect;
pub mod descriptor;
pub mod error;
pub mod region;
pub mod rules;

pub use assemble::{DescriptorMap, WhitespaceExtractor};
pub use boundary::{resolve, Selector};
pub use classify::{classify, is_trivia};
pub use collect::{collect, file_start_whitespace, Direction};
pub use descriptor::WhitespaceDescriptor;
pub use error::{AssembleError, Boundary, TriviaError};
pub use region::{
    AnnotationAttachmentRegion, AnnotationAttributeRegion, AnnotationValueRegion,
    ConnectorRegion, FunctionRegion, ImportRegion, PackageRegion, RegionTag, ResourceRegion,
    ServiceRegion,
};
pub use rules::{rules_for, Rule, RuleVariant};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Does nothing unless `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // Another subscriber may already be installed by the host tool.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
