pub mod aggregate;
pub mod document;
pub mod fallback;

pub use aggregate::{DetailField, Platform, TagKind};
pub use document::{
    parse_document, resolve_load, DataSource, FallbackReason, LoadFailure, LoadOutcome,
    SkippedRecord,
};
pub use fallback::fallback_platforms;
