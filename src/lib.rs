//! Folio - static portfolio page generator
//!
//! Folio keeps all page copy in a typed content model (`content`) and lays it
//! out with a handful of render primitives (`render`) into a single
//! self-contained HTML document. The CLI wraps this in build, check, diff,
//! watch, and init commands.

pub mod config;
pub mod content;
pub mod error;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod render;
pub mod watcher;

// Re-exports for convenience
pub use config::{Config, ConfigWarning};
pub use content::{validate, Content, Finding, LinkKind, LinkSet, Project, Severity, SkillGroup};
pub use error::{FolioError, FolioResult};
pub use output::{OutputFile, WriteOutcome};
pub use pipeline::{build, check, load_content, BuildOptions, BuildReport};
pub use render::{Badge, Clock, FixedClock, Page, PageOptions, Section, SystemClock, Template};
pub use watcher::{watch, WatchEvent, WatchOptions};
