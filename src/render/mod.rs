//! Rendering: content in, markup out
//!
//! Every piece of output is an askama `Template`, so text and attribute
//! values are HTML-escaped by the template engine.
//!
//! - `primitives`: `Section` and `Badge`, the reusable layout building blocks
//! - `page`: the composer that binds `Content` into those primitives

mod anchors;
mod clock;
mod page;
mod primitives;
mod style;

pub use anchors::{check_anchors, nav_targets, section_ids};
pub use askama::Template;
pub use clock::{Clock, FixedClock, SystemClock};
pub use page::{Page, PageOptions, SectionSpec, SECTIONS, TOP_ANCHOR};
pub use primitives::{Badge, ButtonLink, ButtonStyle, Section};
pub use style::STYLESHEET;
