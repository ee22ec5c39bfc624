//! Terminal presentation for the `folio` binary

pub mod context;
pub mod output;
pub mod primitives;
pub mod terminal;
pub mod theme;
