//! Pure view-model logic shared by the Climate Data Explorer UI.
//!
//! Everything here is a total function over already-validated in-memory
//! data: year-range/zoom arithmetic, the keyboard shortcut table, and CSV
//! serialization of fetched series. No I/O, no DOM.

pub mod export;
pub mod filters;
pub mod shortcuts;
