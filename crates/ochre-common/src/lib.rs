//! Common utilities for the Ochre painter.
//!
//! This crate provides shared infrastructure used by the paint and raster crates:
//! - **Warning System** - deduplicated, colored terminal output for input the
//!   painter degrades gracefully on (missing glyphs, unsupported border styles)

pub mod warning;
