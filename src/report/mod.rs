//! Terminal rendering of a finished run.
//!
//! - [`terminal`] — colored package table and summary line, printed with `--summary`.

pub mod terminal;
