// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Rotating header word for web pages.
//!
//! A host element lists candidate words in an attribute; the rotator keeps
//! the first one in place, shuffles the rest, and swaps the displayed word
//! on a fixed interval with a CSS-driven enter/exit transition. Clicking the
//! host pauses and resumes.
//!
//! # Key entry points
//!
//! - [`rotator::WordRotator`] - the Running/Paused state machine
//! - [`words::WordList`] - attribute parsing and first-fixed shuffle
//! - [`view::WordView`] - the two-phase render seam, with
//!   [`view::WordStage`] as an in-memory implementation
//! - [`options::RotatorOptions`] - timing and markup names, TOML loadable
//! - `web` (feature `web`) - DOM view, `setTimeout` scheduler and the wasm
//!   start hook
//!
//! # Page contract
//!
//! ```html
//! <h1>We make <a class="word-rotator" href="/about"
//!     data-words="software,tools,friends"><span class="is-active">software</span></a></h1>
//! ```
//!
//! The stylesheet styles `is-entering`, `is-active` and `is-exiting` with a
//! 400ms transition, and reveals the container once `<html>` has
//! `is-ready`.

pub mod error;
pub mod options;
pub mod rotator;
pub mod view;
pub mod words;

#[cfg(feature = "web")]
pub mod web;

pub use error::RotatorError;
pub use options::RotatorOptions;
pub use rotator::{RotatorEvent, RotatorState, WordRotator};
pub use words::WordList;
