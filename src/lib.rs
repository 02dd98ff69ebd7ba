//! # gopin - Go Dependency Pinner
//!
//! `gopin` reads a `Godeps` manifest of Go import paths paired with VCS
//! revisions, fetches each package with `go get`, and pins every working copy
//! to its declared revision using the version control system that owns it
//! (Bazaar, Git, Mercurial, or Subversion). It makes a dependency set
//! reproducible without any lockfile support in the toolchain itself.
//!
//! ## Quick Start
//!
//! 1. Create a `Godeps` file:
//!
//! ```text
//! github.com/nu7hatch/gotrail               v0.0.2
//! github.com/replicon/fast-archiver         v1.02   # comments are fine
//! launchpad.net/gocheck                     r2013.03.03
//! ```
//!
//! 2. Fetch and pin everything:
//!
//! ```bash
//! gopin get
//! ```
//!
//! 3. Or fetch, pin, and install in one go:
//!
//! ```bash
//! gopin
//! ```
//!
//! ## Architecture
//!
//! The crate is organized using clean architecture principles:
//!
//! - [`domain`]: manifest and workspace model, no I/O
//! - [`application`]: the fetch, checkout, and install drivers
//! - [`infrastructure`]: subprocess execution and the four VCS clients
//! - [`presentation`]: CLI interface and plugin delegation
//! - [`common`]: shared error handling
//!
//! ## Error Handling
//!
//! - [`common::error::GopinError`]: main error type
//! - [`common::result::GopinResult`]: type alias for `Result<T, GopinError>`

#![deny(rustdoc::broken_intra_doc_links)]

pub mod application;
pub mod common;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

// Re-export commonly used types for convenience
pub use crate::common::error::GopinError;
pub use crate::common::result::GopinResult as Result;
