#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! Per-repository settings files.
//!
//! The format is a small INI dialect:
//!
//! ```ini
//! # machine-wide values apply to every repository
//! ignores = *.tmp
//!
//! [my-repo]
//! ignores = Debug/**
//! ignores = *.obj
//! ```
//!
//! Lines starting with `#` or `;` are comments. Keys are case-insensitive and
//! may repeat; repeated values keep their order. [`RepoSettings`] implements
//! [`filespec::IgnoreSource`], so a parsed file can feed
//! [`filespec::FilterSpec::load_ignores_from_config`] directly.

mod error;
mod store;

pub use error::{SettingsError, SettingsErrorKind};
pub use store::RepoSettings;
