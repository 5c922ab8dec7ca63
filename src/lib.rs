//! # scene-release-parser
//!
//! A deterministic parser for media release names: filenames and
//! directory names following the loose conventions scene and fansub
//! groups use to pack title, year, season/episode, resolution, source,
//! codec, and release-group information into a single string.
//!
//! ## Quick start
//!
//! ```rust
//! use scene_release_parser::parse;
//!
//! let info = parse("The.Matrix.1999.1080p.BluRay.x264-GROUP.mkv");
//! assert_eq!(info.year.as_deref(), Some("1999"));
//! assert_eq!(info.resolution.as_deref(), Some("1080p"));
//! assert_eq!(info.release_group.as_deref(), Some("GROUP"));
//! ```
//!
//! ## Design
//!
//! `parse` runs a fixed, ordered sequence of extraction passes over a
//! mutable working buffer: each pass finds the rightmost
//! boundary-anchored match for its descriptor, records it, and excises
//! it from the buffer before the next pass runs. This keeps later
//! passes (especially title extraction, which is always last) from
//! ever seeing text another pass has already claimed. See `parser`,
//! `boundary`, and the `stages` module for the pipeline itself.
//!
//! The parser never fails: unrecognized or absent descriptors simply
//! leave their field unset on the resulting `MediaInfo`.

mod boundary;
mod language;
mod normalize;
mod parser;
mod patterns;
mod stages;
mod tables;

pub mod model;

pub use model::{FileType, MediaInfo, MediaTitle};
pub use parser::parse;

/// Main result type for the library.
pub type Result<T> = anyhow::Result<T>;

/// Main error type for the library.
pub type Error = anyhow::Error;
