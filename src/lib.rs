//! Metadata extraction, normalization and cover lookup for local music libraries.
//!
//! The pieces compose as a pipeline: [`folders`] collapses library roots,
//! [`metadata`] turns each audio file into a [`metadata::TrackMetadata`]
//! (never failing), and [`cover`] finds artwork for a track. [`library`]
//! ties them into a scan with display and search helpers.

pub mod config;
pub mod cover;
pub mod error;
pub mod folders;
pub mod library;
pub mod logging;
pub mod metadata;
pub mod runtime;
pub mod uri;

#[cfg(test)]
mod test_support;
