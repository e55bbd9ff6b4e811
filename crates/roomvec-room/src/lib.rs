//! Room dimension records for the roomvec workspace.
//!
//! A [`Room`] is a plain aggregate of length, width and height in metres,
//! with derived area and volume and a fixed plain-text rendering. Values
//! are stored as given: negative or non-finite dimensions are not rejected.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod room;

pub use room::{Room, DELIMITER};
