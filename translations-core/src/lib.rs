//! Core domain types shared by the OSM translation crates.
//!
//! The crate defines the vocabulary every translation speaks: OSM [`Tags`],
//! raw source [`Attributes`], the [`GeometryType`] a record describes, and
//! the [`Translator`] capability that turns one into the other.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod geometry;
pub mod tags;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;
mod translator;

pub use geometry::{GeometryType, ParseGeometryTypeError};
pub use tags::{Attributes, Tags};
pub use translator::Translator;
