//! Wikimapia category translation for the OSM data model.
//!
//! Wikimapia tags places with free-text categories harvested from its API.
//! This crate carries the curated table mapping each known category label to
//! the OSM tags that describe it, and a [`CategoryTranslator`] that applies
//! the table to attribute records.
//!
//! Lookups are exact and case-sensitive. A label that is not in the table
//! yields `None`; callers decide whether to fall back to the raw marker
//! (see [`raw_category_tags`]).
//!
//! # Examples
//!
//! ```
//! use translations_wikimapia::lookup_tags;
//!
//! let tags = lookup_tags("school").expect("school is a known category");
//! assert_eq!(tags.get("amenity").map(String::as_str), Some("school"));
//! assert!(lookup_tags("not a real category").is_none());
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod rules;
mod translate;

pub use rules::{
    CategoryRule, CategoryRules, RAW_CATEGORY_KEY, lookup, lookup_tags, raw_category_tags,
    raw_category_value, retired_rules, rules,
};
pub use translate::{
    CATEGORY_SEPARATOR, CategoryReport, CategoryTranslator, DEFAULT_CATEGORY_ATTRIBUTE,
    split_categories,
};
