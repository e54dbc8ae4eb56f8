//! Facade crate for the OSM attribute translation tables.
//!
//! This crate re-exports the shared translation types and exposes the
//! Wikimapia category table and the NAVTEQ adapter behind feature flags.

#![forbid(unsafe_code)]

pub use translations_core::{
    Attributes, GeometryType, ParseGeometryTypeError, Tags, Translator,
};

#[cfg(feature = "wikimapia")]
pub use translations_wikimapia::{
    CategoryReport, CategoryRule, CategoryRules, CategoryTranslator, RAW_CATEGORY_KEY,
    lookup, lookup_tags, raw_category_tags, raw_category_value, retired_rules, rules,
    split_categories,
};

#[cfg(feature = "navteq")]
pub use translations_navteq::{MISSING_TRANSLATOR_MESSAGE, NavteqAdapter, TranslatorAvailability};

#[cfg(all(test, feature = "wikimapia", feature = "navteq"))]
mod tests {
    use super::*;
    use rstest::rstest;
    use translations_core::test_support::attributes;

    #[rstest]
    fn adapter_delegates_to_category_translator() {
        let adapter = NavteqAdapter::with_translator(CategoryTranslator::new());
        assert_eq!(adapter.initialize(), TranslatorAvailability::Available);

        let tags = adapter.translate_to_osm(
            attributes([("category", "hospital"), ("name", "St Mary")]),
            "places",
            GeometryType::Area.as_str(),
        );
        assert_eq!(
            tags,
            attributes([("amenity", "hospital"), ("name", "St Mary")])
        );
    }

    #[rstest]
    fn unconfigured_adapter_leaves_categories_alone() {
        let adapter = NavteqAdapter::default();
        let attrs = attributes([("category", "hospital")]);
        assert_eq!(
            adapter.translate_to_osm(attrs.clone(), "places", "Point"),
            attrs
        );
    }
}
