//! NAVTEQ attribute translation adapter.
//!
//! NAVTEQ records are translated by an external rule set that may or may not
//! be installed alongside the engine. The adapter receives that capability
//! as an optional [`Translator`] and forwards records to it unchanged; when
//! it is absent every record passes through untouched.
//!
//! Invariants:
//! - The adapter adds no tags of its own.
//! - A missing translator is never an error at call time.
//! - The adapter is `Send + Sync` whenever the injected translator is, which
//!   the [`Translator`] bound already requires.
//!
//! # Examples
//!
//! ```
//! use translations_core::Attributes;
//! use translations_navteq::{NavteqAdapter, TranslatorAvailability};
//!
//! let adapter = NavteqAdapter::default();
//! assert_eq!(adapter.initialize(), TranslatorAvailability::Missing);
//!
//! let attrs = Attributes::from([("foo".to_owned(), "bar".to_owned())]);
//! assert_eq!(adapter.translate_to_osm(attrs.clone(), "layer1", "Point"), attrs);
//! ```

#![forbid(unsafe_code)]

use std::fmt;
use std::sync::Arc;

use log::{debug, error};
use translations_core::{Attributes, Translator};

/// Diagnostic logged by [`NavteqAdapter::initialize`] when no translator is
/// installed.
pub const MISSING_TRANSLATOR_MESSAGE: &str = "Please install the NAVTEQ Translation scripts.";

/// Whether a NAVTEQ translator was supplied to the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslatorAvailability {
    /// Records are forwarded to the translator.
    Available,
    /// Records are returned unchanged.
    Missing,
}

/// Forwards attribute records to an optional NAVTEQ [`Translator`].
#[derive(Clone, Default)]
pub struct NavteqAdapter {
    translator: Option<Arc<dyn Translator>>,
}

impl fmt::Debug for NavteqAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavteqAdapter")
            .field("availability", &self.availability())
            .finish()
    }
}

impl NavteqAdapter {
    /// Create an adapter around an optional translator.
    #[must_use]
    pub const fn new(translator: Option<Arc<dyn Translator>>) -> Self {
        Self { translator }
    }

    /// Create an adapter that forwards every record to `translator`.
    #[must_use]
    pub fn with_translator<T>(translator: T) -> Self
    where
        T: Translator + 'static,
    {
        Self::new(Some(Arc::new(translator)))
    }

    /// Report whether a translator is installed.
    #[must_use]
    pub const fn availability(&self) -> TranslatorAvailability {
        if self.translator.is_some() {
            TranslatorAvailability::Available
        } else {
            TranslatorAvailability::Missing
        }
    }

    /// Check the translator once before translation starts.
    ///
    /// A missing translator is logged at error level and otherwise ignored:
    /// [`translate_to_osm`](Self::translate_to_osm) still works, returning
    /// records unchanged. Calling this method is optional.
    pub fn initialize(&self) -> TranslatorAvailability {
        let availability = self.availability();
        match availability {
            TranslatorAvailability::Available => debug!("NAVTEQ translator installed"),
            TranslatorAvailability::Missing => error!("{MISSING_TRANSLATOR_MESSAGE}"),
        }
        availability
    }

    /// Translate a NAVTEQ record read from `layer_name`.
    ///
    /// Returns the translator's result verbatim, or `attrs` itself when no
    /// translator is installed.
    #[must_use]
    pub fn translate_to_osm(
        &self,
        attrs: Attributes,
        layer_name: &str,
        geometry_type: &str,
    ) -> Attributes {
        match &self.translator {
            Some(translator) => translator.to_osm(attrs, layer_name, geometry_type),
            None => attrs,
        }
    }
}

impl Translator for NavteqAdapter {
    fn to_osm(&self, attrs: Attributes, layer_name: &str, geometry_type: &str) -> Attributes {
        self.translate_to_osm(attrs, layer_name, geometry_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use translations_core::test_support::{RecordingTranslator, TranslateCall, attributes};

    #[fixture]
    fn record() -> Attributes {
        attributes([("foo", "bar")])
    }

    #[rstest]
    fn missing_translator_returns_record_unchanged(record: Attributes) {
        let adapter = NavteqAdapter::default();
        let translated = adapter.translate_to_osm(record.clone(), "layer1", "Point");
        assert_eq!(translated, record);
    }

    #[rstest]
    fn translation_works_without_initialize(record: Attributes) {
        let adapter = NavteqAdapter::new(None);
        assert_eq!(adapter.availability(), TranslatorAvailability::Missing);
        assert_eq!(adapter.translate_to_osm(record.clone(), "", ""), record);
    }

    #[rstest]
    fn initialize_reports_missing_translator() {
        assert_eq!(
            NavteqAdapter::default().initialize(),
            TranslatorAvailability::Missing
        );
    }

    #[rstest]
    fn initialize_reports_installed_translator() {
        let adapter = NavteqAdapter::with_translator(RecordingTranslator::default());
        assert_eq!(adapter.initialize(), TranslatorAvailability::Available);
    }

    #[rstest]
    fn installed_translator_receives_arguments_and_owns_result(record: Attributes) {
        let sentinel = attributes([("translated", "true")]);
        let translator = Arc::new(RecordingTranslator::returning(sentinel.clone()));
        let adapter = NavteqAdapter::new(Some(translator.clone()));

        let translated = adapter.translate_to_osm(record.clone(), "layer1", "Point");

        assert_eq!(translated, sentinel);
        assert_eq!(
            translator.calls(),
            [TranslateCall {
                attrs: record,
                layer_name: "layer1".to_owned(),
                geometry_type: "Point".to_owned(),
            }]
        );
    }

    #[rstest]
    fn clones_share_the_translator(record: Attributes) {
        let translator = Arc::new(RecordingTranslator::default());
        let adapter = NavteqAdapter::new(Some(translator.clone()));
        let clone = adapter.clone();

        let _ = adapter.translate_to_osm(record.clone(), "a", "Line");
        let _ = clone.translate_to_osm(record, "b", "Area");

        assert_eq!(translator.calls().len(), 2);
    }

    #[rstest]
    fn adapter_is_itself_a_translator(record: Attributes) {
        let inner = NavteqAdapter::with_translator(|mut attrs: Attributes, layer: &str, _: &str| {
            attrs.insert("layer".to_owned(), layer.to_owned());
            attrs
        });
        let outer = NavteqAdapter::with_translator(inner);
        let translated = outer.to_osm(record, "roads", "Line");
        assert_eq!(translated.get("layer").map(String::as_str), Some("roads"));
        assert_eq!(translated.get("foo").map(String::as_str), Some("bar"));
    }

    #[rstest]
    fn debug_output_names_availability() {
        let rendered = format!("{:?}", NavteqAdapter::default());
        assert!(rendered.contains("Missing"), "unexpected debug output {rendered}");
    }
}
