//! The translation capability consumed by source adapters.

use crate::Attributes;

/// Convert a raw source record into OSM tags.
///
/// Implementations receive the record by value together with the name of the
/// layer it was read from and the geometry it describes, and return the
/// translated record. Translators must be `Send + Sync` so a single instance
/// can serve concurrent callers.
///
/// Any `Fn(Attributes, &str, &str) -> Attributes` closure that is
/// `Send + Sync` is a translator.
///
/// # Examples
///
/// ```rust
/// use translations_core::{Attributes, Translator};
///
/// struct LayerTagger;
///
/// impl Translator for LayerTagger {
///     fn to_osm(&self, mut attrs: Attributes, layer_name: &str, _geometry: &str) -> Attributes {
///         attrs.insert("source:layer".into(), layer_name.into());
///         attrs
///     }
/// }
///
/// let tags = LayerTagger.to_osm(Attributes::new(), "roads", "Line");
/// assert_eq!(tags.get("source:layer").map(String::as_str), Some("roads"));
/// ```
pub trait Translator: Send + Sync {
    /// Translate `attrs` read from `layer_name` with the given geometry.
    fn to_osm(&self, attrs: Attributes, layer_name: &str, geometry_type: &str) -> Attributes;
}

impl<F> Translator for F
where
    F: Fn(Attributes, &str, &str) -> Attributes + Send + Sync,
{
    fn to_osm(&self, attrs: Attributes, layer_name: &str, geometry_type: &str) -> Attributes {
        self(attrs, layer_name, geometry_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn closures_act_as_translators() {
        let upper = |attrs: Attributes, _: &str, _: &str| -> Attributes {
            attrs
                .into_iter()
                .map(|(key, value)| (key, value.to_uppercase()))
                .collect()
        };
        let attrs = Attributes::from([("name".to_owned(), "quay".to_owned())]);
        let translated = upper.to_osm(attrs, "layer1", "Point");
        assert_eq!(translated.get("name").map(String::as_str), Some("QUAY"));
    }
}
