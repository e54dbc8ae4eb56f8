//! Key/value maps exchanged between sources and the OSM schema.

use std::collections::HashMap;

/// OpenStreetMap-style tags keyed by tag name.
pub type Tags = HashMap<String, String>;

/// Attribute record read from a source dataset.
///
/// The structure and meaning of the entries belong to the source; the
/// translation crates treat the record as opaque unless a translator knows
/// how to read it.
pub type Attributes = HashMap<String, String>;

/// Build a [`Tags`] map from borrowed key/value pairs.
///
/// Later pairs overwrite earlier ones that share a key.
///
/// # Examples
/// ```
/// use translations_core::tags::tags_from_pairs;
///
/// let tags = tags_from_pairs([("amenity", "school"), ("amenity", "college")]);
/// assert_eq!(tags.get("amenity").map(String::as_str), Some("college"));
/// ```
pub fn tags_from_pairs<'a, I>(pairs: I) -> Tags
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut collected = Tags::new();
    for (key, value) in pairs {
        collected.insert(key.to_owned(), value.to_owned());
    }
    collected
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn collects_pairs() {
        let tags = tags_from_pairs([("natural", "water"), ("water", "lake")]);
        assert_eq!(tags.len(), 2);
        assert_eq!(tags.get("water"), Some(&"lake".to_owned()));
    }

    #[rstest]
    fn empty_input_gives_empty_tags() {
        assert!(tags_from_pairs(std::iter::empty()).is_empty());
    }
}
