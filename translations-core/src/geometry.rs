//! Geometry classes a translated record may describe.
//!
//! Translators receive the geometry as a plain string so unknown values from
//! a source pass through untouched; the enum gives callers a checked way to
//! produce the common ones.
//!
//! # Examples
//! ```
//! use translations_core::GeometryType;
//!
//! assert_eq!(GeometryType::Point.as_str(), "Point");
//! assert_eq!("area".parse::<GeometryType>(), Ok(GeometryType::Area));
//! ```

use thiserror::Error;

/// Geometry of the feature being translated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryType {
    /// A single node.
    Point,
    /// An open way.
    Line,
    /// A closed way or multipolygon.
    Area,
    /// A relation grouping other members.
    Collection,
}

/// Error returned when a string names no known geometry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown geometry type '{0}'")]
pub struct ParseGeometryTypeError(pub String);

impl GeometryType {
    /// Return the name translators expect, e.g. `"Point"`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Point => "Point",
            Self::Line => "Line",
            Self::Area => "Area",
            Self::Collection => "Collection",
        }
    }
}

impl std::fmt::Display for GeometryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for GeometryType {
    type Err = ParseGeometryTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "point" => Ok(Self::Point),
            "line" => Ok(Self::Line),
            "area" => Ok(Self::Area),
            "collection" => Ok(Self::Collection),
            _ => Err(ParseGeometryTypeError(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    #[case(GeometryType::Point)]
    #[case(GeometryType::Line)]
    #[case(GeometryType::Area)]
    #[case(GeometryType::Collection)]
    fn display_matches_as_str(#[case] geometry: GeometryType) {
        assert_eq!(geometry.to_string(), geometry.as_str());
    }

    #[rstest]
    fn parsing_ignores_case() {
        assert_eq!(GeometryType::from_str("LINE"), Ok(GeometryType::Line));
    }

    #[rstest]
    fn parsing_rejects_unknown() {
        let err = GeometryType::from_str("blob").expect_err("blob is not a geometry");
        assert!(err.to_string().contains("unknown geometry type"));
    }
}
