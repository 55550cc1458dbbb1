//! Extraction settings: type labels and decode precision.

use tabgeo_core::GeometryKind;

use super::SettingsError;

/// Decode precision used when none is configured.
pub const DEFAULT_PRECISION: u8 = 6;
/// Largest accepted decode precision.
pub const MAX_PRECISION: u8 = 10;

/// The type label configured for each geometry kind.
///
/// Labels are compared after trimming and lowercasing. When two labels are
/// equal, the kind declared first in [`GeometryKind::ALL`] wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeLabels {
    /// Label for scatter rows.
    pub scatter: String,
    /// Label for line rows.
    pub line: String,
    /// Label for arc rows.
    pub arc: String,
    /// Label for path rows.
    pub path: String,
    /// Label for polygon rows.
    pub polygon: String,
}

impl TypeLabels {
    /// The configured label for `kind`.
    #[must_use]
    pub fn label(&self, kind: GeometryKind) -> &str {
        match kind {
            GeometryKind::Scatter => &self.scatter,
            GeometryKind::Line => &self.line,
            GeometryKind::Arc => &self.arc,
            GeometryKind::Path => &self.path,
            GeometryKind::Polygon => &self.polygon,
        }
    }

    /// Classify a raw type label.
    ///
    /// # Examples
    /// ```
    /// use tabgeo_core::GeometryKind;
    /// use tabgeo_data::TypeLabels;
    ///
    /// let labels = TypeLabels {
    ///     polygon: "Area".to_owned(),
    ///     ..TypeLabels::default()
    /// };
    /// assert_eq!(labels.classify("  AREA "), Some(GeometryKind::Polygon));
    /// assert_eq!(labels.classify("polygon"), None);
    /// ```
    #[must_use]
    pub fn classify(&self, raw: &str) -> Option<GeometryKind> {
        LabelMatcher::new(self).classify(raw)
    }
}

impl Default for TypeLabels {
    fn default() -> Self {
        Self {
            scatter: GeometryKind::Scatter.as_str().to_owned(),
            line: GeometryKind::Line.as_str().to_owned(),
            arc: GeometryKind::Arc.as_str().to_owned(),
            path: GeometryKind::Path.as_str().to_owned(),
            polygon: GeometryKind::Polygon.as_str().to_owned(),
        }
    }
}

/// Settings for one extraction pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionSettings {
    labels: TypeLabels,
    precision: u8,
}

impl ExtractionSettings {
    /// Validate and build settings.
    ///
    /// # Errors
    /// Returns [`SettingsError::PrecisionOutOfRange`] when `precision`
    /// exceeds [`MAX_PRECISION`].
    pub fn new(labels: TypeLabels, precision: u8) -> Result<Self, SettingsError> {
        if precision > MAX_PRECISION {
            return Err(SettingsError::PrecisionOutOfRange { precision });
        }
        Ok(Self { labels, precision })
    }

    /// Configured type labels.
    #[must_use]
    pub const fn labels(&self) -> &TypeLabels {
        &self.labels
    }

    /// Decimal digits used for both decoded dimensions.
    #[must_use]
    pub const fn precision(&self) -> u8 {
        self.precision
    }
}

impl Default for ExtractionSettings {
    fn default() -> Self {
        Self {
            labels: TypeLabels::default(),
            precision: DEFAULT_PRECISION,
        }
    }
}

/// Normalised labels, computed once per pass.
pub(super) struct LabelMatcher {
    normalised: Vec<(GeometryKind, String)>,
}

impl LabelMatcher {
    pub(super) fn new(labels: &TypeLabels) -> Self {
        let normalised = GeometryKind::ALL
            .iter()
            .map(|kind| (*kind, normalise(labels.label(*kind))))
            .collect();
        Self { normalised }
    }

    pub(super) fn classify(&self, raw: &str) -> Option<GeometryKind> {
        let wanted = normalise(raw);
        self.normalised
            .iter()
            .find(|(_, label)| *label == wanted)
            .map(|(kind, _)| *kind)
    }
}

fn normalise(label: &str) -> String {
    label.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("scatter", Some(GeometryKind::Scatter))]
    #[case(" LINE ", Some(GeometryKind::Line))]
    #[case("Arc", Some(GeometryKind::Arc))]
    #[case("path\n", Some(GeometryKind::Path))]
    #[case("POLYGON", Some(GeometryKind::Polygon))]
    #[case("hexagon", None)]
    #[case("", None)]
    fn default_labels_classify_case_insensitively(
        #[case] raw: &str,
        #[case] expected: Option<GeometryKind>,
    ) {
        assert_eq!(TypeLabels::default().classify(raw), expected);
    }

    #[rstest]
    fn duplicate_labels_prefer_declaration_order() {
        let labels = TypeLabels {
            path: "shape".to_owned(),
            polygon: " Shape".to_owned(),
            ..TypeLabels::default()
        };
        assert_eq!(labels.classify("SHAPE"), Some(GeometryKind::Path));
    }

    #[rstest]
    #[case(0)]
    #[case(6)]
    #[case(10)]
    fn precision_within_range_is_accepted(#[case] precision: u8) {
        let settings =
            ExtractionSettings::new(TypeLabels::default(), precision).expect("valid precision");
        assert_eq!(settings.precision(), precision);
    }

    #[rstest]
    fn precision_above_maximum_is_rejected() {
        let err = ExtractionSettings::new(TypeLabels::default(), 11).expect_err("too precise");
        assert_eq!(err, SettingsError::PrecisionOutOfRange { precision: 11 });
    }

    #[rstest]
    fn defaults_use_kind_names_and_six_digits() {
        let settings = ExtractionSettings::default();
        assert_eq!(settings.precision(), DEFAULT_PRECISION);
        assert_eq!(settings.labels().label(GeometryKind::Arc), "arc");
    }
}
