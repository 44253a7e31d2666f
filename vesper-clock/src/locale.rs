//! Meridiem label pair supplied by the locale layer.

/// The AM/PM string pair for the active locale.
///
/// Locale lookup itself is an external concern; callers fetch the two strings
/// however their platform exposes them and hand them to
/// [`TimeFormatter`](crate::TimeFormatter) at construction. The default pair
/// is the plain English `"AM"` / `"PM"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeridiemLabels {
    am: String,
    pm: String,
}

impl MeridiemLabels {
    /// Creates a label pair from locale strings.
    pub fn from_pair(am: impl Into<String>, pm: impl Into<String>) -> Self {
        Self {
            am: am.into(),
            pm: pm.into(),
        }
    }

    /// Returns the ante-meridiem label.
    pub fn am(&self) -> &str {
        &self.am
    }

    /// Returns the post-meridiem label.
    pub fn pm(&self) -> &str {
        &self.pm
    }
}

impl Default for MeridiemLabels {
    fn default() -> Self {
        Self::from_pair("AM", "PM")
    }
}
