//! Translator port - maps labels to localized text
//!
//! Used by label sorting and by renderers. When no translator is
//! configured, raw labels are used everywhere.

/// Label translation capability
pub trait Translator {
    /// Translate a label. Implementations return the label unchanged
    /// when they have no translation for it.
    fn translate(&self, label: &str) -> String;
}

impl<F> Translator for F
where
    F: Fn(&str) -> String,
{
    fn translate(&self, label: &str) -> String {
        self(label)
    }
}

/// Translate with an optional translator, falling back to the raw label.
pub fn translate_label(translator: Option<&dyn Translator>, label: &str) -> String {
    match translator {
        Some(translator) => translator.translate(label),
        None => label.to_string(),
    }
}
