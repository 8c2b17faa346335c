//! Rendering options

/// Rendering options for expanded markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Write `${n}` tab stop markers (false = plain text, offsets still reported)
    pub tab_stops: bool,
    /// Indentation unit overriding the profile's
    pub indent: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            tab_stops: true,
            indent: None,
        }
    }
}

impl RenderOptions {
    /// Plain output without tab stop markers
    pub fn plain() -> Self {
        Self {
            tab_stops: false,
            ..Self::default()
        }
    }

    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = Some(indent.into());
        self
    }

    /// Indentation unit to use with a profile whose own unit is `profile_unit`
    pub fn indent_unit<'a>(&'a self, profile_unit: &'a str) -> &'a str {
        self.indent.as_deref().unwrap_or(profile_unit)
    }
}
