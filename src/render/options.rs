//! Rendering options

use crate::base::constants::LINE_SEPARATOR;

/// Options for log and block rendering
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Number of spaces each nesting level is indented by
    pub indent_width: usize,
    /// Separator placed between output lines
    pub line_separator: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent_width: 4,
            line_separator: LINE_SEPARATOR.to_string(),
        }
    }
}

impl RenderOptions {
    /// Indentation for one nesting level
    pub fn margin(&self) -> String {
        " ".repeat(self.indent_width)
    }
}
