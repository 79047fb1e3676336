//! Printing options

/// Layout options for the source printer
#[derive(Debug, Clone)]
pub struct PrintOptions {
    /// Number of spaces per indentation level when `insert_spaces` is set
    pub tab_size: usize,
    /// Use spaces for indentation (false = use tabs, as gofmt does)
    pub insert_spaces: bool,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            tab_size: 4,
            insert_spaces: false,
        }
    }
}

impl PrintOptions {
    /// Generate indentation string for the given level
    pub fn indent(&self, level: usize) -> String {
        if self.insert_spaces {
            " ".repeat(self.tab_size * level)
        } else {
            "\t".repeat(level)
        }
    }
}
