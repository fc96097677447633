//! Usage and defaults rendering for [`FlagSet`].

use std::io::Write;

use super::{Flag, FlagSet};

impl Flag<'_> {
    /// Extracts the argument placeholder and the usage text to print.
    ///
    /// A back-quoted word in the usage names the placeholder and loses its
    /// quotes. Otherwise the value's type name is used, or nothing for
    /// boolean flags.
    #[must_use]
    pub fn unquote_usage(&self) -> (String, String) {
        if let Some((before, rest)) = self.usage.split_once('`')
            && let Some((placeholder, after)) = rest.split_once('`')
        {
            return (placeholder.to_owned(), format!("{before}{placeholder}{after}"));
        }
        let placeholder = if self.value.is_bool_flag() {
            ""
        } else {
            self.value.type_name()
        };
        (placeholder.to_owned(), self.usage.clone())
    }

    fn describe(&self) -> String {
        let mut line = format!("  -{}", self.name);
        let (placeholder, usage) = self.unquote_usage();
        if !placeholder.is_empty() {
            line.push(' ');
            line.push_str(&placeholder);
        }
        // One-letter boolean flags keep their usage on the same line.
        if line.len() <= 4 {
            line.push('\t');
        } else {
            line.push_str("\n    \t");
        }
        line.push_str(&usage.replace('\n', "\n    \t"));
        if !self.value.is_zero_text(&self.default_value) {
            if self.value.type_name() == "string" {
                line.push_str(&format!(" (default {:?})", self.default_value));
            } else {
                line.push_str(&format!(" (default {})", self.default_value));
            }
        }
        line.push('\n');
        line
    }
}

impl FlagSet<'_> {
    /// Renders one entry per defined flag, in lexicographical order.
    #[must_use]
    pub fn defaults_text(&self) -> String {
        self.flags().map(Flag::describe).collect()
    }

    /// Writes [`FlagSet::defaults_text`] to the output.
    pub fn print_defaults(&mut self) {
        let text = self.defaults_text();
        self.write_output(&text);
    }

    /// Renders the usage message: the custom usage if one is installed,
    /// otherwise a `Usage of <name>:` header followed by the defaults.
    #[must_use]
    pub fn usage_text(&self) -> String {
        if let Some(usage) = &self.usage {
            return usage(self);
        }
        let mut text = if self.name.is_empty() {
            String::from("Usage:\n")
        } else {
            format!("Usage of {}:\n", self.name)
        };
        text.push_str(&self.defaults_text());
        text
    }

    /// Writes [`FlagSet::usage_text`] to the output.
    pub fn usage(&mut self) {
        let text = self.usage_text();
        self.write_output(&text);
    }

    pub(super) fn write_output(&mut self, text: &str) {
        let written = self.output.as_mut().map_or_else(
            || std::io::stderr().write_all(text.as_bytes()),
            |output| output.write_all(text.as_bytes()),
        );
        if let Err(err) = written {
            tracing::warn!(flag_set = %self.name, error = %err, "failed to write flag output");
        }
    }
}
