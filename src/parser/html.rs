//! Embedded data block in an HTML page
//!
//! A page carries its exam data as a single assignment:
//!
//! ```text
//! const examData = { ... };
//! ```
//!
//! The block runs from the first `{` after the `=` to the first `};`
//! that follows it, spanning lines. Everything else in the page is
//! opaque and passed through untouched.

use anyhow::{Context, Result};
use regex::{NoExpand, Regex};
use std::ops::Range;

/// Locates and rewrites one named data assignment in a page
#[derive(Debug, Clone)]
pub struct DataBlock {
    variable: String,
    pattern: Regex,
}

impl DataBlock {
    pub fn new(variable: &str) -> Result<Self> {
        let pattern = Regex::new(&format!(
            r"(?s)const\s+{}\s*=\s*(\{{.*?\}});",
            regex::escape(variable)
        ))
        .with_context(|| format!("Failed to build data block pattern for '{}'", variable))?;

        Ok(Self {
            variable: variable.to_string(),
            pattern,
        })
    }

    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// Byte range of the whole assignment, including `const` and `;`
    pub fn find(&self, html: &str) -> Option<Range<usize>> {
        self.pattern.find(html).map(|m| m.range())
    }

    /// The object literal of the first assignment, braces included
    pub fn literal<'h>(&self, html: &'h str) -> Option<&'h str> {
        self.pattern
            .captures(html)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Render the assignment statement for `literal`
    pub fn assignment(&self, literal: &str) -> String {
        format!("const {} = {};", self.variable, literal)
    }

    /// Replace the first assignment with one holding `literal`
    ///
    /// Returns `None` when the page has no such assignment.
    pub fn replace(&self, html: &str, literal: &str) -> Option<String> {
        self.find(html)?;
        let assignment = self.assignment(literal);
        Some(
            self.pattern
                .replacen(html, 1, NoExpand(&assignment))
                .into_owned(),
        )
    }
}
