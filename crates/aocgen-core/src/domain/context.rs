//! Variable substitution context for template rendering.

use std::collections::HashMap;

/// Substitution context: maps `{{NAME}}` placeholders to their values.
///
/// The variable names used by the built-in templates are a fixed contract:
///
/// | Variable          | Example value              | Used by    |
/// |-------------------|----------------------------|------------|
/// | `DAY`             | `5`                        | stub       |
/// | `YEAR`            | `2021`                     | stub       |
/// | `STUB_PATH`       | `src/puzzles/day_5.rs`     | stub       |
/// | `INPUT_PATH`      | `../../input/5.txt`        | stub       |
/// | `AGGREGATOR_PATH` | `src/puzzles/mod.rs`       | aggregator |
/// | `MODULES`         | `mod day_1;\n…`            | aggregator |
/// | `REGISTRY`        | `Box::new(…)`-lines        | aggregator |
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable, consuming self for fluent construction:
    ///
    /// ```rust
    /// use aocgen_core::domain::RenderContext;
    ///
    /// let ctx = RenderContext::new().with("DAY", "5").with("YEAR", "2021");
    /// assert_eq!(ctx.render("day {{DAY}} of {{YEAR}}"), "day 5 of 2021");
    /// ```
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    /// Look up a variable value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Substitute every `{{NAME}}` occurrence of every variable.
    ///
    /// Unknown placeholders are left as-is; the renderer adapter treats any
    /// survivor as a hard error rather than silently emitting broken output.
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();

        // Single-pass replacement. Order doesn't matter: variable values
        // never contain placeholder markers.
        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_every_occurrence() {
        let ctx = RenderContext::new().with("DAY", "7");
        assert_eq!(ctx.render("Day{{DAY}} reads {{DAY}}.txt"), "Day7 reads 7.txt");
    }

    #[test]
    fn unknown_placeholders_survive() {
        let ctx = RenderContext::new().with("DAY", "7");
        assert_eq!(ctx.render("{{DAY}}/{{MYSTERY}}"), "7/{{MYSTERY}}");
    }

    #[test]
    fn empty_value_is_a_valid_substitution() {
        // The aggregator renders `{{MODULES}}` to an empty string for D < 1.
        let ctx = RenderContext::new().with("MODULES", "");
        assert_eq!(ctx.render("a{{MODULES}}b"), "ab");
    }

    #[test]
    fn get_returns_inserted_values() {
        let ctx = RenderContext::new().with("YEAR", "2021");
        assert_eq!(ctx.get("YEAR"), Some("2021"));
        assert_eq!(ctx.get("DAY"), None);
    }
}
