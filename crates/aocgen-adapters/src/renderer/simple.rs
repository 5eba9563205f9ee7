//! Simple variable substitution renderer.

use aocgen_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::RenderContext,
    error::AocgenResult,
};
use tracing::instrument;

/// Simple renderer using basic variable substitution.
///
/// Substitution itself lives on [`RenderContext`]; this adapter adds the
/// output check the generator contract demands: an unreplaced `{{...}}`
/// marker in rendered output is a hard error, never something to write to
/// disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRenderer;

impl SimpleRenderer {
    /// Create a new simple renderer.
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for SimpleRenderer {
    #[instrument(skip_all)]
    fn render(&self, template: &str, context: &RenderContext) -> AocgenResult<String> {
        let rendered = context.render(template);

        if let Some(marker) = leftover_placeholder(&rendered) {
            return Err(ApplicationError::RenderingFailed {
                reason: format!("unsubstituted placeholder {{{{{marker}}}}} in output"),
            }
            .into());
        }

        Ok(rendered)
    }
}

/// Find the first `{{NAME}}` marker still present, if any.
fn leftover_placeholder(rendered: &str) -> Option<&str> {
    let start = rendered.find("{{")?;
    let rest = &rendered[start + 2..];
    let end = rest.find("}}")?;
    Some(&rest[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_fully_substituted_template() {
        let ctx = RenderContext::new().with("DAY", "3").with("YEAR", "2021");
        let out = SimpleRenderer::new()
            .render("day {{DAY}} of {{YEAR}}", &ctx)
            .unwrap();
        assert_eq!(out, "day 3 of 2021");
    }

    #[test]
    fn rejects_output_with_leftover_placeholder() {
        let ctx = RenderContext::new().with("DAY", "3");
        let err = SimpleRenderer::new()
            .render("{{DAY}} and {{TYPO}}", &ctx)
            .unwrap_err();
        assert!(err.to_string().contains("TYPO"));
    }

    #[test]
    fn plain_braces_are_not_placeholders() {
        // Generated Rust code is full of `{}` pairs; only `{{NAME}}` counts.
        let ctx = RenderContext::new().with("DAY", "3");
        let out = SimpleRenderer::new()
            .render("pub struct Day{{DAY}} {}", &ctx)
            .unwrap();
        assert_eq!(out, "pub struct Day3 {}");
    }

    #[test]
    fn leftover_scan_reports_marker_name() {
        assert_eq!(leftover_placeholder("a {{REGISTRY}} b"), Some("REGISTRY"));
        assert_eq!(leftover_placeholder("vec![{}]"), None);
        assert_eq!(leftover_placeholder("clean"), None);
    }
}
