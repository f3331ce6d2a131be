//! Template renderer.

use crate::config::MigrationPlan;
use handlebars::{no_escape, Context, Handlebars, Helper, HelperResult, Output, RenderContext};
use serde::Serialize;

/// Creates a configured Handlebars registry with custom helpers.
///
/// The registry is configured with:
/// - No HTML escaping (READMEs routinely embed raw HTML)
/// - Strict mode (catches missing variables)
/// - `eq` helper for equality comparisons
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();

    hbs.register_escape_fn(no_escape);
    hbs.set_strict_mode(true);
    hbs.register_helper("eq", Box::new(eq_helper));

    hbs
}

/// Helper function for equality comparison in templates.
///
/// Usage: `{{#if (eq repo "github")}}...{{/if}}`
fn eq_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let param1 = h.param(0).and_then(|v| v.value().as_str());
    let param2 = h.param(1).and_then(|v| v.value().as_str());

    let result = match (param1, param2) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    };

    out.write(if result { "true" } else { "" })?;
    Ok(())
}

/// Variables available to the README template.
#[derive(Debug, Clone, Serialize)]
pub struct ReadmeContext<'a> {
    /// Short name of the repository being retired.
    pub repo: &'a str,
    /// Account owning the repository.
    pub owner: &'a str,
    /// Destination, e.g. "catppuccin/userstyles".
    pub destination: &'a str,
}

impl<'a> ReadmeContext<'a> {
    /// Builds the context for one repository of a plan.
    #[must_use]
    pub fn new(plan: &'a MigrationPlan, repo: &'a str) -> Self {
        Self {
            repo,
            owner: &plan.owner,
            destination: &plan.destination_name,
        }
    }
}

/// Template renderer for README bodies.
pub struct TemplateRenderer {
    handlebars: Handlebars<'static>,
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer {
    /// Creates a new template renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlebars: create_handlebars_registry(),
        }
    }

    /// Renders a README template for one repository.
    ///
    /// # Errors
    ///
    /// Returns an error if the template is malformed or references a
    /// variable that isn't part of [`ReadmeContext`].
    pub fn render_readme(
        &self,
        template: &str,
        context: &ReadmeContext<'_>,
    ) -> Result<String, super::TemplateError> {
        Ok(self.handlebars.render_template(template, context)?)
    }
}
