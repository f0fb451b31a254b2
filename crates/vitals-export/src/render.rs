use tera::{Context, Tera};

use crate::error::ExportError;
use crate::report::Report;

/// The built-in Markdown report layout.
pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/report.md.tera");

const DEFAULT_NAME: &str = "report.md";

/// A parsed report template, reusable across reports.
pub struct ReportRenderer {
    tera: Tera,
    name: String,
}

impl ReportRenderer {
    /// The built-in Markdown layout.
    pub fn markdown() -> Result<Self, ExportError> {
        Self::custom(DEFAULT_NAME, DEFAULT_TEMPLATE)
    }

    /// A caller-supplied Tera (Jinja2 syntax) template.
    pub fn custom(name: &str, content: &str) -> Result<Self, ExportError> {
        let mut tera = Tera::default();
        tera.add_raw_template(name, content)
            .map_err(|e| ExportError::TemplateParse(e.to_string()))?;
        Ok(Self {
            tera,
            name: name.to_string(),
        })
    }

    /// Report fields become the template's top-level variables.
    pub fn render(&self, report: &Report) -> Result<String, ExportError> {
        let value = serde_json::to_value(report)?;
        let context =
            Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;
        let rendered = self.tera.render(&self.name, &context)?;
        tracing::debug!(template = %self.name, bytes = rendered.len(), "report rendered");
        Ok(rendered)
    }
}

pub fn render_template(
    template_name: &str,
    template_content: &str,
    report: &Report,
) -> Result<String, ExportError> {
    ReportRenderer::custom(template_name, template_content)?.render(report)
}

pub fn render_default(report: &Report) -> Result<String, ExportError> {
    ReportRenderer::markdown()?.render(report)
}
