use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    /// The template parsed but failed against a report.
    #[error("report template failed to render: {0}")]
    TemplateRender(String),

    #[error("report template is invalid: {0}")]
    TemplateParse(String),

    #[error("could not convert report to template context: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<tera::Error> for ExportError {
    fn from(e: tera::Error) -> Self {
        ExportError::TemplateRender(e.to_string())
    }
}
