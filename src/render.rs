//! Template rendering with named substitution slots.

use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;

use crate::error::AppError;
use crate::templates::ProjectTemplate;

/// Substitution values for one application variant.
#[derive(Debug, Clone, Serialize)]
pub struct VariantContext {
    /// 1-based sequential index, used for file naming and in-template numbering.
    pub index: usize,
    /// Application UID, embedded verbatim.
    pub uid: String,
}

impl VariantContext {
    /// Build the context for one variant, validating the UID token.
    ///
    /// Validation happens here so a malformed identifier surfaces before any
    /// file for that variant is written.
    pub fn new(index: usize, uid: &str) -> Result<Self, AppError> {
        if uid.is_empty() || uid.chars().any(char::is_control) {
            return Err(AppError::InvalidUid(uid.to_string()));
        }
        Ok(Self { index, uid: uid.to_string() })
    }
}

/// Template engine preloaded with all project templates.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    /// Build the engine with strict undefined behavior: a slot with no
    /// matching context field fails the render instead of emitting nothing.
    pub fn new() -> Result<Self, AppError> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);

        for template in ProjectTemplate::ALL {
            env.add_template(template.template_name(), template.source()).map_err(|e| {
                AppError::Render { template: template.template_name(), source: e }
            })?;
        }

        Ok(Self { env })
    }

    /// Render one template with the variant's values interpolated.
    pub fn render(
        &self,
        template: ProjectTemplate,
        ctx: &VariantContext,
    ) -> Result<String, AppError> {
        let tmpl = self.env.get_template(template.template_name()).map_err(|e| {
            AppError::Render { template: template.template_name(), source: e }
        })?;

        tmpl.render(ctx)
            .map_err(|e| AppError::Render { template: template.template_name(), source: e })
    }
}
