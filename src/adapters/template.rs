use minijinja::{Environment, UndefinedBehavior};
use std::sync::OnceLock;

use crate::domain::{AppError, PromptContext, TemplateRenderer};

/// Template renderer using Minijinja.
pub struct MinijinjaTemplateRenderer;

impl MinijinjaTemplateRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MinijinjaTemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for MinijinjaTemplateRenderer {
    fn render(
        &self,
        template: &str,
        context: &PromptContext,
        template_name: &str,
    ) -> Result<String, AppError> {
        let env = ENV.get_or_init(|| {
            let mut env = Environment::new();
            env.set_undefined_behavior(UndefinedBehavior::Strict);
            env
        });

        env.render_str(template, context).map_err(|err| AppError::TemplateRender {
            template: template_name.to_string(),
            reason: err.to_string(),
        })
    }
}

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AspectRatio, Lighting, Mood, PromptForm, Style, build_prompt};

    fn render(form: &PromptForm) -> String {
        build_prompt(form, &MinijinjaTemplateRenderer::new()).unwrap()
    }

    #[test]
    fn subject_only_uses_defaults() {
        assert_eq!(
            render(&PromptForm::new("a red fox")),
            "Create a photorealistic image of a red fox. Aspect ratio: 16:9."
        );
    }

    #[test]
    fn all_clauses_render_in_fixed_order() {
        let form = PromptForm {
            subject: "a woman in a red dress".into(),
            action: "running through a park".into(),
            environment: "a spring flower garden".into(),
            style: Style::Cinematic,
            lighting: Some(Lighting::GoldenHour),
            mood: Some(Mood::Joyful),
            camera_details: "professional DSLR, wide-angle lens".into(),
            aspect_ratio: AspectRatio::Classic,
        };
        assert_eq!(
            render(&form),
            "Create a cinematic image of a woman in a red dress. \
             The subject is running through a park, set in a spring flower garden. \
             The scene is illuminated by golden hour, creating a joyful atmosphere. \
             Captured with professional DSLR, wide-angle lens. Aspect ratio: 3:2."
        );
    }

    #[test]
    fn whitespace_fields_are_skipped() {
        let form = PromptForm {
            subject: "a robot".into(),
            environment: "   ".into(),
            mood: Some(Mood::Futuristic),
            camera_details: "\t".into(),
            ..PromptForm::default()
        };
        assert_eq!(
            render(&form),
            "Create a photorealistic image of a robot, creating a futuristic atmosphere. \
             Aspect ratio: 16:9."
        );
    }

    #[test]
    fn template_syntax_in_values_is_not_evaluated() {
        let form = PromptForm::new("{{ style }} & <tags>");
        assert_eq!(
            render(&form),
            "Create a photorealistic image of {{ style }} & <tags>. Aspect ratio: 16:9."
        );
    }

    #[test]
    fn empty_subject_blocks_rendering() {
        let err = build_prompt(&PromptForm::new(""), &MinijinjaTemplateRenderer::new());
        assert!(matches!(err, Err(AppError::EmptySubject)));
    }
}
