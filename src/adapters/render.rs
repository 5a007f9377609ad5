use crate::core::ingredients::ingredient_lines;
use crate::domain::ports::Renderer;
use crate::domain::view::{FieldView, RecipeView};
use crate::utils::error::Result;

pub const TITLE: &str = "Kombucha ingredient calculator";

/// Human-readable panels: form, ingredients, instructions.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl TextRenderer {
    fn field_line(field: &FieldView) -> String {
        let value = if field.value.is_nan() {
            "(empty)".to_string()
        } else {
            field.value.to_string()
        };
        match &field.error {
            Some(error) => format!("{}: {}  ! {}", field.label, value, error),
            None => format!("{}: {}", field.label, value),
        }
    }
}

impl Renderer for TextRenderer {
    fn render(&self, view: &RecipeView) -> Result<String> {
        let mut lines = vec![TITLE.to_string(), String::new()];
        lines.extend(view.fields.iter().map(Self::field_line));

        lines.push(String::new());
        lines.push("Ingredients".to_string());
        lines.extend(
            ingredient_lines(&view.ingredients)
                .into_iter()
                .map(|line| format!("  {}", line)),
        );

        lines.push(String::new());
        lines.push("Instructions".to_string());
        lines.extend(
            view.instructions
                .iter()
                .enumerate()
                .map(|(i, step)| format!("  {:>2}. {}", i + 1, step)),
        );

        Ok(lines.join("\n"))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer {
    pub pretty: bool,
}

impl Renderer for JsonRenderer {
    fn render(&self, view: &RecipeView) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(view)?
        } else {
            serde_json::to_string(view)?
        };
        Ok(json)
    }
}
