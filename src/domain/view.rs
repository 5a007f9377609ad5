use serde::Serialize;

/// Everything a renderer needs for one frame: the form, the ingredients
/// panel and the instructions panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeView {
    pub fields: Vec<FieldView>,
    pub ingredients: Ingredients,
    pub instructions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldView {
    pub name: String,
    pub label: String,
    /// Raw value as typed; NaN serializes as `null`.
    pub value: f64,
    pub min: f64,
    pub step: f64,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ingredients {
    pub water_liters: f64,
    pub tea_grams: f64,
    pub sugar_grams: f64,
    pub starter_liters: f64,
    pub starter_milliliters: f64,
}
