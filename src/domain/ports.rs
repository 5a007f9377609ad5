use crate::domain::model::Ratios;
use crate::domain::view::RecipeView;
use crate::utils::error::Result;

pub trait ConfigProvider {
    fn ratios(&self) -> Ratios;
    fn default_water(&self) -> f64;
}

pub trait Renderer {
    fn render(&self, view: &RecipeView) -> Result<String>;
}
