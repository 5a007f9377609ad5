use crate::domain::model::{Ratios, Recipe};
use crate::domain::view::Ingredients;
use crate::utils::format::{self, round_to, GRAMS_DECIMALS, LITERS_DECIMALS, MILLILITERS_DECIMALS};

const MILLILITERS_PER_LITER: f64 = 1000.0;

/// Quantities already rounded to their display precision, so every renderer
/// reports the same numbers.
pub fn ingredients(recipe: &Recipe, ratios: &Ratios) -> Ingredients {
    Ingredients {
        water_liters: round_to(recipe.water, LITERS_DECIMALS),
        tea_grams: round_to(recipe.water * ratios.tea_grams_per_liter, GRAMS_DECIMALS),
        sugar_grams: round_to(recipe.water * ratios.sugar_grams_per_liter, GRAMS_DECIMALS),
        starter_liters: round_to(recipe.starter, LITERS_DECIMALS),
        starter_milliliters: round_to(
            recipe.starter * MILLILITERS_PER_LITER,
            MILLILITERS_DECIMALS,
        ),
    }
}

/// Panel lines, one per ingredient.
pub fn ingredient_lines(ingredients: &Ingredients) -> Vec<String> {
    vec![
        format!("Water: {} liters", format::liters(ingredients.water_liters)),
        format!("Tea: {} grams", format::grams(ingredients.tea_grams)),
        format!("Sugar: {} grams", format::grams(ingredients.sugar_grams)),
        format!(
            "Starter Liquid: {} liters ({} mL)",
            format::liters(ingredients.starter_liters),
            format::milliliters(ingredients.starter_milliliters)
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_liter_batch() {
        let recipe = Recipe {
            water: 1.0,
            starter: 0.1,
        };
        let lines = ingredient_lines(&ingredients(&recipe, &Ratios::default()));
        assert_eq!(
            lines,
            vec![
                "Water: 1.00 liters",
                "Tea: 7.00 grams",
                "Sugar: 70.00 grams",
                "Starter Liquid: 0.10 liters (100 mL)",
            ]
        );
    }

    #[test]
    fn test_five_liter_batch() {
        let recipe = Recipe {
            water: 5.0,
            starter: 0.5,
        };
        let result = ingredients(&recipe, &Ratios::default());
        assert_eq!(result.tea_grams, 35.0);
        assert_eq!(result.sugar_grams, 350.0);
        assert_eq!(result.starter_milliliters, 500.0);
    }

    #[test]
    fn test_quantities_are_rounded_to_display_precision() {
        let recipe = Recipe {
            water: 0.7,
            starter: 0.07,
        };
        let result = ingredients(&recipe, &Ratios::default());
        assert_eq!(result.tea_grams, 4.9);
        assert_eq!(result.sugar_grams, 49.0);
        assert_eq!(result.starter_milliliters, 70.0);
    }
}
