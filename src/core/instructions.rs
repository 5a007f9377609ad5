use crate::domain::model::Recipe;
use crate::utils::format;

pub fn instructions(recipe: &Recipe) -> Vec<String> {
    vec![
        format!(
            "Boil {} liters of purified water.",
            format::liters(recipe.water)
        ),
        "Steep the tea bags or loose leaf tea in the hot water for 7-15 minutes.".to_string(),
        "Add sugar and stir to dissolve.".to_string(),
        "Check to make sure the sweet tea is body temperature or below.".to_string(),
        format!(
            "Add SCOBY and {} mL of starter liquid.",
            format::milliliters(recipe.starter * 1000.0)
        ),
        "Cover with a cloth cover and rubber band or a custom brewer cap.".to_string(),
        "Place the container in a warm (~27°C), shaded area for at least 7 days.".to_string(),
        "After 7 days, taste your Kombucha and decide if it needs more brewing time."
            .to_string(),
        "Decant & flavor your kombucha (optional).".to_string(),
        "Refrigerate to slow further fermentation.".to_string(),
    ]
}
