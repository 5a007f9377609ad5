//! Pure form reducer: `(state, edit) -> state`.
//!
//! The edited field always takes the typed value, valid or not, together with
//! its validation result. Only a valid edit moves the recipe, and only a valid
//! edit that passes the linking rule rewrites the other field:
//!
//! - water `v >= 0` sets starter to `round(v * ratio, 2)`
//! - starter `v > 0` sets water to `round(v / ratio, 2)`

use crate::domain::model::{
    Field, FieldEdit, FieldState, FormState, Ratios, Recipe, DEFAULT_WATER_LITERS,
};
use crate::utils::format::round_to;
use crate::utils::validation::{drives_linked_field, validate_non_negative};

const LINKED_DECIMALS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Up,
    Down,
}

pub fn starter_for_water(water: f64, ratios: &Ratios) -> f64 {
    round_to(water * ratios.starter_liters_per_liter, LINKED_DECIMALS)
}

pub fn water_for_starter(starter: f64, ratios: &Ratios) -> f64 {
    round_to(starter / ratios.starter_liters_per_liter, LINKED_DECIMALS)
}

/// Initial form: the default water amount and its matching starter.
pub fn initial_state(water: f64, ratios: &Ratios) -> FormState {
    let starter = starter_for_water(water, ratios);
    FormState {
        water: FieldState::valid(water),
        starter: FieldState::valid(starter),
        recipe: Recipe { water, starter },
    }
}

pub fn default_state(ratios: &Ratios) -> FormState {
    initial_state(DEFAULT_WATER_LITERS, ratios)
}

pub fn apply(state: &FormState, edit: FieldEdit, ratios: &Ratios) -> FormState {
    let mut next = *state;
    // typed "-0" is zero
    let value = edit.value + 0.0;
    let check = validate_non_negative(value);
    let edited = FieldState {
        value,
        error: check.error(),
    };

    match edit.field {
        Field::Water => {
            next.water = edited;
            if check.is_valid() {
                let starter = starter_for_water(value, ratios);
                next.recipe = Recipe {
                    water: value,
                    starter,
                };
                next.starter = FieldState::valid(starter);
            }
        }
        Field::Starter => {
            next.starter = edited;
            if check.is_valid() {
                next.recipe.starter = value;
                if drives_linked_field(value) {
                    let water = water_for_starter(value, ratios);
                    next.recipe.water = water;
                    next.water = FieldState::valid(water);
                }
            }
        }
    }

    next
}

/// Nudges a field by its step, clamped at its minimum, like a number input's
/// spinner. An invalid raw value steps from the recipe's value instead.
pub fn step(state: &FormState, field: Field, direction: StepDirection, ratios: &Ratios) -> FormState {
    let raw = state.field(field);
    let base = if raw.error.is_none() && raw.value.is_finite() {
        raw.value
    } else {
        match field {
            Field::Water => state.recipe.water,
            Field::Starter => state.recipe.starter,
        }
    };

    let moved = match direction {
        StepDirection::Up => base + field.step(),
        StepDirection::Down => base - field.step(),
    };
    let value = round_to(moved.max(field.min()), LINKED_DECIMALS);

    apply(state, FieldEdit::new(field, value), ratios)
}
