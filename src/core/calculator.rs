use crate::core::ingredients::ingredients;
use crate::core::instructions::instructions;
use crate::core::reducer::{self, StepDirection};
use crate::domain::model::{Field, FieldEdit, FormState, Ratios};
use crate::domain::ports::ConfigProvider;
use crate::domain::view::{FieldView, Ingredients, RecipeView};

/// Holds the form state and the ratios it was created with; every mutation
/// goes through the reducer.
#[derive(Debug, Clone)]
pub struct Calculator {
    ratios: Ratios,
    initial_water: f64,
    state: FormState,
}

impl Calculator {
    pub fn new(ratios: Ratios) -> Self {
        Self {
            ratios,
            initial_water: crate::domain::model::DEFAULT_WATER_LITERS,
            state: reducer::default_state(&ratios),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        let ratios = config.ratios();
        let initial_water = config.default_water();
        Self {
            ratios,
            initial_water,
            state: reducer::initial_state(initial_water, &ratios),
        }
    }

    pub fn ratios(&self) -> &Ratios {
        &self.ratios
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn edit(&mut self, edit: FieldEdit) -> &FormState {
        let next = reducer::apply(&self.state, edit, &self.ratios);
        self.log_transition(edit.field, &next);
        self.state = next;
        &self.state
    }

    pub fn step(&mut self, field: Field, direction: StepDirection) -> &FormState {
        let next = reducer::step(&self.state, field, direction, &self.ratios);
        self.log_transition(field, &next);
        self.state = next;
        &self.state
    }

    pub fn reset(&mut self) -> &FormState {
        tracing::debug!("Resetting form to {} liters of water", self.initial_water);
        self.state = reducer::initial_state(self.initial_water, &self.ratios);
        &self.state
    }

    pub fn ingredients(&self) -> Ingredients {
        ingredients(&self.state.recipe, &self.ratios)
    }

    pub fn view(&self) -> RecipeView {
        RecipeView {
            fields: [Field::Water, Field::Starter]
                .iter()
                .map(|field| {
                    let state = self.state.field(*field);
                    FieldView {
                        name: field.name().to_string(),
                        label: field.label().to_string(),
                        value: state.value,
                        min: field.min(),
                        step: field.step(),
                        error: state.error.map(|e| e.message().to_string()),
                    }
                })
                .collect(),
            ingredients: self.ingredients(),
            instructions: instructions(&self.state.recipe),
        }
    }

    fn log_transition(&self, field: Field, next: &FormState) {
        match next.field(field).error {
            Some(error) => tracing::debug!(
                "⚠️ {} = {} rejected: {}",
                field,
                next.field(field).value,
                error
            ),
            None => tracing::debug!(
                "{} edited, recipe is now {:.2} L water / {:.2} L starter",
                field,
                next.recipe.water,
                next.recipe.starter
            ),
        }
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(Ratios::default())
    }
}
