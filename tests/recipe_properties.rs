use kombucha_calc::core::ingredients::ingredients;
use kombucha_calc::core::reducer::{apply, default_state};
use kombucha_calc::utils::validation::FieldError;
use kombucha_calc::{Field, FieldEdit, Ratios};
use proptest::prelude::*;
use proptest::test_runner::Config;

const EPS: f64 = 1e-9;

fn on_cent_grid(value: f64) -> bool {
    ((value * 100.0).round() - value * 100.0).abs() < 1e-6
}

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn water_edit_sets_rounded_starter(cents in 0_u32..1_000_000_u32) {
        let ratios = Ratios::default();
        let water = cents as f64 / 100.0;
        let next = apply(&default_state(&ratios), FieldEdit::new(Field::Water, water), &ratios);

        prop_assert!(next.water.error.is_none());
        prop_assert!(on_cent_grid(next.starter.value));
        prop_assert!((next.starter.value - water * 0.1).abs() <= 0.005 + EPS);
        prop_assert_eq!(next.recipe.starter, next.starter.value);
    }

    #[test]
    fn starter_edit_sets_rounded_water(cents in 1_u32..100_000_u32) {
        let ratios = Ratios::default();
        let starter = cents as f64 / 100.0;
        let next = apply(&default_state(&ratios), FieldEdit::new(Field::Starter, starter), &ratios);

        prop_assert!(next.starter.error.is_none());
        prop_assert!((next.water.value - cents as f64 / 10.0).abs() < EPS);
        prop_assert_eq!(next.recipe.water, next.water.value);
    }

    #[test]
    fn water_starter_round_trip(tenths in 1_u32..100_000_u32) {
        let ratios = Ratios::default();
        let water = tenths as f64 / 10.0;
        let state = apply(&default_state(&ratios), FieldEdit::new(Field::Water, water), &ratios);
        let starter = state.starter.value;
        let back = apply(&state, FieldEdit::new(Field::Starter, starter), &ratios);

        prop_assert!((back.water.value - water).abs() <= 0.01 + EPS);
    }

    #[test]
    fn negative_input_changes_nothing_derived(
        value in -1_000_000.0_f64..-1e-9_f64,
        edit_water in any::<bool>()
    ) {
        let ratios = Ratios::default();
        let state = default_state(&ratios);
        let field = if edit_water { Field::Water } else { Field::Starter };
        let next = apply(&state, FieldEdit::new(field, value), &ratios);

        prop_assert_eq!(next.field(field).error, Some(FieldError::Negative));
        prop_assert_eq!(next.recipe, state.recipe);
        prop_assert_eq!(
            ingredients(&next.recipe, &ratios),
            ingredients(&state.recipe, &ratios)
        );
    }

    #[test]
    fn ingredients_scale_linearly(cents in 0_u32..1_000_000_u32) {
        let ratios = Ratios::default();
        let water = cents as f64 / 100.0;
        let next = apply(&default_state(&ratios), FieldEdit::new(Field::Water, water), &ratios);
        let result = ingredients(&next.recipe, &ratios);

        prop_assert!((result.tea_grams - water * 7.0).abs() < EPS * (1.0 + water));
        prop_assert!((result.sugar_grams - water * 70.0).abs() < EPS * (1.0 + water));
        prop_assert!((result.starter_milliliters - next.recipe.starter * 1000.0).abs() < EPS);
    }
}
