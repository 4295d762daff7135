//! Quantify store: the converted ingredient list shared between pages

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::prelude::*;

/// One line of a converted recipe, as returned by the backend's
/// `convert-recipe` endpoint
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConvertedIngredient {
    pub ingredient: String,
    #[serde(default)]
    pub comment: Option<String>,
    /// Absent for non-measured units such as "to taste"
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct QuantifyState {
    pub converted_ingredients: Vec<ConvertedIngredient>,
}

pub enum QuantifyAction {
    SetConvertedIngredients(Vec<ConvertedIngredient>),
    ClearConvertedIngredients,
}

impl Reducible for QuantifyState {
    type Action = QuantifyAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let converted_ingredients = match action {
            QuantifyAction::SetConvertedIngredients(ingredients) => ingredients,
            QuantifyAction::ClearConvertedIngredients => Vec::new(),
        };
        tracing::debug!(count = converted_ingredients.len(), "quantify store updated");

        Rc::new(Self {
            converted_ingredients,
        })
    }
}

pub type QuantifyContext = UseReducerHandle<QuantifyState>;

/// Mutators named after the store's public operations
pub trait QuantifyStore {
    fn set_converted_ingredients(&self, ingredients: Vec<ConvertedIngredient>);
    fn clear_converted_ingredients(&self);
}

impl QuantifyStore for QuantifyContext {
    fn set_converted_ingredients(&self, ingredients: Vec<ConvertedIngredient>) {
        self.dispatch(QuantifyAction::SetConvertedIngredients(ingredients));
    }

    fn clear_converted_ingredients(&self) {
        self.dispatch(QuantifyAction::ClearConvertedIngredients);
    }
}

#[derive(Properties, PartialEq)]
pub struct QuantifyProviderProps {
    pub children: Children,
}

#[function_component(QuantifyProvider)]
pub fn quantify_provider(props: &QuantifyProviderProps) -> Html {
    let state = use_reducer(QuantifyState::default);

    html! {
        <ContextProvider<QuantifyContext> context={state}>
            {props.children.clone()}
        </ContextProvider<QuantifyContext>>
    }
}

/// Hook to use the quantify store
#[hook]
pub fn use_quantify() -> QuantifyContext {
    use_context::<QuantifyContext>()
        .expect("QuantifyContext not found. Make sure to wrap your component with QuantifyProvider")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredient(name: &str, amount: Option<f64>, unit: Option<&str>) -> ConvertedIngredient {
        ConvertedIngredient {
            ingredient: name.to_string(),
            comment: None,
            amount,
            unit: unit.map(str::to_string),
        }
    }

    fn apply(state: QuantifyState, action: QuantifyAction) -> QuantifyState {
        Rc::new(state).reduce(action).as_ref().clone()
    }

    #[test]
    fn starts_empty() {
        assert!(QuantifyState::default().converted_ingredients.is_empty());
    }

    #[test]
    fn set_then_clear_leaves_list_empty() {
        let a = ingredient("flour", Some(120.0), Some("g"));
        let b = ingredient("salt", None, Some("pinch"));

        let state = apply(
            QuantifyState::default(),
            QuantifyAction::SetConvertedIngredients(vec![a, b]),
        );
        assert_eq!(state.converted_ingredients.len(), 2);

        let state = apply(state, QuantifyAction::ClearConvertedIngredients);
        assert!(state.converted_ingredients.is_empty());
    }

    #[test]
    fn second_set_replaces_first_without_merging() {
        let first = vec![
            ingredient("flour", Some(120.0), Some("g")),
            ingredient("sugar", Some(50.0), Some("g")),
        ];
        let second = vec![ingredient("milk", Some(1.0), Some("cup"))];

        let state = apply(
            QuantifyState::default(),
            QuantifyAction::SetConvertedIngredients(first),
        );
        let state = apply(
            state,
            QuantifyAction::SetConvertedIngredients(second.clone()),
        );

        assert_eq!(state.converted_ingredients, second);
    }

    #[test]
    fn clear_on_empty_store_is_a_no_op() {
        let state = apply(
            QuantifyState::default(),
            QuantifyAction::ClearConvertedIngredients,
        );
        assert_eq!(state, QuantifyState::default());
    }

    #[test]
    fn deserializes_backend_records_with_missing_fields() {
        let json = r#"[
            {"ingredient": "egg", "comment": null, "amount": 2, "unit": "個"},
            {"ingredient": "salt", "unit": "to taste"}
        ]"#;

        let parsed: Vec<ConvertedIngredient> = serde_json::from_str(json).unwrap();

        assert_eq!(parsed[0].amount, Some(2.0));
        assert_eq!(parsed[0].unit.as_deref(), Some("個"));
        assert_eq!(parsed[1].amount, None);
        assert_eq!(parsed[1].comment, None);
    }
}
