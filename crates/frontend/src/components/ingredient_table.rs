use crate::store::ConvertedIngredient;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct IngredientTableProps {
    pub ingredients: Vec<ConvertedIngredient>,
}

/// Amounts are shown the way the backend rounded them; a missing amount
/// renders as an empty cell
pub fn format_amount(amount: Option<f64>) -> String {
    match amount {
        Some(value) if value.fract() == 0.0 => format!("{value:.0}"),
        Some(value) => format!("{value}"),
        None => String::new(),
    }
}

#[function_component(IngredientTable)]
pub fn ingredient_table(props: &IngredientTableProps) -> Html {
    if props.ingredients.is_empty() {
        return html! {
            <p class="text-sm text-gray-500">{"No converted ingredients yet."}</p>
        };
    }

    html! {
        <table class="w-full text-sm">
            <thead>
                <tr class="text-left text-gray-500 border-b">
                    <th class="py-2">{"Ingredient"}</th>
                    <th class="py-2 text-right">{"Amount"}</th>
                    <th class="py-2">{"Unit"}</th>
                    <th class="py-2">{"Note"}</th>
                </tr>
            </thead>
            <tbody>
                {for props.ingredients.iter().map(|item| html! {
                    <tr class="border-b border-gray-100">
                        <td class="py-2">{item.ingredient.clone()}</td>
                        <td class="py-2 text-right">{format_amount(item.amount)}</td>
                        <td class="py-2">{item.unit.clone().unwrap_or_default()}</td>
                        <td class="py-2 text-gray-500">{item.comment.clone().unwrap_or_default()}</td>
                    </tr>
                })}
            </tbody>
        </table>
    }
}
