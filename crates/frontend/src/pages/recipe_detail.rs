use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RecipeDetailProps {
    /// Raw `:id` path segment
    pub id: String,
}

#[function_component(RecipeDetail)]
pub fn recipe_detail(props: &RecipeDetailProps) -> Html {
    html! {
        <section class="max-w-3xl mx-auto p-6 space-y-4">
            <h1 class="text-2xl font-bold text-gray-900">{format!("Recipe #{}", props.id)}</h1>
            <p class="text-gray-600">{"Ingredients, steps and comments for this recipe."}</p>
        </section>
    }
}
