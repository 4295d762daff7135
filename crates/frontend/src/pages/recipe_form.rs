use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(RecipeForm)]
pub fn recipe_form() -> Html {
    html! {
        <section class="max-w-3xl mx-auto p-6 space-y-4">
            <h1 class="text-2xl font-bold text-gray-900">{"Save a recipe"}</h1>
            <p class="text-gray-600">
                {"Give your customized recipe a title, a photo and a few tags, then share it on the timeline."}
            </p>
            <Link<Route> to={Route::RecipeCustomizer} classes="text-sm text-orange-600 hover:underline">
                {"Back to the customizer"}
            </Link<Route>>
        </section>
    }
}
