use yew::prelude::*;

#[function_component(Timeline)]
pub fn timeline() -> Html {
    html! {
        <section class="max-w-3xl mx-auto p-6 space-y-4">
            <h1 class="text-2xl font-bold text-gray-900">{"Timeline"}</h1>
            <p class="text-gray-600">{"Recipes shared by the people you follow appear here."}</p>
        </section>
    }
}
