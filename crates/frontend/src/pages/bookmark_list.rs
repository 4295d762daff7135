use yew::prelude::*;

#[function_component(BookmarkList)]
pub fn bookmark_list() -> Html {
    html! {
        <section class="max-w-3xl mx-auto p-6 space-y-4">
            <h1 class="text-2xl font-bold text-gray-900">
                <i class="fas fa-bookmark mr-2 text-orange-500"></i>
                {"Bookmarks"}
            </h1>
            <p class="text-gray-600">{"Recipes you bookmarked are collected here."}</p>
        </section>
    }
}
