use crate::components::UserProfile;
use yew::prelude::*;

#[function_component(UserAlbum)]
pub fn user_album() -> Html {
    html! {
        <section class="max-w-3xl mx-auto p-6 space-y-4">
            <div class="flex items-center gap-3">
                <UserProfile />
                <h1 class="text-2xl font-bold text-gray-900">{"My album"}</h1>
            </div>
            <p class="text-gray-600">{"Every recipe you posted, newest first."}</p>
        </section>
    }
}
