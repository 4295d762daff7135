use crate::avatar::use_avatar_url;
use yew::prelude::*;

#[function_component(UserProfile)]
pub fn user_profile() -> Html {
    let avatar_url = use_avatar_url();

    match avatar_url.as_deref().filter(|url| !url.is_empty()) {
        Some(url) => html! {
            <img
                src={url.to_string()}
                alt="avatar"
                class="w-9 h-9 rounded-full object-cover border border-orange-200"
            />
        },
        None => html! {
            <div class="w-9 h-9 rounded-full bg-orange-100 flex items-center justify-center text-orange-500">
                <i class="fas fa-user"></i>
            </div>
        },
    }
}
