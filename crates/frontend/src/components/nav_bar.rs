use super::UserProfile;
use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

const NAV_ITEMS: [(Route, &str, &str); 5] = [
    (Route::RecipeCustomizer, "Customize", "fas fa-balance-scale"),
    (Route::RecipeForm, "Add recipe", "fas fa-plus"),
    (Route::Timeline, "Timeline", "fas fa-stream"),
    (Route::BookmarkList, "Bookmarks", "fas fa-bookmark"),
    (Route::UserAlbum, "My album", "fas fa-images"),
];

#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    let current = use_route::<Route>();

    html! {
        <nav class="bg-white/90 border-b border-orange-100">
            <div class="max-w-5xl mx-auto px-4 flex justify-between h-14 items-center">
                <div class="flex items-center gap-1">
                    {for NAV_ITEMS.iter().map(|(route, label, icon)| {
                        let active = current.as_ref() == Some(route);
                        let classes = if active {
                            "px-3 py-2 text-sm font-medium text-orange-600 border-b-2 border-orange-500"
                        } else {
                            "px-3 py-2 text-sm text-gray-600 hover:text-gray-900"
                        };
                        html! {
                            <Link<Route> to={route.clone()} classes={classes}>
                                <i class={format!("{icon} mr-1")}></i>
                                {*label}
                            </Link<Route>>
                        }
                    })}
                </div>
                <UserProfile />
            </div>
        </nav>
    }
}
