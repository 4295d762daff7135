//! Route table
//!
//! No catch-all is registered: an unknown path recognizes as no route and
//! the router renders nothing for it.

use crate::pages::{BookmarkList, RecipeDetail, RecipeForm, RecipeInput, Timeline, UserAlbum};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, Routable)]
pub enum Route {
    #[at("/")]
    RecipeCustomizer,
    #[at("/add-recipe")]
    RecipeForm,
    #[at("/timeline")]
    Timeline,
    #[at("/bookmarks")]
    BookmarkList,
    #[at("/recipe/:id")]
    RecipeDetail { id: String },
    #[at("/my-album")]
    UserAlbum,
}

impl Route {
    /// Route name as shown in the navigation and in logs
    pub const fn name(&self) -> &'static str {
        match self {
            Route::RecipeCustomizer => "RecipeCustomizer",
            Route::RecipeForm => "RecipeForm",
            Route::Timeline => "Timeline",
            Route::BookmarkList => "BookmarkList",
            Route::RecipeDetail { .. } => "RecipeDetail",
            Route::UserAlbum => "UserAlbum",
        }
    }
}

pub fn switch(route: Route) -> Html {
    tracing::debug!(route = route.name(), "resolving route");
    match route {
        Route::RecipeCustomizer => html! { <RecipeInput /> },
        Route::RecipeForm => html! { <RecipeForm /> },
        Route::Timeline => html! { <Timeline /> },
        Route::BookmarkList => html! { <BookmarkList /> },
        Route::RecipeDetail { id } => html! { <RecipeDetail {id} /> },
        Route::UserAlbum => html! { <UserAlbum /> },
    }
}
