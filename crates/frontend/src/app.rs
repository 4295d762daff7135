use crate::avatar::{AvatarProvider, AvatarUrl};
use crate::components::NavBar;
use crate::routes::{Route, switch};
use crate::store::QuantifyProvider;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq, Default)]
pub struct AppProps {
    pub avatar_url: AvatarUrl,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <QuantifyProvider>
            <AvatarProvider avatar_url={props.avatar_url.clone()}>
                <BrowserRouter>
                    <div class="min-h-screen bg-orange-50/40">
                        <NavBar />
                        <main>
                            <Switch<Route> render={switch} />
                        </main>
                    </div>
                </BrowserRouter>
            </AvatarProvider>
        </QuantifyProvider>
    }
}
