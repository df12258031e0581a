use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod error;
mod models;
mod content;
mod storage;
mod checkout;
mod visibility;
mod media {
    pub mod registry;
    pub mod state;
    pub mod controller;
    pub mod autoplay;
}
mod components {
    pub mod audio_player;
    pub mod video_player;
    pub mod infinite_strip;
    pub mod book_carousel;
}
mod pages {
    pub mod landing;
    pub mod faq;
}

use media::registry::MediaRegistry;
use pages::landing::Landing;


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Unknown path, rendering Landing page");
            html! { <Landing /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    // One registry per page: at most one player plays at a time.
    let registry = use_memo(|_| MediaRegistry::new(), ());

    html! {
        <ContextProvider<MediaRegistry> context={(*registry).clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<MediaRegistry>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
