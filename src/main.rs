use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod motion {
    pub mod preview;
    pub mod reveal;
    pub mod scroll;
    pub mod timers;
    pub mod visibility;
}
mod components {
    pub mod chat_link;
    pub mod contact;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod intro;
    pub mod products;
    pub mod story;
}
mod pages {
    pub mod home;
}

use components::chat_link::ChatLink;
use components::footer::Footer;
use components::header::Header;
use motion::scroll::ScrollLock;
use pages::home::Home;

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
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Unknown path, redirecting to Home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    // One lock, shared with every overlay that needs the page held still.
    let scroll_lock = use_state(ScrollLock::new);

    html! {
        <BrowserRouter>
            <Header scroll_lock={(*scroll_lock).clone()} />
            <Switch<Route> render={switch} />
            <Footer />
            <ChatLink />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
