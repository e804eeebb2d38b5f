use yew::prelude::*;

use crate::components::contact::Contact;
use crate::components::hero::Hero;
use crate::components::intro::Intro;
use crate::components::products::Products;
use crate::components::story::Story;

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <main>
            <Hero />
            <Intro />
            <Story />
            <Products />
            <Contact />
        </main>
    }
}
