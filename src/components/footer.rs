use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::config;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="container footer-inner">
                <img src={config::LOGO_URL} alt="KAHAANI Logo" class="footer-logo" />
                <nav class="footer-nav">
                    <a href="#collection">{"Collection"}</a>
                    <a href="#our-story">{"Our Story"}</a>
                    <a href="#contact-us">{"Contact"}</a>
                </nav>
                <p class="footer-note">{ format!("© {} Kahaani. All Rights Reserved.", year) }</p>
            </div>
            <style>
                {r#"
                    .site-footer {
                        background: #f3f4f6;
                        color: #4b5563;
                    }
                    .footer-inner {
                        padding: 3rem 1rem;
                        text-align: center;
                    }
                    .footer-logo {
                        height: 3rem;
                        display: block;
                        margin: 0 auto 1.5rem;
                    }
                    .footer-nav {
                        display: flex;
                        justify-content: center;
                        gap: 1.5rem;
                        margin-bottom: 1.5rem;
                        font-size: 0.875rem;
                    }
                    .footer-nav a {
                        color: inherit;
                        text-decoration: none;
                    }
                    .footer-nav a:hover {
                        color: var(--brand-dark);
                    }
                    .footer-note {
                        font-size: 0.75rem;
                        margin: 0;
                    }
                "#}
            </style>
        </footer>
    }
}
