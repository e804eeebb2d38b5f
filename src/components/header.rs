use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::motion::scroll::{set_body_overflow, ScrollLock};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct MobileMenuProps {
    pub is_open: bool,
    pub on_close: Callback<MouseEvent>,
    pub scroll_lock: ScrollLock,
}

#[function_component(MobileMenu)]
pub fn mobile_menu(props: &MobileMenuProps) -> Html {
    {
        let scroll_lock = props.scroll_lock.clone();
        use_effect_with_deps(
            move |open: &bool| {
                let guard = if *open {
                    set_body_overflow("hidden");
                    Some(scroll_lock.engage())
                } else {
                    set_body_overflow("auto");
                    None
                };
                // Restore unconditionally so an unmount mid-open cannot
                // leave the page unscrollable.
                move || {
                    set_body_overflow("auto");
                    drop(guard);
                }
            },
            props.is_open,
        );
    }

    if !props.is_open {
        return html! {};
    }

    html! {
        <div class="mobile-menu-overlay" role="dialog" aria-modal="true">
            <button class="menu-close-button" onclick={props.on_close.clone()} aria-label="Close menu">
                <svg xmlns="http://www.w3.org/2000/svg" class="icon-close" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12" />
                </svg>
            </button>
            <nav class="menu-links">
                // Plain anchors: the browser handles the in-page jump, the
                // click only folds the overlay away.
                <a href="#our-story" onclick={props.on_close.clone()} class="menu-anchor">{"Our Story"}</a>
                <a href="#contact-us" onclick={props.on_close.clone()} class="menu-anchor">{"Contact Us"}</a>
            </nav>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub scroll_lock: ScrollLock,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let menu_open = use_state(|| false);

    let open_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(true);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    html! {
        <>
            <header class="site-header">
                <div class="container header-inner">
                    <Link<Route> to={Route::Home} classes="header-logo">
                        <img src={config::LOGO_URL} alt="KAHAANI Logo" />
                    </Link<Route>>

                    <nav class="desktop-nav">
                        <a href="#our-story" class="nav-anchor link-underline">{"Our Story"}</a>
                        <a href="#contact-us" class="nav-anchor link-underline">{"Contact Us"}</a>
                    </nav>

                    <div class="burger-wrap">
                        <button class="burger-button" onclick={open_menu} aria-label="Open menu">
                            <svg xmlns="http://www.w3.org/2000/svg" class="icon-burger" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16" />
                            </svg>
                        </button>
                    </div>
                </div>
            </header>
            <MobileMenu is_open={*menu_open} on_close={close_menu} scroll_lock={props.scroll_lock.clone()} />
            <style>
                {r#"
                    .site-header {
                        position: absolute;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 20;
                        padding: 1.5rem 1rem;
                        background: transparent;
                    }
                    .header-inner {
                        position: relative;
                        display: flex;
                        justify-content: center;
                        align-items: center;
                    }
                    .header-logo img {
                        height: 3.5rem;
                    }
                    .desktop-nav {
                        display: none;
                        position: absolute;
                        right: 0;
                        top: 50%;
                        transform: translateY(-50%);
                        align-items: center;
                        gap: 2rem;
                    }
                    .nav-anchor {
                        font-size: 0.875rem;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        font-weight: 600;
                        color: var(--brand-dark);
                        text-decoration: none;
                    }
                    .burger-wrap {
                        position: absolute;
                        right: 0;
                        top: 50%;
                        transform: translateY(-50%);
                    }
                    .burger-button {
                        background: none;
                        border: none;
                        padding: 0;
                        cursor: pointer;
                        color: var(--brand-dark);
                    }
                    .icon-burger {
                        width: 1.75rem;
                        height: 1.75rem;
                    }
                    .icon-close {
                        width: 2rem;
                        height: 2rem;
                    }
                    .mobile-menu-overlay {
                        position: fixed;
                        inset: 0;
                        background: rgba(46, 42, 38, 0.95);
                        z-index: 50;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        animation: menuFadeIn 0.3s ease-out;
                    }
                    @keyframes menuFadeIn {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }
                    .menu-close-button {
                        position: absolute;
                        top: 1.5rem;
                        right: 1rem;
                        background: none;
                        border: none;
                        padding: 0;
                        cursor: pointer;
                        color: #fff;
                    }
                    .menu-links {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        row-gap: 2.5rem;
                    }
                    .menu-anchor {
                        font-size: 1.5rem;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        font-weight: 600;
                        color: #fff;
                        text-decoration: none;
                    }
                    @media (min-width: 768px) {
                        .header-logo img {
                            height: 4rem;
                        }
                        .desktop-nav {
                            display: flex;
                        }
                        .burger-wrap {
                            display: none;
                        }
                        .menu-close-button {
                            right: 1.5rem;
                        }
                    }
                "#}
            </style>
        </>
    }
}
