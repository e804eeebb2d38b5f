use yew::prelude::*;

use crate::config;
use crate::motion::timers::TimerRegistry;

/// The chat bubble slides in after the page has had a moment to settle.
const APPEAR_DELAY_MS: u32 = 1500;

#[function_component(ChatLink)]
pub fn chat_link() -> Html {
    let visible = use_state(|| false);
    let timers = use_mut_ref(TimerRegistry::new);

    {
        let visible = visible.clone();
        let timers = timers.clone();
        use_effect_with_deps(
            move |_| {
                let handle = timers
                    .borrow()
                    .after(APPEAR_DELAY_MS, move || visible.set(true));
                move || timers.borrow().cancel(handle)
            },
            (),
        );
    }

    html! {
        <>
            <a
                class={classes!("chat-link", (*visible).then(|| "visible"))}
                href={config::whatsapp_url()}
                target="_blank"
                rel="noopener noreferrer"
                aria-label="Chat with us on WhatsApp"
            >
                <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor">
                    <path d="M.057 24l1.687-6.163c-1.041-1.804-1.588-3.849-1.587-5.946.003-6.556 5.338-11.891 11.893-11.891 3.181.001 6.167 1.24 8.413 3.488 2.245 2.248 3.481 5.236 3.48 8.414-.003 6.557-5.338 11.892-11.893 11.892-1.99-.001-3.951-.5-5.688-1.448l-6.305 1.654zm6.597-3.807c1.676.995 3.276 1.591 5.392 1.592 5.448 0 9.886-4.434 9.889-9.885.002-5.462-4.415-9.89-9.881-9.892-5.452 0-9.887 4.434-9.889 9.884-.001 2.225.651 3.891 1.746 5.634l-.999 3.648 3.742-.981zm11.387-5.464c-.074-.124-.272-.198-.57-.347-.297-.149-1.758-.868-2.031-.967-.272-.099-.47-.149-.669.149-.198.297-.768.967-.941 1.165-.173.198-.347.223-.644.074-.297-.149-1.255-.462-2.39-1.475-.883-.788-1.48-1.761-1.653-2.059-.173-.297-.018-.458.13-.606.134-.133.297-.347.446-.521.151-.172.2-.296.3-.495.099-.198.05-.371-.025-.521-.075-.148-.669-1.611-.916-2.206-.242-.579-.487-.5-.669-.51-.173-.008-.371-.01-.57-.01s-.521.074-.792.372c-.272.297-1.04 1.016-1.04 2.479 0 1.462 1.065 2.875 1.213 3.074.149.198 2.096 3.2 5.077 4.487.709.306 1.262.489 1.694.626.712.227 1.36.195 1.871.118.571-.085 1.758-.719 2.006-1.413.248-.695.248-1.29.173-1.414z" />
                </svg>
            </a>
            <style>
                {r#"
                    .chat-link {
                        position: fixed;
                        bottom: 1.5rem;
                        right: 1.5rem;
                        z-index: 50;
                        background: #22c55e;
                        color: #fff;
                        border-radius: 9999px;
                        padding: 0.75rem;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        opacity: 0;
                        transform: translateY(1rem);
                        transition: all 0.3s ease-in-out;
                    }
                    .chat-link.visible {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    .chat-link:hover {
                        background: #16a34a;
                        transform: scale(1.1);
                    }
                    .chat-link svg {
                        width: 2rem;
                        height: 2rem;
                    }
                "#}
            </style>
        </>
    }
}
