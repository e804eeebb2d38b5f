use yew::prelude::*;

use crate::motion::reveal::{words_of, RevealSchedule, Stagger};
use crate::motion::timers::TimerRegistry;

const HERO_HEADLINE: &str = "The essence of perfume is Oudh";
const HERO_IMAGE_URL: &str =
    "https://res.cloudinary.com/dzgfkhpl1/image/upload/v1757490028/kahnni_w0mmai.jpg";

/// First word starts sliding 100ms after the trigger, each next one 75ms later.
const WORD_STAGGER: Stagger = Stagger::new(100, 75);
/// Small mount delay so the masked starting position paints before the
/// transition begins.
const REVEAL_KICKOFF_MS: u32 = 100;

#[function_component(Hero)]
pub fn hero() -> Html {
    let schedule = use_state(|| RevealSchedule::new(words_of(HERO_HEADLINE), WORD_STAGGER));
    let timers = use_mut_ref(TimerRegistry::new);

    {
        let schedule = schedule.clone();
        let timers = timers.clone();
        use_effect_with_deps(
            move |_| {
                let handle = timers.borrow().after(REVEAL_KICKOFF_MS, {
                    let schedule = schedule.clone();
                    move || {
                        let mut revealed = (*schedule).clone();
                        revealed.trigger();
                        schedule.set(revealed);
                    }
                });
                move || timers.borrow().cancel(handle)
            },
            (),
        );
    }

    html! {
        <section class="hero-section">
            <div class="hero-backdrop">
                <img
                    src={HERO_IMAGE_URL}
                    alt="A smiling woman applying Kahaani fragrance"
                />
                <div class="hero-tint"></div>
            </div>
            <div class="hero-copy">
                <h1 class="hero-heading">
                    { for schedule.iter().map(|(unit, delay)| html! {
                        <span class="word-mask">
                            <span
                                class={classes!("word-slide", unit.revealed.then(|| "revealed"))}
                                style={format!("transition-delay: {}ms;", delay)}
                            >
                                { unit.content.clone() }
                            </span>
                        </span>
                    }) }
                </h1>
                <a href="#collection" class="hero-cta link-underline">
                    {"CALL US TO KNOW MORE"}
                </a>
            </div>
            <div class="hero-dots">
                <span class="dot"></span>
                <span class="dot-bar"></span>
                <span class="dot"></span>
            </div>
            <style>
                {r#"
                    .hero-section {
                        position: relative;
                        height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: var(--brand-blue);
                        overflow: hidden;
                    }
                    .hero-backdrop {
                        position: absolute;
                        inset: 0;
                        z-index: 0;
                    }
                    .hero-backdrop img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        object-position: center;
                    }
                    .hero-tint {
                        position: absolute;
                        inset: 0;
                        background: var(--brand-blue);
                        opacity: 0.2;
                    }
                    .hero-copy {
                        position: relative;
                        z-index: 10;
                        text-align: center;
                        padding: 1.5rem;
                        max-width: 42rem;
                        color: var(--brand-dark);
                        text-shadow: 0 1px 3px rgba(243, 237, 227, 0.5);
                    }
                    .hero-heading {
                        font-family: 'Cormorant Garamond', serif;
                        font-size: clamp(3rem, 8vw, 6rem);
                        font-weight: 300;
                        letter-spacing: -0.04em;
                        line-height: 1;
                        margin: 0;
                    }
                    .word-mask {
                        display: inline-block;
                        overflow: hidden;
                        vertical-align: bottom;
                    }
                    .word-mask:not(:last-child) {
                        margin-right: 0.75rem;
                    }
                    .word-slide {
                        display: inline-block;
                        transform: translateY(100%);
                        transition: transform 0.7s ease-out;
                    }
                    .word-slide.revealed {
                        transform: translateY(0);
                    }
                    .hero-cta {
                        margin-top: 2rem;
                        display: inline-block;
                        font-size: 0.875rem;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                        font-weight: 600;
                        color: var(--brand-dark);
                        text-decoration: none;
                    }
                    .hero-dots {
                        position: absolute;
                        bottom: 2.5rem;
                        left: 50%;
                        transform: translateX(-50%);
                        z-index: 10;
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                    }
                    .dot {
                        width: 0.625rem;
                        height: 0.625rem;
                        background: var(--brand-dark);
                        border-radius: 9999px;
                        opacity: 0.5;
                    }
                    .dot-bar {
                        width: 2rem;
                        height: 0.25rem;
                        background: var(--brand-dark);
                        border-radius: 9999px;
                    }
                    @media (min-width: 640px) {
                        .hero-section {
                            justify-content: flex-start;
                        }
                        .hero-backdrop img {
                            object-position: right top;
                        }
                        .hero-copy {
                            text-align: left;
                            padding: 2rem;
                        }
                        .hero-dots {
                            left: 2rem;
                            transform: none;
                        }
                    }
                    @media (min-width: 768px) {
                        .hero-copy {
                            padding: 4rem;
                        }
                        .word-mask:not(:last-child) {
                            margin-right: 1rem;
                        }
                        .hero-dots {
                            left: 4rem;
                        }
                    }
                    @media (min-width: 1024px) {
                        .hero-copy {
                            padding: 6rem;
                        }
                        .hero-dots {
                            left: 6rem;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
