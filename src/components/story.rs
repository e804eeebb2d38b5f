use web_sys::Element;
use yew::prelude::*;

use crate::motion::reveal::{chars_of, RevealSchedule, RevealUnit, Stagger};
use crate::motion::visibility::{SectionObserver, DEFAULT_THRESHOLD};

const KICKER_TEXT: &str = "WONDERFUL STORIES — OUDH";
const TITLE_LINE_ONE: &str = "Oudh";
const TITLE_LINE_TWO: &str = "Eclipse";
const LEAD_TEXT: &str = "Once, stories were told in the smoke of resin and the silence of sacred woods. Kings listened, lovers remembered, and wanderers carried those whispers across deserts. Kahaani is born of that same tradition. Not a perfume, but a chapter you wear. Each fragrance is a story etched in oudh, ittar, and time itself—mysterious, unhurried, eternal. We do not sell bottles. We hand you narratives—written not in ink, but in scent. Kahaani is history you can breathe, memory you can touch, desire that lingers..";
const FACT_TEXT: &str = "PURE OUDH OIL CAN COST MORE THAN GOLD BY WEIGHT.";

const KICKER_STAGGER: Stagger = Stagger::new(0, 25);
const TITLE_STAGGER: Stagger = Stagger::new(100, 70);
const LEAD_STAGGER: Stagger = Stagger::new(200, 5);
/// Breath between the lead paragraph and the closing fact line.
const FACT_PAUSE_MS: u32 = 300;
const FACT_STEP_MS: u32 = 30;

#[function_component(Story)]
pub fn story() -> Html {
    let kicker = use_state(|| RevealSchedule::new(chars_of(KICKER_TEXT), KICKER_STAGGER));
    // The second title line queues up behind the first, and the paragraphs
    // chain the same way, so each block finishes before the next begins.
    let title = use_state(|| {
        let first = RevealSchedule::new(chars_of(TITLE_LINE_ONE), TITLE_STAGGER);
        let second_stagger = TITLE_STAGGER.followed_by(first.len(), 0, TITLE_STAGGER.step_ms);
        let second = RevealSchedule::new(chars_of(TITLE_LINE_TWO), second_stagger);
        (first, second)
    });
    let paragraphs = use_state(|| {
        let lead = RevealSchedule::new(chars_of(LEAD_TEXT), LEAD_STAGGER);
        let fact_stagger = LEAD_STAGGER.followed_by(lead.len(), FACT_PAUSE_MS, FACT_STEP_MS);
        let fact = RevealSchedule::new(chars_of(FACT_TEXT), fact_stagger);
        (lead, fact)
    });

    let kicker_ref = use_node_ref();
    let title_ref = use_node_ref();
    let paragraphs_ref = use_node_ref();

    {
        let kicker = kicker.clone();
        let title = title.clone();
        let paragraphs = paragraphs.clone();
        let kicker_ref = kicker_ref.clone();
        let title_ref = title_ref.clone();
        let paragraphs_ref = paragraphs_ref.clone();
        use_effect_with_deps(
            move |_| {
                let observer = SectionObserver::new(DEFAULT_THRESHOLD);
                if let Some(element) = kicker_ref.cast::<Element>() {
                    let kicker = kicker.clone();
                    observer.observe(
                        element,
                        Callback::from(move |_| {
                            let mut next = (*kicker).clone();
                            next.trigger();
                            kicker.set(next);
                        }),
                    );
                }
                if let Some(element) = title_ref.cast::<Element>() {
                    let title = title.clone();
                    observer.observe(
                        element,
                        Callback::from(move |_| {
                            let (mut first, mut second) = (*title).clone();
                            first.trigger();
                            second.trigger();
                            title.set((first, second));
                        }),
                    );
                }
                if let Some(element) = paragraphs_ref.cast::<Element>() {
                    let paragraphs = paragraphs.clone();
                    observer.observe(
                        element,
                        Callback::from(move |_| {
                            let (mut lead, mut fact) = (*paragraphs).clone();
                            lead.trigger();
                            fact.trigger();
                            paragraphs.set((lead, fact));
                        }),
                    );
                }
                move || drop(observer)
            },
            (),
        );
    }

    let (line_one, line_two) = &*title;
    let (lead, fact) = &*paragraphs;
    let underline_delay = line_two.end_ms();

    html! {
        <section class="story-section">
            <div class="story-inner">
                <p class="story-kicker" ref={kicker_ref.clone()}>
                    { for kicker.iter().map(|(unit, delay)| {
                        // Inline-block spans swallow plain spaces.
                        let glyph = if unit.content == " " {
                            "\u{00A0}".to_string()
                        } else {
                            unit.content.clone()
                        };
                        html! {
                            <span
                                class={classes!("kicker-char", unit.revealed.then(|| "revealed"))}
                                style={format!("transition-delay: {}ms;", delay)}
                                aria-hidden="true"
                            >
                                { glyph }
                            </span>
                        }
                    }) }
                    <span class="sr-only">{ KICKER_TEXT }</span>
                </p>
                <h2 id="our-story" class="story-title" ref={title_ref.clone()}>
                    <span class="title-line" aria-label={TITLE_LINE_ONE}>
                        { for line_one.iter().map(|(unit, delay)| title_char(unit, delay)) }
                    </span>
                    <span class="title-second-line">
                        <span class="title-line title-accent" aria-label={TITLE_LINE_TWO}>
                            { for line_two.iter().map(|(unit, delay)| title_char(unit, delay)) }
                        </span>
                        <span
                            class={classes!("title-underline", line_two.is_triggered().then(|| "revealed"))}
                            style={format!("transition-delay: {}ms;", underline_delay)}
                        ></span>
                    </span>
                </h2>
                <div class="story-paragraphs" ref={paragraphs_ref.clone()}>
                    <p class="story-lead">
                        <span class="sr-only">{ LEAD_TEXT }</span>
                        { for lead.iter().map(|(unit, delay)| fade_char(unit, delay, "")) }
                    </p>
                    <p class="story-fact">
                        <span class="sr-only">{ FACT_TEXT }</span>
                        { for fact.iter().map(|(unit, delay)| fade_char(unit, delay, "fact-char")) }
                    </p>
                </div>
            </div>
            <style>
                {r#"
                    .story-section {
                        padding: 5rem 0;
                        background: #fff;
                        overflow: hidden;
                    }
                    .story-inner {
                        max-width: 48rem;
                        margin: 0 auto;
                        text-align: center;
                        padding: 0 1rem;
                    }
                    .story-kicker {
                        font-size: 0.875rem;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        color: #6b7280;
                        height: 1.5rem;
                        margin: 0;
                    }
                    .kicker-char {
                        display: inline-block;
                        opacity: 0;
                        transform: translateY(0.75rem);
                        transition: all 0.3s ease-in-out;
                    }
                    .kicker-char.revealed {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    .story-title {
                        font-family: 'Cormorant Garamond', serif;
                        font-size: clamp(3rem, 7vw, 4.5rem);
                        margin: 1.5rem 0;
                        color: var(--brand-dark);
                        position: relative;
                        display: inline-block;
                        scroll-margin-top: 7rem;
                        line-height: 1.1;
                    }
                    .title-line {
                        display: inline-block;
                    }
                    .title-second-line {
                        display: block;
                    }
                    .title-accent {
                        font-style: italic;
                    }
                    .title-char {
                        display: inline-block;
                        opacity: 0;
                        transform: translateY(1.25rem);
                        transition: all 0.5s ease-out;
                    }
                    .title-char.revealed {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    .title-underline {
                        display: inline-block;
                        width: 5rem;
                        border-bottom: 2px solid var(--brand-dark);
                        vertical-align: middle;
                        margin-left: 0.5rem;
                        transform: scaleX(0);
                        transform-origin: left;
                        transition: transform 0.5s ease-out;
                    }
                    .title-underline.revealed {
                        transform: scaleX(1);
                    }
                    .story-paragraphs {
                        color: #4b5563;
                        line-height: 1.75;
                        max-width: 36rem;
                        margin: 0 auto;
                        font-size: 0.875rem;
                    }
                    .story-lead {
                        margin: 0 0 1rem;
                    }
                    .story-fact {
                        font-weight: 700;
                        font-style: italic;
                        margin: 0;
                    }
                    .fade-char {
                        opacity: 0;
                        transition: opacity 0.1s;
                    }
                    .fade-char.revealed {
                        opacity: 1;
                    }
                    .fact-char {
                        transition-duration: 0.2s;
                    }
                    @media (min-width: 768px) {
                        .story-section {
                            padding: 8rem 0;
                        }
                        .story-paragraphs {
                            font-size: 1rem;
                        }
                    }
                "#}
            </style>
        </section>
    }
}

fn title_char(unit: &RevealUnit, delay: u32) -> Html {
    html! {
        <span
            class={classes!("title-char", unit.revealed.then(|| "revealed"))}
            style={format!("transition-delay: {}ms;", delay)}
            aria-hidden="true"
        >
            { unit.content.clone() }
        </span>
    }
}

fn fade_char(unit: &RevealUnit, delay: u32, extra: &'static str) -> Html {
    html! {
        <span
            class={classes!("fade-char", extra, unit.revealed.then(|| "revealed"))}
            style={format!("transition-delay: {}ms;", delay)}
            aria-hidden="true"
        >
            { unit.content.clone() }
        </span>
    }
}
