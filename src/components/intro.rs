use std::cell::RefCell;
use std::rc::Rc;

use web_sys::Element;
use yew::prelude::*;

use crate::motion::preview::{
    PreviewFrame, PreviewImage, PreviewPhase, PreviewState, Rect, Viewport, TRANSITION_MS,
};
use crate::motion::scroll::ScrollListener;
use crate::motion::timers::{FrameTask, TimerRegistry};

const DROP_THUMB: PreviewImage = PreviewImage {
    src: "https://res.cloudinary.com/dzgfkhpl1/image/upload/v1757498681/WhatsApp_Image_2025-09-10_at_3.10.59_PM_vtaa7v.jpg",
    alt: "Abstract drop",
};
const ARCHWAY_THUMB: PreviewImage = PreviewImage {
    src: "https://res.cloudinary.com/dzgfkhpl1/image/upload/v1757498683/Gemini_Generated_Image_4kdgi54kdgi54kdg_ozfuw8.png",
    alt: "A hidden archway",
};
const CRYSTAL_THUMB: PreviewImage = PreviewImage {
    src: "https://res.cloudinary.com/dzgfkhpl1/image/upload/v1757498681/WhatsApp_Image_2025-09-10_at_3.16.51_PM_ujyeik.jpg",
    alt: "Perfume bottle detail",
};

#[function_component(Intro)]
pub fn intro() -> Html {
    // The RefCell holds the authoritative session so event handlers always
    // act on current state; the use_state copy only drives rendering.
    let model = use_mut_ref(PreviewState::default);
    let view = use_state_eq(PreviewState::default);
    let timers = use_mut_ref(TimerRegistry::new);
    let opening_frame = use_mut_ref(|| None::<FrameTask>);

    let drop_ref = use_node_ref();
    let archway_ref = use_node_ref();
    let crystal_ref = use_node_ref();

    // Any page scroll dismisses an open preview.
    {
        let model = model.clone();
        let view = view.clone();
        let timers = timers.clone();
        let active = view.is_active();
        use_effect_with_deps(
            move |active: &bool| {
                let listener = if *active {
                    ScrollListener::attach(move || close_preview(&model, &view, &timers))
                } else {
                    None
                };
                move || drop(listener)
            },
            active,
        );
    }

    let request_close = {
        let model = model.clone();
        let view = view.clone();
        let timers = timers.clone();
        Callback::from(move |_: MouseEvent| close_preview(&model, &view, &timers))
    };

    let hover = |image: PreviewImage, thumb: NodeRef| -> Callback<MouseEvent> {
        let model = model.clone();
        let view = view.clone();
        let opening_frame = opening_frame.clone();
        Callback::from(move |_: MouseEvent| {
            // Delegated events report the mount root as their current
            // target, so the span is measured through its ref instead.
            let Some(source) = measured_rect(&thumb) else {
                return;
            };
            if !model.borrow_mut().open(image, source, current_viewport()) {
                return;
            }
            push_view(&model, &view);
            // Paint one frame pinned to the thumbnail, then flip visible so
            // the transition has both endpoints.
            let task = FrameTask::request({
                let model = model.clone();
                let view = view.clone();
                move || {
                    model.borrow_mut().reveal();
                    push_view(&model, &view);
                }
            });
            *opening_frame.borrow_mut() = task;
        })
    };

    let halt_bubbling = Callback::from(|event: MouseEvent| event.stop_propagation());

    let overlay = match view.session() {
        Some(session) => {
            let session = *session;
            let visible = session.phase == PreviewPhase::Visible;
            let backdrop_style = format!("opacity: {};", if visible { 1 } else { 0 });
            let box_style = match session.frame() {
                PreviewFrame::AtSource(rect) => format!(
                    "top: {}px; left: {}px; width: {}px; height: {}px; transform: none;",
                    rect.y, rect.x, rect.width, rect.height
                ),
                PreviewFrame::Centered(size) => format!(
                    "top: 50%; left: 50%; width: {}px; height: {}px; transform: translate(-50%, -50%);",
                    size.width, size.height
                ),
            };
            let close_style = if visible {
                "opacity: 1; transition-delay: 300ms;"
            } else {
                "opacity: 0; transition-delay: 0ms;"
            };
            html! {
                <div
                    class="preview-layer"
                    onclick={request_close.clone()}
                    role="dialog"
                    aria-modal="true"
                    aria-label={format!("Image preview: {}", session.image.alt)}
                >
                    <div class="preview-backdrop" style={backdrop_style}></div>
                    <div
                        class="preview-box"
                        style={box_style}
                        onmouseleave={request_close.clone()}
                        onclick={halt_bubbling}
                    >
                        <img src={session.image.src} alt={session.image.alt} />
                        <button
                            class="preview-close"
                            style={close_style}
                            onclick={request_close.clone()}
                            aria-label="Close image preview"
                        >
                            <svg xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12" />
                            </svg>
                        </button>
                    </div>
                </div>
            }
        }
        None => html! {},
    };

    html! {
        <section class="intro-section">
            <div class="container">
                <h2 class="intro-headline">
                    <span>{"EACH"}</span>
                    <span>{"DROP"}</span>
                    <span class="headline-thumb" ref={drop_ref.clone()} onmouseenter={hover(DROP_THUMB, drop_ref.clone())}>
                        <img src={DROP_THUMB.src} alt={DROP_THUMB.alt} />
                    </span>
                    <span>{"CARRIES"}</span>
                    <span class="accent">{"A"}</span>
                    <span>{"SECRET"}</span>
                    <span class="accent">{"AN"}</span>
                    <span>{"ABSTRACT"}</span>
                    <span class="headline-thumb" ref={archway_ref.clone()} onmouseenter={hover(ARCHWAY_THUMB, archway_ref.clone())}>
                        <img src={ARCHWAY_THUMB.src} alt={ARCHWAY_THUMB.alt} />
                    </span>
                    <span>{"DOORWAY"}</span>
                    <span class="accent">{"TO"}</span>
                    <span>{"HIDDEN"}</span>
                    <span>{"REALM"}</span>
                    <span>{"ENCLOSED"}</span>
                    <span class="accent">{"IN"}</span>
                    <span class="headline-thumb" ref={crystal_ref.clone()} onmouseenter={hover(CRYSTAL_THUMB, crystal_ref.clone())}>
                        <img src={CRYSTAL_THUMB.src} alt={CRYSTAL_THUMB.alt} />
                    </span>
                    <span>{"CRYSTAL"}</span>
                </h2>
            </div>
            { overlay }
            <style>
                {r#"
                    .intro-section {
                        padding: 5rem 0;
                        background: #fff;
                        text-align: center;
                    }
                    .intro-headline {
                        font-family: 'Cormorant Garamond', serif;
                        font-size: clamp(2.25rem, 5vw, 4.5rem);
                        font-weight: 400;
                        letter-spacing: -0.02em;
                        line-height: 1.25;
                        color: var(--brand-dark);
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        align-items: center;
                        column-gap: 1rem;
                        row-gap: 0.5rem;
                        margin: 0;
                        padding: 0 1rem;
                    }
                    .intro-headline .accent {
                        font-style: italic;
                        font-weight: 300;
                    }
                    .headline-thumb {
                        position: relative;
                        display: inline-block;
                        width: 5rem;
                        height: 3rem;
                        border-radius: 9999px;
                        overflow: hidden;
                        vertical-align: middle;
                        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.15);
                        transition: transform 0.3s ease-in-out;
                        cursor: pointer;
                    }
                    .headline-thumb:hover {
                        transform: scale(1.1);
                    }
                    .headline-thumb img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .preview-layer {
                        position: fixed;
                        inset: 0;
                        z-index: 40;
                    }
                    .preview-backdrop {
                        position: absolute;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.7);
                        transition: opacity 0.5s ease-in-out;
                    }
                    /* The 0.5s here is what the close settle timer waits out. */
                    .preview-box {
                        position: fixed;
                        border-radius: 9999px;
                        overflow: hidden;
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
                        z-index: 50;
                        transition: all 0.5s ease-in-out;
                    }
                    .preview-box img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .preview-close {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        padding: 0.5rem;
                        background: rgba(0, 0, 0, 0.5);
                        color: #fff;
                        border: none;
                        border-radius: 9999px;
                        cursor: pointer;
                        transition: all 0.3s ease-in-out;
                    }
                    .preview-close:hover {
                        background: rgba(0, 0, 0, 0.7);
                    }
                    .preview-close svg {
                        width: 2rem;
                        height: 2rem;
                        display: block;
                    }
                    @media (min-width: 768px) {
                        .intro-section {
                            padding: 8rem 0;
                        }
                        .intro-headline {
                            column-gap: 2rem;
                        }
                        .headline-thumb {
                            width: 7rem;
                            height: 4rem;
                        }
                    }
                "#}
            </style>
        </section>
    }
}

/// Measures a rendered thumbnail's rectangle in viewport coordinates.
fn measured_rect(thumb: &NodeRef) -> Option<Rect> {
    let element = thumb.cast::<Element>()?;
    let bounds = element.get_bounding_client_rect();
    Some(Rect::new(
        bounds.left(),
        bounds.top(),
        bounds.width(),
        bounds.height(),
    ))
}

fn current_viewport() -> Viewport {
    let window = web_sys::window();
    let width = window
        .as_ref()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(1280.0);
    let height = window
        .as_ref()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(720.0);
    Viewport::new(width, height)
}

fn push_view(model: &Rc<RefCell<PreviewState>>, view: &UseStateHandle<PreviewState>) {
    view.set(model.borrow().clone());
}

/// Starts the close animation and schedules its settle. Repeated requests
/// while a close is already running neither stack timers nor reset them.
fn close_preview(
    model: &Rc<RefCell<PreviewState>>,
    view: &UseStateHandle<PreviewState>,
    timers: &Rc<RefCell<TimerRegistry>>,
) {
    if !model.borrow_mut().begin_close() {
        return;
    }
    push_view(model, view);
    let model = Rc::clone(model);
    let view = view.clone();
    timers.borrow().after(TRANSITION_MS, move || {
        model.borrow_mut().finalize_close();
        view.set(model.borrow().clone());
    });
}
