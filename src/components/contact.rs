use yew::prelude::*;

use crate::config;
use crate::motion::timers::TimerRegistry;

const ACK_TEXT: &str = "Thank you for your message! We will get back to you shortly.";
const ACK_DISMISS_MS: u32 = 6000;

#[function_component(Contact)]
pub fn contact() -> Html {
    let acknowledged = use_state(|| false);
    let timers = use_mut_ref(TimerRegistry::new);

    // Nothing is sent anywhere; the form acknowledges inline and the note
    // dismisses itself. Re-submitting restarts the dismiss clock.
    let on_submit = {
        let acknowledged = acknowledged.clone();
        let timers = timers.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            acknowledged.set(true);
            let registry = timers.borrow();
            registry.clear();
            registry.after(ACK_DISMISS_MS, {
                let acknowledged = acknowledged.clone();
                move || acknowledged.set(false)
            });
        })
    };

    html! {
        <section class="contact-section">
            <div class="contact-inner">
                <div class="contact-heading-wrap">
                    <h2 id="contact-us" class="contact-heading">{"Contact us"}</h2>
                    <p class="contact-sub">{"Our friendly team would love to hear from you."}</p>
                </div>
                <form class="contact-form" onsubmit={on_submit}>
                    <div class="field-row">
                        <div>
                            <label for="firstName" class="field-label">{"First name"}</label>
                            <input type="text" name="firstName" id="firstName" placeholder="First name" class="form-input" required=true />
                        </div>
                        <div>
                            <label for="lastName" class="field-label">{"Last name"}</label>
                            <input type="text" name="lastName" id="lastName" placeholder="Last name" class="form-input" required=true />
                        </div>
                    </div>
                    <div>
                        <label for="email" class="field-label">{"Email"}</label>
                        <input type="email" name="email" id="email" placeholder="you@contactus.com" class="form-input" required=true />
                    </div>
                    <div>
                        <label for="phone" class="field-label">{"Phone number"}</label>
                        <div class="phone-field">
                            <div class="phone-prefix">
                                <span>{ config::PHONE_PREFIX }</span>
                            </div>
                            <input type="tel" name="phone" id="phone" placeholder="998 998 9988" class="form-input phone-input" required=true />
                        </div>
                    </div>
                    <div>
                        <label for="message" class="field-label">{"Message"}</label>
                        <textarea name="message" id="message" rows="4" placeholder="Leave us a message..." class="form-input" required=true></textarea>
                    </div>
                    <div class="consent-row">
                        <input id="agreed" name="agreed" type="checkbox" class="consent-box" required=true />
                        <label for="agreed" class="consent-label">
                            {"You agree to our friendly "}
                            <a href="#" class="privacy-anchor">{"privacy policy"}</a>
                            {"."}
                        </label>
                    </div>
                    <div>
                        <button type="submit" class="contact-button">
                            {"Send message"}
                        </button>
                    </div>
                    { if *acknowledged {
                        html! { <p class="form-ack" role="status">{ ACK_TEXT }</p> }
                    } else {
                        html! {}
                    } }
                </form>
            </div>
            <style>
                {r#"
                    .contact-section {
                        padding: 5rem 0;
                        background: #fff;
                    }
                    .contact-inner {
                        max-width: 56rem;
                        margin: 0 auto;
                        padding: 0 1rem;
                    }
                    .contact-heading-wrap {
                        text-align: center;
                        margin-bottom: 3rem;
                    }
                    .contact-heading {
                        font-family: 'Cormorant Garamond', serif;
                        font-size: clamp(3rem, 6vw, 3.75rem);
                        font-weight: 400;
                        color: var(--brand-dark);
                        margin: 0;
                        scroll-margin-top: 7rem;
                    }
                    .contact-sub {
                        margin: 1rem 0 0;
                        color: #4b5563;
                    }
                    .contact-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }
                    .field-row {
                        display: grid;
                        gap: 1.5rem;
                    }
                    .field-label {
                        display: block;
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: #374151;
                        margin-bottom: 0.25rem;
                    }
                    .phone-field {
                        position: relative;
                    }
                    .phone-prefix {
                        position: absolute;
                        top: 0;
                        bottom: 0;
                        left: 0;
                        display: flex;
                        align-items: center;
                        padding-left: 0.75rem;
                        pointer-events: none;
                        color: #6b7280;
                        font-size: 0.875rem;
                    }
                    .phone-input {
                        padding-left: 5rem;
                    }
                    .consent-row {
                        display: flex;
                        align-items: center;
                    }
                    .consent-box {
                        width: 1rem;
                        height: 1rem;
                        accent-color: var(--brand-amber);
                    }
                    .consent-label {
                        margin-left: 0.5rem;
                        font-size: 0.875rem;
                        color: #111827;
                    }
                    .privacy-anchor {
                        font-weight: 500;
                        color: var(--brand-amber);
                        text-decoration: none;
                    }
                    .privacy-anchor:hover {
                        color: #92400e;
                    }
                    .contact-button {
                        width: 100%;
                        background: var(--brand-amber);
                        color: #fff;
                        font-weight: 700;
                        padding: 0.75rem 1rem;
                        border: none;
                        border-radius: 0.5rem;
                        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                        cursor: pointer;
                        transition: all 0.3s ease-in-out;
                    }
                    .contact-button:hover {
                        transform: translateY(-0.25rem);
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.15);
                    }
                    .form-ack {
                        text-align: center;
                        color: #166534;
                        background: #f0fdf4;
                        border: 1px solid #bbf7d0;
                        padding: 0.75rem 1rem;
                        border-radius: 0.5rem;
                        margin: 0;
                    }
                    @media (min-width: 768px) {
                        .contact-section {
                            padding: 8rem 0;
                        }
                        .field-row {
                            grid-template-columns: 1fr 1fr;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
