//! Contact section and form

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::catalog::{PHONE_DISPLAY, PHONE_HOURS, SHOWROOM_ADDRESS};
use crate::components::icons::{Icon, IconKind};
use crate::components::reveal::Reveal;
use crate::contact::submit_contact;
use crate::motion::{Frame, Motion};
use crate::state::AppState;
use crate::types::{ContactMessage, SubmitStatus};

/// How long the confirmation stays up after a successful send
const CONFIRMATION_MS: u32 = 6_000;

const INPUT_CLASS: &str = "w-full bg-transparent border-b border-white/20 py-4 text-white placeholder-gray-500 focus:outline-none focus:border-gulf-gold transition-colors";

#[component]
pub fn ContactSection() -> impl IntoView {
    let state = expect_context::<AppState>();
    let maps_link = state.config.with_value(|c| c.map_link_url());

    view! {
        <section id="contact" class="py-24 bg-black text-white relative">
            <div class="max-w-7xl mx-auto px-6">
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-20">
                    <Reveal motion=Motion::new(Frame::offset(0, 30), 500)>
                        <h2 class="font-serif text-5xl mb-8">
                            "Let's Discuss " <br /> " Your Project."
                        </h2>
                        <p class="text-gray-400 mb-12 max-w-md">
                            "Ready to transform your space? Visit our Heliopolis showroom or send us a "
                            "message to schedule a private consultation."
                        </p>
                        <div class="space-y-8">
                            <div class="flex items-start gap-6">
                                <div class="p-4 border border-white/10 rounded-full text-gulf-gold">
                                    <Icon icon=IconKind::MapPin />
                                </div>
                                <div>
                                    <h5 class="uppercase tracking-widest text-sm font-bold mb-2">"Showroom Location"</h5>
                                    <p class="text-gray-400">{SHOWROOM_ADDRESS}</p>
                                    <a
                                        href=maps_link
                                        target="_blank"
                                        rel="noopener"
                                        class="text-gulf-gold text-sm mt-2 inline-block border-b border-gulf-gold pb-1"
                                    >
                                        "Open in Maps"
                                    </a>
                                </div>
                            </div>
                            <div class="flex items-start gap-6">
                                <div class="p-4 border border-white/10 rounded-full text-gulf-gold">
                                    <Icon icon=IconKind::Phone />
                                </div>
                                <div>
                                    <h5 class="uppercase tracking-widest text-sm font-bold mb-2">"Direct Line"</h5>
                                    <p class="text-gray-400">{PHONE_DISPLAY}</p>
                                    <p class="text-gray-500 text-sm">{PHONE_HOURS}</p>
                                </div>
                            </div>
                        </div>
                    </Reveal>

                    <Reveal
                        motion=Motion::new(Frame::offset(30, 0), 500).delay(200)
                        class="bg-zinc-900/30 p-8 md:p-12 border border-white/5 backdrop-blur-sm"
                    >
                        <ContactForm />
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

/// Name, phone, email and message; posts to the configured endpoint
#[component]
pub fn ContactForm() -> impl IntoView {
    let state = expect_context::<AppState>();

    let name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let status = RwSignal::new(SubmitStatus::Idle);
    let sends = StoredValue::new(0u32);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked().is_sending() {
            return;
        }

        let msg = ContactMessage {
            name: name.get_untracked(),
            phone: phone.get_untracked(),
            email: email.get_untracked(),
            message: message.get_untracked(),
        };
        let config = state.config.get_value();
        sends.update_value(|n| *n += 1);
        let send_id = sends.get_value();
        status.set(SubmitStatus::Sending);

        spawn_local(async move {
            match submit_contact(&config, &msg).await {
                Ok(()) => {
                    for field in [name, phone, email, message] {
                        field.try_set(String::new());
                    }
                    status.try_set(SubmitStatus::Sent(send_id));

                    TimeoutFuture::new(CONFIRMATION_MS).await;
                    // The form may have been unmounted by now
                    status.try_update(|s| s.expire_sent(send_id));
                }
                Err(e) => {
                    tracing::warn!("Contact submission failed: {}", e);
                    status.try_set(SubmitStatus::Failed(e.to_string()));
                }
            }
        });
    };

    let is_sending = move || status.with(SubmitStatus::is_sending);

    view! {
        <form on:submit=on_submit class="space-y-8">
            <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                <div class="relative">
                    <input
                        type="text"
                        placeholder="Name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                        class=INPUT_CLASS
                    />
                </div>
                <div class="relative">
                    <input
                        type="tel"
                        placeholder="Phone"
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
                        class=INPUT_CLASS
                    />
                </div>
            </div>
            <div class="relative">
                <input
                    type="email"
                    placeholder="Email Address"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                    class=INPUT_CLASS
                />
            </div>
            <div class="relative">
                <textarea
                    placeholder="Tell us about your space..."
                    rows="4"
                    prop:value=move || message.get()
                    on:input=move |ev| message.set(event_target_value(&ev))
                    class=format!("{} resize-none", INPUT_CLASS)
                ></textarea>
            </div>

            {move || match status.get() {
                SubmitStatus::Sent(_) => Some(
                    view! {
                        <p class="text-gulf-gold text-sm tracking-wide animate-fade-in">
                            "Thank you. Our team will contact you shortly."
                        </p>
                    }
                    .into_any(),
                ),
                SubmitStatus::Failed(err) => Some(
                    view! { <p class="text-red-400 text-sm tracking-wide animate-fade-in">{err}</p> }
                        .into_any(),
                ),
                SubmitStatus::Idle | SubmitStatus::Sending => None,
            }}

            <button
                type="submit"
                disabled=is_sending
                class="w-full bg-[#D4AF37] text-black font-bold uppercase tracking-widest py-4 hover:bg-white transition-colors duration-300 shadow-[0_0_15px_rgba(212,175,55,0.3)] disabled:opacity-60 disabled:cursor-wait"
            >
                {move || if is_sending() { "Sending..." } else { "Send Message" }}
            </button>
        </form>
    }
}
