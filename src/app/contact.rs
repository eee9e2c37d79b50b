use leptos::{either::EitherOf4, ev::SubmitEvent, html, prelude::*, task::spawn_local};

use crate::icons::platform_icon;
use crate::portfolio::ContactInfo;
use crate::ui::palette::tint;
use crate::ui::submission::{
    submit, ContactMessage, SimulatedSender, SubmissionFlow, SubmissionState, STATUS_DISPLAY,
    SUBMIT_DELAY, SUCCESS_MESSAGE,
};

use super::section::Section;

const INPUT_CLASS: &str = "w-full px-4 py-3 border border-gray-300 dark:border-gray-600 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent outline-none transition-all bg-white dark:bg-gray-800";

#[component]
fn InfoRow(icon: &'static str, color: &'static str, label: &'static str, value: String) -> impl IntoView {
    let tint = tint(color);
    view! {
        <div class="flex items-center gap-4 p-4 bg-gray-50 dark:bg-gray-800 rounded-lg">
            <div class=format!(
                "w-12 h-12 {} rounded-lg flex items-center justify-center",
                tint.tile,
            )>
                <i class=format!("{icon} {}", tint.icon)></i>
            </div>
            <div>
                <div class="font-semibold">{label}</div>
                <div class="text-gray-500 dark:text-gray-400">{value}</div>
            </div>
        </div>
    }
}

#[component]
pub fn ContactSection(contact: ContactInfo, on_success: Callback<String>) -> impl IntoView {
    let flow = RwSignal::new(SubmissionFlow::default());
    let form_ref = NodeRef::<html::Form>::new();
    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let subject_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let message = ContactMessage {
            name: name_ref.get_untracked().map(|el| el.value()).unwrap_or_default(),
            email: email_ref.get_untracked().map(|el| el.value()).unwrap_or_default(),
            subject: subject_ref.get_untracked().map(|el| el.value()).unwrap_or_default(),
            message: message_ref.get_untracked().map(|el| el.value()).unwrap_or_default(),
        };
        if let Err(e) = flow.write().begin() {
            log::debug!("ignoring submit: {e}");
            return;
        }

        spawn_local(async move {
            let sender = SimulatedSender::new(SUBMIT_DELAY, gloo_timers::future::sleep);
            let outcome = submit(&sender, &message).await;
            let ticket = match flow.write().finish(&outcome) {
                Ok(ticket) => ticket,
                Err(e) => {
                    log::error!("submission finished twice: {e}");
                    return;
                }
            };
            match outcome {
                Ok(()) => {
                    on_success.run(SUCCESS_MESSAGE.to_string());
                    if let Some(form) = form_ref.get_untracked() {
                        form.reset();
                    }
                }
                Err(e) => log::warn!("contact message not sent: {e}"),
            }
            set_timeout(
                move || {
                    flow.write().revert(ticket);
                },
                STATUS_DISPLAY,
            );
        });
    };

    let state = Memo::new(move |_| flow.with(SubmissionFlow::state));
    let button_content = move || {
        let state = state.get();
        let label = state.button_label();
        match state {
            SubmissionState::Sending => EitherOf4::A(view! {
                <span class="flex items-center justify-center">
                    <span class="loading mr-2"></span>
                    {label}
                </span>
            }),
            SubmissionState::Success => EitherOf4::B(view! {
                <span class="flex items-center justify-center">
                    <i class="fa-solid fa-check mr-2"></i>
                    {label}
                </span>
            }),
            SubmissionState::Error => EitherOf4::C(view! {
                <span class="flex items-center justify-center">
                    <i class="fa-solid fa-triangle-exclamation mr-2"></i>
                    {label}
                </span>
            }),
            SubmissionState::Idle => EitherOf4::D(view! {
                <span class="flex items-center justify-center">
                    <i class="fa-solid fa-paper-plane mr-2"></i>
                    {label}
                </span>
            }),
        }
    };

    let ContactInfo {
        email,
        phone,
        location,
        timezone,
        availability,
        response_time,
        social,
    } = contact;

    view! {
        <Section id="contact" class="py-20 px-4 sm:px-6 lg:px-8 bg-gray-50 dark:bg-gray-900">
            <div class="max-w-4xl mx-auto">
                <div class="text-center mb-16">
                    <h2 class="section-title text-3xl md:text-4xl font-bold mb-4">
                        "Let's Work Together"
                    </h2>
                    <p class="text-lg text-gray-500 dark:text-gray-400">
                        "Ready to start your next project? Let's discuss how I can help."
                    </p>
                </div>
                <div class="grid lg:grid-cols-2 gap-12">
                    <div class="card p-8 slide-in-left">
                        <h3 class="text-2xl font-bold mb-6">"Get In Touch"</h3>
                        <div class="space-y-6">
                            <InfoRow icon="fa-solid fa-envelope" color="blue" label="Email" value=email />
                            <InfoRow icon="fa-solid fa-phone" color="green" label="Phone" value=phone />
                            <InfoRow
                                icon="fa-solid fa-location-dot"
                                color="purple"
                                label="Location"
                                value=format!("{location} · {timezone}")
                            />
                            <InfoRow
                                icon="fa-solid fa-clock"
                                color="orange"
                                label="Response Time"
                                value=response_time
                            />
                            <p class="text-sm text-gray-500 dark:text-gray-400">{availability}</p>
                            <div class="pt-4">
                                <h4 class="font-semibold mb-4">"Connect with me"</h4>
                                <div class="flex gap-3">
                                    {social
                                        .into_iter()
                                        .map(|(platform, link)| {
                                            view! {
                                                <a
                                                    href=link.url
                                                    target="_blank"
                                                    rel="noopener noreferrer"
                                                    title=link.handle
                                                    aria-label=platform.clone()
                                                    class="w-10 h-10 bg-blue-600 text-white rounded-lg flex items-center justify-center hover:bg-blue-700 transition-colors"
                                                >
                                                    <i class=platform_icon(&platform)></i>
                                                </a>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        </div>
                    </div>
                    <div class="slide-in-right">
                        <form class="card p-8" node_ref=form_ref on:submit=on_submit>
                            <h3 class="text-2xl font-bold mb-6">"Send Message"</h3>
                            <div class="space-y-6">
                                <div>
                                    <label class="block text-sm font-medium mb-2" for="contact-name">
                                        "Name"
                                    </label>
                                    <input
                                        id="contact-name"
                                        node_ref=name_ref
                                        type="text"
                                        name="name"
                                        required
                                        class=INPUT_CLASS
                                        placeholder="Your name"
                                    />
                                </div>
                                <div>
                                    <label class="block text-sm font-medium mb-2" for="contact-email">
                                        "Email"
                                    </label>
                                    <input
                                        id="contact-email"
                                        node_ref=email_ref
                                        type="email"
                                        name="email"
                                        required
                                        class=INPUT_CLASS
                                        placeholder="your.email@example.com"
                                    />
                                </div>
                                <div>
                                    <label class="block text-sm font-medium mb-2" for="contact-subject">
                                        "Subject"
                                    </label>
                                    <input
                                        id="contact-subject"
                                        node_ref=subject_ref
                                        type="text"
                                        name="subject"
                                        required
                                        class=INPUT_CLASS
                                        placeholder="Project inquiry"
                                    />
                                </div>
                                <div>
                                    <label class="block text-sm font-medium mb-2" for="contact-message">
                                        "Message"
                                    </label>
                                    <textarea
                                        id="contact-message"
                                        node_ref=message_ref
                                        name="message"
                                        rows="4"
                                        required
                                        class=format!("{INPUT_CLASS} resize-none")
                                        placeholder="Tell me about your project..."
                                    ></textarea>
                                </div>
                                <button
                                    type="submit"
                                    class="btn-primary w-full motion-press"
                                    disabled=move || state.get() == SubmissionState::Sending
                                >
                                    {button_content}
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            </div>
        </Section>
    }
}
