use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{get_social_links, SocialIcons};
use crate::contact::{validate, ContactMessage, FieldErrors, FormStatus, SUCCESS_RESET};
use crate::motion::{interpolate, use_scroll_offset};

#[component]
pub fn Index() -> impl IntoView {
    let scroll = use_scroll_offset();
    let links = Resource::new_blocking(|| (), move |_| async { get_social_links().await });

    let drift = move || {
        let y = interpolate(&[0.0, 300.0], &[0.0, 50.0], scroll.get());
        let opacity = interpolate(&[0.0, 300.0], &[1.0, 0.9], scroll.get());
        format!("transform: translateY({y}px); opacity: {opacity}")
    };

    view! {
        <Title text="Contact"/>
        <main class="contact">
            <div class="contact-backdrop" style=drift/>
            <header class="page-header">
                <h1 class="text-gradient">"Let's Connect"</h1>
                <p>"Have a project in mind? I'd love to hear about it."</p>
            </header>
            <div class="contact-panels">
                <section class="contact-details">
                    <h2 class="text-gradient">"Contact Details"</h2>
                    <div class="detail">
                        <h3>"Email"</h3>
                        <a href="mailto:mertarcan8@gmail.com">"mertarcan8@gmail.com"</a>
                    </div>
                    <div class="detail">
                        <h3>"Location"</h3>
                        <p>"Ankara, Turkey"</p>
                    </div>
                    <div class="detail">
                        <h3>"Social"</h3>
                        {move || {
                            links
                                .get()
                                .and_then(|result| result.ok())
                                .map(|list| view! { <SocialIcons links=list/> })
                        }}
                    </div>
                </section>
                <section class="contact-form">
                    <h2 class="text-gradient">"Send a Message"</h2>
                    <MessageForm/>
                </section>
            </div>
        </main>
    }
}

/// Idle -> Submitting -> Success | Error. Success slides back to idle on
/// its own; an error sticks around until the visitor retries.
#[component]
fn MessageForm() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let status = RwSignal::new(FormStatus::Idle);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked() == FormStatus::Submitting {
            return;
        }

        let submission = ContactMessage {
            name: name.get_untracked(),
            email: email.get_untracked(),
            subject: subject.get_untracked(),
            message: message.get_untracked(),
        };
        let found = validate(&submission);
        if !found.is_empty() {
            errors.set(found);
            return;
        }
        errors.set(FieldErrors::default());
        status.set(FormStatus::Submitting);

        leptos::task::spawn_local(async move {
            match send_contact_message(submission).await {
                Ok(()) => {
                    name.set(String::new());
                    email.set(String::new());
                    subject.set(String::new());
                    message.set(String::new());
                    status.set(FormStatus::Success);
                    set_timeout(
                        move || {
                            if status.get_untracked() == FormStatus::Success {
                                status.set(FormStatus::Idle);
                            }
                        },
                        SUCCESS_RESET,
                    );
                }
                Err(_) => status.set(FormStatus::Error),
            }
        });
    };

    view! {
        {move || match status.get() {
            FormStatus::Success => leptos::either::EitherOf3::A(view! {
                <div class="form-panel success">
                    <h3>"Message sent!"</h3>
                    <p>"Thanks for reaching out. I'll get back to you soon."</p>
                </div>
            }.into_view()),
            FormStatus::Error => leptos::either::EitherOf3::B(view! {
                <div class="form-panel error">
                    <h3>"Something went wrong"</h3>
                    <p>"Your message could not be sent. Please try again."</p>
                    <button type="button" on:click=move |_| status.set(FormStatus::Idle)>
                        "Try Again"
                    </button>
                </div>
            }.into_view()),
            FormStatus::Idle | FormStatus::Submitting => leptos::either::EitherOf3::C(view! {
                <form on:submit=on_submit novalidate>
                    <div class="form-field">
                        <label for="name">"Name"</label>
                        <input
                            id="name"
                            name="name"
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| {
                                name.set(event_target_value(&ev));
                                errors.update(|errors| errors.name = None);
                            }
                        />
                        {move || errors.get().name.map(|error| view! {
                            <p class="field-error">{error}</p>
                        })}
                    </div>
                    <div class="form-field">
                        <label for="email">"Email"</label>
                        <input
                            id="email"
                            name="email"
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| {
                                email.set(event_target_value(&ev));
                                errors.update(|errors| errors.email = None);
                            }
                        />
                        {move || errors.get().email.map(|error| view! {
                            <p class="field-error">{error}</p>
                        })}
                    </div>
                    <div class="form-field">
                        <label for="subject">"Subject"</label>
                        <input
                            id="subject"
                            name="subject"
                            type="text"
                            prop:value=move || subject.get()
                            on:input=move |ev| {
                                subject.set(event_target_value(&ev));
                                errors.update(|errors| errors.subject = None);
                            }
                        />
                        {move || errors.get().subject.map(|error| view! {
                            <p class="field-error">{error}</p>
                        })}
                    </div>
                    <div class="form-field">
                        <label for="message">"Message"</label>
                        <textarea
                            id="message"
                            name="message"
                            rows="4"
                            prop:value=move || message.get()
                            on:input=move |ev| {
                                message.set(event_target_value(&ev));
                                errors.update(|errors| errors.message = None);
                            }
                        />
                        {move || errors.get().message.map(|error| view! {
                            <p class="field-error">{error}</p>
                        })}
                    </div>
                    <button
                        type="submit"
                        class="btn btn-primary"
                        disabled=move || status.get() == FormStatus::Submitting
                    >
                        {move || if status.get() == FormStatus::Submitting {
                            "Sending…"
                        } else {
                            "Send Message"
                        }}
                    </button>
                </form>
            }.into_view()),
        }}
    }
}

/// Re-validates the payload, stamps it with a human-readable submission
/// time, and hands it to the mailer. Every delivery problem comes back as
/// one opaque error; the form only distinguishes "sent" from "not sent".
#[server(SendContactMessage, "/api")]
pub async fn send_contact_message(submission: ContactMessage) -> Result<(), ServerFnError> {
    let errors = validate(&submission);
    if !errors.is_empty() {
        return Err(ServerFnError::Args(String::from(
            "the submission failed validation",
        )));
    }

    let mailer = expect_context::<crate::mailer::ContactMailer>();
    let sent_at = chrono::Local::now()
        .format("%A, %B %-d, %Y at %I:%M %p")
        .to_string();
    mailer.send(&submission, &sent_at).await.map_err(|error| {
        log::error!("could not deliver a contact message: {error}");
        ServerFnError::ServerError(error.to_string())
    })
}
