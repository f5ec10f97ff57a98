//! Contact form ("Start a project")
//!
//! The form state lives in a single `RwSignal<ContactForm>`; the submit
//! driver in [`crate::core::submission`] does the phase bookkeeping and this
//! module only supplies the HTTP transport and the markup.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::config::SiteConfig;
use crate::core::palette::{self, FONT, alpha};
use crate::core::reveal::DEFAULT_THRESHOLD;
use crate::core::style;
use crate::core::submission::{
    self, ContactError, ContactField, ContactFields, ContactForm, ContactTransport, FormStore,
    SubmissionPhase,
};
use crate::ui::reveal::use_reveal;

/// POSTs the fields as JSON to the configured endpoint
#[derive(Debug, Clone)]
pub struct FetchTransport {
    endpoint: String,
}

impl FetchTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl ContactTransport for FetchTransport {
    async fn deliver(&self, payload: &ContactFields) -> Result<u16, ContactError> {
        #[cfg(not(feature = "ssr"))]
        {
            use gloo_net::http::Request;

            let request = Request::post(&self.endpoint)
                .header("Content-Type", "application/json")
                .json(payload)
                .map_err(|e| ContactError::Encode(e.to_string()))?;

            let response = request
                .send()
                .await
                .map_err(|e| ContactError::Transport(e.to_string()))?;

            Ok(response.status())
        }

        #[cfg(feature = "ssr")]
        {
            let _ = (payload, &self.endpoint);
            Err(ContactError::Unavailable)
        }
    }
}

impl FormStore for RwSignal<ContactForm> {
    fn modify<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> Option<R> {
        self.try_update(f)
    }
}

fn corner(top_left: bool, horizontal: bool) -> String {
    let (width, height) = if horizontal { (40, 1) } else { (1, 40) };
    let anchor = if top_left {
        "top: 0; left: 0;"
    } else {
        "bottom: 0; right: 0;"
    };
    format!(
        "position: absolute; {anchor} width: {width}px; height: {height}px; background: {}; box-shadow: 0 0 10px {};",
        palette::NEON,
        palette::NEON_GLOW
    )
}

/// Closing section of the home page with the contact form
#[component]
pub fn StartProject() -> impl IntoView {
    let (section_ref, visible) = use_reveal(DEFAULT_THRESHOLD);
    let config = use_context::<SiteConfig>().unwrap_or_default();

    let form = RwSignal::new(ContactForm::new());
    let phase = Memo::new(move |_| form.with(|f| f.phase()));
    let endpoint = StoredValue::new(config.contact_endpoint);
    let button_hovered = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if !form.with_untracked(|f| f.can_submit()) {
            return;
        }
        let transport = FetchTransport::new(endpoint.get_value());
        spawn_local(async move {
            match submission::submit(&form, &transport).await {
                Ok(phase) => leptos::logging::log!("Contact form settled: {}", phase.as_str()),
                Err(e) => leptos::logging::error!("Contact form submission failed: {}", e),
            }
        });
    };

    let frame_style = format!(
        "background: {}; border: 1px solid {}; padding: clamp(32px, 5vw, 56px); text-align: center; \
         position: relative; overflow: hidden; box-shadow: 0 0 60px {};",
        palette::SURFACE,
        palette::BORDER,
        alpha(palette::NEON, "08")
    );

    view! {
        <section
            id="start"
            node_ref=section_ref
            style=format!(
                "padding: 100px 1.5rem 80px; background: linear-gradient(180deg, {} 0%, {} 100%); \
                 border-top: 1px solid {}; position: relative;",
                palette::DEEP,
                palette::VOID,
                palette::BORDER,
            )
        >
            <div style=format!(
                "position: absolute; top: 0; left: 0; right: 0; height: 1px; \
                 background: linear-gradient(90deg, transparent, {}, transparent);",
                alpha(palette::NEON, "33"),
            ) />
            <div style=move || {
                format!(
                    "max-width: 600px; margin: 0 auto; {}",
                    style::Reveal::up(30, 800).style(visible.get()),
                )
            }>
                <div style=frame_style>
                    <div style=corner(true, true) />
                    <div style=corner(true, false) />
                    <div style=corner(false, true) />
                    <div style=corner(false, false) />

                    <h2 style=format!(
                        "font-family: {FONT}; font-size: clamp(1.3rem, 2.5vw, 1.7rem); font-weight: 700; \
                         color: {}; margin: 0; letter-spacing: 0.04em;",
                        palette::WHITE,
                    )>
                        "Ready to build"
                        <br />
                        <span class="neon-breathe-inline">"the tool you're missing?"</span>
                    </h2>
                    <p style=format!(
                        "color: {}; font-size: 14px; line-height: 1.7; margin-top: 12px; font-family: {FONT};",
                        palette::GRAY,
                    )>
                        "Let's talk about your project. From idea to deployment, we've got you — every step of the way."
                    </p>

                    <Show
                        when=move || phase.get() != SubmissionPhase::Success
                        fallback=|| view! { <SuccessPanel /> }
                    >
                        <form novalidate=true on:submit=on_submit style="margin-top: 32px; text-align: left;">
                            <div
                                class="contact-row"
                                style="display: grid; grid-template-columns: 1fr 1fr; gap: 12px; margin-bottom: 12px;"
                            >
                                <FieldInput form=form field=ContactField::Name kind="text" placeholder="Your name" />
                                <FieldInput
                                    form=form
                                    field=ContactField::Email
                                    kind="email"
                                    placeholder="Email address"
                                />
                            </div>
                            <MessageInput form=form />

                            <Show when=move || phase.get() == SubmissionPhase::Error>
                                <p style=format!(
                                    "color: {}; font-size: 13px; font-family: {FONT}; margin-bottom: 12px; text-align: center;",
                                    palette::ERROR,
                                )>"Something went wrong. Please try again."</p>
                            </Show>

                            <button
                                type="submit"
                                disabled=move || phase.get().is_sending()
                                style=move || style::submit_button(phase.get(), button_hovered.get())
                                on:mouseenter=move |_| button_hovered.set(true)
                                on:mouseleave=move |_| button_hovered.set(false)
                            >
                                {move || style::submit_label(phase.get())}
                            </button>
                        </form>
                    </Show>
                </div>
            </div>
        </section>
    }
}

/// Single-line input bound to one contact field
#[component]
fn FieldInput(
    form: RwSignal<ContactForm>,
    field: ContactField,
    kind: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    let focused = RwSignal::new(false);

    view! {
        <input
            type=kind
            placeholder=placeholder
            prop:value=move || form.with(|f| f.field(field).to_string())
            on:input=move |ev| {
                form.update(|f| {
                    f.set_field(field, event_target_value(&ev));
                });
            }
            on:focus=move |_| focused.set(true)
            on:blur=move |_| focused.set(false)
            style=move || style::form_input(focused.get())
        />
    }
}

#[component]
fn MessageInput(form: RwSignal<ContactForm>) -> impl IntoView {
    let focused = RwSignal::new(false);

    view! {
        <textarea
            placeholder="Tell us about your project..."
            rows="4"
            prop:value=move || form.with(|f| f.field(ContactField::Message).to_string())
            on:input=move |ev| {
                form.update(|f| {
                    f.set_field(ContactField::Message, event_target_value(&ev));
                });
            }
            on:focus=move |_| focused.set(true)
            on:blur=move |_| focused.set(false)
            style=move || {
                format!("{} resize: vertical; margin-bottom: 20px;", style::form_input(focused.get()))
            }
        />
    }
}

#[component]
fn SuccessPanel() -> impl IntoView {
    view! {
        <div style=format!(
            "margin-top: 32px; padding: 24px; background: {}; border: 1px solid {};",
            alpha(palette::NEON, "08"),
            alpha(palette::NEON, "33"),
        )>
            <p
                class="neon-breathe"
                style=format!(
                    "color: {}; font-size: 15px; font-weight: 600; font-family: {FONT}; margin: 0; letter-spacing: 0.05em;",
                    palette::NEON,
                )
            >
                "✓ TRANSMISSION RECEIVED"
            </p>
            <p style=format!(
                "color: {}; font-size: 13px; font-family: {FONT}; margin-top: 8px;",
                palette::GRAY,
            )>"We'll be in touch shortly."</p>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_server_side_transport_is_unavailable() {
        let transport = FetchTransport::new("https://contact.example.com/");
        let fields = ContactFields::new("Ada", "ada@example.com", "Hello");
        assert!(matches!(
            transport.deliver(&fields).await,
            Err(ContactError::Unavailable)
        ));
    }

    #[tokio::test]
    async fn test_signal_store_drives_submission() {
        let owner = Owner::new();
        owner.set();

        let form = RwSignal::new(ContactForm::with_fields(ContactFields::new(
            "Ada",
            "ada@example.com",
            "Hello",
        )));
        let transport = FetchTransport::new("https://contact.example.com/");

        let outcome = submission::submit(&form, &transport).await;

        assert!(matches!(outcome, Err(ContactError::Unavailable)));
        assert_eq!(form.get_untracked().phase(), SubmissionPhase::Error);
        assert_eq!(form.get_untracked().field(ContactField::Name), "Ada");
    }

    #[test]
    fn test_form_leaves_field_checks_to_the_endpoint() {
        let owner = Owner::new();
        owner.set();

        let html = view! { <StartProject /> }.to_html();

        assert!(html.contains("novalidate"));
        assert!(html.contains("type=\"email\""));
    }

    #[test]
    fn test_disposed_signal_store_reports_none() {
        let owner = Owner::new();
        owner.set();
        let form = RwSignal::new(ContactForm::new());
        form.dispose();
        assert_eq!(form.modify(|f| f.phase()), None);
    }
}
