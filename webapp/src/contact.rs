use dioxus::prelude::*;

use gloo_console::error as console_error;
use gloo_timers::callback::Timeout;

use crate::common::reveal::use_reveal;

mod form;
use form::{
    form_is_valid, validate_city, validate_email, validate_message, validate_mobile,
    validate_name, SubmitStatus, STATUS_DISMISS_MS,
};

#[component]
pub fn Contact() -> Element {
    use_reveal();

    // field values and their inline errors; empty error string means clean
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut city = use_signal(String::new);
    let mut mobile = use_signal(String::new);
    let mut message = use_signal(String::new);

    let mut name_error = use_signal(String::new);
    let mut email_error = use_signal(String::new);
    let mut city_error = use_signal(String::new);
    let mut mobile_error = use_signal(String::new);
    let mut message_error = use_signal(String::new);

    let mut is_submitting = use_signal(|| false);
    let mut submit_status = use_signal(|| SubmitStatus::Idle);

    let submit_enabled =
        form_is_valid(&name(), &email(), &city(), &mobile(), &message()) && !is_submitting();

    let handle_submit = move |_| async move {
        // re-check everything before any network traffic
        name_error.set(String::from(validate_name(&name()).unwrap_or("")));
        email_error.set(String::from(validate_email(&email()).unwrap_or("")));
        city_error.set(String::from(validate_city(&city()).unwrap_or("")));
        mobile_error.set(String::from(validate_mobile(&mobile()).unwrap_or("")));
        message_error.set(String::from(validate_message(&message()).unwrap_or("")));

        if !form_is_valid(&name(), &email(), &city(), &mobile(), &message()) {
            return;
        }

        is_submitting.set(true);
        submit_status.set(SubmitStatus::Idle);

        let enquiry = relay::ContactMessage {
            to_email: String::from(relay::ENQUIRY_RECIPIENT),
            from_name: name(),
            from_email: email(),
            city: city(),
            mobile: mobile(),
            message: message(),
        };

        match relay::send_contact_email(&enquiry).await {
            Ok(()) => {
                submit_status.set(SubmitStatus::Success);

                name.set(String::new());
                email.set(String::new());
                city.set(String::new());
                mobile.set(String::new());
                message.set(String::new());
            }
            Err(err) => {
                tracing::error!("failed to send enquiry: {err}");
                console_error!(format!("failed to send enquiry: {err}"));
                submit_status.set(SubmitStatus::Error);
            }
        }

        is_submitting.set(false);

        let timeout = Timeout::new(STATUS_DISMISS_MS, move || {
            submit_status.set(SubmitStatus::Idle);
        });
        timeout.forget();
    };

    rsx! {
        div { class: "contact-page",
            section { class: "contact-header",
                div { class: "container",
                    h1 { class: "page-title", "Contact Us" }
                    p { class: "page-subtitle", "We'd Love to Hear From You" }
                }
            }

            section { class: "section contact-info-section",
                div { class: "container",
                    div { class: "contact-info-grid fade-in",
                        div { class: "contact-info-card",
                            div { class: "info-card-icon", "📍" }
                            h3 { "Address" }
                            div { class: "info-card-content",
                                p { "SJ Polyzen Industries" }
                                p { "399 LIG Mukharjee Nagar" }
                                p { "Dewar, Madhya Pradesh" }
                                p { "PIN: 455001, India" }
                            }
                        }

                        div { class: "contact-info-card",
                            div { class: "info-card-icon", "📧" }
                            h3 { "Email" }
                            div { class: "info-card-content",
                                a { href: "mailto:sjpolyzen@gmail.com", "sjpolyzen@gmail.com" }
                            }
                        }

                        div { class: "contact-info-card",
                            div { class: "info-card-icon", "📞" }
                            h3 { "Phone" }
                            div { class: "info-card-content",
                                a { href: "tel:+918719824566", "+91 8719824566" }
                                a { href: "tel:+919628517463", "+91 9628517463" }
                            }
                        }
                    }

                    div { class: "social-media-section fade-in",
                        h3 { "Connect With Us" }
                        div { class: "social-links",
                            a {
                                href: "https://instagram.com",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                class: "social-link instagram",
                                "Instagram"
                            }
                            a {
                                href: "https://linkedin.com",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                class: "social-link linkedin",
                                "LinkedIn"
                            }
                        }
                    }
                }
            }

            section { class: "section contact-form-section",
                div { class: "container",
                    div { class: "form-container fade-in",
                        h2 { class: "form-heading", "Send Us a Message" }
                        p { class: "form-subheading",
                            "Fill out the form below and we'll get back to you as soon as "
                            "possible"
                        }

                        form { class: "contact-form", onsubmit: handle_submit,
                            div { class: "form-group",
                                label { r#for: "name",
                                    "Name "
                                    span { class: "required", "*" }
                                }
                                input {
                                    r#type: "text",
                                    id: "name",
                                    name: "name",
                                    value: "{name}",
                                    placeholder: "Enter your full name",
                                    class: if name_error().is_empty() { "" } else { "error" },
                                    oninput: move |event| {
                                        name.set(event.value());
                                        name_error.set(String::new());
                                    },
                                }
                                if !name_error().is_empty() {
                                    span { class: "error-message", "{name_error}" }
                                }
                            }

                            div { class: "form-group",
                                label { r#for: "email",
                                    "Email "
                                    span { class: "required", "*" }
                                }
                                input {
                                    r#type: "email",
                                    id: "email",
                                    name: "email",
                                    value: "{email}",
                                    placeholder: "Enter your email address",
                                    class: if email_error().is_empty() { "" } else { "error" },
                                    oninput: move |event| {
                                        email.set(event.value());
                                        email_error.set(String::new());
                                    },
                                }
                                if !email_error().is_empty() {
                                    span { class: "error-message", "{email_error}" }
                                }
                            }

                            div { class: "form-group",
                                label { r#for: "city",
                                    "City "
                                    span { class: "required", "*" }
                                }
                                input {
                                    r#type: "text",
                                    id: "city",
                                    name: "city",
                                    value: "{city}",
                                    placeholder: "Enter your city",
                                    class: if city_error().is_empty() { "" } else { "error" },
                                    oninput: move |event| {
                                        city.set(event.value());
                                        city_error.set(String::new());
                                    },
                                }
                                if !city_error().is_empty() {
                                    span { class: "error-message", "{city_error}" }
                                }
                            }

                            div { class: "form-group",
                                label { r#for: "mobile",
                                    "Mobile "
                                    span { class: "required", "*" }
                                }
                                input {
                                    r#type: "tel",
                                    id: "mobile",
                                    name: "mobile",
                                    value: "{mobile}",
                                    placeholder: "Enter 10-digit mobile number",
                                    maxlength: "10",
                                    class: if mobile_error().is_empty() { "" } else { "error" },
                                    oninput: move |event| {
                                        mobile.set(event.value());
                                        mobile_error.set(String::new());
                                    },
                                }
                                if !mobile_error().is_empty() {
                                    span { class: "error-message", "{mobile_error}" }
                                }
                            }

                            div { class: "form-group full-width",
                                label { r#for: "message",
                                    "Message "
                                    span { class: "required", "*" }
                                }
                                textarea {
                                    id: "message",
                                    name: "message",
                                    value: "{message}",
                                    placeholder: "Enter your message",
                                    rows: "6",
                                    class: if message_error().is_empty() { "" } else { "error" },
                                    oninput: move |event| {
                                        message.set(event.value());
                                        message_error.set(String::new());
                                    },
                                }
                                if !message_error().is_empty() {
                                    span { class: "error-message", "{message_error}" }
                                }
                            }

                            div { class: "form-actions",
                                button {
                                    r#type: "submit",
                                    class: "btn btn-primary submit-btn",
                                    disabled: !submit_enabled,
                                    if is_submitting() { "Sending..." } else { "Send Message" }
                                }
                            }

                            match submit_status() {
                                SubmitStatus::Success => rsx! {
                                    div { class: "alert alert-success",
                                        "Thank you! We'll get back to you soon."
                                    }
                                },
                                SubmitStatus::Error => rsx! {
                                    div { class: "alert alert-error",
                                        "Oops! Something went wrong. Please try again or email "
                                        "us directly."
                                    }
                                },
                                SubmitStatus::Idle => rsx! {},
                            }
                        }
                    }
                }
            }
        }
    }
}
