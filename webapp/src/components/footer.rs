use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::components::navigation::nav_links;
use crate::Route;

// identical on every page: company blurb, quick links, contact details
#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "footer",
            div { class: "footer-container",
                div { class: "footer-column",
                    h3 { class: "footer-heading", "SJ Polyzen Industries" }
                    p { class: "footer-description",
                        "Manufacturer of recycled PPCP injection-grade granules, delivering "
                        "consistent quality and reliable supply for injection moulding "
                        "applications since 2024."
                    }
                }

                div { class: "footer-column",
                    h3 { class: "footer-heading", "Quick Links" }
                    ul { class: "footer-links",
                        for link in nav_links() {
                            li {
                                Link { to: link.target, "{link.label}" }
                            }
                        }
                    }
                }

                div { class: "footer-column",
                    h3 { class: "footer-heading", "Contact Us" }
                    div { class: "footer-contact",
                        div { class: "contact-item",
                            span { class: "contact-icon", "📍" }
                            div {
                                p { "399 LIG Mukharjee Nagar" }
                                p { "Dewar, Madhya Pradesh" }
                                p { "PIN: 455001, India" }
                            }
                        }

                        div { class: "contact-item",
                            span { class: "contact-icon", "📧" }
                            a { href: "mailto:sjpolyzen@gmail.com", "sjpolyzen@gmail.com" }
                        }

                        div { class: "contact-item",
                            span { class: "contact-icon", "📞" }
                            div {
                                a { href: "tel:+918719824566", "+91 8719824566" }
                                a { href: "tel:+919628517463", "+91 9628517463" }
                            }
                        }

                        div { class: "social-icons",
                            a {
                                href: "https://instagram.com",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                aria_label: "Instagram",
                                "Instagram"
                            }
                            a {
                                href: "https://linkedin.com",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                aria_label: "LinkedIn",
                                "LinkedIn"
                            }
                        }
                    }
                }
            }

            div { class: "footer-bottom",
                div { class: "footer-bottom-container",
                    p { "© 2024 SJ Polyzen Industries. All Rights Reserved." }
                    div { class: "footer-bottom-links",
                        Link { to: Route::PrivacyPolicy {}, "Privacy Policy" }
                        span { class: "separator", "|" }
                        Link { to: Route::TermsConditions {}, "Terms & Conditions" }
                    }
                }
            }
        }
    }
}
