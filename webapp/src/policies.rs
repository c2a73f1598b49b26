use dioxus::prelude::*;

use crate::common::reveal::use_reveal;

const LAST_UPDATED: &str = "13/01/2026";

#[component]
pub fn PrivacyPolicy() -> Element {
    use_reveal();

    rsx! {
        div { class: "policy-page",
            section { class: "policy-header",
                div { class: "container",
                    div { class: "policy-header-content",
                        span { class: "policy-main-icon", "🛡" }
                        h1 { class: "page-title", "Privacy Policy" }
                        p { class: "last-updated", "Last updated: {LAST_UPDATED}" }
                    }
                }
            }

            section { class: "section policy-intro-section",
                div { class: "container",
                    div { class: "policy-intro fade-in",
                        p { class: "intro-text",
                            "SJ Polyzen Industries (\"we\", \"our\", \"us\") respects your "
                            "privacy and is committed to protecting the personal information "
                            "you share with us through our website."
                        }
                    }
                }
            }

            section { class: "section policy-content-section",
                div { class: "container",
                    div { class: "policy-block fade-in",
                        h2 { "Information We Collect" }
                        p { "We may collect limited personal information such as:" }
                        ul { class: "policy-list",
                            li { "Name, company name" }
                            li { "Phone number, email address" }
                            li { "Enquiry details submitted via forms or email" }
                        }
                        p { class: "note-text",
                            "We do not collect sensitive personal data such as financial or "
                            "biometric information through this website."
                        }
                    }

                    div { class: "policy-block fade-in",
                        h2 { "How We Use Information" }
                        p { "Information collected is used only to:" }
                        ul { class: "policy-list",
                            li { "Respond to enquiries and requests" }
                            li { "Provide product or service information" }
                            li { "Improve our website and communication" }
                        }
                    }

                    div { class: "policy-block fade-in",
                        h2 { "Data Sharing" }
                        p {
                            "We do not sell, rent, or trade your personal information. Data "
                            "may be shared only if required by law or to protect our legal "
                            "rights."
                        }
                    }

                    div { class: "policy-block fade-in",
                        h2 { "Data Security" }
                        p {
                            "We take reasonable measures to protect your information from "
                            "unauthorized access, misuse, or disclosure."
                        }
                    }

                    div { class: "policy-block fade-in",
                        h2 { "Third-Party Links" }
                        p {
                            "Our website may contain links to third-party websites. We are "
                            "not responsible for the privacy practices of those sites."
                        }
                    }

                    div { class: "policy-block fade-in",
                        h2 { "Your Consent" }
                        p { "By using our website, you consent to this Privacy Policy." }
                    }

                    div { class: "policy-block fade-in",
                        h2 { "Changes to This Policy" }
                        p {
                            "We may update this Privacy Policy from time to time. Changes "
                            "will be posted on this page."
                        }
                    }

                    div { class: "policy-contact fade-in",
                        h2 { "Contact Us" }
                        p { "For any questions regarding this Privacy Policy, please contact:" }
                        div { class: "contact-details",
                            p { class: "company-name", "SJ Polyzen Industries" }
                            p { "📍 Sanwer, Indore" }
                            p { "📧 sourabhsj1970@gmail.com" }
                            p { "📞 8719824566" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn TermsConditions() -> Element {
    use_reveal();

    rsx! {
        div { class: "policy-page",
            section { class: "policy-header",
                div { class: "container",
                    div { class: "policy-header-content",
                        span { class: "policy-main-icon", "📄" }
                        h1 { class: "page-title", "Terms & Conditions" }
                        p { class: "last-updated", "Last updated: {LAST_UPDATED}" }
                    }
                }
            }

            section { class: "section policy-intro-section",
                div { class: "container",
                    div { class: "policy-intro fade-in",
                        p { class: "intro-text",
                            "By accessing or using the SJ Polyzen Industries website, you "
                            "agree to the following terms and conditions."
                        }
                    }
                }
            }

            section { class: "section policy-content-section",
                div { class: "container",
                    div { class: "policy-block fade-in",
                        h2 { "Use of Website" }
                        p {
                            "This website is intended to provide general information about "
                            "our products and services. Content is subject to change without "
                            "notice."
                        }
                    }

                    div { class: "policy-block fade-in",
                        h2 { "Product Information" }
                        p {
                            "All product descriptions, specifications, prices, and "
                            "availability mentioned on the website are indicative and may "
                            "vary based on grade, volume, and market conditions. Final "
                            "details are confirmed at the time of order."
                        }
                    }

                    div { class: "policy-block fade-in",
                        h2 { "Intellectual Property" }
                        p {
                            "All content on this website—including text, images, logos, and "
                            "graphics—is the property of SJ Polyzen Industries and may not "
                            "be copied or used without prior written permission."
                        }
                    }

                    div { class: "policy-block fade-in",
                        h2 { "Limitation of Liability" }
                        p {
                            "We are not liable for any direct or indirect damages arising "
                            "from the use of this website or reliance on its content."
                        }
                    }

                    div { class: "policy-block fade-in",
                        h2 { "No Warranty" }
                        p {
                            "Information on this website is provided \"as is\" without any "
                            "warranties, express or implied."
                        }
                    }

                    div { class: "policy-block fade-in",
                        h2 { "Governing Law" }
                        p {
                            "These terms are governed by the laws of India. Any disputes "
                            "shall be subject to the jurisdiction of courts in Indore, "
                            "Madhya Pradesh."
                        }
                    }

                    div { class: "policy-block fade-in",
                        h2 { "Changes to Terms" }
                        p {
                            "SJ Polyzen Industries reserves the right to modify these "
                            "Terms & Conditions at any time. Continued use of the website "
                            "implies acceptance of updated terms."
                        }
                    }

                    div { class: "policy-contact fade-in",
                        h2 { "Contact" }
                        p {
                            "For questions regarding these Terms & Conditions, please "
                            "contact us using the details provided on the website."
                        }
                        div { class: "contact-signature",
                            p { class: "signature-text", "Thanks and Regards" }
                            p { class: "signature-name", "Sourabh Jain" }
                        }
                    }
                }
            }
        }
    }
}
