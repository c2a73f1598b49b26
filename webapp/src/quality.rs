use dioxus::prelude::*;

use crate::common::reveal::use_reveal;

pub const QUALITY_POINTS: &[&str] = &[
    "We adhere to ISO 9001:2015 quality management standards in all our manufacturing processes",
    "Every batch undergoes rigorous testing for tensile strength, elongation, and uniformity before dispatch",
    "We source only virgin-grade raw materials from certified suppliers to ensure product consistency",
    "Our quality control team conducts regular audits and maintains detailed documentation for traceability",
    "Continuous training programs ensure our workforce stays updated with latest quality protocols and best practices",
];

#[component]
pub fn QualityPolicy() -> Element {
    use_reveal();

    rsx! {
        div { class: "quality-policy-page",
            section { class: "quality-hero",
                div { class: "quality-hero-overlay",
                    div { class: "quality-hero-content",
                        h1 { class: "quality-hero-title", "Quality is Our Promise" }
                    }
                }
            }

            section { class: "section quality-content-section",
                div { class: "container",
                    div { class: "quality-intro fade-in",
                        h2 { class: "section-title", "Our Quality Policy" }
                        p { class: "section-subtitle", "Committed to Excellence at Every Step" }
                    }

                    div { class: "quality-points-container fade-in",
                        for point in QUALITY_POINTS {
                            div { class: "quality-point-card",
                                div { class: "quality-point-icon", "✓" }
                                p { class: "quality-point-text", "{point}" }
                            }
                        }
                    }

                    div { class: "quality-additional-info fade-in",
                        h3 { "Our Quality Assurance Process" }
                        div { class: "process-grid",
                            div { class: "process-card",
                                div { class: "process-number", "1" }
                                h4 { "Raw Material Inspection" }
                                p {
                                    "Stringent quality checks on all incoming raw materials "
                                    "from certified suppliers"
                                }
                            }
                            div { class: "process-card",
                                div { class: "process-number", "2" }
                                h4 { "In-Process Monitoring" }
                                p {
                                    "Continuous monitoring during production to maintain "
                                    "consistent quality standards"
                                }
                            }
                            div { class: "process-card",
                                div { class: "process-number", "3" }
                                h4 { "Final Product Testing" }
                                p {
                                    "Comprehensive testing of finished products including "
                                    "tensile strength and durability"
                                }
                            }
                            div { class: "process-card",
                                div { class: "process-number", "4" }
                                h4 { "Documentation & Traceability" }
                                p {
                                    "Complete documentation of all quality parameters for "
                                    "full product traceability"
                                }
                            }
                        }
                    }

                    div { class: "quality-certifications fade-in",
                        h3 { "Certifications & Standards" }
                        div { class: "certifications-grid",
                            div { class: "certification-card",
                                div { class: "certification-badge", "ISO" }
                                h4 { "ISO 9001:2015" }
                                p { "Quality Management Systems" }
                            }
                        }
                    }
                }
            }
        }
    }
}
