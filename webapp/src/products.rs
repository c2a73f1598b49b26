use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::catalog;
use crate::common::reveal::use_reveal;
use crate::Route;

mod detail;
pub use detail::ProductDetail;

#[component]
pub fn Products() -> Element {
    use_reveal();

    rsx! {
        div { class: "products-page",
            section { class: "products-header",
                div { class: "container",
                    h1 { class: "page-title", "Our Products" }
                    p { class: "page-subtitle", "Injection-Grade Recycled PPCP Granules" }
                }
            }

            section { class: "section products-section",
                div { class: "container",
                    div { class: "products-main-grid",
                        for product in catalog::PRODUCTS {
                            div { class: "product-main-card fade-in",
                                div { class: "product-main-image",
                                    span { "{product.name}" }
                                }
                                div { class: "product-main-info",
                                    h2 { "{product.name}" }
                                    p { "{product.summary}" }
                                    Link {
                                        class: "btn btn-primary",
                                        to: Route::ProductDetail {
                                            product_id: String::from(product.id),
                                        },
                                        "View Details"
                                    }
                                }
                            }
                        }
                    }

                    div { class: "products-additional-info fade-in",
                        h3 { "Why Choose Our Products?" }
                        div { class: "info-grid",
                            div { class: "info-card",
                                div { class: "info-icon", "✓" }
                                h4 { "Consistent Quality" }
                                p {
                                    "Injection-grade recycled PPCP granules engineered for stable "
                                    "processing and minimal rejection rates"
                                }
                            }
                            div { class: "info-card",
                                div { class: "info-icon", "✓" }
                                h4 { "Application-Focused Grades" }
                                p {
                                    "Purpose-built materials for crates, bins, chairs, stools, "
                                    "and general injection moulding applications"
                                }
                            }
                            div { class: "info-card",
                                div { class: "info-icon", "✓" }
                                h4 { "Fair & Competitive Pricing" }
                                p {
                                    "Transparent pricing structure balancing cost efficiency "
                                    "with dependable performance"
                                }
                            }
                            div { class: "info-card",
                                div { class: "info-icon", "✓" }
                                h4 { "Dependable Supply" }
                                p {
                                    "Consistent deliveries and responsive service to keep your "
                                    "production running without interruption"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
