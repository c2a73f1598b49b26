use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::catalog;
use crate::common::reveal::use_reveal;
use crate::Route;

#[derive(Clone, PartialEq, Props)]
pub struct ProductDetailProps {
    // comes in as a string straight from the router
    product_id: String,
}

#[component]
pub fn ProductDetail(props: ProductDetailProps) -> Element {
    use_reveal();

    let navigator = use_navigator();
    let product = catalog::find_product(&props.product_id);

    // stale or mistyped links drop back to the listing; no error page
    use_effect(move || {
        if product.is_none() {
            navigator.replace(Route::Products {});
        }
    });

    let Some(product) = product else {
        return rsx! {};
    };

    rsx! {
        div { class: "product-detail-page",
            section { class: "back-button-section",
                div { class: "container",
                    Link { class: "back-button", to: Route::Products {}, "← Back to Products" }
                }
            }

            section { class: "product-detail-header",
                div { class: "container",
                    h1 { class: "page-title fade-in", "{product.name}" }
                }
            }

            section { class: "section product-details-section",
                div { class: "container",
                    div { class: "product-detail-content fade-in",
                        div { class: "product-detail-image",
                            match product.image {
                                Some(src) => rsx! {
                                    img {
                                        src: src,
                                        alt: product.name,
                                        class: "detail-product-img",
                                    }
                                },
                                None => rsx! {
                                    div { class: "detail-placeholder-image",
                                        span { "{product.name}" }
                                    }
                                },
                            }
                        }

                        div { class: "product-detail-text",
                            h2 { "Product Description" }
                            p { "{product.description}" }
                        }
                    }

                    div { class: "specifications-section fade-in",
                        h2 { class: "section-title", "Key Properties & Specifications" }

                        div { class: "specifications-table-container",
                            table { class: "specifications-table",
                                thead {
                                    tr {
                                        th { "Property" }
                                        th { "Specification" }
                                    }
                                }
                                tbody {
                                    for spec in product.specifications {
                                        tr {
                                            td { class: "property-cell", "{spec.property}" }
                                            td { class: "specification-cell", "{spec.specification}" }
                                        }
                                    }
                                }
                            }
                        }
                    }

                    div { class: "product-cta fade-in",
                        h3 { "Interested in this product?" }
                        p {
                            "Contact us today to discuss your requirements and get a "
                            "customized quote."
                        }
                        Link { class: "btn btn-primary", to: Route::Contact {}, "Contact Us" }
                    }
                }
            }
        }
    }
}
