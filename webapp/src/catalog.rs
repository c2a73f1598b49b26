use crate::common::assets;

// the product catalog is baked into the bundle; there is no backend to ask

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spec {
    pub property: &'static str,
    pub specification: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    // short text for the listing cards
    pub summary: &'static str,
    // long text for the detail page
    pub description: &'static str,
    // None renders the text placeholder instead of an img node
    pub image: Option<&'static str>,
    pub specifications: &'static [Spec],
}

pub const PRODUCTS: &[Product] = &[
    Product {
        id: "black-ppcp-granules",
        name: "Black PPCP Injection Grade Granules",
        summary: "Black PPCP recycled granules suitable for general injection moulding \
            applications requiring good impact strength and stable flow.",
        description: "Black PPCP recycled granules suitable for general injection moulding \
            applications requiring good impact strength and stable flow. These granules \
            deliver consistent quality for injection moulding, making them ideal for \
            manufacturers producing crates, bins, chairs, and other moulded products.",
        image: Some(assets::PRODUCT_BLACK_IMG),
        specifications: &[
            Spec { property: "MFI", specification: "8–12" },
            Spec { property: "Application", specification: "Crates, bins, chairs" },
            Spec {
                property: "Price Range",
                specification: "₹75–95/kg (grade & volume dependent)",
            },
            Spec { property: "Packaging", specification: "25 kg bags" },
            Spec { property: "MOQ", specification: "500 kg" },
            Spec { property: "Trial Samples", specification: "Available" },
        ],
    },
    Product {
        id: "premium-ppcp-granules",
        name: "Coloured PPCP Granules",
        summary: "Low-filler recycled PPCP granules developed for applications requiring \
            higher impact strength, better surface finish, and improved consistency.",
        description: "Low-filler recycled Coloured/Black PPCP granules developed for \
            injection moulding applications that require higher impact strength, better \
            surface finish, and improved consistency compared to standard grades. This \
            grade is suitable for moulders looking to reduce breakage, improve cycle \
            stability, and maintain consistent performance across batches.",
        image: Some(assets::PRODUCT_COLOURED_IMG),
        specifications: &[
            Spec { property: "MFI", specification: "8–11" },
            Spec {
                property: "Application",
                specification: "Heavy-duty crates, chair components, thick-wall moulded products",
            },
            Spec { property: "Filler Content", specification: "Controlled, low filler" },
            Spec {
                property: "Price Range",
                specification: "₹90–110/kg (grade & volume dependent)",
            },
            Spec { property: "Packaging", specification: "25 kg bags" },
            Spec { property: "MOQ", specification: "500 kg" },
            Spec { property: "Trial Samples", specification: "Available" },
        ],
    },
];

pub fn find_product(slug: &str) -> Option<&'static Product> {
    PRODUCTS.iter().find(|product| product.id == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_slugs_resolve() {
        let black = find_product("black-ppcp-granules").expect("black grade listed");
        assert_eq!(black.name, "Black PPCP Injection Grade Granules");
        assert!(black.image.is_some());
        assert_eq!(black.specifications[0].property, "MFI");

        let premium = find_product("premium-ppcp-granules").expect("premium grade listed");
        assert_eq!(premium.name, "Coloured PPCP Granules");
    }

    #[test]
    fn unknown_slugs_miss() {
        assert_eq!(find_product("unknown-slug"), None);
        assert_eq!(find_product(""), None);
        // lookup is exact, not prefixed
        assert_eq!(find_product("black-ppcp"), None);
    }

    #[test]
    fn listing_order_is_stable() {
        let ids: Vec<&str> = PRODUCTS.iter().map(|product| product.id).collect();
        assert_eq!(ids, vec!["black-ppcp-granules", "premium-ppcp-granules"]);
    }
}
