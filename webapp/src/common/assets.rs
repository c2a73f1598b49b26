use constcat::concat;

// bundled image locations; the markup falls back to text placeholders
// wherever one of these is missing from the deployed tree

const ASSET_BASE: &str = "/assets";

pub const LOGO_IMG: &str = concat!(ASSET_BASE, "/logo.png");
pub const COMPANY_IMG: &str = concat!(ASSET_BASE, "/company.png");

pub const PRODUCT_BLACK_IMG: &str = concat!(ASSET_BASE, "/products/black.png");
pub const PRODUCT_COLOURED_IMG: &str = concat!(ASSET_BASE, "/products/colored.png");
