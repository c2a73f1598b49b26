pub mod assets;
pub mod reveal;
pub mod style;
