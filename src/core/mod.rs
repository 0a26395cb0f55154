pub mod models;
pub mod theme;

pub use theme::CardTheme;
