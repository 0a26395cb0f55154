pub mod components;
pub mod html;
pub mod layout;
pub mod primitives;
pub mod tree;

pub use components::*;
pub use html::HtmlPrimitives;
pub use layout::compose_card;
pub use primitives::*;
pub use tree::{Node, TreeBuilder};
