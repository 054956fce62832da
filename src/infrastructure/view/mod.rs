//! In-memory presentation adapter.

mod markup;
mod view_tree;

pub use markup::{build_shell_view, demo_packages, demo_settings};
pub use view_tree::{Element, Node, ViewTree};
