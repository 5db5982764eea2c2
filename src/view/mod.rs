pub mod post_renderer;
pub mod post_view;

pub use post_renderer::{PostRenderer, RenderedPost};
pub use post_view::PostView;
