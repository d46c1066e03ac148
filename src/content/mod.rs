//! Content module - handles posts, front-matter, and heading outlines

mod frontmatter;
pub mod heading;
pub mod loader;
mod palette;
mod post;

pub use frontmatter::{FrontMatter, FrontMatterError};
pub use post::Post;
