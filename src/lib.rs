//! postshelf: markdown blog posts and heading outlines
//!
//! This crate loads `<id>.<slug>.md` posts from a directory, parses their
//! front-matter, and extracts a table-of-contents outline from markdown text.

pub mod config;
pub mod content;

pub use config::{BlogConfig, ColorMode};
pub use content::heading::{extract_headings, slugify, Heading};
pub use content::loader::{LoadError, PostLoader};
pub use content::{FrontMatter, FrontMatterError, Post};

use anyhow::Result;
use std::path::{Path, PathBuf};

/// A blog rooted at a base directory
#[derive(Debug, Clone)]
pub struct Blog {
    /// Blog configuration
    pub config: BlogConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Directory holding the markdown posts
    pub posts_dir: PathBuf,
}

impl Blog {
    /// Create a blog from a directory, reading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            BlogConfig::load(&config_path)?
        } else {
            BlogConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create a blog from an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: BlogConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let posts_dir = base_dir.join(&config.posts_dir);

        Self {
            config,
            base_dir,
            posts_dir,
        }
    }

    /// Build a loader for this blog's posts
    pub fn loader(&self) -> PostLoader {
        PostLoader::new(&self.posts_dir, self.config.clone())
    }

    /// Load every post, sorted by id
    pub fn get_all_posts(&self) -> Vec<Post> {
        self.loader().get_all_posts()
    }

    /// Find a post by its id as written in the filename
    pub fn get_post_by_id(&self, id: &str) -> Option<Post> {
        self.loader().get_post_by_id(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_blog_defaults_without_config_file() {
        let dir = TempDir::new().unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        assert_eq!(blog.posts_dir, dir.path().join("public/content/blogs"));
        assert!(blog.get_all_posts().is_empty());
    }

    #[test]
    fn test_blog_reads_config_file() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("_config.yml"),
            "posts_dir: posts\ncolor_mode: stable\n",
        )
        .unwrap();
        fs::create_dir(dir.path().join("posts")).unwrap();
        fs::write(
            dir.path().join("posts/3.third-post.md"),
            "---\ntitle: Third\n---\nBody\n",
        )
        .unwrap();

        let blog = Blog::new(dir.path()).unwrap();
        assert_eq!(blog.config.color_mode, ColorMode::Stable);

        let post = blog.get_post_by_id("3").unwrap();
        assert_eq!(post.title, "Third");
        assert!(blog.get_post_by_id("4").is_none());
    }

    #[test]
    fn test_blog_rejects_malformed_config() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("_config.yml"), "palette: [unterminated\n").unwrap();
        assert!(Blog::new(dir.path()).is_err());
    }
}
