//! Content loader - loads posts from the posts directory

use rand::Rng;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

use super::frontmatter::FrontMatterError;
use super::{FrontMatter, Post};
use crate::config::BlogConfig;

/// Why a posts directory could not be loaded
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Blog directory not found: {0}")]
    MissingDirectory(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse front-matter in {path}: {source}")]
    FrontMatter {
        path: PathBuf,
        #[source]
        source: FrontMatterError,
    },
}

/// Loads posts from a single directory
#[derive(Debug, Clone)]
pub struct PostLoader {
    posts_dir: PathBuf,
    config: BlogConfig,
}

impl PostLoader {
    /// Create a new loader for `posts_dir`
    pub fn new<P: AsRef<Path>>(posts_dir: P, config: BlogConfig) -> Self {
        Self {
            posts_dir: posts_dir.as_ref().to_path_buf(),
            config,
        }
    }

    /// Directory this loader reads from
    pub fn posts_dir(&self) -> &Path {
        &self.posts_dir
    }

    /// Load all posts, sorted by id, reporting what went wrong
    pub fn load_posts(&self) -> Result<Vec<Post>, LoadError> {
        self.load_posts_with_rng(&mut rand::rng())
    }

    /// Same as [`load_posts`](Self::load_posts) with an explicit color source
    pub fn load_posts_with_rng<R: Rng>(&self, rng: &mut R) -> Result<Vec<Post>, LoadError> {
        if !self.posts_dir.is_dir() {
            return Err(LoadError::MissingDirectory(self.posts_dir.clone()));
        }

        let mut posts = Vec::new();

        for entry in WalkDir::new(&self.posts_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(&self.posts_dir).to_path_buf();
                LoadError::Io {
                    path,
                    source: e.into(),
                }
            })?;

            let path = entry.path();
            if entry.file_type().is_file() && is_markdown_file(path) {
                posts.push(self.load_post(path, rng)?);
            }
        }

        // Stable: equal ids keep listing order, posts without an id go last
        posts.sort_by_key(|post| (post.id.is_none(), post.id));

        Ok(posts)
    }

    /// Load all posts, logging and swallowing any failure
    pub fn get_all_posts(&self) -> Vec<Post> {
        match self.load_posts() {
            Ok(posts) => posts,
            Err(LoadError::MissingDirectory(dir)) => {
                tracing::warn!("Blog directory not found: {:?}", dir);
                Vec::new()
            }
            Err(e) => {
                tracing::error!("Error loading blog posts: {}", e);
                Vec::new()
            }
        }
    }

    /// First post whose id, as decimal text, equals `id`
    pub fn get_post_by_id(&self, id: &str) -> Option<Post> {
        self.get_all_posts()
            .into_iter()
            .find(|post| post.matches_id(id))
    }

    /// Load a single post from a file
    fn load_post<R: Rng>(&self, path: &Path, rng: &mut R) -> Result<Post, LoadError> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let raw = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let (fm, body) = FrontMatter::parse(&raw).map_err(|source| LoadError::FrontMatter {
            path: path.to_path_buf(),
            source,
        })?;

        let title = fm
            .title()
            .unwrap_or(&self.config.default_title)
            .to_string();

        let mut post = Post::new(&file_name, title, &self.config.default_subtitle);
        post.color = self
            .config
            .color_mode
            .pick(&self.config.palette, &post.slug, rng);
        post.date = fm.parse_date();
        post.description = fm.description.unwrap_or_default();
        post.content = body.to_string();
        post.tags = fm.tags;
        post.full_source = path.to_path_buf();
        post.extra = fm.extra;

        tracing::debug!("Loaded post {:?} (id {:?})", path, post.id);

        Ok(post)
    }
}

/// Check if a file name ends in `.md`
fn is_markdown_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.ends_with(".md"))
        .unwrap_or(false)
}
