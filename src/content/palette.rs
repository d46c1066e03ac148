//! Presentation color selection

use rand::Rng;

use crate::config::ColorMode;

impl ColorMode {
    /// Pick a color for the post identified by `slug`.
    ///
    /// Returns an empty string when the palette is empty.
    pub fn pick<R: Rng>(&self, palette: &[String], slug: &str, rng: &mut R) -> String {
        if palette.is_empty() {
            return String::new();
        }

        let index = match self {
            ColorMode::Random => rng.random_range(0..palette.len()),
            ColorMode::Stable => stable_index(slug, palette.len()),
        };

        palette[index].clone()
    }
}

/// FNV-1a over the slug bytes, reduced to a palette index
fn stable_index(slug: &str, len: usize) -> usize {
    let hash = slug.bytes().fold(0xcbf2_9ce4_8422_2325_u64, |hash, b| {
        (hash ^ u64::from(b)).wrapping_mul(0x0100_0000_01b3)
    });
    (hash % len as u64) as usize
}
