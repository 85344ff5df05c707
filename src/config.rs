//! Story folder layout shared by the catalog and slide assembly.
//!
//! Environment variables (all optional):
//! - `STORY_SLIDES_IMAGES_PER_STORY` - images (and slides) per story (default: 5)
//! - `STORY_SLIDES_IMAGE_EXTENSION` - image file extension including the dot (default: `.png`)
//! - `STORY_SLIDES_STORY_FILE` - name of the story text file (default: `story.txt`)

use serde::{Deserialize, Serialize};

/// Default number of images expected in every story folder.
pub const DEFAULT_IMAGES_PER_STORY: usize = 5;
/// Default image extension, dot included.
pub const DEFAULT_IMAGE_EXTENSION: &str = ".png";
/// Default name of the text file inside a story folder.
pub const DEFAULT_STORY_FILE_NAME: &str = "story.txt";

/// Layout of a single story folder on disk.
///
/// The same value must be handed to the catalog and to slide assembly so
/// that the number of slides always equals the number of images checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryConfig {
    /// Number of `image_<k>` files a complete story carries. Also the slide count.
    pub images_per_story: usize,
    /// Extension appended to every image name, e.g. `.png`.
    pub image_extension: String,
    /// Name of the text file holding the story.
    pub story_file_name: String,
}

impl Default for StoryConfig {
    fn default() -> Self {
        Self {
            images_per_story: DEFAULT_IMAGES_PER_STORY,
            image_extension: DEFAULT_IMAGE_EXTENSION.to_string(),
            story_file_name: DEFAULT_STORY_FILE_NAME.to_string(),
        }
    }
}

impl StoryConfig {
    /// Load the layout from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let raw_images = std::env::var("STORY_SLIDES_IMAGES_PER_STORY").ok();
        let images_per_story = parse_images_per_story(raw_images.as_deref());

        let raw_extension = std::env::var("STORY_SLIDES_IMAGE_EXTENSION").ok();
        let image_extension = parse_image_extension(raw_extension.as_deref())
            .unwrap_or(defaults.image_extension);

        let story_file_name = std::env::var("STORY_SLIDES_STORY_FILE")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(|s| s.trim().to_string())
            .unwrap_or(defaults.story_file_name);

        Self {
            images_per_story,
            image_extension,
            story_file_name,
        }
    }

    /// Create a layout with a different image count (useful in tests).
    pub fn with_images_per_story(images_per_story: usize) -> Self {
        Self {
            images_per_story,
            ..Self::default()
        }
    }

    /// File name of the `k`-th image (1-based), e.g. `image_3.png`.
    pub fn image_file_name(&self, k: usize) -> String {
        format!("image_{}{}", k, self.image_extension)
    }

    /// All expected image names in slide order.
    pub fn image_file_names(&self) -> Vec<String> {
        (1..=self.images_per_story)
            .map(|k| self.image_file_name(k))
            .collect()
    }
}

/// Image count from its raw env value. Missing, unparsable or zero values
/// fall back to [`DEFAULT_IMAGES_PER_STORY`].
fn parse_images_per_story(raw: Option<&str>) -> usize {
    let Some(raw) = raw else {
        return DEFAULT_IMAGES_PER_STORY;
    };
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => n,
        _ => {
            tracing::warn!(
                "Ignoring invalid STORY_SLIDES_IMAGES_PER_STORY={:?}, using {}",
                raw,
                DEFAULT_IMAGES_PER_STORY
            );
            DEFAULT_IMAGES_PER_STORY
        }
    }
}

/// Extension from its raw env value, with a leading dot. `None` when blank.
fn parse_image_extension(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|ext| !ext.is_empty())
        .map(normalize_extension)
}

fn normalize_extension(ext: &str) -> String {
    if ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{}", ext)
    }
}
