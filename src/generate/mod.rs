//! Writing new stories into the assets directory.
//!
//! A story is requested from a chat model, named after its title and saved
//! as `<assets>/<folder>/<story file>`. Images are added to the folder by a
//! separate process; until they all exist the story stays out of the catalog.

mod client;
mod title;

use std::fs;
use std::path::{Path, PathBuf};

pub use client::*;
pub use title::*;

use crate::config::StoryConfig;
use crate::error::GenerateError;

/// Instructions given to the model before the user prompt.
pub const SYSTEM_PROMPT: &str =
    "You are a creative storyteller who writes gentle bedtime stories for young children.";

/// Prompt used when none is given on the command line.
pub const DEFAULT_PROMPT: &str = "Write a short, happy and imaginative bedtime story for a child \
aged 3 to 6. Make it 5 to 7 paragraphs long, separated by blank lines. Begin with a title line \
such as 'Title: The Magical Starfish'. Keep the tone calm and end on a sleepy, positive note.";

/// Save `text` under a folder named after its title. Returns the folder path.
///
/// Writing the same title twice overwrites the earlier text.
pub fn save_story(
    assets_dir: &Path,
    config: &StoryConfig,
    text: &str,
) -> Result<PathBuf, GenerateError> {
    let title = extract_title(text);
    let folder = assets_dir.join(sanitize_folder_name(&title));

    fs::create_dir_all(&folder)?;
    fs::write(folder.join(&config.story_file_name), text)?;

    tracing::info!("Saved story {:?} to {}", title, folder.display());
    Ok(folder)
}

/// Generate a story with `client` and save it.
pub async fn generate_story(
    client: &StoryClient,
    assets_dir: &Path,
    config: &StoryConfig,
    prompt: &str,
) -> Result<PathBuf, GenerateError> {
    let text = client.complete(SYSTEM_PROMPT, prompt).await?;
    save_story(assets_dir, config, &text)
}
