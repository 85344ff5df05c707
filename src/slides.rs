//! Turns a validated story folder into slides.

use std::fs;

use crate::catalog::Catalog;
use crate::error::StoryError;
use crate::models::{Slide, StoryData};
use crate::segment::segment;

/// Load, segment and pair the named story with its images.
///
/// The name is re-validated against the catalog first. A story that
/// disappears between that check and the read surfaces as
/// [`StoryError::ReadFailure`].
pub fn assemble_story(catalog: &Catalog, name: &str) -> Result<StoryData, StoryError> {
    let folder = catalog.resolve(name)?;
    let config = catalog.config();

    let text = fs::read_to_string(folder.join(&config.story_file_name)).map_err(|source| {
        StoryError::ReadFailure {
            name: name.to_string(),
            source,
        }
    })?;

    let slides = segment(&text, config.images_per_story)
        .into_iter()
        .zip(config.image_file_names())
        .map(|(paragraph, image)| Slide {
            paragraph,
            image: format!("{}/{}", name, image),
            audio: None,
        })
        .collect();

    Ok(StoryData {
        name: name.to_string(),
        slides,
    })
}
