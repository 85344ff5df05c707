use serde::{Deserialize, Serialize};

/// A story ready for playback: its identifier plus one slide per image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryData {
    /// Folder name of the story, which is also its identifier.
    pub name: String,
    pub slides: Vec<Slide>,
}

/// One page of the slideshow.
///
/// Segment `i` of the text is paired with image `i + 1`. The pairing is
/// positional; nothing in the text decides which image it gets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    /// Text shown with this slide. May be empty when the story is short.
    pub paragraph: String,
    /// Image path relative to the assets root, e.g. `my_story/image_1.png`.
    pub image: String,
    /// Narration for the slide. Always `None` for now; serialized as `null`.
    pub audio: Option<String>,
}
