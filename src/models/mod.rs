//! Data returned to the request-facing layer.
//!
//! - [`StoryData`]: a named story split into slides, ready for the viewer.
//! - [`Slide`]: one text segment paired by position with one image.
//!
//! These are plain serde structs with no framework types, so the HTTP layer
//! and the CLI serialize the same values.

mod story;

pub use story::*;
