use thiserror::Error;

/// Errors raised while serving a story by name.
///
/// Folders that fail the completeness check are not errors; they are simply
/// absent from the catalog, and asking for one yields [`StoryError::NotFound`].
#[derive(Debug, Error)]
pub enum StoryError {
    #[error("Story not found or invalid: {0}")]
    NotFound(String),

    /// The text file passed validation but could not be read afterwards.
    /// Usually a race with whatever writes the assets directory; safe to retry.
    #[error("Could not read story file for {name}: {source}")]
    ReadFailure {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while generating and saving a new story.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("OPENAI_API_KEY is not set")]
    MissingApiKey,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Completion API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Completion API returned no story text")]
    EmptyCompletion,

    #[error("Could not save story: {0}")]
    Io(#[from] std::io::Error),
}
