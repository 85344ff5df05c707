//! Serves generated bedtime stories as fixed-length illustrated slide decks.
//!
//! Each story lives in its own folder under an assets root, holding one text
//! file and a fixed number of numbered images. [`catalog`] decides which
//! folders are complete, [`segment`] cuts a story's text into one segment per
//! image, and [`slides`] pairs the two for the viewer.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod generate;
pub mod models;
pub mod segment;
pub mod slides;
