//! Sprite rendering building blocks.
//!
//! Submodules overview:
//! - [`animatedsprite`] – sprite-sheet clip playback, frame resolution, and
//!   the textured draw call that puts the current frame on screen

pub mod animatedsprite;
