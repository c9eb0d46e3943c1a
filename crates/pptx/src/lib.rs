//! PPTX (PresentationML) writer backend for the guide renderer.
//!
//! Writes a [`guide_core::Deck`] as a .pptx package with one slide master,
//! two layouts, and a theme.

pub mod templates;
pub mod writer;

#[cfg(test)]
mod reader;

pub use writer::PptxWriter;
