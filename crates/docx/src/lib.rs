//! DOCX (WordprocessingML) writer backend for the guide renderer.
//!
//! Renders a [`guide_core::Document`] into a minimal WordprocessingML
//! package: document body, styles, numbering, and core properties.

pub mod styles;
pub mod writer;

pub use writer::DocxWriter;
