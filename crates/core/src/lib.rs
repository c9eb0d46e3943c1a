//! Core domain types, markdown line classification, and static slide
//! content for rendering the RASS Academy user guide.

pub mod deck;
pub mod emphasis;
pub mod error;
pub mod guide;
pub mod markdown;
pub mod types;

pub use deck::{BodyLine, Deck, Slide, SlideTitle, TextBox};
pub use emphasis::lex_bold;
pub use error::{Error, Result};
pub use guide::build_document;
pub use markdown::{classify_line, ConverterOptions, LineKind, MarkdownConverter, ScanState};
pub use types::{Alignment, Block, Document, Emphasis, Margins, Rgb, Span};
