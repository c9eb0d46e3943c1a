//! Office Open XML packaging shared by the DOCX and PPTX writers.
//!
//! Parts are serialized with `quick-xml` and stored in a ZIP archive with
//! fixed timestamps, so identical input always yields identical bytes.

pub mod constants;
pub mod package;
pub mod rels;
pub mod xml;

pub use package::Package;
pub use rels::Relationships;
pub use xml::XmlWriter;
