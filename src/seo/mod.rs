//! SEO metadata: descriptors, JSON-LD emitters and the head model.
//!
//! - [`descriptor`]: `(page, language) -> MetadataDescriptor`
//! - [`schema`]: pure JSON-LD builders
//! - [`head`]: keyed head model, parser, serializer and synchronizer

pub mod descriptor;
pub mod head;
pub mod schema;

pub use descriptor::DescriptorTable;
pub use head::{HeadSync, SyncReport};
