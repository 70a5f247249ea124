//! Lookup layer for the telehealth disease-symptom toolkit.
//!
//! - [`LookupIndex`]: disease→symptoms and symptom→diseases, built once from a
//!   long table and read-only afterwards
//! - [`ReferenceCatalog`]: descriptions, precautions and severity weights
//! - [`KnowledgeBase`]: both of the above behind one interface, producing
//!   [`DiseaseProfile`](telehealth_model::DiseaseProfile)s
//!
//! Nothing here is global: callers build the values they need and pass them
//! around by reference. All types are `Send + Sync`.

mod catalog;
mod index;
mod knowledge;

pub use catalog::ReferenceCatalog;
pub use index::{LookupIndex, load_index};
pub use knowledge::{IndexSource, KnowledgeBase, LISTING_IDENTIFIER_COLUMN};
