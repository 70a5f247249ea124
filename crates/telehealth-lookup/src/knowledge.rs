//! Single data-access interface over the index and the reference tables.

use std::fmt;
use std::path::{Path, PathBuf};

use telehealth_ingest::{Result, read_listing_table, read_long_table};
use telehealth_model::{DatasetLayout, DiseaseProfile, LongTable, SymptomSeverity};

use crate::catalog::ReferenceCatalog;
use crate::index::LookupIndex;

/// Identifier column of the listing dataset.
pub const LISTING_IDENTIFIER_COLUMN: &str = "Disease";

/// Which file the lookup index is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexSource {
    /// Long association table written by the reshaper.
    #[default]
    Associations,
    /// Listing dataset with symptom names as cell values.
    Listing,
}

impl IndexSource {
    /// Default file for this source within `layout`.
    pub fn default_path(self, layout: &DatasetLayout) -> PathBuf {
        match self {
            Self::Associations => layout.associations_path(),
            Self::Listing => layout.listing_path(),
        }
    }

    /// Reads association records from `path` according to this source's format.
    pub fn read(self, path: &Path) -> Result<LongTable> {
        match self {
            Self::Associations => read_long_table(path),
            Self::Listing => read_listing_table(path, LISTING_IDENTIFIER_COLUMN),
        }
    }

    /// Reads `path` in this source's format and builds the lookup index.
    pub fn load_index(self, path: &Path) -> Result<LookupIndex> {
        let table = self.read(path)?;
        let index = LookupIndex::build(&table);
        tracing::info!(
            path = %path.display(),
            source = %self,
            diseases = index.disease_count(),
            symptoms = index.symptom_count(),
            "Loaded lookup index"
        );
        Ok(index)
    }
}

impl fmt::Display for IndexSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Associations => f.write_str("associations"),
            Self::Listing => f.write_str("listing"),
        }
    }
}

/// Lookup index plus reference catalog.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    index: LookupIndex,
    catalog: ReferenceCatalog,
}

impl KnowledgeBase {
    pub fn new(index: LookupIndex, catalog: ReferenceCatalog) -> Self {
        Self { index, catalog }
    }

    /// Loads the index from `index_path` (or the source's default file) and
    /// the reference catalog from `layout`.
    pub fn load(
        layout: &DatasetLayout,
        source: IndexSource,
        index_path: Option<&Path>,
    ) -> Result<Self> {
        let path = index_path.map_or_else(|| source.default_path(layout), Path::to_path_buf);
        let index = source.load_index(&path)?;
        let catalog = ReferenceCatalog::load(layout)?;
        Ok(Self::new(index, catalog))
    }

    pub fn index(&self) -> &LookupIndex {
        &self.index
    }

    pub fn catalog(&self) -> &ReferenceCatalog {
        &self.catalog
    }

    /// Assembles everything known about `disease`.
    ///
    /// Unknown diseases yield a profile with no symptoms, no description and
    /// no precautions.
    pub fn profile(&self, disease: &str) -> DiseaseProfile {
        let symptoms = self
            .index
            .get_symptoms(disease)
            .iter()
            .map(|symptom| SymptomSeverity::new(symptom.as_str(), self.catalog.weight_of(symptom)))
            .collect();
        DiseaseProfile {
            disease: disease.to_string(),
            symptoms,
            description: self.catalog.description(disease).map(str::to_string),
            precautions: self.catalog.precautions(disease).to_vec(),
        }
    }
}
