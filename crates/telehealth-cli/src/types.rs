use std::path::PathBuf;

use telehealth_model::DiseaseProfile;

/// Result of a reshape run.
#[derive(Debug)]
pub struct ReshapeResult {
    pub input: PathBuf,
    /// `None` for dry runs.
    pub output: Option<PathBuf>,
    pub pairs: usize,
    pub diseases: usize,
}

/// Result of a profile lookup.
#[derive(Debug)]
pub struct ProfileResult {
    pub profile: DiseaseProfile,
    /// History file the lookup was appended to, if saved.
    pub saved_to: Option<PathBuf>,
}
