use std::collections::BTreeSet;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use telehealth_ingest::{
    append_history, default_long_path, read_history, reshape_file, write_long_table,
};
use telehealth_lookup::{IndexSource, KnowledgeBase, LookupIndex};
use telehealth_model::{HistoryEntry, HistorySummary};

use crate::cli::{DatasetArgs, ReshapeArgs};
use crate::types::{ProfileResult, ReshapeResult};

pub fn run_reshape(dataset: &DatasetArgs, args: &ReshapeArgs) -> Result<ReshapeResult> {
    let input = args
        .input
        .clone()
        .unwrap_or_else(|| dataset.layout().wide_path());
    let span = info_span!("reshape", input = %input.display());
    let _guard = span.enter();

    let table = reshape_file(&input, &args.id_column, &args.presence)
        .with_context(|| format!("reshape {}", input.display()))?;
    let diseases = table.diseases().len();

    let output = if args.dry_run {
        info!(pairs = table.len(), "Dry run, output not written");
        None
    } else {
        let path = args
            .output
            .clone()
            .unwrap_or_else(|| default_long_path(&input));
        write_long_table(&table, &path)
            .with_context(|| format!("write long table {}", path.display()))?;
        Some(path)
    };

    Ok(ReshapeResult {
        input,
        output,
        pairs: table.len(),
        diseases,
    })
}

/// Builds the lookup index alone; commands that need no reference data use this.
fn load_index(dataset: &DatasetArgs) -> Result<LookupIndex> {
    let source: IndexSource = dataset.index_source.into();
    let path = dataset
        .index
        .clone()
        .unwrap_or_else(|| source.default_path(&dataset.layout()));
    source
        .load_index(&path)
        .with_context(|| format!("load {source} index from {}", path.display()))
}

fn load_knowledge(dataset: &DatasetArgs) -> Result<KnowledgeBase> {
    KnowledgeBase::load(
        &dataset.layout(),
        dataset.index_source.into(),
        dataset.index.as_deref(),
    )
    .context("load dataset")
}

pub fn run_symptoms(dataset: &DatasetArgs, disease: &str) -> Result<Vec<String>> {
    let index = load_index(dataset)?;
    Ok(index.get_symptoms(disease).to_vec())
}

pub fn run_diseases(dataset: &DatasetArgs, symptoms: &[String]) -> Result<BTreeSet<String>> {
    let index = load_index(dataset)?;
    Ok(index.get_possible_diseases(symptoms))
}

pub fn run_search(dataset: &DatasetArgs, query: &str) -> Result<Vec<String>> {
    let index = load_index(dataset)?;
    Ok(index
        .search_diseases(query)
        .into_iter()
        .map(str::to_string)
        .collect())
}

pub fn run_profile(dataset: &DatasetArgs, disease: &str, save: bool) -> Result<ProfileResult> {
    let knowledge = load_knowledge(dataset)?;
    let profile = knowledge.profile(disease);

    let saved_to = if !save {
        None
    } else if profile.is_unknown() {
        warn!(disease, "Unknown disease, lookup not saved to history");
        None
    } else {
        let path = dataset.history_path();
        append_history(&path, &HistoryEntry::new(disease, profile.symptom_count()))
            .with_context(|| format!("save history to {}", path.display()))?;
        Some(path)
    };

    Ok(ProfileResult { profile, saved_to })
}

pub fn run_history_list(dataset: &DatasetArgs) -> Result<Vec<HistoryEntry>> {
    let path = dataset.history_path();
    read_history(&path).with_context(|| format!("read history {}", path.display()))
}

pub fn run_history_stats(dataset: &DatasetArgs) -> Result<HistorySummary> {
    let entries = run_history_list(dataset)?;
    Ok(HistorySummary::from_entries(&entries))
}
