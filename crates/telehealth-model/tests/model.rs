//! Tests for telehealth-model types working together.

use telehealth_model::{
    DiseaseProfile, HistoryEntry, HistorySummary, PresenceSentinel, SeverityLevel,
    SymptomSeverity,
};

#[test]
fn profile_levels_follow_weights() {
    let profile = DiseaseProfile {
        disease: "Heart attack".to_string(),
        symptoms: vec![
            SymptomSeverity::new("vomiting", Some(5)),
            SymptomSeverity::new("breathlessness", Some(4)),
            SymptomSeverity::new("chest_pain", Some(7)),
        ],
        description: Some("Blood flow to the heart is blocked.".to_string()),
        precautions: vec!["call ambulance".to_string(), "chew aspirin".to_string()],
    };

    let levels: Vec<SeverityLevel> = profile.symptoms.iter().map(|s| s.level).collect();
    assert_eq!(
        levels,
        vec![
            SeverityLevel::Moderate,
            SeverityLevel::Moderate,
            SeverityLevel::Severe
        ]
    );
    assert!(profile.requires_urgent_care());
    assert_eq!(profile.symptom_count(), 3);
}

#[test]
fn history_summary_counts_saved_lookups() {
    let entries: Vec<HistoryEntry> = ["Malaria", "Acne", "Malaria"]
        .into_iter()
        .map(|disease| HistoryEntry::new(disease, 3))
        .collect();
    let summary = HistorySummary::from_entries(&entries);
    assert_eq!(summary.counts[0], ("Malaria".to_string(), 2));
    assert_eq!(summary.total, 3);
}

#[test]
fn sentinel_parse_error_names_input() {
    let err = "sometimes".parse::<PresenceSentinel>().unwrap_err();
    assert!(err.to_string().contains("'sometimes'"));
}
