//! The pairwise text experiment, end to end through the library.

use super::common::PASSAGES;
use delins::harness::{
    mean_time_by_variant, records_agree, text_stats, Experiment, NamedText,
};
use delins::{space_optimized, Limits, Variant};

fn passages() -> Vec<NamedText> {
    PASSAGES
        .iter()
        .map(|(name, text)| NamedText {
            name: name.to_string(),
            text: text.to_string(),
        })
        .collect()
}

#[test]
fn every_ordered_pair_gets_one_record_per_variant() {
    let texts = passages();
    let variants = vec![Variant::Memoized, Variant::Tabulated, Variant::SpaceOptimized];
    let records = Experiment::new(&texts, variants, 2, Limits::default()).run(|_| {});

    assert_eq!(records.len(), 6 * 3);
    assert!(records.iter().all(|r| r.runs == 2 && r.time_ms >= 0.0));
    assert_eq!(records_agree(&records), Ok(()));
}

#[test]
fn naive_never_runs_on_full_passages() {
    let texts = passages();
    let experiment = Experiment::new(&texts, Variant::ALL.to_vec(), 1, Limits::default());
    let jobs = experiment.jobs();
    assert_eq!(jobs.len(), 6 * 3);
    assert!(jobs.iter().all(|&(_, _, v)| v != Variant::Naive));

    let records = experiment.run(|_| {});
    let means = mean_time_by_variant(&records);
    assert_eq!(means.len(), 3);
    assert!(means.iter().all(|&(v, _)| v != Variant::Naive));
}

#[test]
fn records_are_symmetric_and_match_the_engine() {
    let texts = passages();
    let records =
        Experiment::new(&texts, vec![Variant::SpaceOptimized], 1, Limits::default()).run(|_| {});

    for record in &records {
        let reverse = records
            .iter()
            .find(|r| r.from == record.to && r.to == record.from)
            .unwrap();
        assert_eq!(record.distance, reverse.distance);

        let from = texts.iter().find(|t| t.name == record.from).unwrap();
        let to = texts.iter().find(|t| t.name == record.to).unwrap();
        assert_eq!((record.from_len, record.to_len), (from.text.len(), to.text.len()));
        assert_eq!(
            record.distance,
            space_optimized(from.text.as_bytes(), to.text.as_bytes())
        );
    }
}

#[test]
fn records_serialize_as_a_json_array() {
    let texts = passages();
    let records = Experiment::new(&texts[..2], vec![Variant::Tabulated], 1, Limits::default())
        .run(|_| {});
    let json = serde_json::to_value(&records).unwrap();
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["from"], "austen.txt");
    assert_eq!(rows[0]["to"], "melville.txt");
    assert_eq!(rows[0]["algo"], "dp");
}

#[test]
fn passage_word_counts() {
    let stats = text_stats(PASSAGES[0].1);
    assert_eq!(stats.words, 23);
    assert_eq!(stats.bytes, stats.chars);
}
