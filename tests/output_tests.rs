use gclog_analyzer::output::{read_summary, render_text, write_summary, Summary};
use gclog_analyzer::reader::{read_model, GcResource};
use gclog_analyzer::utils::config::SCHEMA_VERSION;

fn fixture(name: &str) -> GcResource {
    GcResource::new(format!(
        "{}/tests/fixtures/{}",
        env!("CARGO_MANIFEST_DIR"),
        name
    ))
}

#[test]
fn test_summary_of_fixture() {
    let model = read_model(&mut fixture("rotation_merged.jsonl")).unwrap();
    let summary = Summary::from_model(&model);

    assert_eq!(summary.version, SCHEMA_VERSION);
    assert_eq!(summary.events.total, 19);
    assert_eq!(summary.events.full_gc, 1);
    assert_eq!(summary.pauses.full.count, 1);
    assert_eq!(summary.pauses.vm_operation.count, 3);
    assert_eq!(summary.memory.footprint, Some(253952));
    assert!(summary.pauses.concurrent.contains_key("CMS-concurrent-mark"));
    assert!(summary.pauses.by_type.contains_key("GC; ParNew"));
    assert!(summary.throughput.unwrap() > 0.9);
    assert_eq!(summary.memory.heap.allocated.max, Some(253952.0));
    assert!(summary.memory.young.allocated.count > 0);
    assert!(summary.pauses.concurrent_duration.contains_key("CMS-concurrent-mark"));
}

#[test]
fn test_summary_file_roundtrip() {
    let model = read_model(&mut fixture("rotation_a.jsonl")).unwrap();
    let summary = Summary::from_model(&model);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out/summary.json");
    write_summary(&summary, &path).unwrap();

    let loaded = read_summary(&path).unwrap();
    assert_eq!(loaded.events, summary.events);
    assert_eq!(loaded.url, summary.url);
    assert_eq!(loaded.pauses.all.count, summary.pauses.all.count);
}

#[test]
fn test_render_text_lists_pause_types() {
    let model = read_model(&mut fixture("rotation_b.jsonl")).unwrap();
    let text = render_text(&Summary::from_model(&model));

    assert!(text.contains("Full GC; Tenured; Perm"));
    assert!(text.contains("CMS-concurrent-sweep"));
}

#[test]
fn test_malformed_lines_skipped() {
    let model = read_model(&mut fixture("with_garbage.jsonl")).unwrap();
    assert_eq!(model.size(), 2);
    assert_eq!(model.first_timestamp(), Some(2.125));
    assert_eq!(model.last_timestamp(), Some(5.5));
}
