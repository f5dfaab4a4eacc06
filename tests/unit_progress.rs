use questlog::goal::{task_points, Document, GOAL_TARGET, HARDCORE_POINTS, NORMAL_POINTS};

#[test]
fn points_match_the_weights() {
    assert_eq!(task_points(true), HARDCORE_POINTS);
    assert_eq!(task_points(false), NORMAL_POINTS);
    assert_eq!(HARDCORE_POINTS, 5);
    assert_eq!(NORMAL_POINTS, 1);
    assert_eq!(GOAL_TARGET, 50);
}

#[test]
fn progress_is_a_pure_function_of_tasks() {
    let mut doc = Document::default();
    assert_eq!(doc.progress(), 0.0);

    doc.add_task("a", true);
    doc.add_task("b", false);
    // Nothing completed yet; added tasks do not score.
    assert_eq!(doc.progress(), 0.0);

    doc.tasks.get_mut("a").unwrap().completed = true;
    assert_eq!(doc.score(), 5);
    assert_eq!(doc.progress(), 0.1);

    doc.tasks.get_mut("b").unwrap().completed = true;
    assert_eq!(doc.score(), 6);
    assert_eq!(doc.progress(), 0.12);
}

#[test]
fn progress_never_leaves_unit_interval() {
    let mut doc = Document::default();
    for i in 0..100 {
        doc.add_task(&format!("t-{i}"), i % 2 == 0);
        doc.tasks.get_mut(&format!("t-{i}")).unwrap().completed = true;
        let progress = doc.progress();
        assert!((0.0..=1.0).contains(&progress), "progress {progress} out of range");
    }
    assert_eq!(doc.progress(), 1.0);
}

#[test]
fn goal_reached_only_at_the_target() {
    let mut doc = Document::default();
    for i in 0..9 {
        doc.add_task(&format!("h-{i}"), true);
        doc.tasks.get_mut(&format!("h-{i}")).unwrap().completed = true;
    }
    assert_eq!(doc.score(), 45);
    assert!(!doc.goal_reached());

    doc.add_task("h-9", true);
    doc.tasks.get_mut("h-9").unwrap().completed = true;
    assert_eq!(doc.score(), 50);
    assert!(doc.goal_reached());
}

#[test]
fn document_serializes_with_expected_field_names() {
    let mut doc = Document::default();
    doc.goal = Some("wire format".to_string());
    doc.add_task("t", true);

    let json = serde_json::to_value(&doc).unwrap();
    assert_eq!(json["goal"], "wire format");
    assert_eq!(json["tasks"]["t"]["completed"], false);
    assert_eq!(json["tasks"]["t"]["hardcore"], true);
    assert!(json["completed_tasks"].as_array().unwrap().is_empty());
}

#[test]
fn document_tolerates_unknown_fields() {
    let json = r#"{
        "goal": "forward compat",
        "tasks": {"t": {"completed": true, "hardcore": false, "color": "red"}},
        "completed_tasks": [{"name": "t", "time": "2024-01-01 00:00:00"}],
        "extra": 42
    }"#;

    let doc: Document = serde_json::from_str(json).unwrap();
    assert_eq!(doc.score(), 1);
    // Weight snapshot absent in older records: treated as normal.
    assert!(!doc.completed_tasks[0].hardcore);
}
