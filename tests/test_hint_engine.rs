use pytutor_insight::{infer, AdvisoryCategory};

#[test]
fn empty_source_gets_placeholders_and_no_warnings() {
    let report = infer("", &[]);
    assert_eq!(report.hints.len(), 1);
    assert_eq!(report.hints[0].content, "No specific hints for this code yet.");
    assert_eq!(report.best_practices.len(), 1);
    assert_eq!(
        report.best_practices[0].content,
        "No specific best practices for this code yet."
    );
    assert!(report.warnings.is_empty());
}

#[test]
fn infer_is_idempotent() {
    let src = "import os\n\nwhile True:\n    if os.path.exists(\"x\"):\n        print(\"found\")\n";
    let first = infer(src, &[]);
    let second = infer(src, &[]);
    assert_eq!(first, second);
    assert_eq!(first.total(), second.total());
}

#[test]
fn while_loop_fires_hint_and_warning() {
    let report = infer("while True:\n    pass\n", &[]);
    assert!(report
        .hints
        .iter()
        .any(|m| m.content.contains("While loops continue until a condition becomes False")));
    assert!(report
        .warnings
        .iter()
        .any(|m| m.content.contains("avoid infinite loops")));
}

#[test]
fn author_hints_come_first_in_supplied_order() {
    let task_hints = vec![
        "Think about the base case.".to_string(),
        "Use a dictionary for counting.".to_string(),
    ];
    let report = infer("for x in data:\n    print(x)\n", &task_hints);
    assert_eq!(report.hints[0].title, "Task Hint 1");
    assert_eq!(report.hints[0].content, "Think about the base case.");
    assert_eq!(report.hints[1].title, "Task Hint 2");
    assert!(report.hints.len() > 2, "code-derived hints follow the prefix");
}

#[test]
fn author_hints_are_not_deduplicated_against_code_hints() {
    let duplicate = "For loops iterate over sequences like lists, tuples, or strings.".to_string();
    let report = infer("for x in data:\n    pass\n", &[duplicate.clone()]);
    let occurrences = report
        .hints
        .iter()
        .filter(|m| m.content == duplicate)
        .count();
    assert_eq!(occurrences, 2);
}

#[test]
fn author_hints_alone_suppress_hint_placeholder() {
    let report = infer("", &["Authored hint.".to_string()]);
    assert_eq!(report.hints.len(), 1);
    assert_eq!(report.hints[0].title, "Task Hint 1");
}

#[test]
fn catalog_order_is_stable() {
    let src = "import os\n\ndef run():\n    for x in range(3):\n        if x:\n            print(x)\n";
    let report = infer(src, &[]);
    let titles: Vec<&str> = report.hints.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "String Formatting",
            "Functions & Docstrings",
            "Loop Iteration",
            "Conditionals"
        ]
    );
}

#[test]
fn bare_except_warns_but_qualified_does_not() {
    let bare = "try:\n    run()\nexcept:\n    pass\n";
    let report = infer(bare, &[]);
    assert!(report
        .warnings
        .iter()
        .any(|m| m.content.contains("Avoid bare except clauses")));

    let qualified = "try:\n    run()\nexcept ValueError:\n    pass\n";
    let report = infer(qualified, &[]);
    assert!(!report
        .warnings
        .iter()
        .any(|m| m.content.contains("Avoid bare except clauses")));
}

#[test]
fn global_keyword_warns() {
    let report = infer("def f():\n    global counter\n    counter += 1\n", &[]);
    assert!(report
        .warnings
        .iter()
        .any(|m| m.content.contains("Use global variables sparingly")));
}

#[test]
fn import_recommends_top_of_file() {
    let report = infer("import sys\n", &[]);
    assert!(report
        .best_practices
        .iter()
        .any(|m| m.content.contains("top of your file")));
}

#[test]
fn style_reminder_closes_best_practices_when_triggers_fired() {
    let report = infer("for x in range(3):\n    print(x)\n", &[]);
    let last = report.best_practices.last().unwrap();
    assert!(last.content.contains("PEP 8"));
    assert_eq!(last.category, AdvisoryCategory::BestPractice);
}

#[test]
fn keywords_inside_strings_do_not_fire_triggers() {
    // Differs from naive substring matching on purpose
    let report = infer("message = \"for while import global\"\n", &[]);
    assert_eq!(report.hints[0].content, "No specific hints for this code yet.");
    assert!(report.warnings.is_empty());
}

#[test]
fn every_message_lands_in_its_category_list() {
    let src = "import os\nwhile True:\n    print(\"x\")\n";
    let report = infer(src, &[]);
    assert!(report.hints.iter().all(|m| m.category == AdvisoryCategory::Hint));
    assert!(report
        .best_practices
        .iter()
        .all(|m| m.category == AdvisoryCategory::BestPractice));
    assert!(report
        .warnings
        .iter()
        .all(|m| m.category == AdvisoryCategory::Warning));
}
