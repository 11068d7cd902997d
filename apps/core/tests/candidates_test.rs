use std::collections::HashSet;

use appsview_core::candidates::{build_candidates, CandidateSource};

#[test]
fn declared_icon_yields_lowercase_then_dotted_suffix() {
    let list = build_candidates(Some("org.example.App"), Some("app"), Some("App"));
    let names = list.names();

    assert_eq!(names, vec!["org.example.App", "app", "App", "org.example.app"]);
}

#[test]
fn dotted_suffix_comes_after_its_lowercase_form() {
    let list = build_candidates(Some("org.example.App"), None, None);
    assert_eq!(list.names(), vec!["org.example.App", "org.example.app", "app"]);
    assert_eq!(list.entries()[2].source, CandidateSource::DottedSuffix);
}

#[test]
fn exec_hint_without_descriptor_is_tried_first() {
    let list = build_candidates(None, Some("firefox"), Some("Firefox"));
    assert_eq!(list.names(), vec!["firefox", "Firefox"]);
    assert_eq!(list.entries()[0].source, CandidateSource::ExecName);
}

#[test]
fn never_empty_or_duplicated_for_any_input_combination() {
    let values = [
        None,
        Some(""),
        Some("firefox"),
        Some("Firefox"),
        Some("org.mozilla.Firefox"),
        Some("Mozilla Firefox"),
        Some("."),
        Some(" "),
        Some("a.b c.D"),
    ];

    for declared in values {
        for exec in values {
            for hint in values {
                let list = build_candidates(declared, exec, hint);
                let names = list.names();
                let unique: HashSet<&str> = names.iter().copied().collect();

                assert_eq!(unique.len(), names.len(), "{declared:?} {exec:?} {hint:?}");
                assert!(
                    names.iter().all(|n| !n.is_empty()),
                    "{declared:?} {exec:?} {hint:?}"
                );
            }
        }
    }
}

#[test]
fn whitespace_only_entries_do_not_produce_blank_variants() {
    let list = build_candidates(Some(" "), None, Some(" "));
    assert_eq!(list.names(), vec![" "]);
}
