// tests/fixture_tests.rs

use texwc_core::{count_document, Mode, Section, Subsection, WordCount};

fn paper() -> WordCount {
    count_document(include_str!("fixtures/paper.tex")).unwrap()
}

#[test]
fn test_paper_is_latex() {
    assert_eq!(paper().mode(), Mode::Latex);
}

#[test]
fn test_paper_tree() {
    let WordCount::Latex(tree) = paper() else {
        panic!("Expected LaTeX count");
    };

    // "This abstract has six words total."
    assert_eq!(tree.preamble_words(), 6);

    assert_eq!(
        tree.sections,
        vec![
            Section {
                title: "Introduction".to_string(),
                word_count: 14,
                intro_words: 11,
                subsections: vec![Subsection {
                    title: "Motivation".to_string(),
                    word_count: 3,
                }],
            },
            Section {
                title: "Method".to_string(),
                word_count: 9,
                intro_words: 4,
                subsections: vec![Subsection {
                    title: "Cleaning".to_string(),
                    word_count: 5,
                }],
            },
            Section {
                title: "Acknowledgements".to_string(),
                word_count: 0,
                intro_words: 0,
                subsections: vec![],
            },
        ]
    );

    assert_eq!(tree.total_words, 29);
}

#[test]
fn test_paper_json_shape() {
    let json = serde_json::to_value(paper()).unwrap();
    assert_eq!(json["mode"], "latex");
    assert_eq!(json["total_words"], 29);
    assert_eq!(json["preamble"]["word_count"], 6);
    assert_eq!(json["sections"][0]["subsections"][0]["title"], "Motivation");
}

#[test]
fn test_plain_json_shape() {
    let count = count_document("Just plain text with five words").unwrap();
    let json = serde_json::to_value(&count).unwrap();
    assert_eq!(json, serde_json::json!({"mode": "plain", "total_words": 6}));
}
