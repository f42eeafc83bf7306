//! Declared-language validation scenarios

use codesniff::{Classifier, DetectionConfig, Error, Language, SignatureCatalog, Validator};
use indoc::indoc;
use pretty_assertions::assert_eq;

fn validator() -> Validator {
    Validator::default()
}

#[test]
fn test_typescript_declared_as_javascript_is_a_mismatch() {
    let verdict = validator().validate(Language::JavaScript, "interface Foo { bar: string }");
    assert!(!verdict.matches);
    assert_eq!(verdict.declared, Language::JavaScript);
    assert_eq!(verdict.detected, Language::TypeScript);
    assert!(verdict.confidence >= 0.4);
    assert!(verdict.suggestions.iter().any(|s| s.contains("TypeScript")));
    assert_eq!(
        verdict.suggestions[0],
        "This looks more like TypeScript than JavaScript."
    );
}

#[test]
fn test_empty_text_matches_any_declaration() {
    let verdict = validator().validate(Language::Python, "");
    assert!(verdict.matches);
    assert_eq!(verdict.confidence, 0.0);
    assert!(verdict.suggestions.is_empty());
}

#[test]
fn test_c_declared_for_c() {
    let verdict = validator().validate(Language::C, "int main() { return 0; }");
    assert!(verdict.matches);
    assert_eq!(verdict.detected, Language::C);
}

#[test]
fn test_correct_declarations_match() {
    let cases = [
        (Language::Python, "def add(a, b):\n    return a + b"),
        (Language::Rust, "fn main() { println!(\"hi\"); }"),
        (Language::TypeScript, "interface Foo { bar: string }"),
        (Language::Sql, "SELECT id FROM users WHERE id = 1;"),
    ];
    for (declared, text) in cases {
        let verdict = validator().validate(declared, text);
        assert!(verdict.matches, "{declared} should match {text:?}");
        assert!(verdict.suggestions.is_empty());
    }
}

#[test]
fn test_mismatch_cites_detected_markers() {
    let verdict = validator().validate(
        Language::Java,
        indoc! {"
            def greet(name):
                if name:
                    print(name)
        "},
    );
    assert!(!verdict.matches);
    assert_eq!(verdict.detected, Language::Python);
    assert_eq!(verdict.suggestions.len(), 3);
    assert_eq!(
        verdict.suggestions[1],
        "Found `def` keyword (strong marker for Python, matched 1x)"
    );
    assert!(verdict.suggestions[2].starts_with("Found "));
}

#[test]
fn test_javascript_declared_for_plain_javascript() {
    let verdict = validator().validate(
        Language::JavaScript,
        "const x = require('fs');\nconsole.log(x === undefined);",
    );
    assert!(verdict.matches);
}

#[test]
fn test_typescript_declared_for_javascript_tie_is_accepted() {
    // Identical scores: TypeScript ranks second but within tolerance
    let verdict = validator().validate(
        Language::TypeScript,
        "const x = require('fs');\nconsole.log(x === undefined);",
    );
    assert!(verdict.matches);
    assert_eq!(verdict.detected, Language::JavaScript);
}

#[test]
fn test_tolerance_is_configurable() {
    let strict = Validator::new(Classifier::new(
        SignatureCatalog::shared(),
        DetectionConfig {
            match_tolerance: 1.0,
            ..Default::default()
        },
    ));
    // C and C++ tie exactly, so even a tolerance of 1.0 accepts the runner-up
    assert!(strict.validate(Language::Cpp, "int main() { return 0; }").matches);

    // Java scores 3 against C's 9
    assert!(!strict.validate(Language::Java, "int main() { return 0; }").matches);
}

#[test]
fn test_prose_matches_nothing() {
    let verdict = validator().validate(Language::Go, "just some words here");
    assert!(!verdict.matches);
    assert_eq!(verdict.detected, Language::Unknown);
    assert_eq!(
        verdict.suggestions,
        vec!["Content does not clearly match any supported language.".to_string()]
    );
}

#[test]
fn test_validate_named() {
    let verdict = validator()
        .validate_named("Python", "def add(a, b):\n    return a + b")
        .unwrap();
    assert!(verdict.matches);

    let err = validator().validate_named("fortran", "x").unwrap_err();
    assert!(matches!(err, Error::UnknownLanguage(ref name) if name == "fortran"));
    assert!(err.is_user_fixable());
}

#[test]
fn test_validation_is_deterministic() {
    let text = "interface Foo { bar: string }";
    let first = validator().validate(Language::JavaScript, text);
    for _ in 0..5 {
        assert_eq!(validator().validate(Language::JavaScript, text), first);
    }
}
