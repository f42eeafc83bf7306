//! End-to-end classification of realistic snippets

use codesniff::{Classifier, Inconclusive, Language};
use indoc::indoc;
use pretty_assertions::assert_eq;

fn classify(text: &str) -> codesniff::Classification {
    Classifier::with_defaults().classify(text)
}

#[test]
fn test_python_function() {
    let result = classify("def add(a, b):\n    return a + b");
    assert_eq!(result.language(), Language::Python);
    assert!(result.confidence() > 0.6, "confidence {}", result.confidence());
}

#[test]
fn test_rust_main() {
    let result = classify("fn main() { println!(\"hi\"); }");
    assert_eq!(result.language(), Language::Rust);
    assert!(result.confidence() > 0.5, "confidence {}", result.confidence());
}

#[test]
fn test_empty_and_whitespace_are_unknown() {
    for text in ["", "   \n", "\t\t"] {
        let result = classify(text);
        assert_eq!(result.language(), Language::Unknown);
        assert_eq!(result.confidence(), 0.0);
        assert_eq!(result.inconclusive, Some(Inconclusive::EmptyInput));
    }
}

#[test]
fn test_binary_garbage_is_unknown() {
    let result = classify("\x00\x01\x02binary garbage");
    assert_eq!(result.language(), Language::Unknown);
    assert_eq!(result.confidence(), 0.0);
    assert_eq!(result.inconclusive, Some(Inconclusive::BinaryInput));
}

#[test]
fn test_json_document() {
    let result = classify(r#"{"name": "codesniff", "version": 1, "private": true}"#);
    assert_eq!(result.language(), Language::Json);
}

#[test]
fn test_sql_query() {
    let result = classify("SELECT id, name FROM users WHERE active = 1 ORDER BY name;");
    assert_eq!(result.language(), Language::Sql);
}

#[test]
fn test_html_page() {
    let result = classify(indoc! {r#"
        <!DOCTYPE html>
        <html>
        <body>
        <div class="box">Hi</div>
        </body>
        </html>
    "#});
    assert_eq!(result.language(), Language::Html);
}

#[test]
fn test_css_rules() {
    let result = classify(indoc! {"
        .box {
          color: red;
          margin: 0 auto;
        }
        .box:hover {
          color: #fff;
        }
    "});
    assert_eq!(result.language(), Language::Css);
}

#[test]
fn test_go_program() {
    let result = classify(indoc! {r#"
        package main

        import "fmt"

        func main() {
        	x := 1
        	fmt.Println(x)
        }
    "#});
    assert_eq!(result.language(), Language::Go);
}

#[test]
fn test_java_class() {
    let result = classify(indoc! {r#"
        public class Hello {
            public static void main(String[] args) {
                System.out.println("Hello");
            }
        }
    "#});
    assert_eq!(result.language(), Language::Java);
}

#[test]
fn test_php_script() {
    let result = classify("<?php\n$name = 'World';\necho \"Hello, $name\";\n");
    assert_eq!(result.language(), Language::Php);
}

#[test]
fn test_shell_script() {
    let result = classify(indoc! {r#"
        #!/bin/bash
        for f in *.txt; do
          echo "$f"
        done
    "#});
    assert_eq!(result.language(), Language::Shell);
}

#[test]
fn test_ruby_class() {
    let result = classify(indoc! {r#"
        class Greeter
          def greet(name)
            puts "Hello #{name}"
          end
        end
    "#});
    assert_eq!(result.language(), Language::Ruby);
    let python = result.candidate(Language::Python).unwrap();
    assert!(python.raw_score < result.top.raw_score);
}

#[test]
fn test_c_program() {
    let result = classify(indoc! {r#"
        #include <stdio.h>

        int main(void) {
            printf("hi\n");
            return 0;
        }
    "#});
    assert_eq!(result.language(), Language::C);
    assert_eq!(result.rank_of(Language::Cpp), Some(1));
}

#[test]
fn test_cpp_program() {
    let result = classify(indoc! {r#"
        #include <iostream>

        int main() {
            std::cout << "hi" << std::endl;
            return 0;
        }
    "#});
    assert_eq!(result.language(), Language::Cpp);
}

#[test]
fn test_typescript_function() {
    let result = classify("function add(a: number, b: number): number {\n  return a + b;\n}");
    assert_eq!(result.language(), Language::TypeScript);
    assert_eq!(result.top.raw_score, 31.0);
}

#[test]
fn test_plain_javascript_wins_ties_with_typescript() {
    let result = classify("const x = require('fs');\nconsole.log(x === undefined);");
    let js = result.candidate(Language::JavaScript).unwrap();
    let ts = result.candidate(Language::TypeScript).unwrap();
    assert_eq!(js.raw_score, ts.raw_score);
    assert_eq!(result.language(), Language::JavaScript);
}

#[test]
fn test_plain_javascript_confidence_is_shared_with_typescript() {
    let result = classify(indoc! {"
        const items = require('./items');
        function total(list) { return list.length; }
        console.log(total(items) === 3);
    "});
    let js = result.candidate(Language::JavaScript).unwrap();
    let ts = result.candidate(Language::TypeScript).unwrap();
    assert_eq!(result.language(), Language::JavaScript);
    assert_eq!(js.confidence, ts.confidence);
    assert!(js.confidence <= 0.5 + 1e-9);
    assert!(js.confidence > 0.0);
}

#[test]
fn test_short_snippets_are_less_confident() {
    let short = classify("let mut x = 1;");
    let long = classify(indoc! {"
        let mut total = 0;
        let mut count = 0;
        let mut items = 0;
    "});
    assert_eq!(short.language(), Language::Rust);
    assert_eq!(long.language(), Language::Rust);
    assert!(short.token_count < 10);
    assert!(short.confidence() < long.confidence());
}

#[test]
fn test_extension_hint_resolves_ambiguity() {
    let text = "int main() { return 0; }";
    assert_eq!(classify(text).language(), Language::C);

    let hinted = Classifier::with_defaults().classify_with_hint(text, Some(".cpp"));
    assert_eq!(hinted.language(), Language::Cpp);
    assert!(hinted.top.evidence.iter().any(|e| e.label == "`.cpp` file extension"));
}

#[test]
fn test_extension_hint_does_not_override_strong_evidence() {
    let hinted = Classifier::with_defaults()
        .classify_with_hint("def add(a, b):\n    return a + b", Some("rs"));
    assert_eq!(hinted.language(), Language::Python);
}

#[test]
fn test_full_ranking_is_returned() {
    let result = classify("SELECT * FROM t;");
    assert_eq!(result.ranked.len(), Language::supported().count());
    assert!(result
        .ranked
        .windows(2)
        .all(|w| w[0].raw_score >= w[1].raw_score - 1e-6));
}
