//! 翻译流程测试

mod common;

use code_translator::application::translate::{process_reply, translate};
use code_translator::domain::model::{ErrorKind, Language, TranslationRequest, TranslationResult};
use common::FakeGateway;

fn python_to_python(source: &str) -> TranslationRequest {
    TranslationRequest::new(source, Language::Python, Language::Python)
}

#[test]
fn test_scenario_echoed_source() {
    let request = python_to_python("print(\"hi\")");
    let result = process_reply(&request, "```python\nprint(\"hi\")\n```");

    assert_eq!(result.kind(), Some(ErrorKind::NoTranslationFound));
}

#[test]
fn test_scenario_not_code_sentinel() {
    let request = TranslationRequest::new("hello world", Language::C, Language::Python);
    let result = process_reply(&request, "ERROR: This is not code.");

    match result {
        TranslationResult::Failure { kind, detail, .. } => {
            assert_eq!(kind, ErrorKind::NotCode);
            assert_eq!(detail, "ERROR: This is not code.");
        }
        other => panic!("expected failure, got {:?}", other),
    }
}

#[test]
fn test_scenario_valid_translation() {
    let request = TranslationRequest::new(
        "int add(int a, int b) { return a + b; }",
        Language::C,
        Language::Python,
    );
    let result = process_reply(&request, "```python\ndef add(a,b):\n    return a+b\n```");

    assert_eq!(
        result,
        TranslationResult::Success {
            code: "def add(a,b):\n    return a+b".to_string()
        }
    );
}

#[test]
fn test_scenario_invalid_python() {
    let request = TranslationRequest::new("void broken() {", Language::C, Language::Python);
    let result = process_reply(&request, "```python\ndef broken(:\n```");

    assert_eq!(result.kind(), Some(ErrorKind::InvalidOutputSyntax));
}

#[test]
fn test_empty_reply_is_no_translation() {
    let request = TranslationRequest::new("int x;", Language::C, Language::Python);

    assert_eq!(
        process_reply(&request, "  \n ").kind(),
        Some(ErrorKind::NoTranslationFound)
    );
}

#[test]
fn test_reply_equal_to_source_after_trim() {
    // 去空白后与源码相同 -> 没有翻译
    let request = TranslationRequest::new("  x = 1\n", Language::Rust, Language::Go);

    assert_eq!(
        process_reply(&request, "\n x = 1 ").kind(),
        Some(ErrorKind::NoTranslationFound)
    );
}

#[test]
fn test_echoed_source_with_leading_prose() {
    // 原样回显, 即使提取会截掉开头的说明文字
    let source = "Here:\ndef f():\n    pass";
    let request = python_to_python(source);

    assert_eq!(
        process_reply(&request, source).kind(),
        Some(ErrorKind::NoTranslationFound)
    );
}

#[test]
fn test_echoed_source_containing_a_fence() {
    let source = "Example:\n```c\nint x = 1;\n```";
    let request = TranslationRequest::new(source, Language::Other("Markdown".to_string()), Language::C);

    assert_eq!(
        process_reply(&request, &format!("  {}\n", source)).kind(),
        Some(ErrorKind::NoTranslationFound)
    );
}

#[test]
fn test_unchecked_target_accepts_anything_new() {
    let request = TranslationRequest::new("print(1)", Language::Python, Language::Rust);
    let result = process_reply(&request, "```rust\nfn main() { println!(\"{}\", 1); }\n```");

    assert!(result.is_success());
    assert_eq!(result.render(), "fn main() { println!(\"{}\", 1); }");
}

#[tokio::test]
async fn test_translate_sends_prompt_once() {
    let gateway = FakeGateway::replying("```python\nx = 1\n```");
    let request = TranslationRequest::new("int x = 1;", Language::C, Language::Python);

    let result = translate(&gateway, &request).await;

    assert!(result.is_success());
    assert_eq!(gateway.calls(), 1);
    let prompt = gateway.last_prompt().unwrap();
    assert!(prompt.contains("int x = 1;"));
    assert!(prompt.contains("```python"));
}

#[tokio::test]
async fn test_backend_failure_is_upstream_failure() {
    // 后端出错: 不做提取, 直接返回 UpstreamFailure
    let gateway = FakeGateway::failing();
    let request = TranslationRequest::new("int x = 1;", Language::C, Language::Python);

    let result = translate(&gateway, &request).await;

    match result {
        TranslationResult::Failure {
            kind,
            detail,
            raw_reply,
        } => {
            assert_eq!(kind, ErrorKind::UpstreamFailure);
            assert!(detail.starts_with("ERROR:"));
            assert!(detail.contains("model not loaded"));
            assert!(raw_reply.is_empty());
        }
        other => panic!("expected failure, got {:?}", other),
    }
    assert_eq!(gateway.calls(), 1);
}
