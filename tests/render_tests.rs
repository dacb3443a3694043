//! 终端输出格式测试

use code_translator::domain::model::{ErrorKind, Language, TranslationRequest, TranslationResult};
use code_translator::presentation::render::format_result;
use code_translator::presentation::theme::Theme;

fn request() -> TranslationRequest {
    TranslationRequest::new("int x = 1;", Language::C, Language::Python)
}

#[test]
fn test_success_output_has_title_and_code() {
    let theme = Theme::from_name("plain");
    let result = TranslationResult::Success {
        code: "x = 1\nprint(x)".to_string(),
    };

    assert_eq!(
        format_result(&request(), &result, &theme),
        "C → Python\n\nx = 1\nprint(x)\n"
    );
}

#[test]
fn test_failure_output_separates_raw_reply() {
    // 错误信息和原始输出之间空一行
    let theme = Theme::from_name("plain");
    let result = TranslationResult::failure(
        ErrorKind::InvalidOutputSyntax,
        "ERROR: Output is not valid Python code.\n\nRaw output from LLM:\ndef broken(:",
        "def broken(:",
    );

    assert_eq!(
        format_result(&request(), &result, &theme),
        "ERROR: Output is not valid Python code.\n\nRaw output from LLM:\ndef broken(:\n"
    );
}

#[test]
fn test_sentinel_output_is_single_line() {
    let theme = Theme::from_name("plain");
    let result = TranslationResult::failure(
        ErrorKind::NotCode,
        "ERROR: This is not code.",
        "ERROR: This is not code.",
    );

    assert_eq!(
        format_result(&request(), &result, &theme),
        "ERROR: This is not code.\n"
    );
}
