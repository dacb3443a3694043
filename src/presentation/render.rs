use crate::domain::model::{TranslationRequest, TranslationResult};
use crate::presentation::theme::Theme;
use std::fmt::Write;

/// Format a result for the terminal
pub fn format_result(
    request: &TranslationRequest,
    result: &TranslationResult,
    theme: &Theme,
) -> String {
    let mut output = String::new();

    match result {
        TranslationResult::Success { code } => {
            let title = format!(
                "{} → {}",
                request.source_language(),
                request.target_language()
            );
            writeln!(output, "{}", (theme.title)(&title)).ok();
            writeln!(output).ok();
            for line in code.lines() {
                writeln!(output, "{}", (theme.code)(line)).ok();
            }
        }
        TranslationResult::Failure { detail, .. } => {
            // Message first, raw backend output (if attached) dimmed below it
            let (message, diagnostics) = match detail.split_once("\n\n") {
                Some((message, rest)) => (message, Some(rest)),
                None => (detail.as_str(), None),
            };
            writeln!(output, "{}", (theme.error)(message)).ok();
            if let Some(diagnostics) = diagnostics {
                writeln!(output).ok();
                for line in diagnostics.lines() {
                    writeln!(output, "{}", (theme.diag)(line)).ok();
                }
            }
        }
    }

    output
}
