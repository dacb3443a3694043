use crate::domain::model::{ErrorKind, TranslationRequest, TranslationResult, Verdict};
use tracing::debug;

/// Turn an extracted candidate into exactly one result.
///
/// Rules run in a fixed order and the first match wins:
/// empty or echoed source, backend sentinel, failed syntax check, success.
pub fn classify(
    request: &TranslationRequest,
    raw_reply: &str,
    extracted: &str,
    verdict: Verdict,
) -> TranslationResult {
    let target = request.target_language();
    let candidate = extracted.trim();
    let source = request.source_code().trim();

    // An echoed reply counts even when extraction trimmed it down
    if candidate.is_empty() || candidate == source || raw_reply.trim() == source {
        debug!("classified as no translation (empty or echoed source)");
        return TranslationResult::failure(
            ErrorKind::NoTranslationFound,
            format!(
                "ERROR: No translation to {} was found.\n\nRaw output from LLM:\n{}",
                target, raw_reply
            ),
            raw_reply,
        );
    }

    // The backend's own refusal is forwarded untouched
    if candidate.starts_with("ERROR") {
        let kind = ErrorKind::from_sentinel(candidate);
        debug!(?kind, "classified as backend sentinel");
        return TranslationResult::failure(kind, candidate, raw_reply);
    }

    if verdict == Verdict::Invalid {
        debug!("classified as invalid {} syntax", target);
        return TranslationResult::failure(
            ErrorKind::InvalidOutputSyntax,
            format!(
                "ERROR: Output is not valid {} code.\n\nRaw output from LLM:\n{}",
                target, raw_reply
            ),
            raw_reply,
        );
    }

    TranslationResult::Success {
        code: candidate.to_string(),
    }
}
