use crate::application::classify::classify;
use crate::application::extract::extract_code;
use crate::application::prompt::build_prompt;
use crate::application::validate::validator_for;
use crate::domain::model::{ErrorKind, TranslationRequest, TranslationResult};
use crate::domain::traits::LlmGateway;
use tracing::{info, warn, Instrument};
use uuid::Uuid;

/// Run one request through the whole pipeline.
///
/// Gateway failures end the run as `UpstreamFailure` before any extraction
/// happens. Every other outcome comes from [`process_reply`].
pub async fn translate(gateway: &dyn LlmGateway, request: &TranslationRequest) -> TranslationResult {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!(
        "translate",
        %request_id,
        from = %request.source_language(),
        to = %request.target_language(),
    );

    async move {
        // 1. Prompt
        let prompt = build_prompt(request);

        // 2. Backend round trip
        let raw_reply = match gateway.generate(&prompt).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!("backend call failed: {}", e);
                let detail = if e.is_timeout() {
                    format!(
                        "ERROR: The model backend timed out ({}).",
                        gateway.model()
                    )
                } else {
                    format!("ERROR: Could not get a reply from the model backend: {}", e)
                };
                return TranslationResult::failure(ErrorKind::UpstreamFailure, detail, "");
            }
        };

        // 3. Extract, validate, classify
        let result = process_reply(request, &raw_reply);
        info!(success = result.is_success(), kind = ?result.kind(), "translation finished");
        result
    }
    .instrument(span)
    .await
}

/// Post-process a raw reply. Pure: same inputs, same result.
pub fn process_reply(request: &TranslationRequest, raw_reply: &str) -> TranslationResult {
    let raw_reply = raw_reply.trim();
    let target = request.target_language();

    let extracted = extract_code(raw_reply, target);
    let verdict = validator_for(target).validate(&extracted);

    classify(request, raw_reply, &extracted, verdict)
}
