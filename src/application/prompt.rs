use crate::domain::model::{
    TranslationRequest, AMBIGUOUS_SENTINEL, NOT_CODE_SENTINEL, UNTRANSLATABLE_SENTINEL,
};

/// Render the instruction string sent to the backend.
///
/// The sentinel replies are matched verbatim later on, so they are embedded
/// exactly as the classifier expects them.
pub fn build_prompt(request: &TranslationRequest) -> String {
    let source = request.source_language();
    let target = request.target_language();
    let tag = target.fence_tag();

    format!(
        "You are a code translation agent.\n\
         If the input is not valid {source} code, reply with '{NOT_CODE_SENTINEL}'\n\
         If the input IS code, then translate it strictly from {source} to {target}. \
         Only output valid {target} code, no explanations or comments. \
         Output ONLY a code block in this format:\n\
         ```{tag}\n<code>\n``` and nothing else. \
         If the input code is incomplete or ambiguous, reply with '{AMBIGUOUS_SENTINEL}' \
         If translation is not possible, reply with '{UNTRANSLATABLE_SENTINEL}'\n\n\
         {source} code:\n{code}\n\n{target} code:",
        code = request.source_code(),
    )
}
