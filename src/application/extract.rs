use crate::domain::model::Language;
use once_cell::sync::Lazy;
use regex::Regex;

// ```lang\n ... ```  (first block only, lazy body)
static FENCED_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)```[ \t]*[\w+#.\-]*[ \t]*\r?\n(.*?)```").expect("fenced block pattern is valid")
});

/// Pull the code out of a raw backend reply.
///
/// Tries a fenced block first, then a language-specific scan for the first
/// top-level construct, then falls back to the whole reply. Never fails.
pub fn extract_code(raw_reply: &str, target: &Language) -> String {
    let reply = raw_reply.trim();

    if let Some(block) = fenced_block(reply) {
        return block.trim().to_string();
    }

    if let Some(start) = first_construct_offset(reply, target) {
        return reply[start..].trim().to_string();
    }

    reply.to_string()
}

/// Interior of the first fenced block, if any.
pub fn fenced_block(text: &str) -> Option<&str> {
    FENCED_BLOCK
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Byte offset of the first line that opens a top-level construct.
fn first_construct_offset(text: &str, target: &Language) -> Option<usize> {
    if !target.supports_validation() {
        return None;
    }
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        if starts_top_level_construct(target, line.trim()) {
            return Some(offset);
        }
        offset += line.len();
    }
    None
}

/// Per-language matcher for lines that begin an import, function or class.
///
/// Only called for languages with a real syntax check.
fn starts_top_level_construct(target: &Language, line: &str) -> bool {
    match target {
        Language::Python => {
            line.starts_with("import ")
                || (line.starts_with("from ") && line.contains(" import "))
                || line.starts_with("def ")
                || line.starts_with("async def ")
                || line.starts_with("class ")
        }
        _ => false,
    }
}
