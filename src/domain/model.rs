use crate::domain::error::TranslatorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// 支持的语言. 只有 Python 有语法校验, 其余一律放行
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Language {
    Python,
    C,
    Cpp,
    CSharp,
    Java,
    JavaScript,
    TypeScript,
    Go,
    Rust,
    Ruby,
    Php,
    Swift,
    Kotlin,
    Other(String), // 未知语言, 按用户输入原样保留
}

static KNOWN_LANGUAGES: [Language; 13] = [
    Language::Python,
    Language::C,
    Language::Cpp,
    Language::CSharp,
    Language::Java,
    Language::JavaScript,
    Language::TypeScript,
    Language::Go,
    Language::Rust,
    Language::Ruby,
    Language::Php,
    Language::Swift,
    Language::Kotlin,
];

impl Language {
    /// Languages with a canonical name, as offered by `:langs` and the web form.
    pub fn known() -> &'static [Language] {
        &KNOWN_LANGUAGES
    }

    pub fn name(&self) -> &str {
        match self {
            Language::Python => "Python",
            Language::C => "C",
            Language::Cpp => "C++",
            Language::CSharp => "C#",
            Language::Java => "Java",
            Language::JavaScript => "JavaScript",
            Language::TypeScript => "TypeScript",
            Language::Go => "Go",
            Language::Rust => "Rust",
            Language::Ruby => "Ruby",
            Language::Php => "PHP",
            Language::Swift => "Swift",
            Language::Kotlin => "Kotlin",
            Language::Other(label) => label,
        }
    }

    /// Tag placed after the opening triple backtick of a fenced block.
    pub fn fence_tag(&self) -> String {
        match self {
            Language::Cpp => "cpp".to_string(),
            Language::CSharp => "csharp".to_string(),
            other => other.name().to_lowercase(),
        }
    }

    /// Whether a real parser backs the syntax check for this language.
    pub fn supports_validation(&self) -> bool {
        matches!(self, Language::Python)
    }
}

impl FromStr for Language {
    type Err = TranslatorError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let label = label.trim();
        if label.is_empty() {
            return Err(TranslatorError::Language(
                "language name must not be empty".to_string(),
            ));
        }

        let lang = match label.to_lowercase().as_str() {
            "python" | "py" | "python3" => Language::Python,
            "c" => Language::C,
            "c++" | "cpp" | "cxx" => Language::Cpp,
            "c#" | "csharp" | "cs" => Language::CSharp,
            "java" => Language::Java,
            "javascript" | "js" | "node" => Language::JavaScript,
            "typescript" | "ts" => Language::TypeScript,
            "go" | "golang" => Language::Go,
            "rust" | "rs" => Language::Rust,
            "ruby" | "rb" => Language::Ruby,
            "php" => Language::Php,
            "swift" => Language::Swift,
            "kotlin" | "kt" => Language::Kotlin,
            _ => Language::Other(label.to_string()),
        };
        Ok(lang)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One translation job. Built per call and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    source_code: String,
    source_language: Language,
    target_language: Language,
}

impl TranslationRequest {
    pub fn new(
        source_code: impl Into<String>,
        source_language: Language,
        target_language: Language,
    ) -> Self {
        Self {
            source_code: source_code.into(),
            source_language,
            target_language,
        }
    }

    /// Build a request from free-form language labels, as typed by a user.
    pub fn from_labels(
        source_code: impl Into<String>,
        source_language: &str,
        target_language: &str,
    ) -> Result<Self, TranslatorError> {
        Ok(Self::new(
            source_code,
            source_language.parse()?,
            target_language.parse()?,
        ))
    }

    pub fn source_code(&self) -> &str {
        &self.source_code
    }

    pub fn source_language(&self) -> &Language {
        &self.source_language
    }

    pub fn target_language(&self) -> &Language {
        &self.target_language
    }
}

// 失败分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    NotCode,
    AmbiguousInput,
    UntranslatableInput,
    NoTranslationFound,
    InvalidOutputSyntax,
    UpstreamFailure,
}

pub const NOT_CODE_SENTINEL: &str = "ERROR: This is not code.";
pub const AMBIGUOUS_SENTINEL: &str = "ERROR: Please clarify the input.";
pub const UNTRANSLATABLE_SENTINEL: &str = "ERROR: Cannot translate this code.";

impl ErrorKind {
    /// The reply the backend is told to send for this kind, if it has one.
    pub fn sentinel(self) -> Option<&'static str> {
        match self {
            ErrorKind::NotCode => Some(NOT_CODE_SENTINEL),
            ErrorKind::AmbiguousInput => Some(AMBIGUOUS_SENTINEL),
            ErrorKind::UntranslatableInput => Some(UNTRANSLATABLE_SENTINEL),
            _ => None,
        }
    }

    /// Infer the kind from backend text that starts with `ERROR`.
    ///
    /// Unrecognised refusals count as untranslatable input.
    pub fn from_sentinel(text: &str) -> Self {
        let text = text.trim();
        [
            ErrorKind::NotCode,
            ErrorKind::AmbiguousInput,
            ErrorKind::UntranslatableInput,
        ]
        .into_iter()
        .find(|kind| kind.sentinel().is_some_and(|s| text.starts_with(s)))
        .unwrap_or(ErrorKind::UntranslatableInput)
    }
}

/// Syntax check outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Invalid,
}

// 翻译结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TranslationResult {
    Success {
        code: String,
    },
    Failure {
        kind: ErrorKind,
        detail: String,
        raw_reply: String,
    },
}

impl TranslationResult {
    pub fn failure(kind: ErrorKind, detail: impl Into<String>, raw_reply: impl Into<String>) -> Self {
        TranslationResult::Failure {
            kind,
            detail: detail.into(),
            raw_reply: raw_reply.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, TranslationResult::Success { .. })
    }

    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            TranslationResult::Success { .. } => None,
            TranslationResult::Failure { kind, .. } => Some(*kind),
        }
    }

    /// Caller-facing text: the code, or a message starting with `ERROR`.
    pub fn render(&self) -> &str {
        match self {
            TranslationResult::Success { code } => code,
            TranslationResult::Failure { detail, .. } => detail,
        }
    }
}
