use crate::domain::model::{Language, Verdict};
use crate::domain::traits::SyntaxValidator;
use rustpython_parser::{ast, Parse};
use tracing::debug;

/// Full Python parse; any syntax error rejects the code.
pub struct PythonSyntax;

impl SyntaxValidator for PythonSyntax {
    fn validate(&self, code: &str) -> Verdict {
        match ast::Suite::parse(code, "<translation>") {
            Ok(_) => Verdict::Valid,
            Err(e) => {
                debug!("Python syntax check failed: {}", e);
                Verdict::Invalid
            }
        }
    }
}

/// Accepts everything. Used for languages without a parser.
pub struct Unchecked;

impl SyntaxValidator for Unchecked {
    fn validate(&self, _code: &str) -> Verdict {
        Verdict::Valid
    }
}

static PYTHON: PythonSyntax = PythonSyntax;
static UNCHECKED: Unchecked = Unchecked;

/// Resolve the validator for a target language.
///
/// Python is the only language for which `supports_validation` holds.
pub fn validator_for(language: &Language) -> &'static dyn SyntaxValidator {
    if language.supports_validation() {
        &PYTHON
    } else {
        &UNCHECKED
    }
}
