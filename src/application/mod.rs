pub mod classify;
pub mod extract;
pub mod prompt;
pub mod translate;
pub mod validate;
