//! Interactive translation session.

use crate::application::translate::translate;
use crate::domain::error::TranslatorError;
use crate::domain::model::{Language, TranslationRequest};
use crate::presentation::render::format_result;
use crate::presentation::theme::Theme;
use crate::state::AppState;
use std::io::{BufRead, Write};
use tracing::debug;

const HELP: &str = "\
Type or paste code, then a line with a single '.' to translate it.
  :from <lang>   set the source language
  :to <lang>     set the target language
  :langs         list known languages
  :help          show this help
  exit | quit | bye   leave";

/// What a single input line means in the current state.
#[derive(Debug, PartialEq, Eq)]
pub enum ReplInput<'a> {
    Quit,
    Command { name: &'a str, arg: &'a str },
    Submit,
    Skip,
    Code(&'a str),
}

/// Interpret one line. Commands are only recognised outside a code buffer.
pub fn parse_line(line: &str, buffer_empty: bool) -> ReplInput<'_> {
    let trimmed = line.trim();

    if trimmed == "." {
        return ReplInput::Submit;
    }
    if !buffer_empty {
        return ReplInput::Code(line.trim_end_matches(['\r', '\n']));
    }
    if trimmed.is_empty() {
        return ReplInput::Skip;
    }
    if matches!(trimmed.to_lowercase().as_str(), "exit" | "quit" | "bye") {
        return ReplInput::Quit;
    }
    if let Some(command) = trimmed.strip_prefix(':') {
        let (name, arg) = command.split_once(char::is_whitespace).unwrap_or((command, ""));
        return ReplInput::Command {
            name,
            arg: arg.trim(),
        };
    }
    ReplInput::Code(line.trim_end_matches(['\r', '\n']))
}

pub struct Repl<'a, R, W> {
    state: &'a AppState,
    theme: &'a Theme,
    reader: R,
    writer: W,
    source: Language,
    target: Language,
}

impl<'a, R: BufRead, W: Write> Repl<'a, R, W> {
    pub fn new(
        state: &'a AppState,
        theme: &'a Theme,
        reader: R,
        writer: W,
        source: Language,
        target: Language,
    ) -> Self {
        Self {
            state,
            theme,
            reader,
            writer,
            source,
            target,
        }
    }

    /// Run until the user quits or input ends.
    pub async fn run(&mut self) -> Result<(), TranslatorError> {
        writeln!(
            self.writer,
            "{}",
            (self.theme.title)(&format!(
                "Code translator ({}), {} → {}",
                self.state.gateway.model(),
                self.source,
                self.target
            ))
        )?;
        writeln!(self.writer, "{}", (self.theme.hint)("Type :help for commands."))?;

        let mut buffer: Vec<String> = Vec::new();
        let mut line = String::new();

        loop {
            let prompt = if buffer.is_empty() { ">>> " } else { "... " };
            write!(self.writer, "{}", prompt)?;
            self.writer.flush()?;

            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                // EOF
                writeln!(self.writer)?;
                break;
            }

            match parse_line(&line, buffer.is_empty()) {
                ReplInput::Quit => break,
                ReplInput::Skip => continue,
                ReplInput::Code(code) => buffer.push(code.to_string()),
                ReplInput::Command { name, arg } => self.command(name, arg)?,
                ReplInput::Submit => {
                    if buffer.is_empty() {
                        continue;
                    }
                    let code = buffer.join("\n");
                    buffer.clear();
                    self.submit(code).await?;
                }
            }
        }

        writeln!(self.writer, "Goodbye!")?;
        Ok(())
    }

    fn command(&mut self, name: &str, arg: &str) -> Result<(), TranslatorError> {
        debug!(command = name, arg, "repl command");
        match name {
            "from" | "to" => match arg.parse::<Language>() {
                Ok(lang) => {
                    writeln!(
                        self.writer,
                        "{}",
                        (self.theme.hint)(&format!("{} language set to {}", name, lang))
                    )?;
                    if name == "from" {
                        self.source = lang;
                    } else {
                        self.target = lang;
                    }
                }
                Err(e) => writeln!(self.writer, "{}", (self.theme.error)(&e.to_string()))?,
            },
            "langs" => {
                let names: Vec<&str> = Language::known().iter().map(|l| l.name()).collect();
                writeln!(self.writer, "{}", names.join(", "))?;
            }
            "help" => writeln!(self.writer, "{}", HELP)?,
            _ => writeln!(
                self.writer,
                "{}",
                (self.theme.error)(&format!("Unknown command :{} (try :help)", name))
            )?,
        }
        Ok(())
    }

    async fn submit(&mut self, code: String) -> Result<(), TranslatorError> {
        let request = TranslationRequest::new(code, self.source.clone(), self.target.clone());
        let result = translate(self.state.gateway.as_ref(), &request).await;
        write!(self.writer, "{}", format_result(&request, &result, self.theme))?;
        Ok(())
    }
}
