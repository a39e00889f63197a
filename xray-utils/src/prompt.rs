use crate::ExtractError;
use log::*;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Source of answers for values missing from the configuration.
pub trait Prompt {
    /// Ask once. `Ok(None)` means no more input will arrive.
    fn ask(&mut self, question: &str) -> io::Result<Option<String>>;
}

/// Asks on stdout and reads one line from stdin per question.
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        let mut stdout = io::stdout();
        stdout.write_all(question.as_bytes())?;
        stdout.flush()?;

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(line)),
        }
    }
}

/// Answers from a fixed list, then reports end of input.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    questions: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            questions: Vec::new(),
        }
    }

    /// Every question asked so far, in order.
    pub fn questions(&self) -> &[String] {
        &self.questions
    }
}

impl Prompt for ScriptedPrompt {
    fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        self.questions.push(question.to_owned());
        Ok(self.answers.pop_front())
    }
}

/// True when `value` still needs to be asked for.
pub fn is_unset(value: &str) -> bool {
    value.is_empty() || value == crate::NONE
}

/// Repeat `question` until the trimmed answer is set.
pub fn prompt_non_empty(
    prompt: &mut dyn Prompt,
    question: &str,
) -> Result<String, ExtractError> {
    loop {
        let answer = prompt.ask(question)?.ok_or(ExtractError::PromptClosed)?;
        let answer = answer.trim();
        if !is_unset(answer) {
            return Ok(answer.to_owned());
        }
        debug!("Rejected empty answer to {:?}", question);
    }
}
