//! Interactive collection of the destination and folder selection.

use console::{style, Term};
use tracing::debug;

use crate::data::Template;
use crate::error::{Result, ScaffoldError};
use crate::matcher::{get_match, Match};

pub const DEFAULT_DESTINATION: &str = "./scss";

/// Question/answer surface the collector talks to.
pub trait Prompt {
    /// Free-text question. A blank answer yields `default`.
    fn input(&self, message: &str, default: &str) -> Result<String>;

    /// Checklist question. Returns the chosen indices into `choices`, in
    /// choice order.
    fn multi_select(&self, message: &str, choices: &[String], defaults: &[bool]) -> Result<Vec<usize>>;
}

#[derive(Debug)]
pub struct Selection {
    pub destination: String,
    pub folders: Vec<String>,
}

/// Asks for the destination, then for the folders to include.
pub fn collect(prompt: &dyn Prompt, template: &Template) -> Result<Selection> {
    let destination = prompt.input(
        &format!(
            "Enter the destination folder for the SCSS structure (default: {}):",
            DEFAULT_DESTINATION
        ),
        DEFAULT_DESTINATION,
    )?;

    let choices = template.names();
    let defaults = vec![true; choices.len()];
    let chosen = prompt.multi_select(
        "Select the folders you want to include in your SCSS structure:",
        &choices,
        &defaults,
    )?;

    let folders = chosen
        .into_iter()
        .map(|index| {
            choices
                .get(index)
                .cloned()
                .ok_or_else(|| ScaffoldError::UnknownFolder(index.to_string()))
        })
        .collect::<Result<Vec<String>>>()?;

    debug!(%destination, ?folders, "selection collected");
    Ok(Selection { destination, folders })
}

pub struct ConsolePrompt {
    term: Term,
}

impl ConsolePrompt {
    pub fn new() -> Result<Self> {
        let term = Term::stdout();
        if !term.is_term() {
            return Err(ScaffoldError::InteractionUnavailable(
                "not attached to a terminal".to_string(),
            ));
        }
        Ok(ConsolePrompt { term })
    }

    fn ask(&self, question: &str) -> Result<String> {
        self.term
            .write_str(&format!("{} {} ", style("?").green().bold(), style(question).bold()))
            .map_err(ScaffoldError::Prompt)?;
        self.term.read_line().map_err(ScaffoldError::Prompt)
    }

    fn say(&self, line: &str) -> Result<()> {
        self.term.write_line(line).map_err(ScaffoldError::Prompt)
    }
}

impl Prompt for ConsolePrompt {
    fn input(&self, message: &str, default: &str) -> Result<String> {
        let answer = self.ask(message)?;
        Ok(answer_or_default(&answer, default))
    }

    fn multi_select(&self, message: &str, choices: &[String], defaults: &[bool]) -> Result<Vec<usize>> {
        self.say(&format!("{} {}", style("?").green().bold(), style(message).bold()))?;
        for (i, choice) in choices.iter().enumerate() {
            let mark = if defaults.get(i).copied().unwrap_or(false) { "x" } else { " " };
            self.say(&format!("  [{}] {}. {}", mark, i + 1, choice))?;
        }

        loop {
            let answer = self.ask("Numbers or names, comma separated (blank keeps marked, 'none' for nothing):")?;
            match parse_checklist(&answer, choices, defaults) {
                Ok(resolved) => {
                    for (query, index) in &resolved.corrected {
                        self.say(&format!("Match found for {}: {}", query, choices[*index]))?;
                    }
                    return Ok(resolved.indices);
                }
                Err(problem) => self.say(&style(problem).yellow().to_string())?,
            }
        }
    }
}

fn answer_or_default(answer: &str, default: &str) -> String {
    let trimmed = answer.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Checklist {
    indices: Vec<usize>,
    /// Tokens accepted through a fuzzy match, with the choice they became.
    corrected: Vec<(String, usize)>,
}

/// Interprets a checklist answer. `Err` carries a message to show before
/// asking again.
fn parse_checklist(answer: &str, choices: &[String], defaults: &[bool]) -> std::result::Result<Checklist, String> {
    let answer = answer.trim();

    if answer.is_empty() {
        let indices = (0..choices.len())
            .filter(|i| defaults.get(*i).copied().unwrap_or(false))
            .collect();
        return Ok(Checklist { indices, corrected: Vec::new() });
    }

    if answer.eq_ignore_ascii_case("none") {
        return Ok(Checklist { indices: Vec::new(), corrected: Vec::new() });
    }

    let mut picked = vec![false; choices.len()];
    let mut corrected = Vec::new();

    for token in answer.split(|c: char| c == ',' || c.is_whitespace()).filter(|t| !t.is_empty()) {
        match get_match(token, choices) {
            Match::Exact(index) => picked[index] = true,
            Match::Close(index) => {
                picked[index] = true;
                corrected.push((token.to_string(), index));
            }
            Match::Ambiguous(matches) => {
                return Err(format!(
                    "No exact match found for {}. Did you mean one of the following? {}",
                    token,
                    matches.join(", ")
                ));
            }
            Match::NotFound => return Err(format!("No folder matches found for {}", token)),
        }
    }

    let indices = picked
        .iter()
        .enumerate()
        .filter_map(|(i, &on)| if on { Some(i) } else { None })
        .collect();

    Ok(Checklist { indices, corrected })
}

#[cfg(test)]
pub(crate) mod scripted {
    //! Canned answers standing in for a terminal.

    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    pub struct ScriptedPrompt {
        inputs: RefCell<VecDeque<String>>,
        selection: Option<Vec<usize>>,
        pub seen_defaults: RefCell<Vec<bool>>,
    }

    impl ScriptedPrompt {
        pub fn new(input: &str, selection: Option<Vec<usize>>) -> Self {
            ScriptedPrompt {
                inputs: RefCell::new(VecDeque::from(vec![input.to_string()])),
                selection,
                seen_defaults: RefCell::new(Vec::new()),
            }
        }
    }

    impl Prompt for ScriptedPrompt {
        fn input(&self, _message: &str, default: &str) -> Result<String> {
            let answer = self.inputs.borrow_mut().pop_front().unwrap_or_default();
            Ok(answer_or_default(&answer, default))
        }

        fn multi_select(&self, _message: &str, choices: &[String], defaults: &[bool]) -> Result<Vec<usize>> {
            *self.seen_defaults.borrow_mut() = defaults.to_vec();
            Ok(self
                .selection
                .clone()
                .unwrap_or_else(|| (0..choices.len()).collect()))
        }
    }

    pub struct ClosedPrompt;

    impl Prompt for ClosedPrompt {
        fn input(&self, _message: &str, _default: &str) -> Result<String> {
            Err(ScaffoldError::InteractionUnavailable("closed".to_string()))
        }

        fn multi_select(&self, _message: &str, _choices: &[String], _defaults: &[bool]) -> Result<Vec<usize>> {
            Err(ScaffoldError::InteractionUnavailable("closed".to_string()))
        }
    }
}
