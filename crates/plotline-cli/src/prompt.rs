use std::borrow::Cow::{self, Borrowed};

use rustyline::completion::FilenameCompleter;
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::history::DefaultHistory;
use rustyline::{Completer, CompletionType, Config, Editor, Helper, Hinter, Validator};

#[derive(Helper, Completer, Hinter, Validator)]
struct PromptHelper {
    #[rustyline(Completer)]
    completer: FilenameCompleter,
    colored_prompt: String,
}

impl Highlighter for PromptHelper {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Borrowed(&self.colored_prompt)
        } else {
            Borrowed(prompt)
        }
    }
}

/// Asks the user one question at a time, with filename completion on every
/// prompt.
pub struct Prompter {
    editor: Editor<PromptHelper, DefaultHistory>,
}

impl Prompter {
    pub fn new() -> Result<Self, ReadlineError> {
        let config = Config::builder()
            .completion_type(CompletionType::List)
            .build();
        let helper = PromptHelper {
            completer: FilenameCompleter::new(),
            colored_prompt: String::new(),
        };

        let mut editor: Editor<PromptHelper, DefaultHistory> = Editor::with_config(config)?;
        editor.set_helper(Some(helper));
        Ok(Self { editor })
    }

    pub fn ask(&mut self, question: &str) -> Result<String, ReadlineError> {
        let prompt = format!("{question}: ");
        if let Some(helper) = self.editor.helper_mut() {
            helper.colored_prompt = format!("\x1b[1;32m{prompt}\x1b[0m");
        }
        let line = self.editor.readline(&prompt)?;
        Ok(line.trim().to_owned())
    }
}
