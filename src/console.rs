// Interactive channel: the one place that reads user answers and writes
// prompts. The binary creates a single console at startup and passes it
// down by `&mut`; dropping it at the end of `main` closes the session.

use ::console::Term;
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, BufRead, Write};
use std::time::Duration;

/// A prompt: some lines of context followed by the text the user answers.
#[derive(Debug, Clone, Copy)]
pub struct Question<'a> {
    pub lines: &'a [&'a str],
    pub prompt: &'a str,
}

pub const RATE_QUESTION: Question<'static> = Question {
    lines: &["Did you like the joke?", "1. Yes", "2. No"],
    prompt: "Enter your choice",
};

pub const CONTINUE_QUESTION: Question<'static> = Question {
    lines: &["Do you have more jokes? (yes/no)"],
    prompt: "Enter your choice",
};

pub trait Console {
    /// Write a line to standard output.
    fn say(&mut self, line: &str) -> io::Result<()>;

    /// Write a line to the error channel.
    fn complain(&mut self, line: &str) -> io::Result<()>;

    /// Ask a question and wait for one line. `None` means the input side
    /// was closed.
    fn ask(&mut self, question: &Question<'_>) -> io::Result<Option<String>>;

    /// Progress indicator shown while waiting on the network.
    fn spinner(&self, _message: &str) -> ProgressBar {
        ProgressBar::hidden()
    }
}

/// Console for a real terminal: dialoguer prompts and an indicatif spinner.
/// Questions and prompts both go to stdout.
pub struct TerminalConsole {
    term: Term,
}

impl TerminalConsole {
    pub fn new() -> Self {
        TerminalConsole {
            term: Term::stdout(),
        }
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for TerminalConsole {
    fn say(&mut self, line: &str) -> io::Result<()> {
        println!("{}", line);
        Ok(())
    }

    fn complain(&mut self, line: &str) -> io::Result<()> {
        eprintln!("{}", line);
        Ok(())
    }

    fn ask(&mut self, question: &Question<'_>) -> io::Result<Option<String>> {
        for line in question.lines {
            self.term.write_line(line)?;
        }
        let answer = Input::<String>::new()
            .with_prompt(question.prompt)
            .allow_empty(true)
            .interact_text_on(&self.term);
        match answer {
            Ok(answer) => Ok(Some(answer)),
            // Ctrl-D / closed terminal
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn spinner(&self, message: &str) -> ProgressBar {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner
    }
}

/// Line-oriented console over any reader and writers. Used when stdin is
/// piped, and by the tests with in-memory buffers.
pub struct LineConsole<R, W, E> {
    input: R,
    output: W,
    errors: E,
}

impl<R: BufRead, W: Write, E: Write> LineConsole<R, W, E> {
    pub fn new(input: R, output: W, errors: E) -> Self {
        LineConsole {
            input,
            output,
            errors,
        }
    }

    /// Give back the output and error sinks.
    pub fn into_parts(self) -> (W, E) {
        (self.output, self.errors)
    }
}

impl<R: BufRead, W: Write, E: Write> Console for LineConsole<R, W, E> {
    fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{}", line)
    }

    fn complain(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.errors, "{}", line)
    }

    fn ask(&mut self, question: &Question<'_>) -> io::Result<Option<String>> {
        for line in question.lines {
            writeln!(self.output, "{}", line)?;
        }
        write!(self.output, "{}: ", question.prompt)?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Ok(None);
        }
        Ok(Some(answer.trim_end_matches(['\n', '\r']).to_string()))
    }
}

/// Pick the console for this process: interactive prompts on a terminal,
/// plain line reading otherwise.
pub fn open() -> Box<dyn Console> {
    use std::io::IsTerminal;

    let stdin = io::stdin();
    if stdin.is_terminal() {
        Box::new(TerminalConsole::new())
    } else {
        Box::new(LineConsole::new(stdin.lock(), io::stdout(), io::stderr()))
    }
}
