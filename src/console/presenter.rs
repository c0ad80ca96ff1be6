//! User-facing text surface.

use std::io::{self, BufRead, Write};

/// Shows text and asks questions.
///
/// `prompt` returns `None` once input is exhausted.
pub trait Presenter {
    /// Write text as-is.
    fn show(&mut self, text: &str) -> io::Result<()>;

    /// Write a question and read one line of answer, without the newline.
    fn prompt(&mut self, question: &str) -> io::Result<Option<String>>;
}

/// Presenter over any line reader and writer (stdin/stdout in the binary).
#[derive(Debug)]
pub struct ConsolePresenter<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsolePresenter<R, W> {
    /// Create a presenter.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the presenter, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Presenter for ConsolePresenter<R, W> {
    fn show(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())
    }

    fn prompt(&mut self, question: &str) -> io::Result<Option<String>> {
        self.output.write_all(question.as_bytes())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
