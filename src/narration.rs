//! Narration sinks.
//!
//! Every component describes what it does by writing lines to a `Narrator`.
//! The binary prints them; tests record them.

use std::io::{self, Stdout, Write};

/// Destination for narrative output, one line at a time.
///
/// Narration never fails from the caller's point of view. Sinks that can
/// fail keep the error and report it when the run is finished.
pub trait Narrator {
    fn line(&mut self, text: &str);

    /// Emit an empty line.
    fn blank(&mut self) {
        self.line("");
    }
}

impl<N: Narrator + ?Sized> Narrator for &mut N {
    fn line(&mut self, text: &str) {
        (**self).line(text);
    }
}

/// Writes narration to any `io::Write`, stdout by default.
///
/// The first write error is kept and every later line is dropped, so a
/// closed pipe does not abort the simulation halfway through a transition.
#[derive(Debug)]
pub struct ConsoleNarrator<W: Write = Stdout> {
    out: W,
    error: Option<io::Error>,
}

impl ConsoleNarrator<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleNarrator<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// Flush the writer and surface the first error seen, if any.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> Narrator for ConsoleNarrator<W> {
    fn line(&mut self, text: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = writeln!(self.out, "{text}") {
            tracing::error!(error = %err, "narration output failed; dropping further lines");
            self.error = Some(err);
        }
    }
}

/// In-memory narrator that records every line.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines containing `needle`.
    pub fn count(&self, needle: &str) -> usize {
        self.lines.iter().filter(|l| l.contains(needle)).count()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.count(needle) > 0
    }
}

impl Narrator for Transcript {
    fn line(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn console_narrator_writes_lines() {
        let mut narrator = ConsoleNarrator::new(Vec::new());
        narrator.line("first");
        narrator.blank();
        narrator.line("second");

        let out = narrator.finish().unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "first\n\nsecond\n");
    }

    #[test]
    fn console_narrator_keeps_first_error() {
        let mut narrator = ConsoleNarrator::new(BrokenPipe);
        narrator.line("lost");
        narrator.line("also lost");

        let err = narrator.finish().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn transcript_counts_matching_lines() {
        let mut transcript = Transcript::new();
        transcript.line("REJECTED once");
        transcript.line("accepted");
        transcript.line("REJECTED twice");

        assert_eq!(transcript.lines().len(), 3);
        assert_eq!(transcript.count("REJECTED"), 2);
        assert!(!transcript.contains("belief"));
    }

    #[test]
    fn mutable_reference_is_a_narrator() {
        fn narrate(mut out: impl Narrator) {
            out.line("through a reference");
        }

        let mut transcript = Transcript::new();
        narrate(&mut transcript);

        assert_eq!(transcript.lines(), ["through a reference"]);
    }
}
