//! Fact sink trait and implementations

use crate::crawler::Fact;
use std::io::{self, Write};

/// Destination for extracted facts
pub trait FactSink {
    /// Writes one fact
    fn emit(&mut self, fact: &Fact) -> io::Result<()>;

    /// Flushes anything buffered; called once the crawl ends
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Writes each fact as two lines: the subject, then the value
///
/// No escaping is applied; consumers read the stream two lines at a time.
#[derive(Debug)]
pub struct LineSink<W: Write> {
    writer: W,
}

impl<W: Write> LineSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl LineSink<io::Stdout> {
    /// Sink over standard output
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> FactSink for LineSink<W> {
    fn emit(&mut self, fact: &Fact) -> io::Result<()> {
        writeln!(self.writer, "{}", fact.subject)?;
        writeln!(self.writer, "{}", fact.value)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Collects facts in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub facts: Vec<Fact>,
}

impl FactSink for MemorySink {
    fn emit(&mut self, fact: &Fact) -> io::Result<()> {
        self.facts.push(fact.clone());
        Ok(())
    }
}
