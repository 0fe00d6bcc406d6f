//! Receivers for entries as a walk produces them

use std::ffi::OsStr;
use std::io::{self, Write};

use super::entry::Entry;
use super::walker::WalkSummary;

/// Callback for streaming output - receives each entry in traversal order.
pub trait EntrySink {
    fn visit(&mut self, entry: &Entry) -> io::Result<()>;

    fn finish(&mut self, _summary: &WalkSummary) -> io::Result<()> {
        Ok(())
    }
}

/// Writes each entry's base name on its own line, byte for byte on unix.
pub struct NameWriter<W: Write> {
    out: W,
}

impl<W: Write> NameWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> EntrySink for NameWriter<W> {
    fn visit(&mut self, entry: &Entry) -> io::Result<()> {
        write_name(&mut self.out, &entry.name)
    }

    fn finish(&mut self, _summary: &WalkSummary) -> io::Result<()> {
        self.out.flush()
    }
}

#[cfg(unix)]
fn write_name<W: Write>(out: &mut W, name: &OsStr) -> io::Result<()> {
    use std::os::unix::ffi::OsStrExt;

    out.write_all(name.as_bytes())?;
    out.write_all(b"\n")
}

#[cfg(not(unix))]
fn write_name<W: Write>(out: &mut W, name: &OsStr) -> io::Result<()> {
    writeln!(out, "{}", name.to_string_lossy())
}

/// Keeps names in memory, lossily converted to UTF-8.
#[derive(Debug, Default)]
pub struct CollectNames {
    names: Vec<String>,
}

impl CollectNames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn into_names(self) -> Vec<String> {
        self.names
    }
}

impl EntrySink for CollectNames {
    fn visit(&mut self, entry: &Entry) -> io::Result<()> {
        self.names.push(entry.name.to_string_lossy().into_owned());
        Ok(())
    }
}

impl EntrySink for Vec<Entry> {
    fn visit(&mut self, entry: &Entry) -> io::Result<()> {
        self.push(entry.clone());
        Ok(())
    }
}
