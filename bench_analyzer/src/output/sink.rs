//!
//! The duplicated analysis output sink.
//!

use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

///
/// The duplicated analysis output sink.
///
/// Every write goes to the terminal and to the persisted report file. The
/// sink is passed explicitly to the reporting routines instead of replacing
/// the process-wide standard output; the file is closed when the sink is
/// dropped, so early-return paths flush it as well.
///
#[derive(Debug)]
pub struct Tee {
    /// The terminal handle.
    terminal: std::io::Stdout,
    /// The persisted report file.
    file: std::fs::File,
    /// Path of the persisted report file.
    path: PathBuf,
}

impl Tee {
    ///
    /// Creates the report file and wires it together with the terminal.
    ///
    pub fn create(path: PathBuf) -> anyhow::Result<Self> {
        let file = std::fs::File::create(path.as_path())
            .map_err(|error| anyhow::anyhow!("Analysis report file {path:?} creating: {error}"))?;
        Ok(Self {
            terminal: std::io::stdout(),
            file,
            path,
        })
    }

    ///
    /// Path of the persisted report file.
    ///
    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    ///
    /// Flushes both destinations and closes the report file.
    ///
    pub fn finish(mut self) -> anyhow::Result<PathBuf> {
        self.flush().map_err(|error| {
            anyhow::anyhow!("Analysis report file {:?} flushing: {error}", self.path)
        })?;
        Ok(self.path)
    }
}

impl Write for Tee {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.terminal.write_all(buf)?;
        self.file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.terminal.flush()?;
        self.file.flush()
    }
}
