use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::PathBuf;

use tracing::{debug, info, instrument, warn, Level};

use crate::commands::executable::Executable;
use crate::commands::{Command, CommandParserError};
use crate::persistence::{self, Access, PersistenceError};
use crate::reply::Reply;
use crate::store::RecordStore;
use crate::Error;

/// Longest command line accepted, not counting the trailing newline.
pub const MAX_LINE_LENGTH: usize = 1000;

/// Process-level settings, filled in from the command line.
#[derive(Clone, Debug)]
pub struct Config {
    /// Database loaded into the store before the first command is read.
    pub preload: Option<PathBuf>,
    /// Commands are read from this file instead of standard input.
    pub script: Option<PathBuf>,
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            preload: None,
            script: None,
            log_level: Level::WARN,
        }
    }
}

/// Why the interpreter stopped reading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Exit {
    Quit,
    EndOfInput,
}

/// Reads command lines, executes them against the store it owns and writes every reply to `out`.
pub struct Interpreter<W> {
    store: RecordStore,
    out: W,
}

impl<W: Write> Interpreter<W> {
    pub fn new(out: W) -> Interpreter<W> {
        Self::with_store(RecordStore::new(), out)
    }

    pub fn with_store(store: RecordStore, out: W) -> Interpreter<W> {
        Interpreter { store, out }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Handles `input` line by line until a `Q` command or the end of the stream. The store is
    /// released either way.
    ///
    /// Lines longer than [`MAX_LINE_LENGTH`] are discarded up to the next newline and answered
    /// with an error reply.
    pub fn run<R: BufRead>(&mut self, mut input: R) -> Result<Exit, Error> {
        let mut buf = Vec::new();

        loop {
            buf.clear();
            let read = input
                .by_ref()
                .take(MAX_LINE_LENGTH as u64 + 1)
                .read_until(b'\n', &mut buf)?;
            if read == 0 {
                info!("End of input");
                self.store.clear();
                return Ok(Exit::EndOfInput);
            }

            if buf.len() > MAX_LINE_LENGTH && buf.last() != Some(&b'\n') {
                skip_line(&mut input)?;
                warn!(limit = MAX_LINE_LENGTH, "Discarded over-long line");
                let err = CommandParserError::LineTooLong {
                    limit: MAX_LINE_LENGTH,
                };
                self.write_reply(Reply::Error(err.to_string()))?;
                continue;
            }

            let line = String::from_utf8_lossy(&buf);
            if let Some(exit) = self.execute_line(&line)? {
                return Ok(exit);
            }
        }
    }

    /// Executes a single command line and writes its reply. Blank lines are skipped.
    ///
    /// Problems with the line itself or with the command are written as replies; only a failure
    /// to write the reply is returned as an error.
    #[instrument(level = "debug", skip(self))]
    pub fn execute_line(&mut self, line: &str) -> Result<Option<Exit>, Error> {
        if line.trim().is_empty() {
            return Ok(None);
        }

        let reply = match Command::try_from(line) {
            Ok(cmd) => {
                debug!("Executing command {}", cmd.kind());
                cmd.exec(&mut self.store)?
            }
            Err(err) => {
                debug!("Rejected line: {}", err);
                Reply::Error(err.to_string())
            }
        };

        let exit = (reply == Reply::Quit).then_some(Exit::Quit);
        self.write_reply(reply)?;

        Ok(exit)
    }

    fn write_reply(&mut self, reply: Reply) -> Result<(), Error> {
        let res: Vec<u8> = reply.into();
        self.out.write_all(&res)?;
        self.out.flush()?;

        Ok(())
    }
}

/// Consumes `input` up to and including the next newline, or to the end of the stream.
fn skip_line<R: BufRead>(input: &mut R) -> io::Result<()> {
    loop {
        let (used, done) = {
            let available = input.fill_buf()?;
            match available.iter().position(|&b| b == b'\n') {
                Some(i) => (i + 1, true),
                None => (available.len(), available.is_empty()),
            }
        };
        input.consume(used);

        if done {
            return Ok(());
        }
    }
}

/// Runs the interactive tally on standard output until `Q` or the end of the input.
pub fn run(config: Config) -> Result<Exit, Error> {
    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(config.log_level)
        .try_init()
        .map_err(|e| debug!("Failed to initialize global tracing: {}", e));

    run_with(&config, io::stdout().lock())
}

/// Preloads the configured database, then executes the script file, or standard input when
/// there is none, writing every reply to `out`. A preload or script that cannot be opened is
/// returned as an error before any command runs.
pub fn run_with<W: Write>(config: &Config, out: W) -> Result<Exit, Error> {
    let mut store = RecordStore::new();
    if let Some(path) = &config.preload {
        let loaded = persistence::load_file(path)?;
        info!(
            path = %path.display(),
            records = loaded.store.size(),
            "Preloaded database"
        );
        store.replace_with(loaded.store);
    }

    let mut interpreter = Interpreter::with_store(store, out);

    let exit = match &config.script {
        Some(path) => {
            let file = File::open(path).map_err(|source| PersistenceError::FileOpen {
                path: path.clone(),
                access: Access::Read,
                source,
            })?;
            interpreter.run(BufReader::new(file))?
        }
        None => interpreter.run(io::stdin().lock())?,
    };

    info!("Interpreter stopped: {:?}", exit);
    Ok(exit)
}
