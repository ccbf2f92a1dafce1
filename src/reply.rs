use std::fmt;

const SUCCESS: &str = "SUCCESS";

/// What the interpreter writes back after executing a command.
#[derive(Clone, Debug, PartialEq)]
pub enum Reply {
    /// The command succeeded and has nothing else to show.
    Ok,
    /// A rendered report, followed by the success acknowledgment.
    Listing(String),
    /// The store was replaced by a load. `warnings` holds one message per skipped line.
    Replaced { warnings: Vec<String> },
    /// The command could not be carried out. The store is unchanged.
    Error(String),
    /// The store was released and the interpreter should stop reading.
    Quit,
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Ok | Reply::Quit => writeln!(f, "{}", SUCCESS),
            Reply::Listing(report) => {
                f.write_str(report)?;
                writeln!(f, "{}", SUCCESS)
            }
            Reply::Replaced { warnings } => {
                for warning in warnings {
                    writeln!(f, "{}", warning)?;
                }
                writeln!(f, "{}", SUCCESS)
            }
            Reply::Error(msg) => writeln!(f, "{}", msg),
        }
    }
}

impl From<Reply> for Vec<u8> {
    fn from(reply: Reply) -> Self {
        reply.to_string().into_bytes()
    }
}
