//! Command line

use anyhow::bail;

pub const USAGE: &str = "\
usage: morse2led [TARGET | --print]

  (no arguments)  list available LED entries
  TARGET          blink stdin as Morse on the first LED whose name contains TARGET
  --print         write the Morse stream for stdin to stdout";

/// What the process was asked to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the LED registry
    List,
    /// Blink stdin on a matching LED
    Blink { target: String },
    /// Encode stdin to stdout
    Print,
    Help,
}

impl Command {
    pub fn parse<I>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let command = match args.next().as_deref() {
            None => Command::List,
            Some("-h") | Some("--help") => Command::Help,
            Some("--print") => Command::Print,
            Some(flag) if flag.starts_with('-') => bail!("Unknown option '{}'\n{}", flag, USAGE),
            Some(target) => Command::Blink {
                target: target.to_string(),
            },
        };

        if let Some(extra) = args.next() {
            bail!("Unexpected argument '{}'\n{}", extra, USAGE);
        }
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> anyhow::Result<Command> {
        Command::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_no_args_lists() {
        assert_eq!(parse(&[]).unwrap(), Command::List);
    }

    #[test]
    fn test_target() {
        assert_eq!(
            parse(&["capslock"]).unwrap(),
            Command::Blink {
                target: "capslock".to_string()
            }
        );
    }

    #[test]
    fn test_flags() {
        assert_eq!(parse(&["--print"]).unwrap(), Command::Print);
        assert_eq!(parse(&["-h"]).unwrap(), Command::Help);
        assert!(parse(&["--verbose"]).is_err());
    }

    #[test]
    fn test_extra_argument() {
        assert!(parse(&["capslock", "numlock"]).is_err());
    }
}
