use crate::adapters::parser::{CommandParser, ParsedLine};
use crate::core::service::RobotService;
use crate::domain::model::{Command, CommandResult};
use crate::domain::ports::PositionStore;
use crate::utils::error::{Result, RobotError};
use std::io::{BufRead, Write};

/// Tally of one session, mostly for logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub accepted: usize,
    pub rejected: usize,
    pub unparsed: usize,
}

/// Line-oriented command loop over any reader/writer pair.
pub struct Session<'a, S: PositionStore> {
    service: &'a RobotService<S>,
    parser: CommandParser,
}

impl<'a, S: PositionStore> Session<'a, S> {
    pub fn new(service: &'a RobotService<S>) -> Result<Self> {
        Ok(Self {
            service,
            parser: CommandParser::new()?,
        })
    }

    pub fn banner() -> String {
        format!("Enter command for ROBOT: {},EXIT", Command::NAMES.join(","))
    }

    /// Prints the banner only for a human at a terminal.
    pub fn greet<W: Write>(interactive: bool, output: &mut W) -> Result<()> {
        if interactive {
            writeln!(output, "{}", Self::banner())?;
        }
        Ok(())
    }

    /// Runs until EXIT or end of input.
    pub fn run<R: BufRead, W: Write>(&self, input: R, output: &mut W) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();

        for line in input.lines() {
            let line = line?;

            let command = match self.parser.parse(&line) {
                Ok(ParsedLine::Command(command)) => command,
                Ok(ParsedLine::Blank) => continue,
                Ok(ParsedLine::Exit) => break,
                Err(RobotError::ParseError { input }) => {
                    tracing::debug!("unparsed input: {:?}", input);
                    summary.unparsed += 1;
                    writeln!(output, "Command was not valid")?;
                    continue;
                }
                Err(e) => return Err(e),
            };

            let result = self.service.execute(command)?;
            if result.is_success() {
                summary.accepted += 1;
            } else {
                summary.rejected += 1;
            }
            Self::render(command, &result, output)?;
        }

        output.flush()?;
        tracing::info!(
            accepted = summary.accepted,
            rejected = summary.rejected,
            unparsed = summary.unparsed,
            "session finished"
        );
        Ok(summary)
    }

    fn render<W: Write>(command: Command, result: &CommandResult, output: &mut W) -> Result<()> {
        if !result.is_success() {
            writeln!(output, "{}", result.error_message())?;
            return Ok(());
        }

        if let (Command::Report, Some(position)) = (command, result.position) {
            writeln!(output, "{}", position)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryPositionStore;
    use crate::core::processor::CommandProcessor;

    fn run(script: &str) -> (String, SessionSummary) {
        let service = RobotService::new(CommandProcessor::default(), InMemoryPositionStore::new());
        let session = Session::new(&service).unwrap();
        let mut output = Vec::new();
        let summary = session.run(script.as_bytes(), &mut output).unwrap();
        (String::from_utf8(output).unwrap(), summary)
    }

    #[test]
    fn test_report_output() {
        let (output, summary) = run("PLACE 0,0,NORTH\nMOVE\nREPORT\n");
        assert_eq!(output, "0,1,NORTH\n");
        assert_eq!(
            summary,
            SessionSummary {
                accepted: 3,
                rejected: 0,
                unparsed: 0
            }
        );
    }

    #[test]
    fn test_errors_are_printed() {
        let (output, summary) = run("MOVE\nPLACE 9,9,NORTH\nDANCE\n\nREPORT\n");
        assert_eq!(
            output,
            "Robot is not placed\nPosition was not valid\nCommand was not valid\nRobot is not placed\n"
        );
        assert_eq!(summary.rejected, 3);
        assert_eq!(summary.unparsed, 1);
    }

    #[test]
    fn test_exit_stops_reading() {
        let (output, _) = run("PLACE 1,1,EAST\nEXIT\nREPORT\n");
        assert_eq!(output, "");
    }

    #[test]
    fn test_greet_only_when_interactive() {
        let mut output = Vec::new();
        Session::<InMemoryPositionStore>::greet(false, &mut output).unwrap();
        assert!(output.is_empty());

        Session::<InMemoryPositionStore>::greet(true, &mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            format!("{}\n", Session::<InMemoryPositionStore>::banner())
        );
    }

    #[test]
    fn test_banner_lists_commands() {
        assert_eq!(
            Session::<InMemoryPositionStore>::banner(),
            "Enter command for ROBOT: PLACE,MOVE,LEFT,RIGHT,REPORT,EXIT"
        );
    }
}
