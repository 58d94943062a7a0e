//! REPL command parsing.

use bubbletrace_debug::SpeedLevel;
use bubbletrace_foundation::{Error, Result};

/// Command words offered by completion and highlighting.
pub const NAMES: [&str; 19] = [
    "gen", "random", "next", "n", "prev", "p", "goto", "first", "last", "play", "pause", "speed",
    "show", "code", "summary", "log", "frames", "help", "quit",
];

/// Lines printed by `log` when no count is given.
pub const DEFAULT_LOG_LINES: usize = 10;

/// One line of REPL input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Record a trace, optionally from new input text.
    Generate(Option<String>),
    /// Replace the input with random values.
    Random,
    /// Step forward.
    Next,
    /// Step back.
    Prev,
    /// Jump to a frame number as shown in the header (1-based, clamped).
    Goto(isize),
    /// Jump to the first frame.
    First,
    /// Jump to the last frame.
    Last,
    /// Auto-play, optionally stopping after a number of frames.
    Play(Option<usize>),
    /// Stop auto-play.
    Pause,
    /// Show or set the speed level.
    Speed(Option<SpeedLevel>),
    /// Redraw the current frame.
    Show,
    /// Print the numbered pseudocode listing.
    Code,
    /// Print trace statistics.
    Summary,
    /// Print step descriptions starting at the cursor.
    Log(usize),
    /// Print the trace as JSON.
    Frames,
    /// Print help.
    Help,
    /// Leave the REPL.
    Quit,
}

impl Command {
    /// Parses one line of input.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown commands or malformed arguments.
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(w, r)| (w, r.trim()));
        let arg = (!rest.is_empty()).then_some(rest);

        let command = match word.to_ascii_lowercase().as_str() {
            "gen" | "generate" => Self::Generate(arg.map(str::to_string)),
            "random" | "rand" => Self::Random,
            "next" | "n" => Self::Next,
            "prev" | "p" => Self::Prev,
            "goto" | "g" => {
                let arg = arg.ok_or_else(|| Error::missing_argument("goto", "a frame number"))?;
                Self::Goto(parse_number("goto", arg)?)
            }
            "first" => Self::First,
            "last" => Self::Last,
            "play" => Self::Play(arg.map(|a| parse_number("play", a)).transpose()?),
            "pause" | "stop" => Self::Pause,
            "speed" => Self::Speed(arg.map(parse_speed).transpose()?),
            "show" | "" => Self::Show,
            "code" => Self::Code,
            "summary" | "stats" => Self::Summary,
            "log" => Self::Log(
                arg.map(|a| parse_number("log", a))
                    .transpose()?
                    .unwrap_or(DEFAULT_LOG_LINES),
            ),
            "frames" | "json" => Self::Frames,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => return Err(Error::unknown_command(other)),
        };

        Ok(command)
    }
}

fn parse_number<T: std::str::FromStr>(command: &'static str, arg: &str) -> Result<T> {
    arg.parse()
        .map_err(|_| Error::invalid_argument(command, format!("{arg:?} is not a valid number")))
}

fn parse_speed(arg: &str) -> Result<SpeedLevel> {
    let level: i64 = parse_number("speed", arg)?;
    SpeedLevel::checked(level)
        .ok_or_else(|| Error::invalid_argument("speed", format!("{level} is outside 1-10")))
}

/// Help text printed by the `help` command.
pub const HELP: &str = "\
Commands:
  gen [list]      record a trace (from the given list, or the current input)
  random          fill the input with 20 random values in 0-100
  next, n         step forward
  prev, p         step back
  goto <i>        jump to frame i as numbered in the header (clamped)
  first, last     jump to the first or last frame
  play [frames]   auto-play; any key pauses, + and - change speed
  pause           stop auto-play
  speed [1-10]    show or set the auto-play speed
  show            redraw the current frame
  code            print the pseudocode listing
  summary         print trace statistics
  log [count]     describe the next steps from the cursor (default 10)
  frames          print the trace as JSON
  help            print this help
  quit            leave";
