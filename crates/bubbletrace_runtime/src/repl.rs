//! The main REPL implementation.

use std::io::{self, Write};

use bubbletrace_debug::{HumanFormatter, TraceFormatter, parse_input};
use bubbletrace_foundation::Result;
use tracing::debug;

use crate::command::{Command, HELP};
use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::export;
use crate::player::{CLEAR, Player, StopReason, TerminalTicker, Ticker};
use crate::render::Renderer;
use crate::session::Session;

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor, T: Ticker = TerminalTicker> {
    /// The line editor for input.
    editor: E,

    /// Waits between auto-play frames.
    ticker: T,

    /// Session state (input, trace, cursor).
    session: Session,

    /// Frame renderer.
    renderer: Renderer,

    /// Where frames and messages are written.
    output: Box<dyn Write>,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Whether each frame clears the screen first.
    clear_screen: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor, TerminalTicker> {
    /// Creates a new REPL with the rustyline editor and terminal ticker.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new() -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_parts(editor, TerminalTicker::new()))
    }
}

impl<E: LineEditor, T: Ticker> Repl<E, T> {
    /// Creates a new REPL with the given editor and ticker.
    pub fn with_parts(editor: E, ticker: T) -> Self {
        Self {
            editor,
            ticker,
            session: Session::new(),
            renderer: Renderer::default(),
            output: Box::new(io::stdout()),
            show_banner: true,
            clear_screen: true,
            prompt: "bubble> ".to_string(),
        }
    }

    /// Sets the session for this REPL.
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }

    /// Sets the frame renderer.
    #[must_use]
    pub fn with_renderer(mut self, renderer: Renderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// Redirects frames and messages (stdout by default).
    #[must_use]
    pub fn with_output(mut self, output: Box<dyn Write>) -> Self {
        self.output = output;
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Controls whether frames clear the screen.
    #[must_use]
    pub const fn with_clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns a mutable reference to the session.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Runs the REPL loop.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner()?;
        }

        while self.read_eval_print()? {}

        writeln!(self.output, "\nGoodbye!")?;
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit. Command errors
    /// are printed and do not end the loop.
    fn read_eval_print(&mut self) -> Result<bool> {
        let input = match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => {
                self.session.pause();
                return Ok(true);
            }
            ReadResult::Eof => return Ok(false),
        };

        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(true);
        }

        self.editor.add_history(trimmed);

        match self.eval(trimmed) {
            Ok(keep_going) => Ok(keep_going),
            Err(e) => {
                self.print_error(&e);
                Ok(true)
            }
        }
    }

    /// Evaluates one command line.
    ///
    /// Returns `Ok(false)` when the command ends the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the command is malformed or output fails.
    pub fn eval(&mut self, line: &str) -> Result<bool> {
        let command = Command::parse(line)?;
        debug!(?command, "evaluating command");

        match command {
            Command::Generate(text) => {
                if let Some(text) = text {
                    self.session.set_input(text);
                }
                self.session.generate();
                self.show()?;
                if self.session.trace().is_empty() {
                    if let Err(e) = parse_input(self.session.input()) {
                        writeln!(self.output, "{e}")?;
                    }
                }
            }
            Command::Random => {
                let input = self.session.randomize_input().to_string();
                writeln!(self.output, "input = {input}")?;
                writeln!(self.output, "(type `gen` to record it)")?;
            }
            Command::Next => {
                self.session.next();
                self.show()?;
            }
            Command::Prev => {
                self.session.prev();
                self.show()?;
            }
            Command::Goto(frame) => {
                self.session.goto(frame.saturating_sub(1));
                self.show()?;
            }
            Command::First => {
                self.session.first();
                self.show()?;
            }
            Command::Last => {
                self.session.last();
                self.show()?;
            }
            Command::Play(max_frames) => self.play(max_frames)?,
            Command::Pause => {
                self.session.pause();
                let position = self.position();
                writeln!(self.output, "paused at frame {position}")?;
            }
            Command::Speed(level) => {
                if let Some(level) = level {
                    self.session.set_speed(level);
                }
                writeln!(self.output, "speed: {}", self.session.speed())?;
            }
            Command::Show => self.show()?,
            Command::Code => {
                let active = self
                    .session
                    .current()
                    .snapshot
                    .and_then(bubbletrace_foundation::Snapshot::source_line);
                let listing = self.renderer.listing().numbered().render(active);
                writeln!(self.output, "{listing}")?;
            }
            Command::Summary => {
                writeln!(self.output, "input: {}", self.session.input())?;
                if self.session.trace().is_empty() {
                    writeln!(self.output, "no trace recorded")?;
                } else {
                    let position = self.position();
                    writeln!(self.output, "{}", self.session.trace().summary())?;
                    writeln!(self.output, "at frame {position}")?;
                }
            }
            Command::Log(count) => {
                let start = self.session.current().index;
                let window = self.session.trace().window(start, start.saturating_add(count));
                if !window.is_empty() {
                    let log = HumanFormatter::new()
                        .with_index()
                        .with_values()
                        .format_many(start + 1, window);
                    writeln!(self.output, "{log}")?;
                }
            }
            Command::Frames => export::write_json(self.session.trace(), self.output.as_mut())?,
            Command::Help => writeln!(self.output, "{HELP}")?,
            Command::Quit => return Ok(false),
        }

        Ok(true)
    }

    /// Formats the cursor as `i/len` (1-based).
    fn position(&self) -> String {
        let total = self.session.trace().len();
        let index = self.session.current().index;
        if total == 0 {
            "0/0".to_string()
        } else {
            format!("{}/{total}", index + 1)
        }
    }

    fn show(&mut self) -> Result<()> {
        if self.clear_screen {
            write!(self.output, "{CLEAR}")?;
        }
        let frame = self
            .renderer
            .frame(self.session.current(), self.session.trace().len());
        writeln!(self.output, "{frame}")?;
        self.output.flush()?;
        Ok(())
    }

    fn play(&mut self, max_frames: Option<usize>) -> Result<()> {
        let report = Player::new(&mut self.ticker, &self.renderer)
            .with_clear_screen(self.clear_screen)
            .play(&mut self.session, self.output.as_mut(), max_frames)?;

        let message = match report.reason {
            StopReason::Empty => "nothing to play; record a trace with `gen`".to_string(),
            StopReason::End => format!("reached the last frame ({})", self.position()),
            StopReason::Paused => format!("paused at frame {}", self.position()),
            StopReason::FrameLimit => format!("played {} frames", report.frames),
        };
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    /// Prints an error message.
    #[allow(clippy::unused_self)]
    fn print_error(&self, error: &bubbletrace_foundation::Error) {
        eprintln!("\x1b[31mError: {error}\x1b[0m");
    }

    /// Prints the welcome banner.
    fn print_banner(&mut self) -> Result<()> {
        writeln!(self.output, "\x1b[1;36mBubble Sort Visualization\x1b[0m")?;
        writeln!(
            self.output,
            "bubbletrace v{}. Type `help` for commands, Ctrl+D to exit.",
            env!("CARGO_PKG_VERSION")
        )?;
        writeln!(self.output, "input = {}", self.session.input())?;
        writeln!(self.output, "(type `gen` to record it)\n")?;
        Ok(())
    }
}
