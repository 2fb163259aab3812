//! Line-oriented command dispatcher
//!
//! The dispatcher only tokenizes: it checks the command letter, the number of
//! arguments and that numbers are integers. Range and colour validation is
//! left to [`Bitmap`], which re-checks everything it is handed.

use std::io::{BufRead, Write};
use std::str::FromStr;

use log::{debug, warn};

use crate::{Bitmap, EditorConfig, Error, OutputFormat, Result};

/// A single parsed editor command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `I N M`: create a new N x M bitmap
    Init { width: i64, height: i64 },
    /// `C`: clear the bitmap
    Clear,
    /// `L X Y C`: colour one pixel
    Pixel { x: i64, y: i64, colour: String },
    /// `V X Y1 Y2 C`: vertical segment
    Vertical { x: i64, y1: i64, y2: i64, colour: String },
    /// `H X1 X2 Y C`: horizontal segment
    Horizontal { x1: i64, x2: i64, y: i64, colour: String },
    /// `F X Y C`: bucket fill
    Fill { x: i64, y: i64, colour: String },
    /// `S`: show the bitmap
    Show,
}

impl Command {
    fn usage(letter: &str) -> &'static str {
        match letter {
            "I" => "I N M",
            "C" => "C",
            "L" => "L X Y C",
            "V" => "V X Y1 Y2 C",
            "H" => "H X1 X2 Y C",
            "F" => "F X Y C",
            _ => "S",
        }
    }
}

fn number(arg: &str) -> Result<i64> {
    arg.parse().map_err(|_| Error::InvalidNumber(arg.to_string()))
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        let args: Vec<&str> = line.split_whitespace().collect();
        let Some((&letter, rest)) = args.split_first() else {
            return Err(Error::UnknownCommand(String::new()));
        };

        let arity = match letter {
            "I" => 2,
            "L" | "F" => 3,
            "V" | "H" => 4,
            "C" | "S" => 0,
            other => return Err(Error::UnknownCommand(other.to_string())),
        };
        if rest.len() != arity {
            return Err(Error::InvalidArguments {
                usage: Command::usage(letter),
            });
        }

        let cmd = match (letter, rest) {
            ("I", [n, m]) => Command::Init {
                width: number(n)?,
                height: number(m)?,
            },
            ("L", [x, y, c]) => Command::Pixel {
                x: number(x)?,
                y: number(y)?,
                colour: c.to_string(),
            },
            ("F", [x, y, c]) => Command::Fill {
                x: number(x)?,
                y: number(y)?,
                colour: c.to_string(),
            },
            ("V", [x, y1, y2, c]) => Command::Vertical {
                x: number(x)?,
                y1: number(y1)?,
                y2: number(y2)?,
                colour: c.to_string(),
            },
            ("H", [x1, x2, y, c]) => Command::Horizontal {
                x1: number(x1)?,
                x2: number(x2)?,
                y: number(y)?,
                colour: c.to_string(),
            },
            ("C", []) => Command::Clear,
            _ => Command::Show,
        };
        Ok(cmd)
    }
}

/// Counters reported at the end of [`Editor::run`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Non-blank lines processed
    pub executed: usize,
    /// Lines that were rejected
    pub failed: usize,
}

/// Holds the current bitmap (if any) and applies commands to it
#[derive(Debug, Default)]
pub struct Editor {
    config: EditorConfig,
    bitmap: Option<Bitmap>,
}

impl Editor {
    pub fn new(config: EditorConfig) -> Self {
        Self { config, bitmap: None }
    }

    /// The current bitmap, if an `I` command has succeeded
    pub fn bitmap(&self) -> Option<&Bitmap> {
        self.bitmap.as_ref()
    }

    fn bitmap_mut(&mut self) -> Result<&mut Bitmap> {
        self.bitmap.as_mut().ok_or(Error::NoImage)
    }

    /// Apply one command. Returns the text to print, if the command produces any.
    pub fn execute(&mut self, cmd: &Command) -> Result<Option<String>> {
        debug!("executing {:?}", cmd);
        match cmd {
            Command::Init { width, height } => {
                // a failed I keeps the previous bitmap
                self.bitmap = Some(Bitmap::new(*width, *height)?);
            }
            Command::Clear => self.bitmap_mut()?.clear(),
            Command::Pixel { x, y, colour } => {
                self.bitmap_mut()?.set_colour(*x, *y, colour.as_str())?;
            }
            Command::Vertical { x, y1, y2, colour } => {
                self.bitmap_mut()?.vertical_segment(*x, *y1, *y2, colour.as_str())?;
            }
            Command::Horizontal { x1, x2, y, colour } => {
                self.bitmap_mut()?.horizontal_segment(*x1, *x2, *y, colour.as_str())?;
            }
            Command::Fill { x, y, colour } => {
                self.bitmap_mut()?.fill_bucket(*x, *y, colour.as_str())?;
            }
            Command::Show => {
                let bitmap = self.bitmap.as_ref().ok_or(Error::NoImage)?;
                let out = match self.config.output {
                    OutputFormat::Text => bitmap.render(),
                    OutputFormat::Json => {
                        format!("{}\n", serde_json::to_string(&bitmap.snapshot())?)
                    }
                };
                return Ok(Some(out));
            }
        }
        Ok(None)
    }

    /// Parse and apply a single line of input.
    pub fn execute_line(&mut self, line: &str) -> Result<Option<String>> {
        let cmd: Command = line.parse()?;
        self.execute(&cmd)
    }

    /// Run every line of `input`, writing echoes, output and errors to `out`.
    ///
    /// Rejected lines are reported as `error: <message>` and processing
    /// continues, unless `stop_on_error` is set in which case the first
    /// rejection is returned. I/O failures always abort.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        for (idx, line) in input.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            summary.executed += 1;

            if self.config.echo_commands {
                writeln!(out, "{}", line)?;
            }

            match self.execute_line(line) {
                Ok(Some(text)) => out.write_all(text.as_bytes())?,
                Ok(None) => {}
                Err(err @ Error::Io(_)) => return Err(err),
                Err(err) => {
                    warn!("line {}: {}", idx + 1, err);
                    summary.failed += 1;
                    writeln!(out, "error: {}", err)?;
                    if self.config.stop_on_error {
                        return Err(err);
                    }
                }
            }
        }

        out.flush()?;
        Ok(summary)
    }
}
