//! Line-oriented command scripts that drive a canvas without a GUI.
//!
//! Each non-empty line is one command; `#` starts a comment.
//!
//! ```text
//! mode draw
//! pen rect
//! color 0,128,255
//! width 3
//! down 10 10
//! drag 60 40
//! up 60 40
//! pen text
//! text Hello there      # answer for the next text prompt
//! down 20 90            # prompts
//! down 20 90            # places
//! undo
//! ```

use crate::draw::Color;
use crate::input::{CanvasState, Mode, Pen};
use crate::util;
use log::debug;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use thiserror::Error;

/// A single script command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Mode(Mode),
    Pen(Pen),
    Color(Color),
    Width(f64),
    FontSize(f64),
    /// Queues the answer returned by the next text prompt
    Text(String),
    Down(f64, f64),
    Drag(f64, f64),
    Up(f64, f64),
    Undo,
    Redo,
    Reset(u32, u32),
}

/// Errors produced while parsing a script.
#[derive(Debug, Error, PartialEq)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: {message}")]
    InvalidArgument { line: usize, message: String },
}

/// A parsed script; each command keeps its source line number.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Script {
    commands: Vec<(usize, Command)>,
}

impl Script {
    /// Parses script source. Fails on the first malformed line.
    pub fn parse(source: &str) -> Result<Self, ScriptError> {
        let mut commands = Vec::new();
        for (index, raw) in source.lines().enumerate() {
            let line = index + 1;
            let text = raw.split('#').next().unwrap_or_default().trim();
            if text.is_empty() {
                continue;
            }
            commands.push((line, parse_line(line, text)?));
        }
        Ok(Self { commands })
    }

    pub fn commands(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter().map(|(_, command)| command)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Runs every command against `canvas`.
    ///
    /// Installs a text prompt on the canvas that answers with the strings queued by `text`
    /// commands, and cancels once the queue is empty.
    pub fn apply(&self, canvas: &mut CanvasState) {
        let answers: Rc<RefCell<VecDeque<String>>> = Rc::default();
        let prompt_answers = Rc::clone(&answers);
        canvas.set_text_prompt(move || prompt_answers.borrow_mut().pop_front());

        for (line, command) in &self.commands {
            debug!("script line {line}: {command:?}");
            match command {
                Command::Mode(mode) => canvas.set_mode(*mode),
                Command::Pen(pen) => canvas.set_pen(*pen),
                Command::Color(color) => canvas.set_stroke_color(*color),
                Command::Width(width) => canvas.set_stroke_width(*width),
                Command::FontSize(size) => canvas.set_font_size(*size),
                Command::Text(text) => answers.borrow_mut().push_back(text.clone()),
                Command::Down(x, y) => canvas.on_pointer_down(*x, *y),
                Command::Drag(x, y) => canvas.on_pointer_drag(*x, *y),
                Command::Up(x, y) => canvas.on_pointer_up(*x, *y),
                Command::Undo => canvas.undo(),
                Command::Redo => canvas.redo(),
                Command::Reset(w, h) => canvas.reset(*w, *h),
            }
        }
    }
}

fn parse_line(line: usize, text: &str) -> Result<Command, ScriptError> {
    let (name, rest) = match text.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (text, ""),
    };
    let invalid = |message: String| ScriptError::InvalidArgument { line, message };

    let command = match name.to_lowercase().as_str() {
        "mode" => Command::Mode(rest.parse().map_err(invalid)?),
        "pen" => Command::Pen(rest.parse().map_err(invalid)?),
        "color" => Command::Color(
            util::parse_color(rest).ok_or_else(|| invalid(format!("invalid color '{rest}'")))?,
        ),
        "width" => Command::Width(number(rest, "width").map_err(invalid)?),
        "font-size" => Command::FontSize(number(rest, "font size").map_err(invalid)?),
        "text" => {
            if rest.is_empty() {
                return Err(invalid("text needs a string".to_string()));
            }
            Command::Text(rest.to_string())
        }
        "down" | "drag" | "up" => {
            let (x, y) = pair(rest).map_err(invalid)?;
            match name.to_lowercase().as_str() {
                "down" => Command::Down(x, y),
                "drag" => Command::Drag(x, y),
                _ => Command::Up(x, y),
            }
        }
        "undo" => no_args(Command::Undo, rest).map_err(invalid)?,
        "redo" => no_args(Command::Redo, rest).map_err(invalid)?,
        "reset" => {
            let (w, h) = pair::<u32>(rest).map_err(invalid)?;
            Command::Reset(w, h)
        }
        _ => {
            return Err(ScriptError::UnknownCommand {
                line,
                command: name.to_string(),
            });
        }
    };
    Ok(command)
}

fn number(value: &str, what: &str) -> Result<f64, String> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| format!("invalid {what} '{value}'"))
}

fn pair<T: std::str::FromStr>(value: &str) -> Result<(T, T), String> {
    let parts: Vec<&str> = value.split_whitespace().collect();
    match parts.as_slice() {
        [a, b] => match (a.parse(), b.parse()) {
            (Ok(a), Ok(b)) => Ok((a, b)),
            _ => Err(format!("invalid coordinates '{value}'")),
        },
        _ => Err(format!("expected two values, got '{value}'")),
    }
}

fn no_args(command: Command, rest: &str) -> Result<Command, String> {
    if rest.is_empty() {
        Ok(command)
    } else {
        Err(format!("unexpected arguments '{rest}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLUE, Shape};

    #[test]
    fn parses_commands_and_skips_comments() {
        let script = Script::parse(
            "# header\n\nmode draw\npen circle # inline\ncolor 0,0,255\nwidth 2.5\ndown 1 2\nundo\n",
        )
        .unwrap();
        let commands: Vec<_> = script.commands().cloned().collect();
        assert_eq!(
            commands,
            vec![
                Command::Mode(Mode::Draw),
                Command::Pen(Pen::Circle),
                Command::Color(BLUE),
                Command::Width(2.5),
                Command::Down(1.0, 2.0),
                Command::Undo,
            ]
        );
    }

    #[test]
    fn errors_report_line_numbers() {
        let err = Script::parse("mode draw\n\nfly 1 2\n").unwrap_err();
        assert_eq!(
            err,
            ScriptError::UnknownCommand {
                line: 3,
                command: "fly".to_string()
            }
        );

        let err = Script::parse("down 1\n").unwrap_err();
        assert!(err.to_string().starts_with("line 1:"));

        let err = Script::parse("mode draw\npen lasso\n").unwrap_err();
        assert_eq!(err.to_string(), "line 2: unknown pen 'lasso'");

        assert!(Script::parse("width nan").is_err());
        assert!(Script::parse("undo now").is_err());
        assert!(Script::parse("text").is_err());
    }

    #[test]
    fn text_keeps_inner_spaces() {
        let script = Script::parse("text  Hello   world ").unwrap();
        assert_eq!(
            script.commands().next(),
            Some(&Command::Text("Hello   world".to_string()))
        );
    }

    #[test]
    fn apply_drives_the_canvas() {
        let script = Script::parse(
            "mode draw\npen line\ndown 0 0\ndrag 5 5\nup 5 5\npen text\ntext Hi\ndown 3 20\ndown 4 21\n",
        )
        .unwrap();
        let mut canvas = CanvasState::with_font(30, 30, None);
        script.apply(&mut canvas);

        let shapes = &canvas.frame().shapes;
        assert_eq!(shapes.len(), 2);
        assert!(matches!(&shapes[1], Shape::Text { text, .. } if text == "Hi"));
    }

    #[test]
    fn text_prompt_without_queued_answer_cancels() {
        let script = Script::parse("mode draw\npen text\ndown 3 20\ndown 4 21\n").unwrap();
        let mut canvas = CanvasState::with_font(30, 30, None);
        script.apply(&mut canvas);
        assert!(canvas.frame().is_blank());
    }

    #[test]
    fn reset_resizes() {
        let script = Script::parse("reset 12 34").unwrap();
        let mut canvas = CanvasState::with_font(30, 30, None);
        script.apply(&mut canvas);
        assert_eq!((canvas.width(), canvas.height()), (12, 34));
        assert_eq!(script.len(), 1);
    }

    #[test]
    fn huge_reset_is_clamped() {
        let script = Script::parse("reset 100000 2").unwrap();
        let mut canvas = CanvasState::with_font(30, 30, None);
        script.apply(&mut canvas);
        assert_eq!((canvas.width(), canvas.height()), (16384, 2));
    }
}
