//! Pen and mode selection.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shape kind created by the next drawing action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Pen {
    /// Freehand polyline following the pointer
    Freehand,
    /// Straight line from press point to pointer
    Line,
    /// Rectangle from press point to pointer
    Rect,
    /// Square sized by the vertical drag distance
    Square,
    /// Circle centered on the press point
    Circle,
    /// Text placed at the press point after prompting for a string
    Text,
}

/// High-level interaction mode governing how pointer events are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Pointer creates shapes with the active pen
    Draw,
    /// Pointer paints wide white freehand strokes
    Erase,
    /// Pointer creates and moves the rectangular selection
    Select,
    /// Pointer picks the color under it as the stroke color
    Pick,
}

impl Pen {
    pub fn name(self) -> &'static str {
        match self {
            Pen::Freehand => "freehand",
            Pen::Line => "line",
            Pen::Rect => "rect",
            Pen::Square => "square",
            Pen::Circle => "circle",
            Pen::Text => "text",
        }
    }
}

impl Mode {
    pub fn name(self) -> &'static str {
        match self {
            Mode::Draw => "draw",
            Mode::Erase => "erase",
            Mode::Select => "select",
            Mode::Pick => "pick",
        }
    }
}

impl fmt::Display for Pen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pen {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "freehand" | "pen" => Ok(Pen::Freehand),
            "line" => Ok(Pen::Line),
            "rect" | "rectangle" => Ok(Pen::Rect),
            "square" => Ok(Pen::Square),
            "circle" => Ok(Pen::Circle),
            "text" => Ok(Pen::Text),
            other => Err(format!("unknown pen '{other}'")),
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "draw" => Ok(Mode::Draw),
            "erase" => Ok(Mode::Erase),
            "select" => Ok(Mode::Select),
            "pick" => Ok(Mode::Pick),
            other => Err(format!("unknown mode '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_parse_back() {
        for pen in [
            Pen::Freehand,
            Pen::Line,
            Pen::Rect,
            Pen::Square,
            Pen::Circle,
            Pen::Text,
        ] {
            assert_eq!(pen.name().parse::<Pen>(), Ok(pen));
        }
        for mode in [Mode::Draw, Mode::Erase, Mode::Select, Mode::Pick] {
            assert_eq!(mode.to_string().parse::<Mode>(), Ok(mode));
        }
    }

    #[test]
    fn parsing_accepts_aliases_and_case() {
        assert_eq!("Rectangle".parse::<Pen>(), Ok(Pen::Rect));
        assert_eq!(" PICK ".parse::<Mode>(), Ok(Mode::Pick));
        assert!("lasso".parse::<Pen>().is_err());
    }
}
