use std::io::{self, Write};

use crate::board::{Color, Level};

use super::CliError;

/// Follow-up the session must perform after an option changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliOptionAction {
    /// Apply a new difficulty to the running game
    ChangeLevel(Level),
}

/// Settings that outlive a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CliOptions {
    pub level: Level,
    /// Color the human plays; takes effect on the next `new` or `position`
    pub human: Color,
}

impl Default for CliOptions {
    fn default() -> Self {
        CliOptions {
            level: Level::default(),
            human: Color::Light,
        }
    }
}

impl CliOptions {
    pub fn print<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "option level {} (1-5, depth {})", self.level, self.level.depth())?;
        writeln!(out, "option color {}", self.human)
    }

    pub fn apply_set(
        &mut self,
        name: &str,
        value: Option<&str>,
    ) -> Result<Option<CliOptionAction>, CliError> {
        let normalized = name.trim().to_ascii_lowercase();
        let value = value.ok_or(CliError::MissingArgument("option value"))?;
        match normalized.as_str() {
            "level" | "difficulty" => {
                let level: Level = value.parse()?;
                if level != self.level {
                    self.level = level;
                    return Ok(Some(CliOptionAction::ChangeLevel(level)));
                }
            }
            "color" | "colour" | "side" => {
                self.human = parse_color(value)?;
            }
            _ => return Err(CliError::UnknownOption(name.to_string())),
        }
        Ok(None)
    }
}

/// Accepts `light`/`dark` and the usual `white`/`black` aliases.
pub fn parse_color(value: &str) -> Result<Color, CliError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "light" | "white" | "w" => Ok(Color::Light),
        "dark" | "black" | "b" => Ok(Color::Dark),
        other => Err(CliError::InvalidColor(other.to_string())),
    }
}

/// Split `set <name> <value...>` into name and optional value.
#[must_use]
pub fn parse_set(parts: &[&str]) -> Option<(String, Option<String>)> {
    if parts.first() != Some(&"set") {
        return None;
    }
    let name = parts.get(1)?;
    let value = if parts.len() > 2 {
        Some(parts[2..].join(" "))
    } else {
        None
    };
    Some(((*name).to_string(), value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_set() {
        assert_eq!(
            parse_set(&["set", "level", "3"]),
            Some(("level".to_string(), Some("3".to_string())))
        );
        assert_eq!(parse_set(&["set", "color"]), Some(("color".to_string(), None)));
        assert_eq!(parse_set(&["set"]), None);
        assert_eq!(parse_set(&["go"]), None);
    }

    #[test]
    fn test_apply_level() {
        let mut options = CliOptions::default();
        let action = options.apply_set("Level", Some("5")).unwrap();
        assert_eq!(action, Some(CliOptionAction::ChangeLevel(Level::MAX)));
        assert_eq!(options.level, Level::MAX);
        assert_eq!(options.apply_set("level", Some("5")).unwrap(), None);
        assert!(matches!(
            options.apply_set("level", Some("9")),
            Err(CliError::InvalidLevel(_))
        ));
    }

    #[test]
    fn test_apply_color() {
        let mut options = CliOptions::default();
        options.apply_set("color", Some("black")).unwrap();
        assert_eq!(options.human, Color::Dark);
        assert!(matches!(
            options.apply_set("color", Some("green")),
            Err(CliError::InvalidColor(_))
        ));
    }

    #[test]
    fn test_unknown_option() {
        let mut options = CliOptions::default();
        assert!(matches!(
            options.apply_set("hash", Some("64")),
            Err(CliError::UnknownOption(_))
        ));
        assert!(matches!(
            options.apply_set("level", None),
            Err(CliError::MissingArgument(_))
        ));
    }
}
