//! Textual input scripts for headless sessions.
//!
//! A script is a `;`-separated list of commands:
//!
//! ```text
//! drag 0,0 -10,0; wait 1; right; wait 0.5; right; reset
//! ```
//!
//! `up`, `down`, `left` and `right` press a direction. `drag` takes two or
//! more `X,Y` pointer positions: the first starts the drag, the rest move
//! it, and the drag is released after the last one. `wait` advances time by
//! the given number of seconds. `reset` triggers a paradox reset.

use crate::action::Action;
use glam::Vec2;
use mindpoint_common::Direction;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScriptError {
    #[error("command {index}: unknown command `{command}`")]
    UnknownCommand { index: usize, command: String },
    #[error("command {index}: `{command}` expects {expected}")]
    BadArguments {
        index: usize,
        command: &'static str,
        expected: &'static str,
    },
    #[error("command {index}: `{text}` is not a number")]
    BadNumber { index: usize, text: String },
    #[error("command {index}: `{text}` is not an X,Y point")]
    BadPoint { index: usize, text: String },
}

/// Parse a script into the actions it stands for.
pub fn parse_script(source: &str) -> Result<Vec<Action>, ScriptError> {
    let mut actions = Vec::new();
    let commands = source.split([';', '\n']).map(str::trim).filter(|c| !c.is_empty());
    for (index, command) in commands.enumerate() {
        let mut words = command.split_whitespace();
        let Some(head) = words.next() else {
            continue;
        };
        let args: Vec<&str> = words.collect();
        match head.to_ascii_lowercase().as_str() {
            "up" | "down" | "left" | "right" => {
                if !args.is_empty() {
                    return Err(ScriptError::BadArguments {
                        index,
                        command: "move",
                        expected: "no arguments",
                    });
                }
                actions.push(Action::Press(direction(head)));
            }
            "reset" => {
                if !args.is_empty() {
                    return Err(ScriptError::BadArguments {
                        index,
                        command: "reset",
                        expected: "no arguments",
                    });
                }
                actions.push(Action::Reset);
            }
            "wait" => {
                let [text] = args.as_slice() else {
                    return Err(ScriptError::BadArguments {
                        index,
                        command: "wait",
                        expected: "one duration in seconds",
                    });
                };
                let seconds = number(index, text)?;
                if seconds < 0.0 {
                    return Err(ScriptError::BadNumber {
                        index,
                        text: text.to_string(),
                    });
                }
                actions.push(Action::Wait(seconds));
            }
            "drag" => {
                let Some((first, rest)) = args.split_first().filter(|(_, rest)| !rest.is_empty())
                else {
                    return Err(ScriptError::BadArguments {
                        index,
                        command: "drag",
                        expected: "at least two X,Y points",
                    });
                };
                actions.push(Action::DragStart(point(index, first)?));
                for text in rest {
                    actions.push(Action::DragMove(point(index, text)?));
                }
                actions.push(Action::DragEnd);
            }
            _ => {
                return Err(ScriptError::UnknownCommand {
                    index,
                    command: head.to_string(),
                });
            }
        }
    }
    Ok(actions)
}

fn direction(word: &str) -> Direction {
    match word.to_ascii_lowercase().as_str() {
        "up" => Direction::Up,
        "down" => Direction::Down,
        "left" => Direction::Left,
        _ => Direction::Right,
    }
}

fn number(index: usize, text: &str) -> Result<f32, ScriptError> {
    text.parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ScriptError::BadNumber {
            index,
            text: text.to_string(),
        })
}

fn point(index: usize, text: &str) -> Result<Vec2, ScriptError> {
    let bad = || ScriptError::BadPoint {
        index,
        text: text.to_string(),
    };
    let (x, y) = text.split_once(',').ok_or_else(bad)?;
    let x = number(index, x.trim()).map_err(|_| bad())?;
    let y = number(index, y.trim()).map_err(|_| bad())?;
    Ok(Vec2::new(x, y))
}
