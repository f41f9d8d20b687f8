//! Input dispatcher: maps clicks and keys to navigation commands.

use serde::{Deserialize, Serialize};

use crate::surface::Control;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    ArrowRight,
    ArrowLeft,
    Space,
    Home,
    End,
    Other,
}

impl Key {
    /// Parse a `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Self {
        match key {
            "ArrowRight" => Key::ArrowRight,
            "ArrowLeft" => Key::ArrowLeft,
            " " | "Spacebar" => Key::Space,
            "Home" => Key::Home,
            "End" => Key::End,
            _ => Key::Other,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Input {
    Click(Control),
    Key(Key),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Advance,
    Retreat,
    First,
    Last,
}

/// What the host should do with an input event.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dispatch {
    pub command: Option<Command>,
    pub prevent_default: bool,
    pub stop_propagation: bool,
}

impl Dispatch {
    const IGNORED: Dispatch = Dispatch {
        command: None,
        prevent_default: false,
        stop_propagation: false,
    };
}

/// Map an input to a command.
///
/// Control clicks always suppress the default action and stop propagation;
/// the navigator decides whether the move happens. Keys are dropped entirely
/// while a transition runs, default action included.
pub fn dispatch(input: Input, animating: bool) -> Dispatch {
    match input {
        Input::Click(control) => Dispatch {
            command: Some(match control {
                Control::Prev => Command::Retreat,
                Control::Next => Command::Advance,
            }),
            prevent_default: true,
            stop_propagation: true,
        },
        Input::Key(_) if animating => Dispatch::IGNORED,
        Input::Key(key) => {
            let command = match key {
                Key::ArrowRight | Key::Space => Command::Advance,
                Key::ArrowLeft => Command::Retreat,
                Key::Home => Command::First,
                Key::End => Command::Last,
                Key::Other => return Dispatch::IGNORED,
            };
            Dispatch {
                command: Some(command),
                prevent_default: true,
                stop_propagation: false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dom_keys() {
        assert_eq!(Key::from_dom(" "), Key::Space);
        assert_eq!(Key::from_dom("ArrowRight"), Key::ArrowRight);
        assert_eq!(Key::from_dom("a"), Key::Other);
    }

    #[test]
    fn keys_map_to_commands() {
        let d = dispatch(Input::Key(Key::Space), false);
        assert_eq!(d.command, Some(Command::Advance));
        assert!(d.prevent_default);
        assert_eq!(dispatch(Input::Key(Key::End), false).command, Some(Command::Last));
        assert_eq!(dispatch(Input::Key(Key::Other), false), Dispatch::default());
    }

    #[test]
    fn keys_are_dropped_while_animating_but_clicks_are_not() {
        assert_eq!(dispatch(Input::Key(Key::ArrowLeft), true), Dispatch::default());
        let click = dispatch(Input::Click(Control::Prev), true);
        assert_eq!(click.command, Some(Command::Retreat));
        assert!(click.prevent_default && click.stop_propagation);
    }
}
