//! Console commands

use std::str::FromStr;

/// A parsed console line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Raw key press, routed through the hotkey bindings
    Key(String),
    /// Add an item by item ID
    Add(u32),
    /// Clear a slot
    Remove(usize),
    /// Swap two slots
    Swap(usize, usize),
    /// Select a slot directly
    Select(usize),
    /// Use the selected item
    Use,
    /// Show the hotbar widget
    Show,
    /// Hide the hotbar widget
    Hide,
    /// List known items
    List,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  <key>          press a hotkey (default 1-9, 0)
  add <item-id>  add an item to the first free slot
  remove <slot>  clear a slot
  swap <a> <b>   swap two slots
  select <slot>  select a slot
  use            use the selected item
  show | hide    toggle the hotbar
  list           list item definitions
  quit";

fn number<T: FromStr>(arg: Option<&str>, what: &str) -> Result<T, String> {
    let arg = arg.ok_or_else(|| format!("missing {}", what))?;
    arg.parse()
        .map_err(|_| format!("'{}' is not a valid {}", arg, what))
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let Some(head) = words.next() else {
            return Err("empty command".to_string());
        };

        let command = match head.to_lowercase().as_str() {
            "add" => Self::Add(number(words.next(), "item id")?),
            "remove" | "rm" => Self::Remove(number(words.next(), "slot")?),
            "swap" => Self::Swap(number(words.next(), "slot")?, number(words.next(), "slot")?),
            "select" | "sel" => Self::Select(number(words.next(), "slot")?),
            "use" => Self::Use,
            "show" => Self::Show,
            "hide" => Self::Hide,
            "list" | "ls" => Self::List,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            _ => Self::Key(head.to_string()),
        };

        if let Some(extra) = words.next() {
            return Err(format!("unexpected argument '{}'", extra));
        }
        Ok(command)
    }
}
