//! Input resolution: raw click targets and commands to game inputs.
//!
//! A host delegates every click on the card container to one handler. The
//! clicked element carries its board index as text (an attribute in a DOM,
//! the typed number in a terminal); `Input::card_target` turns that back into
//! an index. Anything that does not resolve becomes `Input::Invalid`, which
//! the game ignores.

/// One user input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Input {
    /// Click on the card at this board position.
    Card(usize),
    /// Reset control.
    Reset,
    /// Click that resolved to nothing.
    Invalid,
}

impl Input {
    /// Resolve a delegated click from the clicked element's index attribute.
    ///
    /// `None` means the click landed on the container itself, between cards.
    #[must_use]
    pub fn card_target(index_attr: Option<&str>) -> Self {
        index_attr
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .map_or(Input::Invalid, Input::Card)
    }

    /// Parse a typed command: a card index, or `r` / `reset`.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.eq_ignore_ascii_case("r") || line.eq_ignore_ascii_case("reset") {
            Input::Reset
        } else {
            Input::card_target(Some(line))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_target() {
        assert_eq!(Input::card_target(Some("7")), Input::Card(7));
        assert_eq!(Input::card_target(Some(" 12 ")), Input::Card(12));
        assert_eq!(Input::card_target(Some("-1")), Input::Invalid);
        assert_eq!(Input::card_target(Some("seven")), Input::Invalid);
        assert_eq!(Input::card_target(None), Input::Invalid);
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Input::parse("3\n"), Input::Card(3));
        assert_eq!(Input::parse("r"), Input::Reset);
        assert_eq!(Input::parse("RESET"), Input::Reset);
        assert_eq!(Input::parse(""), Input::Invalid);
        assert_eq!(Input::parse("q"), Input::Invalid);
    }
}
