//! User-facing strings.

use super::state::SortOrder;
use super::view::{MoveLabel, Status};
use serde::{Deserialize, Serialize};

/// Language for status text and move labels.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumString,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Language {
    /// English.
    #[default]
    #[serde(alias = "en")]
    #[strum(serialize = "en", serialize = "english")]
    #[display("en")]
    English,
    /// Russian.
    #[serde(alias = "ru")]
    #[strum(serialize = "ru", serialize = "russian")]
    #[display("ru")]
    Russian,
}

impl Language {
    /// Status line for the viewed board.
    pub fn status(self, status: Status) -> String {
        match (self, status) {
            (Self::English, Status::Winner(mark)) => format!("winner: {mark}"),
            (Self::English, Status::Draw) => "draw".to_string(),
            (Self::English, Status::NextTurn(mark)) => format!("next turn: {mark}"),
            (Self::Russian, Status::Winner(mark)) => format!("Выиграл: {mark}"),
            (Self::Russian, Status::Draw) => "Ничья".to_string(),
            (Self::Russian, Status::NextTurn(mark)) => format!("Следующий ход: {mark}"),
        }
    }

    /// Label of one move-list entry.
    pub fn move_label(self, label: MoveLabel) -> String {
        match (self, label) {
            (Self::English, MoveLabel::GameStart) => "go to game start".to_string(),
            (Self::English, MoveLabel::Move(n)) => format!("go to move #{n}"),
            (Self::Russian, MoveLabel::GameStart) => "К началу игры".to_string(),
            (Self::Russian, MoveLabel::Move(n)) => format!("Перейти к ходу #{n}"),
        }
    }

    /// Glyph on the sort toggle.
    pub fn sort_indicator(self, order: SortOrder) -> &'static str {
        match order {
            SortOrder::Ascending => "∨",
            SortOrder::Descending => "∧",
        }
    }

    /// Window title.
    pub fn title(self) -> &'static str {
        match self {
            Self::English => "Tic-Tac-Toe",
            Self::Russian => "Крестики-нолики",
        }
    }

    /// Title of the move list pane.
    pub fn moves_title(self) -> &'static str {
        match self {
            Self::English => "Moves",
            Self::Russian => "Ходы",
        }
    }

    /// Key help shown under the board.
    pub fn help(self) -> &'static str {
        match self {
            Self::English => {
                "Arrows/1-9: play | Tab: moves | Enter: select | S: sort | Q: quit"
            }
            Self::Russian => {
                "Стрелки/1-9: ход | Tab: ходы | Enter: выбор | S: порядок | Q: выход"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mark;
    use std::str::FromStr;

    #[test]
    fn test_english_strings() {
        let en = Language::English;
        assert_eq!(en.status(Status::Winner(Mark::X)), "winner: X");
        assert_eq!(en.status(Status::Draw), "draw");
        assert_eq!(en.status(Status::NextTurn(Mark::O)), "next turn: O");
        assert_eq!(en.move_label(MoveLabel::GameStart), "go to game start");
        assert_eq!(en.move_label(MoveLabel::Move(3)), "go to move #3");
    }

    #[test]
    fn test_russian_strings() {
        let ru = Language::Russian;
        assert_eq!(ru.status(Status::Winner(Mark::O)), "Выиграл: O");
        assert_eq!(ru.status(Status::Draw), "Ничья");
        assert_eq!(ru.status(Status::NextTurn(Mark::X)), "Следующий ход: X");
        assert_eq!(ru.move_label(MoveLabel::GameStart), "К началу игры");
        assert_eq!(ru.move_label(MoveLabel::Move(7)), "Перейти к ходу #7");
    }

    #[test]
    fn test_sort_indicator() {
        let en = Language::English;
        assert_eq!(en.sort_indicator(SortOrder::Ascending), "∨");
        assert_eq!(en.sort_indicator(SortOrder::Descending), "∧");
    }

    #[test]
    fn test_parse_language() {
        assert_eq!(Language::from_str("en"), Ok(Language::English));
        assert_eq!(Language::from_str("RU"), Ok(Language::Russian));
        assert_eq!(Language::from_str("russian"), Ok(Language::Russian));
        assert!(Language::from_str("de").is_err());
    }
}
