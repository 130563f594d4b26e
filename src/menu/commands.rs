//! Typed menu codes and the accepted confirmation tokens.

use std::str::FromStr;

use crate::error::InputError;

/// Commands offered by the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainCommand {
    CreateOrder,
    EditOrder,
    ViewOrder,
    DeleteOrder,
    ViewAllOrders,
    Exit,
}

impl FromStr for MainCommand {
    type Err = InputError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code.trim() {
            "1" => Ok(Self::CreateOrder),
            "2" => Ok(Self::EditOrder),
            "3" => Ok(Self::ViewOrder),
            "4" => Ok(Self::DeleteOrder),
            "5" => Ok(Self::ViewAllOrders),
            "0" => Ok(Self::Exit),
            other => Err(InputError::UnknownCommand(other.to_string())),
        }
    }
}

/// Commands offered while editing a single order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditCommand {
    AddItem,
    ChangeQuantity,
    RemoveItem,
    Done,
}

impl FromStr for EditCommand {
    type Err = InputError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code.trim() {
            "1" => Ok(Self::AddItem),
            "2" => Ok(Self::ChangeQuantity),
            "3" => Ok(Self::RemoveItem),
            "0" => Ok(Self::Done),
            other => Err(InputError::UnknownCommand(other.to_string())),
        }
    }
}

/// The complete set of answers that count as "yes" at a (y/n) prompt.
///
/// Matching ignores surrounding whitespace and case. `н` is the key that sits
/// where `y` does on a Ukrainian keyboard layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affirmative {
    Y,
    Yes,
    CyrillicN,
    Tak,
}

impl Affirmative {
    pub const ALL: [Affirmative; 4] = [Self::Y, Self::Yes, Self::CyrillicN, Self::Tak];

    pub fn token(self) -> &'static str {
        match self {
            Self::Y => "y",
            Self::Yes => "yes",
            Self::CyrillicN => "н",
            Self::Tak => "так",
        }
    }

    pub fn parse(answer: &str) -> Option<Self> {
        let normalized = answer.trim().to_lowercase();
        Self::ALL.into_iter().find(|token| token.token() == normalized)
    }
}

pub fn is_affirmative(answer: &str) -> bool {
    Affirmative::parse(answer).is_some()
}

/// Parses an order or product number.
pub fn parse_id(text: &str) -> Result<u32, InputError> {
    text.trim()
        .parse()
        .map_err(|_| InputError::NotANumber(text.to_string()))
}

/// Parses any integer quantity, including zero and negatives.
pub fn parse_quantity(text: &str) -> Result<i64, InputError> {
    text.trim()
        .parse()
        .map_err(|_| InputError::NotANumber(text.to_string()))
}

pub fn parse_positive_quantity(text: &str) -> Result<i64, InputError> {
    match parse_quantity(text)? {
        quantity if quantity > 0 => Ok(quantity),
        quantity => Err(InputError::NonPositiveQuantity(quantity)),
    }
}
