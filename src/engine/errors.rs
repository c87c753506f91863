use crate::domain::{Chips, PlayerId};

use thiserror::Error;

/// Причины, по которым операция не была применена.
///
/// Наружу оператору они не пробрасываются: движок превращает их в
/// `Outcome::Ignored`, состояние стола остаётся нетронутым.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Игрок {0} не найден за столом")]
    PlayerNotFound(PlayerId),

    #[error("Недостаточно фишек: нужно {needed}, есть {available}")]
    NotEnoughChips { needed: Chips, available: Chips },

    #[error("Нечего уравнивать – ставка игрока уже максимальная")]
    NothingToCall,

    #[error("Нулевая сумма – операция ничего не меняет")]
    ZeroAmount,

    #[error("Игрок {0} уже сфолдил")]
    PlayerFolded(PlayerId),

    #[error("Малый блайнд должен быть больше нуля")]
    InvalidBlind,

    #[error("Сумма займа не может быть меньше {min}")]
    InvalidLoanIncrement { min: Chips },

    #[error("Переполнение счётчика фишек")]
    Overflow,
}
