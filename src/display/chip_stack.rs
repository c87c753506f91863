use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;

/// Номинал фишки для отображения стопки.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Denomination {
    One,
    Five,
    Ten,
    TwentyFive,
    Hundred,
}

/// Цвет фишки.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ChipColor {
    White,
    Red,
    Blue,
    Green,
    Black,
}

impl Denomination {
    /// Лестница номиналов: от крупного к мелкому.
    pub const LADDER: [Denomination; 5] = [
        Denomination::Hundred,
        Denomination::TwentyFive,
        Denomination::Ten,
        Denomination::Five,
        Denomination::One,
    ];

    pub fn value(self) -> u64 {
        match self {
            Denomination::One => 1,
            Denomination::Five => 5,
            Denomination::Ten => 10,
            Denomination::TwentyFive => 25,
            Denomination::Hundred => 100,
        }
    }

    /// Сколько фишек этого номинала максимум рисуем в стопке.
    pub fn display_cap(self) -> u64 {
        match self {
            Denomination::Hundred => 5,
            Denomination::TwentyFive => 4,
            Denomination::Ten => 3,
            Denomination::Five => 2,
            Denomination::One => 5,
        }
    }

    pub fn color(self) -> ChipColor {
        match self {
            Denomination::One => ChipColor::White,
            Denomination::Five => ChipColor::Red,
            Denomination::Ten => ChipColor::Blue,
            Denomination::TwentyFive => ChipColor::Green,
            Denomination::Hundred => ChipColor::Black,
        }
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.value())
    }
}

/// Одна позиция стопки: номинал и количество фишек.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChipCount {
    pub denomination: Denomination,
    pub count: u64,
}

impl ChipCount {
    pub fn value(&self) -> u64 {
        self.denomination.value() * self.count
    }
}

/// Представительная стопка фишек для суммы.
///
/// Это только картинка: остаток сверх лимитов не рисуется, баланс от
/// этого не меняется.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChipStack {
    /// Только ненулевые позиции, от крупного номинала к мелкому.
    pub chips: Vec<ChipCount>,
}

impl ChipStack {
    pub fn is_empty(&self) -> bool {
        self.chips.is_empty()
    }

    /// Сколько фишек нарисовано всего.
    pub fn chip_count(&self) -> u64 {
        self.chips.iter().map(|c| c.count).sum()
    }

    /// Сумма, которую стопка реально показывает.
    pub fn represented_value(&self) -> Chips {
        Chips(self.chips.iter().map(ChipCount::value).sum())
    }

    pub fn count_of(&self, denomination: Denomination) -> u64 {
        self.chips
            .iter()
            .find(|c| c.denomination == denomination)
            .map(|c| c.count)
            .unwrap_or(0)
    }
}

/// Жадная раскладка суммы по номиналам с лимитом на номинал.
pub fn chip_stack(total: Chips) -> ChipStack {
    let mut remaining = total.0;
    let mut chips = Vec::new();

    for denomination in Denomination::LADDER {
        let count = (remaining / denomination.value()).min(denomination.display_cap());
        if count > 0 {
            remaining -= count * denomination.value();
            chips.push(ChipCount {
                denomination,
                count,
            });
        }
    }

    ChipStack { chips }
}

/// Часть суммы, которая не влезла в стопку.
pub fn hidden_remainder(total: Chips) -> Chips {
    total.saturating_sub(chip_stack(total).represented_value())
}
