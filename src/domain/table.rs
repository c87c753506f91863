use serde::{Deserialize, Serialize};

use crate::domain::blinds::big_blind;
use crate::domain::chips::Chips;
use crate::domain::phase::Phase;
use crate::domain::player::Player;
use crate::domain::PlayerId;

/// Конфиг стола: стартовый стек, блайнды, шаги контролов оператора.
///
/// Все поля имеют значения по умолчанию, поэтому из JSON можно
/// переопределить только часть.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TableConfig {
    /// Стек нового игрока и стек после полного сброса.
    pub starting_stack: Chips,
    /// Сколько игроков посадить при создании стола.
    pub initial_players: u32,
    pub small_blind: Chips,
    /// Шаг изменения малого блайнда кнопками +/-.
    pub blind_step: Chips,
    /// Сумма займа по умолчанию.
    pub loan_increment: Chips,
    /// Шаг изменения суммы займа кнопками +/-.
    pub loan_step: Chips,
    /// Нижняя граница суммы займа при уменьшении шагом.
    pub min_loan_increment: Chips,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            starting_stack: Chips(500),
            initial_players: 2,
            small_blind: Chips(5),
            blind_step: Chips(1),
            loan_increment: Chips(100),
            loan_step: Chips(50),
            min_loan_increment: Chips(50),
        }
    }
}

impl TableConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.small_blind.is_zero() {
            return Err("TableConfig: small_blind = 0".into());
        }
        if self.blind_step.is_zero() {
            return Err("TableConfig: blind_step = 0".into());
        }
        if self.loan_increment.is_zero() {
            return Err("TableConfig: loan_increment = 0".into());
        }
        if self.loan_step.is_zero() {
            return Err("TableConfig: loan_step = 0".into());
        }
        if self.min_loan_increment.is_zero() {
            return Err("TableConfig: min_loan_increment = 0".into());
        }
        if self.loan_increment < self.min_loan_increment {
            return Err(format!(
                "TableConfig: loan_increment ({}) < min_loan_increment ({})",
                self.loan_increment.0, self.min_loan_increment.0
            ));
        }
        Ok(())
    }
}

/// Основное состояние стола.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Table {
    pub config: TableConfig,

    /// Игроки в порядке добавления. Порядок важен только для отображения.
    pub players: Vec<Player>,

    /// Сумма всех ставок, ещё не выплаченных победителю.
    pub pot: Chips,

    /// Малый блайнд; большой всегда 2× и не хранится.
    pub small_blind: Chips,

    /// Сумма следующего займа по умолчанию.
    pub loan_increment: Chips,

    pub phase: Phase,
}

impl Table {
    /// Пустой стол (без игроков) с заданной конфигурацией.
    pub fn new(config: TableConfig) -> Self {
        Self {
            small_blind: config.small_blind,
            loan_increment: config.loan_increment,
            config,
            players: Vec::new(),
            pot: Chips::ZERO,
            phase: Phase::PreFlop,
        }
    }

    pub fn big_blind(&self) -> Chips {
        big_blind(self.small_blind)
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Максимальная ставка за столом в текущей раздаче.
    pub fn highest_bet(&self) -> Chips {
        self.players
            .iter()
            .map(|p| p.bet)
            .max()
            .unwrap_or(Chips::ZERO)
    }

    /// Сколько игроку нужно доставить, чтобы уравнять максимальную ставку.
    pub fn to_call(&self, id: PlayerId) -> Option<Chips> {
        let highest = self.highest_bet();
        self.player(id).map(|p| highest.saturating_sub(p.bet))
    }

    /// Все фишки в замкнутой системе: стеки + банк.
    pub fn total_chips_in_play(&self) -> Chips {
        self.players.iter().map(|p| p.chips).sum::<Chips>() + self.pot
    }

    pub fn total_loans(&self) -> Chips {
        self.players.iter().map(|p| p.loans).sum()
    }

    /// Имя по умолчанию для следующего добавленного игрока.
    pub fn next_default_name(&self) -> String {
        format!("Player {}", self.players.len() + 1)
    }
}
