// src/engine/table_engine.rs

use crate::domain::chips::Chips;
use crate::domain::phase::Phase;
use crate::domain::player::Player;
use crate::domain::table::{Table, TableConfig};
use crate::domain::{BlindKind, PlayerId};
use crate::engine::actions::{PlayerAction, PlayerActionKind, StepDirection};
use crate::engine::errors::EngineError;
use crate::engine::history::{TableEventKind, TableHistory};
use crate::engine::operations;
use crate::infra::ids::IdGenerator;

/// Результат операции для внешнего кода.
///
/// Ошибок оператор не видит: неприменённая операция просто ничего не
/// меняет, а причину можно посмотреть здесь (тесты, логи, CLI).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Ignored(EngineError),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }

    pub fn is_ignored(&self) -> bool {
        !self.is_applied()
    }

    pub fn reason(&self) -> Option<&EngineError> {
        match self {
            Outcome::Applied => None,
            Outcome::Ignored(err) => Some(err),
        }
    }
}

/// Стол + генератор ID + журнал. Единственный владелец состояния:
/// все операции идут через `&mut self`, UI только читает снапшот.
#[derive(Debug)]
pub struct TableEngine {
    table: Table,
    ids: IdGenerator,
    history: TableHistory,
}

impl TableEngine {
    /// Новый стол по конфигу, с `initial_players` игроками.
    pub fn new(config: TableConfig) -> Self {
        let mut engine = Self::empty(config);
        for _ in 0..engine.table.config.initial_players {
            engine.add_player();
        }
        engine
    }

    /// Как `new`, но с проверкой конфига.
    pub fn try_new(config: TableConfig) -> Result<Self, String> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Стол без игроков.
    pub fn empty(config: TableConfig) -> Self {
        Self {
            table: Table::new(config),
            ids: IdGenerator::new(),
            history: TableHistory::new(),
        }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn history(&self) -> &TableHistory {
        &self.history
    }

    pub fn player(&self, player_id: PlayerId) -> Option<&Player> {
        self.table.player(player_id)
    }

    pub fn players(&self) -> &[Player] {
        &self.table.players
    }

    pub fn pot(&self) -> Chips {
        self.table.pot
    }

    pub fn phase(&self) -> Phase {
        self.table.phase
    }

    // ---------------------------------------------------------
    // Игроки
    // ---------------------------------------------------------

    /// Посадить игрока. Всегда успешно, возвращает новый ID.
    pub fn add_player(&mut self) -> PlayerId {
        let player_id = self.ids.next_player_id();
        let event = operations::add_player(&mut self.table, player_id);
        self.record("add_player", Ok(vec![event]));
        player_id
    }

    pub fn remove_player(&mut self, player_id: PlayerId) -> Outcome {
        let res = operations::remove_player(&mut self.table, player_id);
        self.record_one("remove_player", res)
    }

    pub fn adjust_chips(&mut self, player_id: PlayerId, delta: i64) -> Outcome {
        let res = operations::adjust_chips(&mut self.table, player_id, delta);
        self.record_one("adjust_chips", res)
    }

    /// Займ на явную сумму.
    pub fn take_loan(&mut self, player_id: PlayerId, amount: Chips) -> Outcome {
        let res = operations::take_loan(&mut self.table, player_id, amount);
        self.record_one("take_loan", res)
    }

    /// Займ на текущую сумму займа стола.
    pub fn take_default_loan(&mut self, player_id: PlayerId) -> Outcome {
        let amount = self.table.loan_increment;
        self.take_loan(player_id, amount)
    }

    pub fn edit_player(&mut self, player_id: PlayerId, name: impl Into<String>, chips: i64) -> Outcome {
        let res = operations::edit_player(&mut self.table, player_id, name.into(), chips);
        self.record_one("edit_player", res)
    }

    // ---------------------------------------------------------
    // Ставки
    // ---------------------------------------------------------

    /// Применить действие игрока (ставка, блайнд, колл, рейз, олл-ин, фолд).
    pub fn apply(&mut self, action: PlayerAction) -> Outcome {
        let res = operations::apply_action(&mut self.table, action);
        self.record_one("player_action", res)
    }

    pub fn place_bet(&mut self, player_id: PlayerId, amount: Chips) -> Outcome {
        self.apply(PlayerAction::new(player_id, PlayerActionKind::Bet(amount)))
    }

    pub fn place_blind(&mut self, player_id: PlayerId, kind: BlindKind) -> Outcome {
        self.apply(PlayerAction::new(player_id, PlayerActionKind::Blind(kind)))
    }

    pub fn call(&mut self, player_id: PlayerId) -> Outcome {
        self.apply(PlayerAction::new(player_id, PlayerActionKind::Call))
    }

    pub fn raise(&mut self, player_id: PlayerId, raise_by: Chips) -> Outcome {
        self.apply(PlayerAction::new(player_id, PlayerActionKind::Raise(raise_by)))
    }

    pub fn all_in(&mut self, player_id: PlayerId) -> Outcome {
        self.apply(PlayerAction::new(player_id, PlayerActionKind::AllIn))
    }

    pub fn fold(&mut self, player_id: PlayerId) -> Outcome {
        self.apply(PlayerAction::new(player_id, PlayerActionKind::Fold))
    }

    // ---------------------------------------------------------
    // Раздача
    // ---------------------------------------------------------

    pub fn advance_phase(&mut self) -> Outcome {
        let events = operations::advance_phase(&mut self.table);
        if events.len() > 1 {
            log::info!("Шоудаун пройден – новая раздача, ставки сброшены");
        }
        self.record("advance_phase", Ok(events))
    }

    /// "New hand": банк сгорает, никому не выплачивается.
    pub fn clear_bets(&mut self) -> Outcome {
        let event = operations::clear_bets(&mut self.table);
        log::info!("Новая раздача: ставки сброшены");
        self.record("clear_bets", Ok(vec![event]))
    }

    pub fn award_pot(&mut self, player_id: PlayerId) -> Outcome {
        let res = operations::award_pot(&mut self.table, player_id);
        if let Ok(TableEventKind::PotAwarded { amount, .. }) = &res {
            log::info!("Банк {} выплачен игроку {}", amount, player_id);
        }
        self.record_one("award_pot", res)
    }

    pub fn reset_all(&mut self) -> Outcome {
        let event = operations::reset_all(&mut self.table);
        log::info!("Полный сброс стола");
        self.record("reset_all", Ok(vec![event]))
    }

    // ---------------------------------------------------------
    // Контролы стола
    // ---------------------------------------------------------

    pub fn set_small_blind(&mut self, small_blind: Chips) -> Outcome {
        let res = operations::set_small_blind(&mut self.table, small_blind);
        self.record_one("set_small_blind", res)
    }

    pub fn step_small_blind(&mut self, direction: StepDirection) -> Outcome {
        let res = operations::step_small_blind(&mut self.table, direction);
        self.record_one("step_small_blind", res)
    }

    pub fn set_loan_increment(&mut self, loan_increment: Chips) -> Outcome {
        let res = operations::set_loan_increment(&mut self.table, loan_increment);
        self.record_one("set_loan_increment", res)
    }

    pub fn step_loan_increment(&mut self, direction: StepDirection) -> Outcome {
        let res = operations::step_loan_increment(&mut self.table, direction);
        self.record_one("step_loan_increment", res)
    }

    fn record_one(&mut self, op: &str, res: Result<TableEventKind, EngineError>) -> Outcome {
        self.record(op, res.map(|event| vec![event]))
    }

    /// Записать события в журнал или залогировать причину отказа.
    fn record(&mut self, op: &str, res: Result<Vec<TableEventKind>, EngineError>) -> Outcome {
        match res {
            Ok(events) => {
                for event in events {
                    log::debug!("{:<24}{:?}", op, event);
                    self.history.push(event);
                }
                Outcome::Applied
            }
            Err(err) => {
                log::debug!("{:<24}проигнорировано: {}", op, err);
                Outcome::Ignored(err)
            }
        }
    }
}

impl Default for TableEngine {
    fn default() -> Self {
        Self::new(TableConfig::default())
    }
}
