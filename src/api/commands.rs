use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::{BlindKind, PlayerId};
use crate::engine::actions::StepDirection;

/// Команда оператора. Фиксированный каталог действий, которые меняют стол.
///
/// Эти команды превращаются в операции (`TrackerOperation`),
/// которые Linera экспонирует наружу.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum Command {
    /// Посадить нового игрока со стартовым стеком.
    AddPlayer,

    /// Убрать игрока со стола.
    RemovePlayer { player_id: PlayerId },

    /// Переименовать игрока и выставить ему стек.
    EditPlayer(EditPlayerCommand),

    /// Ручная корректировка стека (+/-).
    AdjustChips(AdjustChipsCommand),

    /// Выдать займ.
    TakeLoan(TakeLoanCommand),

    /// Ставка произвольного размера.
    Bet { player_id: PlayerId, amount: Chips },

    /// Малый или большой блайнд.
    PostBlind { player_id: PlayerId, kind: BlindKind },

    Call { player_id: PlayerId },

    Raise(RaiseCommand),

    Fold { player_id: PlayerId },

    AllIn { player_id: PlayerId },

    /// Отдать банк победителю.
    AwardPot { player_id: PlayerId },

    /// Следующая фаза (после шоудауна – новая раздача).
    AdvancePhase,

    /// "New hand": сбросить ставки, банк сгорает.
    ClearBets,

    /// Полный сброс всех стеков, долгов и фазы.
    ResetAll,

    SetSmallBlind { small_blind: Chips },

    /// Кнопки +/- у блайнда.
    StepSmallBlind { direction: StepDirection },

    SetLoanIncrement { loan_increment: Chips },

    /// Кнопки +/- у суммы займа.
    StepLoanIncrement { direction: StepDirection },
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct EditPlayerCommand {
    pub player_id: PlayerId,
    pub name: String,
    /// Может прийти отрицательным из формы – движок обрежет до нуля.
    pub chips: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AdjustChipsCommand {
    pub player_id: PlayerId,
    /// Может быть отрицательным.
    pub delta: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TakeLoanCommand {
    pub player_id: PlayerId,
    /// None – текущая сумма займа стола.
    #[serde(default)]
    pub amount: Option<Chips>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RaiseCommand {
    pub player_id: PlayerId,
    /// None – повышение на большой блайнд.
    #[serde(default)]
    pub raise_by: Option<Chips>,
}

impl Command {
    /// Игрок, к которому относится команда (если относится).
    pub fn player_id(&self) -> Option<PlayerId> {
        match self {
            Command::RemovePlayer { player_id }
            | Command::Bet { player_id, .. }
            | Command::PostBlind { player_id, .. }
            | Command::Call { player_id }
            | Command::Fold { player_id }
            | Command::AllIn { player_id }
            | Command::AwardPot { player_id } => Some(*player_id),
            Command::EditPlayer(c) => Some(c.player_id),
            Command::AdjustChips(c) => Some(c.player_id),
            Command::TakeLoan(c) => Some(c.player_id),
            Command::Raise(c) => Some(c.player_id),
            Command::AddPlayer
            | Command::AdvancePhase
            | Command::ClearBets
            | Command::ResetAll
            | Command::SetSmallBlind { .. }
            | Command::StepSmallBlind { .. }
            | Command::SetLoanIncrement { .. }
            | Command::StepLoanIncrement { .. } => None,
        }
    }
}
