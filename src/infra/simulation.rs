// src/infra/simulation.rs

use crate::api::commands::{AdjustChipsCommand, Command, EditPlayerCommand, RaiseCommand, TakeLoanCommand};
use crate::domain::chips::Chips;
use crate::domain::table::Table;
use crate::domain::{BlindKind, PlayerId};
use crate::engine::actions::StepDirection;

use super::rng::RandomSource;

/// Случайная команда оператора для текущего стола.
///
/// Иногда специально бьёт в несуществующего игрока, чтобы гонять
/// ветки "ничего не делать".
pub fn random_command<R: RandomSource>(table: &Table, rng: &mut R) -> Command {
    let ids: Vec<PlayerId> = table.players.iter().map(|p| p.id).collect();
    let player_id = if rng.below(20) == 0 {
        PlayerId::MAX
    } else {
        rng.pick(&ids).copied().unwrap_or(PlayerId::MAX)
    };
    let amount = Chips(rng.below(300));

    match rng.below(22) {
        0 => Command::AddPlayer,
        1 => Command::RemovePlayer { player_id },
        2 => Command::EditPlayer(EditPlayerCommand {
            player_id,
            name: format!("Edited {}", rng.below(100)),
            chips: rng.below(1_000) as i64 - 200,
        }),
        3 => Command::AdjustChips(AdjustChipsCommand {
            player_id,
            delta: rng.below(200) as i64 - 100,
        }),
        4 => Command::TakeLoan(TakeLoanCommand {
            player_id,
            amount: if rng.below(2) == 0 { None } else { Some(amount) },
        }),
        5 | 6 => Command::Bet { player_id, amount },
        7 => Command::PostBlind {
            player_id,
            kind: BlindKind::Small,
        },
        8 => Command::PostBlind {
            player_id,
            kind: BlindKind::Big,
        },
        9 | 10 => Command::Call { player_id },
        11 => Command::Raise(RaiseCommand {
            player_id,
            raise_by: if rng.below(2) == 0 { None } else { Some(amount) },
        }),
        12 => Command::Fold { player_id },
        13 => Command::AllIn { player_id },
        14 => Command::AwardPot { player_id },
        15 | 16 => Command::AdvancePhase,
        17 => Command::ClearBets,
        18 => Command::ResetAll,
        19 => Command::StepSmallBlind {
            direction: random_direction(rng),
        },
        20 => Command::StepLoanIncrement {
            direction: random_direction(rng),
        },
        _ => Command::SetSmallBlind {
            small_blind: Chips(rng.below(20)),
        },
    }
}

fn random_direction<R: RandomSource>(rng: &mut R) -> StepDirection {
    if rng.below(2) == 0 {
        StepDirection::Up
    } else {
        StepDirection::Down
    }
}

/// Проверка инвариантов стола, которые не зависят от истории.
pub fn check_table_invariants(table: &Table) -> Result<(), String> {
    if table.small_blind.is_zero() {
        return Err("small_blind = 0".into());
    }
    if table.loan_increment.is_zero() {
        return Err("loan_increment = 0".into());
    }

    let mut seen: Vec<PlayerId> = Vec::with_capacity(table.players.len());
    for p in &table.players {
        if seen.contains(&p.id) {
            return Err(format!("дубликат id игрока {}", p.id));
        }
        seen.push(p.id);
    }

    Ok(())
}

/// true – команда не меняет сумму фишек в игре (стеки + банк).
///
/// Правка стека, займ, сброс, новая раздача, переход фаз и посадка/удаление
/// игрока могут менять сумму и сюда не входят.
pub fn conserves_chips(command: &Command) -> bool {
    matches!(
        command,
        Command::Bet { .. }
            | Command::PostBlind { .. }
            | Command::Call { .. }
            | Command::Raise(_)
            | Command::Fold { .. }
            | Command::AllIn { .. }
            | Command::AwardPot { .. }
            | Command::SetSmallBlind { .. }
            | Command::StepSmallBlind { .. }
            | Command::SetLoanIncrement { .. }
            | Command::StepLoanIncrement { .. }
    )
}
