use crate::engine::TableEngine;

use super::commands::Command;
use super::dto::CommandResponse;
use super::errors::ApiError;
use super::queries::{build_table_view, run_query, Query, QueryResponse};

/// Применить команду оператора к столу и вернуть свежий снапшот.
pub fn execute(engine: &mut TableEngine, command: Command) -> CommandResponse {
    let outcome = match command {
        Command::AddPlayer => {
            let player_id = engine.add_player();
            return CommandResponse::PlayerAdded {
                player_id,
                table: build_table_view(engine.table()),
            };
        }
        Command::RemovePlayer { player_id } => engine.remove_player(player_id),
        Command::EditPlayer(c) => engine.edit_player(c.player_id, c.name, c.chips),
        Command::AdjustChips(c) => engine.adjust_chips(c.player_id, c.delta),
        Command::TakeLoan(c) => match c.amount {
            Some(amount) => engine.take_loan(c.player_id, amount),
            None => engine.take_default_loan(c.player_id),
        },
        Command::Bet { player_id, amount } => engine.place_bet(player_id, amount),
        Command::PostBlind { player_id, kind } => engine.place_blind(player_id, kind),
        Command::Call { player_id } => engine.call(player_id),
        Command::Raise(c) => {
            let raise_by = c.raise_by.unwrap_or_else(|| engine.table().big_blind());
            engine.raise(c.player_id, raise_by)
        }
        Command::Fold { player_id } => engine.fold(player_id),
        Command::AllIn { player_id } => engine.all_in(player_id),
        Command::AwardPot { player_id } => engine.award_pot(player_id),
        Command::AdvancePhase => engine.advance_phase(),
        Command::ClearBets => engine.clear_bets(),
        Command::ResetAll => engine.reset_all(),
        Command::SetSmallBlind { small_blind } => engine.set_small_blind(small_blind),
        Command::StepSmallBlind { direction } => engine.step_small_blind(direction),
        Command::SetLoanIncrement { loan_increment } => engine.set_loan_increment(loan_increment),
        Command::StepLoanIncrement { direction } => engine.step_loan_increment(direction),
    };

    CommandResponse::TableState {
        applied: outcome.is_applied(),
        reason: outcome.reason().map(ToString::to_string),
        table: build_table_view(engine.table()),
    }
}

/// Команда в JSON -> ответ. Ошибка только если JSON не разобрался.
pub fn execute_json(engine: &mut TableEngine, raw: &str) -> Result<CommandResponse, ApiError> {
    let command: Command = serde_json::from_str(raw)?;
    Ok(execute(engine, command))
}

/// Запрос в JSON -> ответ.
pub fn query_json(engine: &TableEngine, raw: &str) -> Result<QueryResponse, ApiError> {
    let query: Query = serde_json::from_str(raw)?;
    Ok(run_query(engine, &query))
}
