use serde::{Deserialize, Serialize};

use crate::display::{chip_stack, ChipStack};
use crate::domain::chips::Chips;
use crate::domain::player::Player;
use crate::domain::table::Table;
use crate::domain::PlayerId;
use crate::engine::history::TableEvent;
use crate::engine::TableEngine;

use super::dto::{PlayerViewDto, TableViewDto};

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum Query {
    /// Состояние стола целиком.
    GetTable,

    /// Один игрок.
    GetPlayer { player_id: PlayerId },

    /// Журнал событий за сессию.
    GetHistory,

    /// Раскладка произвольной суммы по фишкам.
    ChipBreakdown { total: Chips },
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum QueryResponse {
    Table(TableViewDto),
    Player(Option<PlayerViewDto>),
    History(Vec<TableEvent>),
    ChipStack(ChipStack),
}

/// Выполнить запрос над движком.
pub fn run_query(engine: &TableEngine, query: &Query) -> QueryResponse {
    match query {
        Query::GetTable => QueryResponse::Table(build_table_view(engine.table())),
        Query::GetPlayer { player_id } => QueryResponse::Player(
            engine
                .player(*player_id)
                .map(|p| build_player_view(engine.table(), p)),
        ),
        Query::GetHistory => QueryResponse::History(engine.history().events.clone()),
        Query::ChipBreakdown { total } => QueryResponse::ChipStack(chip_stack(*total)),
    }
}

/// Сформировать DTO стола.
pub fn build_table_view(table: &Table) -> TableViewDto {
    let players = table
        .players
        .iter()
        .map(|p| build_player_view(table, p))
        .collect();

    TableViewDto {
        players,
        pot: table.pot,
        pot_stack: chip_stack(table.pot),
        phase: table.phase,
        phase_label: table.phase.label().to_string(),
        small_blind: table.small_blind,
        big_blind: table.big_blind(),
        loan_increment: table.loan_increment,
        highest_bet: table.highest_bet(),
        total_chips_in_play: table.total_chips_in_play(),
        total_loans: table.total_loans(),
    }
}

/// DTO одного игрока.
fn build_player_view(table: &Table, player: &Player) -> PlayerViewDto {
    PlayerViewDto {
        player_id: player.id,
        name: player.name.clone(),
        chips: player.chips,
        bet: player.bet,
        loans: player.loans,
        folded: player.folded,
        to_call: table.highest_bet().saturating_sub(player.bet),
        chip_stack: chip_stack(player.chips),
    }
}
