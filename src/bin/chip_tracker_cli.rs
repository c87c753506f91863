// src/bin/chip_tracker_cli.rs

use std::io::{self, BufRead, Write};

use chip_tracker::api::{
    build_table_view, execute, execute_json, AdjustChipsCommand, Command, CommandResponse,
    EditPlayerCommand, RaiseCommand, TableViewDto, TakeLoanCommand,
};
use chip_tracker::display::ChipStack;
use chip_tracker::domain::chips::Chips;
use chip_tracker::domain::table::TableConfig;
use chip_tracker::domain::{BlindKind, PlayerId};
use chip_tracker::engine::{StepDirection, TableEngine};
use chip_tracker::infra::load_config;

const HELP: &str = "\
команды:
  add                      – посадить игрока
  remove ID                – убрать игрока
  edit ID CHIPS NAME...    – переименовать и выставить стек
  adj ID DELTA             – +/- фишки мимо банка
  loan ID [AMOUNT]         – займ (по умолчанию текущая сумма займа)
  bet ID AMOUNT            – ставка
  sb ID | bb ID            – малый / большой блайнд
  call ID | fold ID | allin ID
  raise ID [AMOUNT]        – рейз (по умолчанию на большой блайнд)
  win ID                   – отдать банк
  next                     – следующая фаза
  newhand                  – сбросить ставки (банк сгорает)
  reset                    – полный сброс
  blind+ | blind-          – малый блайнд +/-
  loan+ | loan-            – сумма займа +/-
  show | history | help | quit
  {...}                    – команда в JSON";

fn main() {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => match load_config(&path) {
            Ok(cfg) => {
                println!("[CLI] Конфиг загружен из {}", path);
                cfg
            }
            Err(e) => {
                eprintln!("[CLI] ОШИБКА конфига {}: {}", path, e);
                std::process::exit(2);
            }
        },
        None => TableConfig::default(),
    };

    let mut engine = TableEngine::new(config);

    println!("chip_tracker_cli: трекер фишек. help – список команд.");
    print_table(&build_table_view(engine.table()));

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        let _ = stdout.flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("[CLI] ОШИБКА чтения stdin: {}", e);
                break;
            }
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match line {
            "quit" | "exit" => break,
            "help" => {
                println!("{}", HELP);
                continue;
            }
            "show" => {
                print_table(&build_table_view(engine.table()));
                continue;
            }
            "history" => {
                for event in &engine.history().events {
                    println!("  #{:<4} {:?}", event.index, event.kind);
                }
                continue;
            }
            _ => {}
        }

        let response = if line.starts_with('{') || line.starts_with('"') {
            match execute_json(&mut engine, line) {
                Ok(resp) => resp,
                Err(e) => {
                    println!("[CLI] {}", e);
                    continue;
                }
            }
        } else {
            match parse_command(line) {
                Some(command) => execute(&mut engine, command),
                None => {
                    println!("[CLI] Не понял команду. help – список команд.");
                    continue;
                }
            }
        };

        print_response(&response);
    }

    println!("[CLI] Завершение работы.");
}

/// Разобрать строку консоли в команду оператора.
fn parse_command(line: &str) -> Option<Command> {
    let mut parts = line.split_whitespace();
    let verb = parts.next()?;

    let args: Vec<&str> = parts.collect();
    let player = |i: usize| -> Option<PlayerId> { args.get(i)?.parse().ok() };
    let chips = |i: usize| -> Option<Chips> { args.get(i)?.parse().ok().map(Chips) };
    let signed = |i: usize| -> Option<i64> { args.get(i)?.parse().ok() };

    let command = match verb {
        "add" => Command::AddPlayer,
        "remove" => Command::RemovePlayer { player_id: player(0)? },
        "edit" => Command::EditPlayer(EditPlayerCommand {
            player_id: player(0)?,
            chips: signed(1)?,
            name: args.get(2..).map(|rest| rest.join(" ")).filter(|n| !n.is_empty())?,
        }),
        "adj" => Command::AdjustChips(AdjustChipsCommand {
            player_id: player(0)?,
            delta: signed(1)?,
        }),
        "loan" => Command::TakeLoan(TakeLoanCommand {
            player_id: player(0)?,
            amount: chips(1),
        }),
        "bet" => Command::Bet {
            player_id: player(0)?,
            amount: chips(1)?,
        },
        "sb" => Command::PostBlind {
            player_id: player(0)?,
            kind: BlindKind::Small,
        },
        "bb" => Command::PostBlind {
            player_id: player(0)?,
            kind: BlindKind::Big,
        },
        "call" => Command::Call { player_id: player(0)? },
        "raise" => Command::Raise(RaiseCommand {
            player_id: player(0)?,
            raise_by: chips(1),
        }),
        "fold" => Command::Fold { player_id: player(0)? },
        "allin" => Command::AllIn { player_id: player(0)? },
        "win" => Command::AwardPot { player_id: player(0)? },
        "next" => Command::AdvancePhase,
        "newhand" => Command::ClearBets,
        "reset" => Command::ResetAll,
        "blind+" => Command::StepSmallBlind { direction: StepDirection::Up },
        "blind-" => Command::StepSmallBlind { direction: StepDirection::Down },
        "loan+" => Command::StepLoanIncrement { direction: StepDirection::Up },
        "loan-" => Command::StepLoanIncrement { direction: StepDirection::Down },
        _ => return None,
    };

    Some(command)
}

fn print_response(response: &CommandResponse) {
    match response {
        CommandResponse::PlayerAdded { player_id, .. } => {
            println!("[CLI] Игрок {} посажен за стол.", player_id);
        }
        CommandResponse::TableState {
            applied: false,
            reason,
            ..
        } => {
            println!(
                "[CLI] Ничего не изменилось: {}",
                reason.as_deref().unwrap_or("-")
            );
        }
        CommandResponse::TableState { .. } => {}
    }
    print_table(response.table());
}

fn print_table(view: &TableViewDto) {
    println!();
    println!(
        "================ {} | блайнды {}/{} | займ {} =================",
        view.phase_label, view.small_blind, view.big_blind, view.loan_increment
    );

    for p in &view.players {
        let folded = if p.folded { " FOLDED" } else { "" };
        let loans = if p.loans.is_zero() {
            String::new()
        } else {
            format!(" долг {}", p.loans)
        };
        println!(
            "  [{:>3}] {:<16} стек {:>7} ставка {:>6}{}{}  {}",
            p.player_id,
            p.name,
            p.chips.to_string(),
            p.bet.to_string(),
            loans,
            folded,
            format_stack(&p.chip_stack),
        );
    }

    println!(
        "  БАНК {}  {}",
        view.pot,
        format_stack(&view.pot_stack)
    );
    println!(
        "  (в игре всего {}, долгов {})",
        view.total_chips_in_play, view.total_loans
    );
}

fn format_stack(stack: &ChipStack) -> String {
    stack
        .chips
        .iter()
        .map(|c| format!("{}×{}", c.count, c.denomination))
        .collect::<Vec<_>>()
        .join(" ")
}
