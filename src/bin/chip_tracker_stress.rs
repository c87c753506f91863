use chip_tracker::api::execute;
use chip_tracker::domain::table::TableConfig;
use chip_tracker::engine::TableEngine;
use chip_tracker::infra::{check_table_invariants, conserves_chips, random_command, SystemRng};

fn main() {
    env_logger::init();

    println!("chip_tracker_stress: стартуем стресс-тест трекера…");

    // Параметры нагрузки — можно смело крутить.
    const NUM_TABLES: usize = 32;
    const STEPS_PER_TABLE: u32 = 5_000;

    let mut rng = SystemRng::default();
    let mut applied = 0u64;
    let mut ignored = 0u64;
    let mut violations = 0u64;

    for t in 0..NUM_TABLES {
        let mut engine = TableEngine::new(TableConfig::default());

        for step in 0..STEPS_PER_TABLE {
            let command = random_command(engine.table(), &mut rng);
            let before = engine.table().total_chips_in_play();
            let conserving = conserves_chips(&command);

            let response = execute(&mut engine, command.clone());
            if response.is_applied() {
                applied += 1;
            } else {
                ignored += 1;
            }

            let after = engine.table().total_chips_in_play();
            if conserving && before != after {
                violations += 1;
                println!(
                    "[STRESS] Стол {} шаг {}: {:?} изменил сумму фишек {} -> {}",
                    t, step, command, before, after
                );
            }

            if let Err(e) = check_table_invariants(engine.table()) {
                violations += 1;
                println!("[STRESS] Стол {} шаг {}: инвариант нарушен: {}", t, step, e);
            }
        }
    }

    println!(
        "[STRESS] Готово: столов {}, применено {}, проигнорировано {}, нарушений {}.",
        NUM_TABLES, applied, ignored, violations
    );

    if violations > 0 {
        std::process::exit(1);
    }
}
