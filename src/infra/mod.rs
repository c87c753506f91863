//! Инфраструктурный слой вокруг движка стола:
//! - генерация ID игроков;
//! - RNG для стресс-прогонов;
//! - загрузка конфига стола;
//! - генератор случайных команд оператора и проверка инвариантов.

pub mod config;
pub mod ids;
#[cfg(not(target_arch = "wasm32"))]
pub mod rng;
#[cfg(not(target_arch = "wasm32"))]
pub mod simulation;

pub use config::*;
pub use ids::*;
#[cfg(not(target_arch = "wasm32"))]
pub use rng::*;
#[cfg(not(target_arch = "wasm32"))]
pub use simulation::*;
