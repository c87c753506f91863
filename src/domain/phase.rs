use core::fmt;

use serde::{Deserialize, Serialize};

/// Фаза раздачи. Порядок фиксирован, после шоудауна снова префлоп.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Phase {
    #[default]
    PreFlop,
    Flop,
    Turn,
    River,
    Showdown,
}

impl Phase {
    pub const ALL: [Phase; 5] = [
        Phase::PreFlop,
        Phase::Flop,
        Phase::Turn,
        Phase::River,
        Phase::Showdown,
    ];

    /// Следующая фаза по кругу.
    pub fn next(self) -> Phase {
        match self {
            Phase::PreFlop => Phase::Flop,
            Phase::Flop => Phase::Turn,
            Phase::Turn => Phase::River,
            Phase::River => Phase::Showdown,
            Phase::Showdown => Phase::PreFlop,
        }
    }

    /// true, если следующий шаг замыкает круг (новая раздача).
    pub fn wraps(self) -> bool {
        self == Phase::Showdown
    }

    pub fn label(self) -> &'static str {
        match self {
            Phase::PreFlop => "Pre-Flop",
            Phase::Flop => "Flop",
            Phase::Turn => "Turn",
            Phase::River => "River",
            Phase::Showdown => "Showdown",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
