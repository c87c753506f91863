/// Источник случайности для стресс-прогонов (случайные действия оператора).
pub trait RandomSource {
    /// Число в диапазоне `0..bound`. Для `bound == 0` возвращает 0.
    fn below(&mut self, bound: u64) -> u64;

    /// Случайный элемент среза.
    fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let idx = self.below(items.len() as u64) as usize;
        items.get(idx)
    }
}

//
// ✅ NATIVE ВАРИАНТ (НЕ wasm32):
//    тут есть rand.
//
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

#[cfg(not(target_arch = "wasm32"))]
impl RandomSource for SystemRng {
    fn below(&mut self, bound: u64) -> u64 {
        use rand::Rng;

        if bound == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..bound)
    }
}

/// Детерминированный RNG для тестов и реплея.
/// Одинаковый seed – одинаковая последовательность действий.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: rand::rngs::StdRng,
}

#[cfg(not(target_arch = "wasm32"))]
impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        use rand::SeedableRng;
        Self {
            inner: rand::rngs::StdRng::seed_from_u64(seed),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl RandomSource for DeterministicRng {
    fn below(&mut self, bound: u64) -> u64 {
        use rand::Rng;

        if bound == 0 {
            return 0;
        }
        self.inner.gen_range(0..bound)
    }
}
