/// Generation counter for trailing-edge debouncing.
///
/// Every event `poke`s and schedules a delayed check with the returned
/// token; only the check holding the latest token runs the work.
#[derive(Clone, Copy, Debug, Default)]
pub struct Debounce {
    generation: u64,
}

impl Debounce {
    pub fn poke(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    #[inline]
    pub fn is_current(&self, token: u64) -> bool {
        token == self.generation
    }
}
