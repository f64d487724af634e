/// Odometer over the per-position alphabet indices. The rightmost digit
/// turns fastest.
#[derive(Debug, Clone)]
pub struct OdometerState {
    pub(crate) indices: Vec<usize>,
    pub(crate) remaining: u64,
}

impl OdometerState {
    pub fn new(positions: usize, total: u64) -> Self {
        Self {
            indices: vec![0; positions],
            remaining: total,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }

    /// Consumes the current reading and moves to the next one
    pub fn advance(&mut self, radices: impl DoubleEndedIterator<Item = usize>) {
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            return;
        }

        for (index, radix) in self.indices.iter_mut().rev().zip(radices.rev()) {
            *index += 1;
            if *index < radix {
                return;
            }
            *index = 0;
        }
    }
}
