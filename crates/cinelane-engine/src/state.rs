/// Index of the record currently on screen.
///
/// Invariant: `index < len` for the catalog it was created against. The
/// only mutation is `advance`, which wraps modulo `len`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewState {
    index: usize,
}

impl ViewState {
    pub fn new() -> Self {
        Self { index: 0 }
    }

    /// Returns `None` when `index` does not address a record.
    pub fn starting_at(index: usize, len: usize) -> Option<Self> {
        (index < len).then_some(Self { index })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// `len` must be the non-zero catalog length.
    pub fn advance(&mut self, len: usize) -> usize {
        self.index = (self.index + 1) % len;
        self.index
    }
}
