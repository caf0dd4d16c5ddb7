/// Cycles a fixed caption list, one step per timer tick.
///
/// Starts on `lines[0]`; the first `advance` happens after one full
/// interval, so the page's initial text stays up for that long.
#[derive(Clone, Debug)]
pub struct CaptionCycler {
    lines: &'static [&'static str],
    index: usize,
}

impl CaptionCycler {
    pub fn new(lines: &'static [&'static str]) -> Self {
        Self { lines, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&'static str> {
        self.lines.get(self.index).copied()
    }

    /// Step to the next line (wrapping) and return it.
    pub fn advance(&mut self) -> Option<&'static str> {
        if self.lines.is_empty() {
            return None;
        }
        self.index = (self.index + 1) % self.lines.len();
        self.current()
    }
}
