/// Photo index for the card currently on screen
///
/// The index stays below `photo_count` and does not wrap. A count of zero
/// means no card is displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhotoBrowser {
    index: usize,
    photo_count: usize,
}

impl PhotoBrowser {
    pub fn new(photo_count: usize) -> Self {
        Self { index: 0, photo_count }
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn photo_count(&self) -> usize {
        self.photo_count
    }

    /// Step to the next photo, returning whether the index moved
    pub fn next(&mut self) -> bool {
        if self.index + 1 < self.photo_count {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Re-initialise for a newly displayed card
    pub fn reset(&mut self, photo_count: usize) {
        self.index = 0;
        self.photo_count = photo_count;
    }
}
