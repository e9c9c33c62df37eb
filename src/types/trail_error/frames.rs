use core::iter::FusedIterator;

/// Iterator over the frame annotations of a [`TrailError`](crate::TrailError).
///
/// Each item starts with the newline that opened its frame and runs up to the
/// next frame. Offsets that do not land on a char boundary are skipped.
#[derive(Debug, Clone)]
pub struct Frames<'a> {
    description: &'a str,
    starts: &'a [usize],
    index: usize,
}

impl<'a> Frames<'a> {
    #[inline]
    pub(crate) fn new(description: &'a str, starts: &'a [usize]) -> Self {
        Self { description, starts, index: 0 }
    }
}

impl<'a> Iterator for Frames<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < self.starts.len() {
            let start = self.starts[self.index];
            let end = self.starts.get(self.index + 1).copied().unwrap_or(self.description.len());
            self.index += 1;

            if let Some(frame) = self.description.get(start..end) {
                return Some(frame);
            }
        }
        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.starts.len() - self.index))
    }
}

impl FusedIterator for Frames<'_> {}
