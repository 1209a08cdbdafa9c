//! Selection ranges exchanged with the host field.

/// A char range `start..end` inside the field's value.
///
/// Unlike an editor selection there is no anchor/head distinction: the host
/// reports and receives plain ordered ranges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionRange {
    pub start: usize,
    pub end: usize,
}

impl SelectionRange {
    /// Create a range, ordering the endpoints
    pub fn new(start: usize, end: usize) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// Create a collapsed range (caret with no selection)
    pub fn collapsed(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// Check if the range is empty (start == end)
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Clamp both endpoints to a value of `len` chars
    pub fn clamped(&self, len: usize) -> Self {
        Self::new(self.start.min(len), self.end.min(len))
    }

    /// Check the range fits inside a value of `len` chars
    pub fn fits(&self, len: usize) -> bool {
        self.start <= self.end && self.end <= len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_orders_endpoints() {
        let range = SelectionRange::new(5, 1);
        assert_eq!(range.start, 1);
        assert_eq!(range.end, 5);
        assert_eq!(range.len(), 4);
    }

    #[test]
    fn test_collapsed() {
        let range = SelectionRange::collapsed(3);
        assert!(range.is_empty());
        assert_eq!(range.len(), 0);
    }

    #[test]
    fn test_clamped() {
        assert_eq!(
            SelectionRange::new(2, 9).clamped(5),
            SelectionRange::new(2, 5)
        );
        assert_eq!(
            SelectionRange::new(7, 9).clamped(5),
            SelectionRange::collapsed(5)
        );
    }

    #[test]
    fn test_fits() {
        assert!(SelectionRange::new(1, 5).fits(5));
        assert!(!SelectionRange::new(1, 6).fits(5));
        assert!(SelectionRange::collapsed(0).fits(0));
    }
}
