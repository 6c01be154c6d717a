/// Position of a point relative to a directed line.
///
/// `Top` means the point is on the line, within the tolerance band supplied
/// to the classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
    Top,
}

impl Side {
    #[must_use]
    pub fn is_top(self) -> bool {
        self == Self::Top
    }
}
