use serde::Serialize;

/// Corner treatment of a row, derived from its position in the list.
///
/// Rows of one list read as a single rounded card: the first row rounds its
/// top corners, the last its bottom corners, a lone row all four.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RowBackground {
    #[default]
    AllCorners,
    Top,
    Middle,
    Bottom,
}

impl RowBackground {
    pub fn for_position(index: usize, count: usize) -> Self {
        if count <= 1 {
            Self::AllCorners
        } else if index == 0 {
            Self::Top
        } else if index + 1 >= count {
            Self::Bottom
        } else {
            Self::Middle
        }
    }

    pub fn rounds_top(self) -> bool {
        matches!(self, Self::AllCorners | Self::Top)
    }

    pub fn rounds_bottom(self) -> bool {
        matches!(self, Self::AllCorners | Self::Bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(count: usize) -> Vec<RowBackground> {
        (0..count)
            .map(|ix| RowBackground::for_position(ix, count))
            .collect()
    }

    #[test]
    fn test_single_row_is_fully_rounded() {
        assert_eq!(layout(1), vec![RowBackground::AllCorners]);
    }

    #[test]
    fn test_three_rows() {
        assert_eq!(
            layout(3),
            vec![RowBackground::Top, RowBackground::Middle, RowBackground::Bottom]
        );
    }

    #[test]
    fn test_two_rows_have_no_middle() {
        assert_eq!(layout(2), vec![RowBackground::Top, RowBackground::Bottom]);
    }

    #[test]
    fn test_interior_rows_are_middle() {
        let rows = layout(6);
        assert!(rows[1..5].iter().all(|bg| *bg == RowBackground::Middle));
    }

    #[test]
    fn test_corner_flags() {
        assert!(RowBackground::AllCorners.rounds_top());
        assert!(RowBackground::AllCorners.rounds_bottom());
        assert!(RowBackground::Top.rounds_top());
        assert!(!RowBackground::Top.rounds_bottom());
        assert!(!RowBackground::Middle.rounds_top());
        assert!(!RowBackground::Middle.rounds_bottom());
        assert!(RowBackground::Bottom.rounds_bottom());
    }
}
