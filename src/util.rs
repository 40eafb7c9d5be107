use ratatui::layout::{Flex, Layout, Rect, Size};

/// Return a rectangle of the given size centered within `area`, clipped to
/// `area` if it does not fit.
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [area] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([size.height])
        .flex(Flex::Center)
        .areas(area);
    area
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Rect::new(0, 0, 20, 8), Size::new(14, 8), Rect::new(3, 0, 14, 8))]
    #[case(Rect::new(0, 1, 30, 8), Size::new(14, 8), Rect::new(8, 1, 14, 8))]
    #[case(Rect::new(5, 5, 10, 10), Size::new(4, 2), Rect::new(8, 9, 4, 2))]
    fn test_center_rect(#[case] area: Rect, #[case] size: Size, #[case] r: Rect) {
        assert_eq!(center_rect(area, size), r);
    }
}
