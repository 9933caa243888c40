//! 布局辅助函数

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::components::{CARD_HEIGHT, CARD_SPACING};

/// (主体, 底栏)
pub fn screen_areas(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(area);
    (chunks[0], chunks[1])
}

/// (顶栏, 列表)
pub fn list_only_areas(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);
    (chunks[0], chunks[1])
}

/// (列表, 详情)，等宽；列表右侧与上方各留一格
pub fn list_and_detail_areas(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
        .split(area);

    let list = chunks[0];
    let list = Rect {
        y: list.y.saturating_add(1),
        height: list.height.saturating_sub(1),
        width: list.width.saturating_sub(1),
        ..list
    };
    (list, chunks[1])
}

/// 高度为 `height` 的区域能完整放下的卡片数量
pub fn card_capacity(height: u16) -> usize {
    if height < CARD_HEIGHT {
        return 0;
    }
    ((height + CARD_SPACING) / (CARD_HEIGHT + CARD_SPACING)) as usize
}

/// 第 `slot` 个可见卡片的区域
pub fn card_rect(area: Rect, slot: usize) -> Rect {
    let y = area.y + slot as u16 * (CARD_HEIGHT + CARD_SPACING);
    Rect::new(area.x, y, area.width, CARD_HEIGHT)
}
