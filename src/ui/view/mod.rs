//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod components;
pub mod content;
pub mod layouts;

use ratatui::{Frame, layout::Rect};

use super::state::{App, HitAreas, Screen};
use components::{render_footer, render_place_details, render_place_list_item, render_top_bar};
use content::{PlaceListItem, ScreenContent};
use layouts::{card_capacity, card_rect, list_and_detail_areas, list_only_areas, screen_areas};

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let (body, footer) = screen_areas(area);

    app.screen = Screen::choose(
        area.width,
        app.wide_layout_min_width,
        app.ui_state.is_showing_recommendations(),
    );

    let list_area = match app.screen {
        Screen::ListOnly => Some(list_only_areas(body).1),
        Screen::ListAndDetail => Some(list_and_detail_areas(body).0),
        Screen::Detail => None,
    };
    if let Some(list_area) = list_area {
        let places = app.ui_state.current_category_places();
        if let Some(i) = app.focus.index(places) {
            app.focus
                .ensure_visible(i, card_capacity(list_area.height), places.len());
        }
    }

    let focused = app.focused_place().map(|p| p.id.clone());
    let focused = focused.as_deref();
    let offset = app.focus.offset;

    let hit_areas = app.with_content(|content| {
        let mut hits = HitAreas::default();
        match content {
            ScreenContent::ListOnly(c) => {
                let (top, list) = list_only_areas(body);
                render_top_bar(frame, top, &c.top_bar);
                hits.items = render_item_list(frame, list, &c.items, focused, offset);
            }
            ScreenContent::ListAndDetail(c) => {
                let (list, detail) = list_and_detail_areas(body);
                hits.items = render_item_list(frame, list, &c.items, focused, offset);
                hits.back = Some(render_place_details(frame, detail, &c.details));
            }
            ScreenContent::Detail(d) => {
                hits.back = Some(render_place_details(frame, body, d));
            }
        }
        hits
    });

    render_footer(frame, footer, app.ui_state.current_category());
    app.hit_areas = hit_areas;
}

/// 从 `offset` 开始绘制能完整放下的卡片，返回 (下标, 区域)
fn render_item_list(
    frame: &mut Frame,
    area: Rect,
    items: &[PlaceListItem<'_>],
    focused: Option<&str>,
    offset: usize,
) -> Vec<(usize, Rect)> {
    items
        .iter()
        .enumerate()
        .skip(offset)
        .take(card_capacity(area.height))
        .enumerate()
        .map(|(slot, (i, item))| {
            let rect = card_rect(area, slot);
            render_place_list_item(frame, rect, item, focused == Some(item.key()));
            (i, rect)
        })
        .collect()
}
