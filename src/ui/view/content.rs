//! 视图树
//!
//! 纯函数：`UiState` + 回调 -> 描述界面的视图树。
//! 绘制由 `view::render` 完成，这里不接触终端。

use crate::models::Place;
use crate::ui::state::{Screen, UiState};

/// 应用显示名称
pub const APP_NAME: &str = "Dortmund City Guide";

/// 顶栏
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopBar {
    pub title: &'static str,
}

pub fn top_bar() -> TopBar {
    TopBar { title: APP_NAME }
}

/// 列表中的一张地点卡片
pub struct PlaceListItem<'a> {
    pub place: &'a Place,
    pub selected: bool,
    on_card_click: Box<dyn Fn() + 'a>,
}

impl<'a> PlaceListItem<'a> {
    /// 稳定的列表键（地点 id）
    pub fn key(&self) -> &'a str {
        &self.place.id
    }

    pub fn click(&self) {
        (self.on_card_click)()
    }
}

pub fn place_list_item<'a>(
    place: &'a Place,
    selected: bool,
    on_card_click: impl Fn() + 'a,
) -> PlaceListItem<'a> {
    PlaceListItem {
        place,
        selected,
        on_card_click: Box::new(on_card_click),
    }
}

/// 详情面板
pub struct PlaceDetails<'a> {
    pub place: &'a Place,
    on_back_pressed: Box<dyn Fn() + 'a>,
}

impl<'a> PlaceDetails<'a> {
    pub fn back(&self) {
        (self.on_back_pressed)()
    }
}

pub fn place_details<'a>(ui_state: &'a UiState, on_back_pressed: &'a dyn Fn()) -> PlaceDetails<'a> {
    PlaceDetails {
        place: ui_state.current_selected_place(),
        on_back_pressed: Box::new(on_back_pressed),
    }
}

/// 仅列表
pub struct ListOnlyContent<'a> {
    pub top_bar: TopBar,
    pub items: Vec<PlaceListItem<'a>>,
}

pub fn list_only_content<'a>(
    ui_state: &'a UiState,
    on_place_card_pressed: &'a dyn Fn(&Place),
) -> ListOnlyContent<'a> {
    let items = ui_state
        .current_category_places()
        .iter()
        .map(|place| place_list_item(place, false, move || on_place_card_pressed(place)))
        .collect();

    ListOnlyContent {
        top_bar: top_bar(),
        items,
    }
}

/// 列表 + 详情，左右各占一半
pub struct ListAndDetailContent<'a> {
    pub items: Vec<PlaceListItem<'a>>,
    pub details: PlaceDetails<'a>,
}

pub fn list_and_detail_content<'a>(
    ui_state: &'a UiState,
    on_place_card_pressed: &'a dyn Fn(&Place),
    on_back_pressed: &'a dyn Fn(),
) -> ListAndDetailContent<'a> {
    let selected_id = &ui_state.current_selected_place().id;
    let items = ui_state
        .current_category_places()
        .iter()
        .map(|place| {
            place_list_item(place, &place.id == selected_id, move || {
                on_place_card_pressed(place)
            })
        })
        .collect();

    ListAndDetailContent {
        items,
        details: place_details(ui_state, on_back_pressed),
    }
}

/// 某个布局下的完整视图树
pub enum ScreenContent<'a> {
    ListOnly(ListOnlyContent<'a>),
    ListAndDetail(ListAndDetailContent<'a>),
    Detail(PlaceDetails<'a>),
}

impl<'a> ScreenContent<'a> {
    pub fn items(&self) -> &[PlaceListItem<'a>] {
        match self {
            ScreenContent::ListOnly(c) => &c.items,
            ScreenContent::ListAndDetail(c) => &c.items,
            ScreenContent::Detail(_) => &[],
        }
    }

    pub fn details(&self) -> Option<&PlaceDetails<'a>> {
        match self {
            ScreenContent::ListOnly(_) => None,
            ScreenContent::ListAndDetail(c) => Some(&c.details),
            ScreenContent::Detail(d) => Some(d),
        }
    }
}

pub fn screen_content<'a>(
    screen: Screen,
    ui_state: &'a UiState,
    on_place_card_pressed: &'a dyn Fn(&Place),
    on_back_pressed: &'a dyn Fn(),
) -> ScreenContent<'a> {
    match screen {
        Screen::ListOnly => ScreenContent::ListOnly(list_only_content(ui_state, on_place_card_pressed)),
        Screen::ListAndDetail => ScreenContent::ListAndDetail(list_and_detail_content(
            ui_state,
            on_place_card_pressed,
            on_back_pressed,
        )),
        Screen::Detail => ScreenContent::Detail(place_details(ui_state, on_back_pressed)),
    }
}
