//! 状态定义 (Model)
//!
//! - `UiState`: 不可变的界面快照，每次用户操作都会生成新的值
//! - `App`: 持有当前 `UiState` 的状态拥有者，以及焦点、布局等终端相关状态

use std::cell::OnceCell;
use std::collections::HashMap;
use std::sync::mpsc::{self, Receiver, Sender};

use ratatui::layout::Rect;

use super::actions::Action;
use crate::models::{Category, Place};
use crate::storage::default_place;

/// 界面状态快照
///
/// 字段只能在构造时给出；`with_*` 方法返回新的值而不是修改自身，
/// 因此缓存的 `current_category_places` 永远与同一个值的字段一致。
#[derive(Debug, Clone)]
pub struct UiState {
    categories: HashMap<Category, Vec<Place>>,
    current_category: Category,
    current_selected_place: Place,
    is_showing_recommendations: bool,
    current_category_places: OnceCell<Vec<Place>>,
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(HashMap::new(), Category::Park, default_place(), true)
    }
}

impl UiState {
    pub fn new(
        categories: HashMap<Category, Vec<Place>>,
        current_category: Category,
        current_selected_place: Place,
        is_showing_recommendations: bool,
    ) -> Self {
        Self {
            categories,
            current_category,
            current_selected_place,
            is_showing_recommendations,
            current_category_places: OnceCell::new(),
        }
    }

    #[cfg(test)]
    pub fn categories(&self) -> &HashMap<Category, Vec<Place>> {
        &self.categories
    }

    pub fn current_category(&self) -> Category {
        self.current_category
    }

    pub fn current_selected_place(&self) -> &Place {
        &self.current_selected_place
    }

    pub fn is_showing_recommendations(&self) -> bool {
        self.is_showing_recommendations
    }

    /// 当前分类下的地点，首次访问时计算并缓存；分类不存在时为空
    pub fn current_category_places(&self) -> &[Place] {
        self.current_category_places.get_or_init(|| {
            self.categories
                .get(&self.current_category)
                .cloned()
                .unwrap_or_default()
        })
    }

    pub fn with_category(&self, category: Category) -> Self {
        Self::new(
            self.categories.clone(),
            category,
            self.current_selected_place.clone(),
            self.is_showing_recommendations,
        )
    }

    pub fn with_selected_place(&self, place: Place) -> Self {
        Self::new(
            self.categories.clone(),
            self.current_category,
            place,
            self.is_showing_recommendations,
        )
    }

    pub fn with_showing_recommendations(&self, showing: bool) -> Self {
        Self::new(
            self.categories.clone(),
            self.current_category,
            self.current_selected_place.clone(),
            showing,
        )
    }
}

/// 屏幕布局
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    ListOnly,
    ListAndDetail,
    /// 窄终端下查看单个地点
    Detail,
}

impl Screen {
    pub fn choose(width: u16, wide_min_width: u16, showing_recommendations: bool) -> Self {
        if width >= wide_min_width {
            Screen::ListAndDetail
        } else if showing_recommendations {
            Screen::ListOnly
        } else {
            Screen::Detail
        }
    }
}

/// 列表焦点，按地点 id 记录，重新渲染后仍指向同一个地点
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListFocus {
    pub key: Option<String>,
    /// 最上方可见项的下标
    pub offset: usize,
}

impl ListFocus {
    pub fn on(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            offset: 0,
        }
    }

    /// 焦点所在下标；id 不在列表中时回到第一项
    pub fn index(&self, places: &[Place]) -> Option<usize> {
        if places.is_empty() {
            return None;
        }
        let found = self
            .key
            .as_ref()
            .and_then(|key| places.iter().position(|p| &p.id == key));
        Some(found.unwrap_or(0))
    }

    pub fn move_down(&mut self, places: &[Place]) {
        if let Some(i) = self.index(places) {
            let next = (i + 1).min(places.len() - 1);
            self.key = Some(places[next].id.clone());
        }
    }

    pub fn move_up(&mut self, places: &[Place]) {
        if let Some(i) = self.index(places) {
            self.key = Some(places[i.saturating_sub(1)].id.clone());
        }
    }

    pub fn reset(&mut self) {
        self.key = None;
        self.offset = 0;
    }

    /// 调整 `offset` 使下标 `index` 在 `capacity` 行的视口内可见
    pub fn ensure_visible(&mut self, index: usize, capacity: usize, len: usize) {
        if capacity == 0 || len == 0 {
            self.offset = 0;
            return;
        }
        if index < self.offset {
            self.offset = index;
            return;
        }
        let max_offset = len.saturating_sub(capacity);
        if index >= self.offset + capacity {
            self.offset = (index + 1 - capacity).min(max_offset);
        } else if self.offset > max_offset {
            self.offset = max_offset;
        }
    }
}

/// 上一帧绘制出的可点击区域
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HitAreas {
    /// (列表下标, 卡片区域)
    pub items: Vec<(usize, Rect)>,
    pub back: Option<Rect>,
}

/// 应用状态
pub struct App {
    pub ui_state: UiState,
    pub focus: ListFocus,
    pub screen: Screen,
    pub wide_layout_min_width: u16,
    pub hit_areas: HitAreas,
    pub should_quit: bool,
    pub(super) actions_tx: Sender<Action>,
    pub(super) actions_rx: Receiver<Action>,
}

impl App {
    /// 创建新的应用实例，焦点落在当前选中的地点上
    pub fn new(ui_state: UiState, wide_layout_min_width: u16) -> Self {
        let (actions_tx, actions_rx) = mpsc::channel();
        let focus = ListFocus::on(ui_state.current_selected_place().id.clone());
        Self {
            ui_state,
            focus,
            screen: Screen::ListOnly,
            wide_layout_min_width,
            hit_areas: HitAreas::default(),
            should_quit: false,
            actions_tx,
            actions_rx,
        }
    }

    /// 当前焦点所在的地点
    pub fn focused_place(&self) -> Option<&Place> {
        let places = self.ui_state.current_category_places();
        self.focus.index(places).map(|i| &places[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::group_by_category;
    use proptest::prelude::*;

    fn place(id: &str, category: Category) -> Place {
        Place::new(id, format!("Name {id}"), format!("Details {id}"), category)
    }

    #[test]
    fn test_current_category_places() {
        let p1 = place("p1", Category::Park);
        let p2 = place("p2", Category::Park);
        let m1 = place("m1", Category::Museum);
        let categories = group_by_category(&[p1.clone(), m1, p2.clone()]);

        let state = UiState::new(categories, Category::Park, p2.clone(), true);
        assert_eq!(state.current_category_places(), &[p1, p2]);
    }

    #[test]
    fn test_missing_category_is_empty() {
        let state = UiState::default();
        assert!(state.categories().is_empty());
        assert!(state.current_category_places().is_empty());
        assert_eq!(state.current_category(), Category::Park);
        assert!(state.is_showing_recommendations());
    }

    #[test]
    fn test_cache_is_per_value() {
        let categories = group_by_category(&[
            place("p1", Category::Park),
            place("m1", Category::Museum),
        ]);
        let parks = UiState::new(categories, Category::Park, place("p1", Category::Park), true);
        assert_eq!(parks.current_category_places()[0].id, "p1");

        let museums = parks.with_category(Category::Museum);
        assert_eq!(museums.current_category_places()[0].id, "m1");
        // 原值不受影响
        assert_eq!(parks.current_category_places()[0].id, "p1");
        assert_eq!(parks.current_category(), Category::Park);
    }

    #[test]
    fn test_with_selected_place_keeps_other_fields() {
        let p1 = place("p1", Category::Park);
        let p2 = place("p2", Category::Park);
        let state = UiState::new(group_by_category(&[p1.clone(), p2.clone()]), Category::Park, p1, true);

        let next = state.with_selected_place(p2.clone()).with_showing_recommendations(false);
        assert_eq!(next.current_selected_place(), &p2);
        assert!(!next.is_showing_recommendations());
        assert_eq!(next.current_category(), Category::Park);
        assert_eq!(next.current_category_places().len(), 2);
        assert_eq!(state.current_selected_place().id, "p1");
        assert!(state.is_showing_recommendations());
    }

    #[test]
    fn test_screen_choose() {
        assert_eq!(Screen::choose(120, 100, true), Screen::ListAndDetail);
        assert_eq!(Screen::choose(120, 100, false), Screen::ListAndDetail);
        assert_eq!(Screen::choose(80, 100, true), Screen::ListOnly);
        assert_eq!(Screen::choose(80, 100, false), Screen::Detail);
    }

    #[test]
    fn test_focus_follows_key() {
        let places = vec![place("a", Category::Park), place("b", Category::Park), place("c", Category::Park)];
        let mut focus = ListFocus::on("b");
        assert_eq!(focus.index(&places), Some(1));

        // 列表重排后仍指向同一 id
        let reordered = vec![places[2].clone(), places[0].clone(), places[1].clone()];
        assert_eq!(focus.index(&reordered), Some(2));

        focus.move_down(&places);
        assert_eq!(focus.key.as_deref(), Some("c"));
        focus.move_down(&places);
        assert_eq!(focus.key.as_deref(), Some("c"));
        focus.move_up(&places);
        focus.move_up(&places);
        focus.move_up(&places);
        assert_eq!(focus.key.as_deref(), Some("a"));

        assert_eq!(ListFocus::on("gone").index(&places), Some(0));
        assert_eq!(focus.index(&[]), None);
    }

    #[test]
    fn test_focus_ensure_visible() {
        let mut focus = ListFocus::default();
        focus.ensure_visible(2, 3, 10);
        assert_eq!(focus.offset, 0);
        focus.ensure_visible(3, 3, 10);
        assert_eq!(focus.offset, 1);
        focus.ensure_visible(9, 3, 10);
        assert_eq!(focus.offset, 7);
        focus.ensure_visible(0, 3, 10);
        assert_eq!(focus.offset, 0);

        // 视口变大后 offset 被收回
        focus.offset = 7;
        focus.ensure_visible(9, 8, 10);
        assert_eq!(focus.offset, 2);

        focus.ensure_visible(4, 0, 10);
        assert_eq!(focus.offset, 0);
    }

    #[test]
    fn test_app_focuses_selected_place() {
        let p1 = place("p1", Category::Park);
        let p2 = place("p2", Category::Park);
        let state = UiState::new(group_by_category(&[p1, p2.clone()]), Category::Park, p2, true);
        let app = App::new(state, 100);
        assert_eq!(app.focused_place().map(|p| p.id.as_str()), Some("p2"));
    }

    fn arb_category() -> impl Strategy<Value = Category> {
        prop::sample::select(Category::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn prop_current_places_match_map(
            entries in prop::collection::vec((arb_category(), "[a-z]{1,6}"), 0..20),
            current in arb_category(),
        ) {
            let places: Vec<Place> = entries
                .iter()
                .enumerate()
                .map(|(i, (c, name))| Place::new(i.to_string(), name.clone(), "", *c))
                .collect();
            let categories = group_by_category(&places);
            let expected = categories.get(&current).cloned().unwrap_or_default();

            let state = UiState::new(categories, current, default_place(), true);
            prop_assert_eq!(state.current_category_places(), expected.as_slice());
            // 克隆带着缓存，结果不变
            let cloned = state.clone();
            prop_assert_eq!(cloned.current_category_places(), expected.as_slice());
        }
    }
}
