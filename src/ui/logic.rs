//! 业务逻辑处理 (Update/Dispatch)
//!
//! 每个改变界面的 Action 都会生成新的 `UiState`，旧值直接丢弃

use ratatui::layout::Position;
use tracing::debug;

use super::actions::Action;
use super::state::{App, Screen};
use super::view::content::{ScreenContent, screen_content};
use crate::models::Place;

impl App {
    /// 核心逻辑分发
    pub fn dispatch(&mut self, action: Action) {
        debug!(?action, screen = ?self.screen, "dispatch");
        match action {
            Action::Quit => self.should_quit = true,
            Action::FocusUp => self.focus.move_up(self.ui_state.current_category_places()),
            Action::FocusDown => self.focus.move_down(self.ui_state.current_category_places()),
            Action::NextCategory => self.switch_category(true),
            Action::PrevCategory => self.switch_category(false),

            Action::Activate => self.activate_focused(),
            Action::Click { column, row } => self.click(column, row),
            Action::PressBack => self.press_back(),

            Action::SelectPlace(place) => self.select_place(place),
            Action::Back => self.back(),
        }
        self.drain_actions();
    }

    /// 用当前布局构建视图树；视图回调把 Action 放入队列
    pub fn with_content<R>(&self, f: impl FnOnce(&ScreenContent<'_>) -> R) -> R {
        let tx = &self.actions_tx;
        let on_place_card_pressed = |place: &Place| {
            let _ = tx.send(Action::SelectPlace(place.clone()));
        };
        let on_back_pressed = || {
            let _ = tx.send(Action::Back);
        };
        let content = screen_content(
            self.screen,
            &self.ui_state,
            &on_place_card_pressed,
            &on_back_pressed,
        );
        f(&content)
    }

    fn drain_actions(&mut self) {
        while let Ok(action) = self.actions_rx.try_recv() {
            self.dispatch(action);
        }
    }

    // ============ 导航相关 ============

    fn switch_category(&mut self, forward: bool) {
        let current = self.ui_state.current_category();
        let category = if forward { current.next() } else { current.prev() };
        self.ui_state = self.ui_state.with_category(category);
        self.focus.reset();
    }

    // ============ 视图事件 ============

    /// 按下焦点所在的卡片
    fn activate_focused(&mut self) {
        let focused = self.focus.index(self.ui_state.current_category_places());
        self.with_content(|content| {
            if let Some(item) = focused.and_then(|i| content.items().get(i)) {
                item.click();
            }
        });
    }

    /// 鼠标点击：命中卡片或返回按钮
    fn click(&mut self, column: u16, row: u16) {
        let pos = Position::new(column, row);
        let hit_item = self
            .hit_areas
            .items
            .iter()
            .find(|(_, rect)| rect.contains(pos))
            .map(|(i, _)| *i);
        let hit_back = self.hit_areas.back.is_some_and(|rect| rect.contains(pos));

        self.with_content(|content| {
            if let Some(item) = hit_item.and_then(|i| content.items().get(i)) {
                item.click();
            } else if hit_back {
                if let Some(details) = content.details() {
                    details.back();
                }
            }
        });
    }

    /// Esc：有详情面板时交给面板，否则退出
    fn press_back(&mut self) {
        let handled = self.with_content(|content| match content.details() {
            Some(details) => {
                details.back();
                true
            }
            None => false,
        });
        if !handled {
            self.should_quit = true;
        }
    }

    // ============ 状态更新 ============

    fn select_place(&mut self, place: Place) {
        self.focus.key = Some(place.id.clone());
        self.ui_state = self
            .ui_state
            .with_selected_place(place)
            .with_showing_recommendations(false);
    }

    /// 详情面板的返回：窄屏回到列表，列表+详情布局则结束程序
    fn back(&mut self) {
        match self.screen {
            Screen::Detail => {
                self.ui_state = self.ui_state.with_showing_recommendations(true);
                self.screen = Screen::ListOnly;
            }
            Screen::ListAndDetail | Screen::ListOnly => self.should_quit = true,
        }
    }
}
