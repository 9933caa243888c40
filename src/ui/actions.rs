//! Action 枚举定义 (Intent)
//!
//! 用户交互转化为明确的语义化 Action

use crate::models::Place;

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    FocusUp,
    FocusDown,
    NextCategory,
    PrevCategory,

    // 交由视图回调处理
    Activate,                        // 按下焦点所在的卡片
    Click { column: u16, row: u16 }, // 鼠标左键
    PressBack,                       // Esc / Backspace

    // 视图回调发出
    SelectPlace(Place),
    Back,
}
