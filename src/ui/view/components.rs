//! 通用 UI 组件
//!
//! 顶栏、地点卡片、详情面板、底栏的绘制

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
};

use super::content::{PlaceDetails, PlaceListItem, TopBar};
use crate::models::Category;

/// 卡片高度：上下边框 + 标题 1 行 + 描述 2 行
pub const CARD_HEIGHT: u16 = 5;
/// 卡片之间的竖直间距
pub const CARD_SPACING: u16 = 1;
pub const DETAILS_MAX_LINES: usize = 2;
pub const ELLIPSIS: &str = "…";

/// 选中卡片的容器样式
pub fn primary_container() -> Style {
    Style::default().fg(Color::Black).bg(Color::Cyan)
}

/// 普通卡片的容器样式
pub fn secondary_container() -> Style {
    Style::default().fg(Color::White).bg(Color::DarkGray)
}

/// 按宽度折行，最多保留 `max_lines` 行，溢出时最后一行以省略号结尾
pub fn truncate_lines(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if text.is_empty() || width == 0 || max_lines == 0 {
        return Vec::new();
    }

    let wrapped: Vec<String> = textwrap::wrap(text, width)
        .into_iter()
        .map(|l| l.into_owned())
        .collect();
    if wrapped.len() <= max_lines {
        return wrapped;
    }

    let mut lines: Vec<String> = wrapped.into_iter().take(max_lines).collect();
    if let Some(last) = lines.last_mut() {
        let budget = width.saturating_sub(textwrap::core::display_width(ELLIPSIS));
        while textwrap::core::display_width(last) > budget {
            last.pop();
        }
        let trimmed_len = last.trim_end().len();
        last.truncate(trimmed_len);
        last.push_str(ELLIPSIS);
    }
    lines
}

/// [组件] 顶栏
pub fn render_top_bar(frame: &mut Frame, area: Rect, top_bar: &TopBar) {
    let title = Paragraph::new(top_bar.title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

/// [组件] 地点卡片
pub fn render_place_list_item(frame: &mut Frame, area: Rect, item: &PlaceListItem<'_>, focused: bool) {
    let container = if item.selected {
        primary_container()
    } else {
        secondary_container()
    };
    let border = if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        container
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .style(container);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![Line::from(Span::styled(
        item.place.name.as_str(),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    lines.extend(
        truncate_lines(&item.place.details, inner.width as usize, DETAILS_MAX_LINES)
            .into_iter()
            .map(Line::from),
    );
    frame.render_widget(Paragraph::new(lines), inner);
}

/// [组件] 详情面板，返回“返回”按钮所在区域
pub fn render_place_details(frame: &mut Frame, area: Rect, details: &PlaceDetails<'_>) -> Rect {
    let place = details.place;
    let block = Block::default().title(" Details ").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 返回
            Constraint::Length(1), // 名称
            Constraint::Length(1), // 分类
            Constraint::Length(1),
            Constraint::Min(0), // 描述
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new("← Back [Esc]").style(Style::default().fg(Color::Yellow)),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(place.name.as_str()).style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(place.category.label()).style(Style::default().fg(Color::Gray)),
        chunks[2],
    );
    frame.render_widget(
        Paragraph::new(place.details.as_str()).wrap(Wrap { trim: true }),
        chunks[4],
    );

    chunks[0]
}

/// [组件] 底栏：分类标签与按键提示
pub fn render_footer(frame: &mut Frame, area: Rect, current: Category) {
    let titles: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
    let selected = Category::ALL.iter().position(|c| *c == current).unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" [Tab] category  [j/k] move  [Enter] open  [Esc] back  [q] quit "),
        );
    frame.render_widget(tabs, area);
}
