//! 通用 UI 组件
//!
//! 弹窗框架、选项行、标签行

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear},
};

use crate::engine::OptionMark;
use crate::models::QuestionKind;

/// [组件] 弹窗基础框架
pub fn render_dialog_framework(frame: &mut Frame, area: Rect, title: &str) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// 选项序号 A, B, C ...
pub fn option_letter(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .filter(|i| *i < 26)
        .map_or('?', |i| char::from(b'A' + i))
}

/// [组件] 作答中的选项行
pub fn option_line(
    kind: QuestionKind,
    index: usize,
    label: &str,
    selected: bool,
    highlighted: bool,
) -> Line<'static> {
    let marker = match (kind, selected) {
        (QuestionKind::Multiple, true) => "[x]",
        (QuestionKind::Multiple, false) => "[ ]",
        (_, true) => "(•)",
        (_, false) => "( )",
    };
    let style = if highlighted {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else if selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    Line::from(Span::styled(
        format!("{} {}. {}", marker, option_letter(index), label),
        style,
    ))
}

/// [组件] 反馈中的选项行
pub fn feedback_line(index: usize, label: &str, selected: bool, mark: OptionMark) -> Line<'static> {
    let (icon, color) = match mark {
        OptionMark::Correct => ("✓", Color::Green),
        OptionMark::Incorrect => ("✗", Color::Red),
        OptionMark::Unmarked => (" ", Color::Gray),
    };
    let mut style = Style::default().fg(color);
    if selected {
        style = style.add_modifier(Modifier::BOLD);
    }
    let chosen = if selected { "  ← 你的选择" } else { "" };

    Line::from(Span::styled(
        format!("{} {}. {}{}", icon, option_letter(index), label, chosen),
        style,
    ))
}

/// [组件] 题型与标签
pub fn tag_line(kind: QuestionKind, tags: &[String]) -> Line<'static> {
    let kind_label = match kind {
        QuestionKind::Single => "单选题",
        QuestionKind::Multiple => "多选题",
        QuestionKind::Judge => "判断题",
    };
    let mut spans = vec![Span::styled(
        format!("[{}]", kind_label),
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    )];
    spans.extend(
        tags.iter()
            .map(|tag| Span::styled(format!(" #{}", tag), Style::default().fg(Color::DarkGray))),
    );
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_letter() {
        assert_eq!(option_letter(0), 'A');
        assert_eq!(option_letter(3), 'D');
        assert_eq!(option_letter(40), '?');
    }
}
