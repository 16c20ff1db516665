//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件，只读取引擎的渲染请求

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Wrap},
};

use super::state::{App, AppMode};
use crate::engine::{CompletionView, FeedbackView, QuestionView, RenderRequest};
use components::{feedback_line, option_line, render_dialog_framework, tag_line};
use layouts::centered_rect;

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题
            Constraint::Min(10),   // 题目
            Constraint::Length(3), // 进度
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    render_title(frame, app, chunks[0]);
    match app.driver.render_request() {
        RenderRequest::Question(view) => render_question(frame, app, &view, chunks[1]),
        RenderRequest::Feedback(view) => render_feedback(frame, &view, chunks[1]),
        RenderRequest::Completion(view) => render_completion(frame, &view, chunks[1]),
    }
    render_progress(frame, app, chunks[2]);
    render_help(frame, app, chunks[3]);
}

fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let title = Paragraph::new(format!("📝 {}", app.driver.title().unwrap_or("答题")))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_question(frame: &mut Frame, app: &App, view: &QuestionView, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(3)])
        .split(area);

    let prompt = Paragraph::new(vec![
        tag_line(view.kind, view.tags),
        Line::from(view.prompt.to_string()),
    ])
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .title(format!("第 {}/{} 题", view.number, view.total))
            .borders(Borders::ALL),
    );
    frame.render_widget(prompt, chunks[0]);

    let items: Vec<ListItem> = view
        .options
        .iter()
        .enumerate()
        .map(|(i, label)| {
            ListItem::new(option_line(
                view.kind,
                i,
                label,
                view.pending.contains(&i),
                i == app.highlighted,
            ))
        })
        .collect();

    let list = List::new(items).block(Block::default().title("选项").borders(Borders::ALL));
    let mut state = ListState::default();
    state.select(Some(app.highlighted));

    frame.render_stateful_widget(list, chunks[1], &mut state);
}

fn render_feedback(frame: &mut Frame, view: &FeedbackView, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(3),
            Constraint::Length(6),
        ])
        .split(area);

    let (verdict, color) = if view.is_correct {
        ("✓ 回答正确", Color::Green)
    } else {
        ("✗ 回答错误", Color::Red)
    };
    let prompt = Paragraph::new(vec![
        tag_line(view.kind, view.tags),
        Line::from(view.prompt.to_string()),
    ])
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .title(Span::styled(
                format!("第 {}/{} 题  {}", view.number, view.total, verdict),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL),
    );
    frame.render_widget(prompt, chunks[0]);

    let lines: Vec<Line> = view
        .options
        .iter()
        .enumerate()
        .map(|(i, option)| feedback_line(i, option.label, option.selected, option.mark))
        .collect();
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().title("选项").borders(Borders::ALL)),
        chunks[1],
    );

    let mut explanation = Vec::new();
    if !view.correct_text.is_empty() {
        explanation.push(Line::from(view.correct_text.to_string()));
    }
    for (index, note) in &view.wrong_notes {
        explanation.push(Line::from(Span::styled(
            format!("{}: {}", components::option_letter(*index), note),
            Style::default().fg(Color::Red),
        )));
    }
    if explanation.is_empty() {
        explanation.push(Line::from("(无解析)"));
    }
    frame.render_widget(
        Paragraph::new(explanation)
            .wrap(Wrap { trim: true })
            .block(Block::default().title("解析").borders(Borders::ALL)),
        chunks[2],
    );
}

fn render_completion(frame: &mut Frame, view: &CompletionView, area: Rect) {
    let area = centered_rect(70, 70, area);
    let inner = render_dialog_framework(frame, area, "🎉 答题完成");

    let stats = &view.stats;
    let elapsed = stats.elapsed.num_seconds().max(0);
    let content = vec![
        Line::from(format!(
            "已答: {} / {}   正确: {}",
            stats.answered_count, stats.total_count, stats.correct_count
        )),
        Line::from(format!("正确率: {}%", stats.accuracy_percent)),
        Line::from(format!("用时: {}分{:02}秒", elapsed / 60, elapsed % 60)),
        Line::from(""),
        Line::from(Span::styled(
            view.message.to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    frame.render_widget(Paragraph::new(content).wrap(Wrap { trim: true }), inner);
}

fn render_progress(frame: &mut Frame, app: &App, area: Rect) {
    let stats = app.driver.stats();
    let ratio = if stats.total_count == 0 {
        0.0
    } else {
        stats.answered_count as f64 / stats.total_count as f64
    };

    let gauge = Gauge::default()
        .block(Block::default().title("进度").borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Green))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!(
            "已答 {}/{}  正确率 {}%",
            stats.answered_count, stats.total_count, stats.accuracy_percent
        ));
    frame.render_widget(gauge, area);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.mode() {
        AppMode::Choosing { multiple: true } => {
            "[j/k] 移动  [Space/1-9] 勾选  [Enter] 提交  [q] 退出"
        }
        AppMode::Choosing { multiple: false } => "[j/k] 移动  [Enter/1-9] 作答  [q] 退出",
        AppMode::Reviewing => "[Enter/n] 下一题  [q] 退出",
        AppMode::Finished => "[r] 重新开始  [q] 退出",
    };

    let message = app.message.as_deref().unwrap_or("");
    let text = if message.is_empty() {
        help_text.to_string()
    } else {
        format!("{}  |  {}", help_text, message)
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{QuizDriver, TierConfig};
    use crate::models::{Explanation, Question, QuestionKind, QuizSet};
    use ratatui::{Terminal, backend::TestBackend};

    fn app(questions: Vec<Question>) -> App {
        App::new(QuizDriver::new(
            QuizSet {
                title: Some("Smoke".to_string()),
                questions,
            },
            TierConfig::default(),
        ))
    }

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn question() -> Question {
        Question::new(
            QuestionKind::Single,
            "Which hook holds state".to_string(),
            vec!["useState".into(), "useMemo".into()],
            [0].into(),
            Explanation {
                correct_text: "useState stores state".to_string(),
                wrong_text_by_index: [(1, "useMemo caches values".to_string())].into(),
            },
        )
        .unwrap()
    }

    #[test]
    fn test_renders_question() {
        let app = app(vec![question()]);
        let text = screen(&app);
        assert!(text.contains("Smoke"));
        assert!(text.contains("Which hook holds state"));
        assert!(text.contains("useState"));
    }

    #[test]
    fn test_renders_feedback() {
        let mut app = app(vec![question()]);
        app.driver.select(1).unwrap();
        let text = screen(&app);
        assert!(text.contains("useState stores state"));
        assert!(text.contains("useMemo caches values"));
    }

    #[test]
    fn test_renders_completion_for_empty_quiz() {
        let app = app(Vec::new());
        let text = screen(&app);
        assert!(text.contains("0%"));
        assert!(text.contains("[r]"));
    }
}
