//! 业务逻辑处理 (Update/Dispatch)
//!
//! 把 Action 转为引擎事件，并根据结果更新提示信息

use tracing::info;

use super::actions::Action;
use super::state::App;
use crate::engine::{QuizDriver, QuizEvent, QuizState};
use crate::error::QuizError;

impl App {
    /// 核心逻辑分发，返回是否退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::MoveHighlightUp => self.move_up(),
            Action::MoveHighlightDown => self.move_down(),

            Action::Pick(index) => self.send(QuizEvent::OptionSelected(index)),
            Action::PickHighlighted => self.send(QuizEvent::OptionSelected(self.highlighted)),
            Action::Confirm => self.send(QuizEvent::ConfirmRequested),
            Action::Advance => self.send(QuizEvent::AdvanceRequested),

            Action::Restart => self.restart(),
        }
        false
    }

    // ============ 导航相关 ============

    /// 向上移动高亮
    pub fn move_up(&mut self) {
        if self.highlighted > 0 {
            self.highlighted -= 1;
        }
    }

    /// 向下移动高亮
    pub fn move_down(&mut self) {
        if self.highlighted + 1 < self.option_count() {
            self.highlighted += 1;
        }
    }

    // ============ 作答相关 ============

    /// 发送事件给引擎
    pub fn send(&mut self, event: QuizEvent) {
        let before = self.driver.state();
        match self.driver.handle(event) {
            Ok(after) => {
                if let QuizEvent::OptionSelected(index) = event {
                    self.highlighted = index;
                }
                self.message = transition_message(&self.driver, before, after);
                if matches!(after, QuizState::Presenting(_)) && before != after {
                    self.highlighted = 0;
                }
            }
            Err(err) => self.message = Some(rejection_message(&err)),
        }
    }

    /// 重新开始
    pub fn restart(&mut self) {
        self.driver.restart();
        self.highlighted = 0;
        self.message = Some("已重新开始".to_string());
        info!(session = %self.driver.session().id(), "quiz restarted");
    }
}

fn transition_message(
    driver: &QuizDriver,
    before: QuizState,
    after: QuizState,
) -> Option<String> {
    match (before, after) {
        (QuizState::Presenting(_), QuizState::Answered(_)) => {
            let correct = driver
                .session()
                .answers()
                .last()
                .is_some_and(|record| record.is_correct);
            Some(if correct { "✓ 回答正确" } else { "✗ 回答错误" }.to_string())
        }
        (_, QuizState::Completed) => Some("答题完成".to_string()),
        _ => None,
    }
}

/// 被拒绝事件的提示
fn rejection_message(err: &QuizError) -> String {
    match err {
        QuizError::EmptySelection => "请至少选择一个选项".to_string(),
        QuizError::PrematureAdvance => "请先作答再进入下一题".to_string(),
        QuizError::OptionsLocked | QuizError::AlreadyAnswered { .. } => {
            "本题已作答，按 Enter 继续".to_string()
        }
        QuizError::OptionOutOfRange { len, .. } => format!("只有 {} 个选项", len),
        QuizError::SessionCompleted => "答题已结束".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::TierConfig;
    use crate::models::{Explanation, Question, QuestionKind, QuizSet};

    fn app() -> App {
        let questions = vec![
            Question::new(
                QuestionKind::Multiple,
                "pick".to_string(),
                vec!["a".into(), "b".into(), "c".into()],
                [0, 2].into(),
                Explanation::default(),
            )
            .unwrap(),
            Question::new(
                QuestionKind::Judge,
                "judge".to_string(),
                vec!["对".into(), "错".into()],
                [0].into(),
                Explanation::default(),
            )
            .unwrap(),
        ];
        App::new(QuizDriver::new(
            QuizSet {
                title: None,
                questions,
            },
            TierConfig::default(),
        ))
    }

    #[test]
    fn test_highlight_stays_in_bounds() {
        let mut app = app();
        app.dispatch(Action::MoveHighlightUp);
        assert_eq!(app.highlighted, 0);
        for _ in 0..5 {
            app.dispatch(Action::MoveHighlightDown);
        }
        assert_eq!(app.highlighted, 2);
    }

    #[test]
    fn test_rejections_set_message() {
        let mut app = app();
        app.dispatch(Action::Confirm);
        assert_eq!(app.message.as_deref(), Some("请至少选择一个选项"));
        app.dispatch(Action::Advance);
        assert_eq!(app.message.as_deref(), Some("请先作答再进入下一题"));
        assert_eq!(app.driver.state(), QuizState::Presenting(0));
    }

    #[test]
    fn test_play_through() {
        let mut app = app();
        app.dispatch(Action::Pick(0));
        app.dispatch(Action::MoveHighlightDown);
        app.dispatch(Action::MoveHighlightDown);
        app.dispatch(Action::PickHighlighted);
        app.dispatch(Action::Confirm);
        assert_eq!(app.driver.state(), QuizState::Answered(0));
        assert_eq!(app.message.as_deref(), Some("✓ 回答正确"));

        app.dispatch(Action::Advance);
        assert_eq!(app.driver.state(), QuizState::Presenting(1));
        assert_eq!(app.highlighted, 0);

        app.dispatch(Action::Pick(1));
        assert_eq!(app.message.as_deref(), Some("✗ 回答错误"));
        app.dispatch(Action::Advance);
        assert_eq!(app.driver.state(), QuizState::Completed);
        assert_eq!(app.driver.stats().accuracy_percent, 50);

        app.dispatch(Action::Restart);
        assert_eq!(app.driver.state(), QuizState::Presenting(0));
        assert!(!app.dispatch(Action::Advance));
        assert!(app.dispatch(Action::Quit));
    }
}
