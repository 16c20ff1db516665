//! App 状态定义 (Model)

use crate::engine::{QuizDriver, QuizState};
use crate::models::QuestionKind;

/// 应用状态
pub struct App {
    pub driver: QuizDriver,
    pub highlighted: usize,      // 当前高亮的选项
    pub message: Option<String>, // 状态栏提示
}

/// 界面模式，由引擎状态推导
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Choosing { multiple: bool },
    Reviewing,
    Finished,
}

impl App {
    /// 创建新的应用实例
    pub fn new(driver: QuizDriver) -> Self {
        Self {
            driver,
            highlighted: 0,
            message: None,
        }
    }

    pub fn mode(&self) -> AppMode {
        match self.driver.state() {
            QuizState::Presenting(_) => AppMode::Choosing {
                multiple: self
                    .driver
                    .current_question()
                    .is_some_and(|q| q.kind() == QuestionKind::Multiple),
            },
            QuizState::Answered(_) => AppMode::Reviewing,
            QuizState::Completed => AppMode::Finished,
        }
    }

    /// 当前题目的选项数
    pub fn option_count(&self) -> usize {
        self.driver
            .current_question()
            .map_or(0, |q| q.options().len())
    }
}
