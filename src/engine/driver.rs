//! 答题状态机
//!
//! Presenting(i) --select/confirm--> Answered(i) --advance--> Presenting(i+1) | Completed

use std::collections::BTreeSet;

use tracing::debug;

use super::render::{CompletionView, FeedbackView, QuestionView, RenderRequest};
use super::session::{Session, SessionStats};
use super::tiers::TierConfig;
use crate::error::QuizError;
use crate::models::{Question, QuizSet};

/// 状态机当前状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    Presenting(usize), // 第 i 题待作答
    Answered(usize),   // 第 i 题已作答，展示反馈，选项锁定
    Completed,
}

/// 渲染端发来的输入事件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizEvent {
    OptionSelected(usize),
    ConfirmRequested,
    AdvanceRequested,
}

/// 驱动一次答题会话
#[derive(Debug, Clone)]
pub struct QuizDriver {
    title: Option<String>,
    session: Session,
    state: QuizState,
    pending: BTreeSet<usize>,
    tiers: TierConfig,
}

impl QuizDriver {
    pub fn new(quiz: QuizSet, tiers: TierConfig) -> Self {
        let session = Session::new(quiz.questions);
        Self {
            title: quiz.title,
            state: initial_state(&session),
            session,
            pending: BTreeSet::new(),
            tiers,
        }
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn pending(&self) -> &BTreeSet<usize> {
        &self.pending
    }

    pub fn current_question(&self) -> Option<&Question> {
        match self.state {
            QuizState::Presenting(i) | QuizState::Answered(i) => self.session.questions().get(i),
            QuizState::Completed => None,
        }
    }

    pub fn stats(&self) -> SessionStats {
        self.session.stats()
    }

    pub fn tier_message(&self) -> &str {
        self.tiers.message_for(self.stats().accuracy_percent)
    }

    /// 分发输入事件，被拒绝时状态不变
    pub fn handle(&mut self, event: QuizEvent) -> Result<QuizState, QuizError> {
        let result = match event {
            QuizEvent::OptionSelected(index) => self.select(index),
            QuizEvent::ConfirmRequested => self.confirm(),
            QuizEvent::AdvanceRequested => self.advance(),
        };
        match &result {
            Ok(state) => debug!(session = %self.session.id(), ?event, ?state, "event handled"),
            Err(err) => debug!(session = %self.session.id(), ?event, %err, "event rejected"),
        }
        result
    }

    /// 选择选项：多选题切换选中，单选/判断题直接确认
    pub fn select(&mut self, index: usize) -> Result<QuizState, QuizError> {
        let question = match self.state {
            QuizState::Presenting(i) => &self.session.questions()[i],
            QuizState::Answered(_) => return Err(QuizError::OptionsLocked),
            QuizState::Completed => return Err(QuizError::SessionCompleted),
        };
        let len = question.options().len();
        if index >= len {
            return Err(QuizError::OptionOutOfRange { index, len });
        }

        if question.kind().needs_confirmation() {
            if !self.pending.remove(&index) {
                self.pending.insert(index);
            }
            Ok(self.state)
        } else {
            self.pending = BTreeSet::from([index]);
            self.confirm()
        }
    }

    /// 确认当前选择并记录作答
    pub fn confirm(&mut self) -> Result<QuizState, QuizError> {
        let i = match self.state {
            QuizState::Presenting(i) => i,
            QuizState::Answered(_) => return Err(QuizError::OptionsLocked),
            QuizState::Completed => return Err(QuizError::SessionCompleted),
        };
        if self.pending.is_empty() {
            return Err(QuizError::EmptySelection);
        }

        self.session.record_answer(self.pending.clone())?;
        self.pending.clear();
        self.state = QuizState::Answered(i);
        Ok(self.state)
    }

    /// 进入下一题或结算；结算后为空操作
    pub fn advance(&mut self) -> Result<QuizState, QuizError> {
        match self.state {
            QuizState::Presenting(_) => Err(QuizError::PrematureAdvance),
            QuizState::Answered(i) => {
                self.session.advance()?;
                self.state = if self.session.is_completed() {
                    QuizState::Completed
                } else {
                    QuizState::Presenting(i + 1)
                };
                Ok(self.state)
            }
            QuizState::Completed => Ok(self.state),
        }
    }

    /// 用同一组题目重新开始
    pub fn restart(&mut self) {
        let questions = self.session.questions().to_vec();
        self.session = Session::new(questions);
        self.state = initial_state(&self.session);
        self.pending.clear();
    }

    pub fn render_request(&self) -> RenderRequest<'_> {
        let questions = self.session.questions();
        let total = questions.len();
        match self.state {
            QuizState::Presenting(i) => {
                if let Some(question) = questions.get(i) {
                    return RenderRequest::Question(QuestionView {
                        index: i,
                        number: i + 1,
                        total,
                        kind: question.kind(),
                        prompt: question.prompt(),
                        options: question.options(),
                        tags: question.tags(),
                        pending: &self.pending,
                        can_confirm: !self.pending.is_empty(),
                    });
                }
            }
            QuizState::Answered(i) => {
                if let (Some(question), Some(record)) =
                    (questions.get(i), self.session.answers().get(i))
                {
                    return RenderRequest::Feedback(FeedbackView::compose(question, record, total));
                }
            }
            QuizState::Completed => {}
        }

        RenderRequest::Completion(CompletionView {
            title: self.title(),
            stats: self.stats(),
            message: self.tier_message(),
        })
    }
}

fn initial_state(session: &Session) -> QuizState {
    if session.is_completed() {
        QuizState::Completed
    } else {
        QuizState::Presenting(0)
    }
}
