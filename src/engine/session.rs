use std::collections::BTreeSet;

use chrono::{DateTime, Duration, Local};
use tracing::{debug, info};
use uuid::Uuid;

use super::evaluator::evaluate;
use crate::error::QuizError;
use crate::models::{AnswerRecord, Question};

/// 会话统计
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    pub answered_count: usize,
    pub correct_count: usize,
    pub total_count: usize,
    pub accuracy_percent: u32,
    pub elapsed: Duration,
}

/// 一次答题会话
///
/// 只通过 `record_answer` 与 `advance` 变更；游标到达末尾后不再变化。
#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    questions: Vec<Question>,
    cursor: usize,
    answers: Vec<AnswerRecord>,
    correct_count: usize,
    started_at: DateTime<Local>,
    finished_at: Option<DateTime<Local>>,
}

impl Session {
    pub fn new(questions: Vec<Question>) -> Self {
        let now = Local::now();
        let session = Self {
            id: Uuid::new_v4(),
            finished_at: questions.is_empty().then_some(now),
            questions,
            cursor: 0,
            answers: Vec::new(),
            correct_count: 0,
            started_at: now,
        };
        info!(session = %session.id, total = session.questions.len(), "session started");
        session
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    pub fn is_completed(&self) -> bool {
        self.cursor == self.questions.len()
    }

    /// 当前题目，已结束时为 `None`
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.cursor)
    }

    /// 当前题目的作答记录（若已作答）
    pub fn current_answer(&self) -> Option<&AnswerRecord> {
        self.answers
            .last()
            .filter(|record| record.question_index == self.cursor)
    }

    /// 判定并记录当前题目的作答
    pub fn record_answer(&mut self, selected: BTreeSet<usize>) -> Result<&AnswerRecord, QuizError> {
        let Some(question) = self.questions.get(self.cursor) else {
            return Err(QuizError::SessionCompleted);
        };
        if self.current_answer().is_some() {
            return Err(QuizError::AlreadyAnswered { index: self.cursor });
        }
        if selected.is_empty() {
            return Err(QuizError::EmptySelection);
        }
        let len = question.options().len();
        if let Some(&index) = selected.iter().find(|&&i| i >= len) {
            return Err(QuizError::OptionOutOfRange { index, len });
        }

        let is_correct = evaluate(question, &selected);
        if is_correct {
            self.correct_count += 1;
        }
        debug!(
            session = %self.id,
            question = self.cursor,
            ?selected,
            is_correct,
            "answer recorded"
        );
        self.answers.push(AnswerRecord {
            question_index: self.cursor,
            selected,
            is_correct,
            answered_at: Local::now(),
        });

        Ok(&self.answers[self.answers.len() - 1])
    }

    /// 游标后移；未作答时拒绝，已到末尾时保持不变
    pub fn advance(&mut self) -> Result<(), QuizError> {
        if self.is_completed() {
            return Ok(());
        }
        if self.current_answer().is_none() {
            return Err(QuizError::PrematureAdvance);
        }

        self.cursor += 1;
        if self.is_completed() {
            self.finished_at = Some(Local::now());
            info!(
                session = %self.id,
                correct = self.correct_count,
                total = self.questions.len(),
                "session completed"
            );
        }
        Ok(())
    }

    pub fn stats(&self) -> SessionStats {
        let answered_count = self.answers.len();
        let accuracy_percent = if answered_count > 0 {
            (self.correct_count as f64 / answered_count as f64 * 100.0).round() as u32
        } else {
            0
        };
        let end = self.finished_at.unwrap_or_else(Local::now);

        SessionStats {
            answered_count,
            correct_count: self.correct_count,
            total_count: self.questions.len(),
            accuracy_percent,
            elapsed: (end - self.started_at).max(Duration::zero()),
        }
    }
}
