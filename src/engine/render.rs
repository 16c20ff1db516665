//! 渲染请求
//!
//! 引擎只提供结构化数据，具体外观由渲染端决定。文本原样透传，不做转义。

use std::collections::BTreeSet;

use super::session::SessionStats;
use crate::models::{AnswerRecord, Question, QuestionKind};

/// 选项在反馈中的标记
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMark {
    Correct,   // 正确答案
    Incorrect, // 选中但错误
    Unmarked,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionFeedback<'a> {
    pub label: &'a str,
    pub selected: bool,
    pub mark: OptionMark,
}

/// 呈现第 i 题
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView<'a> {
    pub index: usize,
    pub number: usize,
    pub total: usize,
    pub kind: QuestionKind,
    pub prompt: &'a str,
    pub options: &'a [String],
    pub tags: &'a [String],
    pub pending: &'a BTreeSet<usize>,
    pub can_confirm: bool,
}

/// 第 i 题的作答反馈
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackView<'a> {
    pub index: usize,
    pub number: usize,
    pub total: usize,
    pub kind: QuestionKind,
    pub prompt: &'a str,
    pub tags: &'a [String],
    pub is_correct: bool,
    pub options: Vec<OptionFeedback<'a>>,
    pub correct_text: &'a str,
    pub wrong_notes: Vec<(usize, &'a str)>,
    pub is_last: bool,
}

impl<'a> FeedbackView<'a> {
    pub(crate) fn compose(question: &'a Question, record: &AnswerRecord, total: usize) -> Self {
        let correct = question.correct_indices();
        let options = question
            .options()
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let selected = record.selected.contains(&i);
                let mark = if correct.contains(&i) {
                    OptionMark::Correct
                } else if selected {
                    OptionMark::Incorrect
                } else {
                    OptionMark::Unmarked
                };
                OptionFeedback {
                    label: label.as_str(),
                    selected,
                    mark,
                }
            })
            .collect();

        let explanation = question.explanation();
        let wrong_notes = record
            .selected
            .iter()
            .filter(|&&i| !correct.contains(&i))
            .filter_map(|i| {
                explanation
                    .wrong_text_by_index
                    .get(i)
                    .map(|text| (*i, text.as_str()))
            })
            .collect();

        Self {
            index: record.question_index,
            number: record.question_index + 1,
            total,
            kind: question.kind(),
            prompt: question.prompt(),
            tags: question.tags(),
            is_correct: record.is_correct,
            options,
            correct_text: explanation.correct_text.as_str(),
            wrong_notes,
            is_last: record.question_index + 1 == total,
        }
    }
}

/// 结算
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionView<'a> {
    pub title: Option<&'a str>,
    pub stats: SessionStats,
    pub message: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderRequest<'a> {
    Question(QuestionView<'a>),
    Feedback(FeedbackView<'a>),
    Completion(CompletionView<'a>),
}
