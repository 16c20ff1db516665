use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::error::{LoadError, QuestionError};

/// 题型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    #[default]
    Single, // 单选
    Multiple, // 多选
    Judge,    // 判断（两个选项的单选）
}

impl QuestionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            QuestionKind::Single => "single",
            QuestionKind::Multiple => "multiple",
            QuestionKind::Judge => "judge",
        }
    }

    /// 选中后是否需要单独确认
    pub fn needs_confirmation(self) -> bool {
        matches!(self, QuestionKind::Multiple)
    }
}

/// 答题后的解析
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Explanation {
    pub correct_text: String,
    pub wrong_text_by_index: BTreeMap<usize, String>,
}

/// 一道题目，构造时校验，之后不可变
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    kind: QuestionKind,
    prompt: String,
    options: Vec<String>,
    tags: Vec<String>,
    correct: BTreeSet<usize>,
    explanation: Explanation,
}

impl Question {
    /// 创建题目
    ///
    /// # Errors
    ///
    /// 正确答案越界、单选/判断题正确答案不唯一、判断题选项数不为 2 时返回 `QuestionError`。
    pub fn new(
        kind: QuestionKind,
        prompt: String,
        options: Vec<String>,
        correct: BTreeSet<usize>,
        explanation: Explanation,
    ) -> Result<Self, QuestionError> {
        if options.is_empty() {
            return Err(QuestionError::NoOptions);
        }
        if let Some(&index) = correct.iter().find(|&&i| i >= options.len()) {
            return Err(QuestionError::CorrectIndexOutOfRange {
                index,
                len: options.len(),
            });
        }
        match kind {
            QuestionKind::Single | QuestionKind::Judge if correct.len() != 1 => {
                return Err(QuestionError::NotExactlyOneCorrect {
                    kind: kind.as_str(),
                    found: correct.len(),
                });
            }
            QuestionKind::Multiple if correct.is_empty() => {
                return Err(QuestionError::NoCorrectOption);
            }
            _ => {}
        }
        if kind == QuestionKind::Judge && options.len() != 2 {
            return Err(QuestionError::JudgeNeedsTwoOptions {
                found: options.len(),
            });
        }
        if let Some(&index) = explanation
            .wrong_text_by_index
            .keys()
            .find(|&&i| i >= options.len())
        {
            return Err(QuestionError::InvalidExplanationKey {
                key: index.to_string(),
            });
        }

        Ok(Self {
            kind,
            prompt,
            options,
            tags: Vec::new(),
            correct,
            explanation,
        })
    }

    /// 附加分类标签（去重，保留顺序）
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for tag in tags {
            let tag = tag.into();
            if !self.tags.contains(&tag) {
                self.tags.push(tag);
            }
        }
        self
    }

    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn correct_indices(&self) -> &BTreeSet<usize> {
        &self.correct
    }

    pub fn explanation(&self) -> &Explanation {
        &self.explanation
    }
}

/// 已确认的作答记录，创建后不可变
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub question_index: usize,
    pub selected: BTreeSet<usize>,
    pub is_correct: bool,
    pub answered_at: DateTime<Local>,
}

/// TOML 中的解析结构
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExplanationData {
    #[serde(default)]
    pub correct: String,
    #[serde(default)]
    pub wrong: BTreeMap<String, String>, // 选项下标（字符串形式） -> 解析
}

/// TOML 中的题目
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionData {
    #[serde(rename = "type", default)]
    pub kind: QuestionKind,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct: Vec<usize>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub explanation: ExplanationData,
}

impl TryFrom<QuestionData> for Question {
    type Error = QuestionError;

    fn try_from(data: QuestionData) -> Result<Self, Self::Error> {
        let mut wrong_text_by_index = BTreeMap::new();
        for (key, text) in data.explanation.wrong {
            let index = key
                .trim()
                .parse::<usize>()
                .map_err(|_| QuestionError::InvalidExplanationKey { key: key.clone() })?;
            wrong_text_by_index.insert(index, text);
        }
        let explanation = Explanation {
            correct_text: data.explanation.correct,
            wrong_text_by_index,
        };

        let mut correct = BTreeSet::new();
        for index in data.correct {
            if !correct.insert(index) {
                return Err(QuestionError::DuplicateCorrectIndex { index });
            }
        }

        let question = Question::new(data.kind, data.prompt, data.options, correct, explanation)?;
        Ok(question.with_tags(data.tags))
    }
}

/// TOML 文件结构
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuizFile {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub questions: Vec<QuestionData>,
}

/// 校验后的题库
#[derive(Debug, Clone, Default)]
pub struct QuizSet {
    pub title: Option<String>,
    pub questions: Vec<Question>,
}

impl QuizSet {
    /// 逐题校验，报告第一个不合法题目的序号（从 1 开始）
    pub fn from_data(data: QuizFile) -> Result<Self, LoadError> {
        let questions = data
            .questions
            .into_iter()
            .enumerate()
            .map(|(i, q)| {
                Question::try_from(q).map_err(|source| LoadError::Question {
                    number: i + 1,
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            title: data.title,
            questions,
        })
    }
}
