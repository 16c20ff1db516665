//! 错误类型
//!
//! 题目数据错误、答题流程错误、加载与配置错误

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// 题目数据不合法（调用方的数据契约错误）
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question has no options")]
    NoOptions,

    #[error("correct index {index} is out of range for {len} options")]
    CorrectIndexOutOfRange { index: usize, len: usize },

    #[error("{kind} question must have exactly one correct option, found {found}")]
    NotExactlyOneCorrect { kind: &'static str, found: usize },

    #[error("correct index {index} is listed more than once")]
    DuplicateCorrectIndex { index: usize },

    #[error("multiple question must have at least one correct option")]
    NoCorrectOption,

    #[error("judge question must have exactly two options, found {found}")]
    JudgeNeedsTwoOptions { found: usize },

    #[error("explanation key {key:?} is not a valid option index")]
    InvalidExplanationKey { key: String },
}

/// 答题流程中的前置条件错误，均可恢复
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("no option selected")]
    EmptySelection,

    #[error("current question has not been answered yet")]
    PrematureAdvance,

    #[error("question {index} already has a recorded answer")]
    AlreadyAnswered { index: usize },

    #[error("options are locked after answering")]
    OptionsLocked,

    #[error("option {index} is out of range for {len} options")]
    OptionOutOfRange { index: usize, len: usize },

    #[error("the session is already completed")]
    SessionCompleted,
}

/// 题库文件加载错误
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("question #{number} is malformed: {source}")]
    Question {
        number: usize,
        #[source]
        source: QuestionError,
    },
}

/// 配置文件错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// 程序顶层错误
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to initialise logging: {0}")]
    Logging(String),

    #[error("cannot locate the user {0} directory")]
    MissingDir(&'static str),
}
