//! 终端答题器
//!
//! - `engine`: 答题引擎（会话、判题、状态机）
//! - `models`: 题目与作答记录
//! - `storage` / `config` / `logging`: 题库加载、配置与日志
//! - `ui`: 基于 ratatui 的渲染端

pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod models;
pub mod storage;
pub mod ui;

pub use config::Config;
pub use engine::{QuizDriver, QuizEvent, QuizState, RenderRequest};
pub use error::{AppError, LoadError, QuestionError, QuizError};
pub use models::{AnswerRecord, Explanation, Question, QuestionKind, QuizSet};
