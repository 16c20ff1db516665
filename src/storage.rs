use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::LoadError;
use crate::models::{QuizFile, QuizSet};

/// 从TOML文件加载题库
pub fn load_quiz(path: &Path) -> Result<QuizSet, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let quiz = parse_quiz(&content, path)?;

    info!(
        path = %path.display(),
        title = quiz.title.as_deref().unwrap_or(""),
        questions = quiz.questions.len(),
        "quiz loaded"
    );
    Ok(quiz)
}

/// 解析题库文本，`origin` 仅用于错误信息
pub fn parse_quiz(content: &str, origin: &Path) -> Result<QuizSet, LoadError> {
    let data: QuizFile = toml::from_str(content).map_err(|source| LoadError::Parse {
        path: origin.to_path_buf(),
        source,
    })?;

    QuizSet::from_data(data)
}
