use std::collections::BTreeSet;

use crate::models::{Question, QuestionKind};

/// 判定作答是否正确
///
/// 多选题要求选中集合与正确集合完全一致；单选与判断题要求恰好选中唯一的正确项。
/// 空选择恒为错误，调用方应在此之前拦截。
pub fn evaluate(question: &Question, selected: &BTreeSet<usize>) -> bool {
    let correct = question.correct_indices();
    match question.kind() {
        QuestionKind::Multiple => !selected.is_empty() && selected == correct,
        QuestionKind::Single | QuestionKind::Judge => {
            selected.len() == 1 && selected.first() == correct.first()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Explanation;

    fn question(kind: QuestionKind, n: usize, correct: &[usize]) -> Question {
        Question::new(
            kind,
            "Q".to_string(),
            (0..n).map(|i| i.to_string()).collect(),
            correct.iter().copied().collect(),
            Explanation::default(),
        )
        .unwrap()
    }

    fn set(items: &[usize]) -> BTreeSet<usize> {
        items.iter().copied().collect()
    }

    #[test]
    fn test_multiple_is_set_equality() {
        let q = question(QuestionKind::Multiple, 4, &[1, 3]);
        assert!(evaluate(&q, &set(&[3, 1])));
        assert!(!evaluate(&q, &set(&[1, 2])));
        assert!(!evaluate(&q, &set(&[1])));
        assert!(!evaluate(&q, &set(&[0, 1, 3])));
        assert!(!evaluate(&q, &set(&[])));
    }

    #[test]
    fn test_single_choice() {
        let q = question(QuestionKind::Single, 4, &[2]);
        assert!(evaluate(&q, &set(&[2])));
        assert!(!evaluate(&q, &set(&[0])));
        assert!(!evaluate(&q, &set(&[])));
        assert!(!evaluate(&q, &set(&[2, 3])));
    }

    #[test]
    fn test_judge_behaves_like_single() {
        let q = question(QuestionKind::Judge, 2, &[1]);
        assert!(evaluate(&q, &set(&[1])));
        assert!(!evaluate(&q, &set(&[0])));
    }
}
