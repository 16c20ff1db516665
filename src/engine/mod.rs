//! 答题引擎
//!
//! 三层结构，自下而上：
//! - Session (session.rs): 题目序列、游标、作答记录与统计
//! - Evaluator (evaluator.rs): 按题型判定对错，无状态
//! - Driver (driver.rs): 状态机，推进游标并产出渲染请求 (render.rs)

pub mod driver;
pub mod evaluator;
pub mod render;
pub mod session;
pub mod tiers;

pub use driver::{QuizDriver, QuizEvent, QuizState};
pub use evaluator::evaluate;
pub use render::{CompletionView, FeedbackView, OptionFeedback, OptionMark, QuestionView, RenderRequest};
pub use session::{Session, SessionStats};
pub use tiers::{Tier, TierConfig};
