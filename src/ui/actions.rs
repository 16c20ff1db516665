//! Action 枚举定义 (Intent)
//!
//! 用户交互转化为明确的语义化 Action

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    MoveHighlightUp,
    MoveHighlightDown,

    // 作答
    Pick(usize),   // 数字键直接选择
    PickHighlighted,
    Confirm,       // 多选题提交

    // 流程
    Advance,
    Restart,
}
