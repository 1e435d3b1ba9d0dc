//! 递归深度预算。
//!
//! # 设计背景（Why）
//! - 二进制格式中的容器类型会递归调用子元素的编解码，恶意或成环的负载可借此耗尽栈空间；
//! - 整个格式生态共享同一个“剩余深度”计数：每进入一层嵌套减一，归零即拒绝继续。
//!
//! # 契约说明（What）
//! - 叶子类型（如 [`crate::FixedString`]、变长字符串）在入口处消费一层预算，不再继续递归；
//! - [`crate::UnsignedInt`] 作为最底层原语不检查预算。

use crate::error::CodecError;

/// 默认最大递归深度，与线格式生态的约定保持一致。
pub const DEFAULT_MAX_DEPTH: u32 = 1024;

/// 剩余递归深度预算。
///
/// # 教案式说明
/// - **意图 (Why)**：以值类型传递预算，嵌套调用拿到的是“子预算”，返回后父级预算自然不变，
///   无需 RAII 守卫回退计数；
/// - **逻辑 (How)**：[`DepthBudget::descend`] 在剩余值为零时返回 [`CodecError::DepthExhausted`]，
///   否则返回减一后的子预算；
/// - **契约 (What)**：编解码函数必须在读写任何字节之前调用 `descend`，保证失败时流位置不变。
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DepthBudget(u32);

impl DepthBudget {
    /// 以指定剩余深度构造预算。
    pub const fn new(remaining: u32) -> Self {
        Self(remaining)
    }

    /// 当前剩余深度。
    pub const fn remaining(self) -> u32 {
        self.0
    }

    /// 预算是否已耗尽。
    pub const fn is_exhausted(self) -> bool {
        self.0 == 0
    }

    /// 消费一层预算，返回供嵌套调用使用的子预算。
    pub fn descend(self) -> Result<Self, CodecError> {
        match self.0.checked_sub(1) {
            Some(next) => Ok(Self(next)),
            None => {
                tracing::debug!("recursion depth budget exhausted before encode/decode");
                Err(CodecError::DepthExhausted)
            }
        }
    }
}

impl Default for DepthBudget {
    fn default() -> Self {
        Self(DEFAULT_MAX_DEPTH)
    }
}

impl From<u32> for DepthBudget {
    fn from(remaining: u32) -> Self {
        Self(remaining)
    }
}
