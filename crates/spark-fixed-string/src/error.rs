//! # error 模块说明
//!
//! ## 角色定位（Why）
//! - 集中定义字节流、线格式编解码与标签值桥接三类失败，调用方可按层级精确匹配；
//! - 每个错误都映射到 [`codes`] 中的稳定错误码，便于日志、指标按码聚合。
//!
//! ## 设计要求（What）
//! - 截断不是错误：构造与解码遇到超长输入时静默丢弃多余字节，本模块不为其定义变体；
//! - 深度预算耗尽、底层流失败、标签值类型不符均为“单次调用致命”，不提供重试语义；
//! - 所有错误类型实现 `thiserror::Error`，在 `no_std` 下同样可用。

use thiserror::Error;

/// 稳定错误码命名空间，格式为 `<层级>.<原因>`。
pub mod codes {
    /// 递归深度预算耗尽。
    pub const CODEC_DEPTH_EXHAUSTED: &str = "codec.depth_exhausted";
    /// varint 长度前缀溢出 32 位，或长度无法映射到本平台的 `usize`。
    pub const CODEC_LENGTH_OVERFLOW: &str = "codec.length_overflow";
    /// 变长字符串负载不是合法 UTF-8。
    pub const CODEC_INVALID_UTF8: &str = "codec.invalid_utf8";
    /// 字节源提前结束。
    pub const STREAM_UNEXPECTED_END: &str = "stream.unexpected_end";
    /// 字节汇剩余容量不足。
    pub const STREAM_SINK_FULL: &str = "stream.sink_full";
    /// 底层 I/O 故障。
    pub const STREAM_IO: &str = "stream.io";
    /// 标签值节点不是字符串。
    pub const VARIANT_TYPE_MISMATCH: &str = "variant.type_mismatch";
}

/// 字节源 / 字节汇层面的失败。
///
/// # 教案式说明
/// - **意图 (Why)**：把“流给不出足够字节”与“流写不下”从编解码语义中剥离，编解码层只负责原样透传；
/// - **契约 (What)**：`requested` 为本次请求的字节数，`remaining` 为失败时流中剩余（或可写）字节数；
/// - **风险 (Trade-offs)**：`Io` 变体仅在 `std` 下存在，`no_std` 调用方无需处理。
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StreamError {
    /// 字节源在读满请求之前耗尽。
    #[error("byte source exhausted: requested {requested} bytes, {remaining} remaining")]
    UnexpectedEnd {
        /// 请求读取的字节数。
        requested: usize,
        /// 失败时仍可读取的字节数。
        remaining: usize,
    },

    /// 字节汇剩余容量不足以写入整段数据。
    #[error("byte sink full: requested {requested} bytes, {remaining} writable")]
    SinkFull {
        /// 请求写入的字节数。
        requested: usize,
        /// 失败时仍可写入的字节数。
        remaining: usize,
    },

    /// `std::io` 读写失败，原样透传。
    #[cfg(feature = "std")]
    #[error("i/o failure on byte stream")]
    Io(#[from] std::io::Error),
}

impl StreamError {
    /// 返回稳定错误码。
    pub fn code(&self) -> &'static str {
        match self {
            StreamError::UnexpectedEnd { .. } => codes::STREAM_UNEXPECTED_END,
            StreamError::SinkFull { .. } => codes::STREAM_SINK_FULL,
            #[cfg(feature = "std")]
            StreamError::Io(_) => codes::STREAM_IO,
        }
    }
}

/// 线格式编解码失败。
///
/// # 教案式说明
/// - **意图 (Why)**：区分“递归守卫触发”与“数据/流本身出错”，前者是防御恶意嵌套负载的信号；
/// - **契约 (What)**：
///   - `DepthExhausted`：进入编解码时剩余预算为零，调用尚未读写任何字节；
///   - `LengthPrefixOverflow`：varint 超过 5 字节或数值超出 `u32`，亦用于长度无法转换为 `usize`/`u32` 的情形；
///   - `InvalidUtf8`：仅由 `String` 解码产生，定长字符串从不校验字符集；
///   - `Stream`：底层字节流失败，原样包裹。
/// - **风险 (Trade-offs)**：解码失败后调用方不应假设目标值处于任何确定状态。
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CodecError {
    /// 递归深度预算耗尽。
    #[error("recursion depth budget exhausted")]
    DepthExhausted,

    /// 长度前缀无法表示为 32 位无符号整数。
    #[error("length prefix does not fit in an unsigned 32-bit integer")]
    LengthPrefixOverflow,

    /// 变长字符串负载不是合法 UTF-8。
    #[error("length-prefixed string payload is not valid UTF-8")]
    InvalidUtf8(#[source] core::str::Utf8Error),

    /// 底层字节流失败。
    #[error(transparent)]
    Stream(#[from] StreamError),
}

impl CodecError {
    /// 返回稳定错误码；`Stream` 变体沿用内部流错误的错误码。
    pub fn code(&self) -> &'static str {
        match self {
            CodecError::DepthExhausted => codes::CODEC_DEPTH_EXHAUSTED,
            CodecError::LengthPrefixOverflow => codes::CODEC_LENGTH_OVERFLOW,
            CodecError::InvalidUtf8(_) => codes::CODEC_INVALID_UTF8,
            CodecError::Stream(inner) => inner.code(),
        }
    }
}

/// 标签值桥接失败。
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum VariantError {
    /// 标签值节点不是字符串类型。
    #[error("expected a string variant, found {found}")]
    NotAString {
        /// 实际遇到的节点种类，例如 `"number"`、`"object"`。
        found: &'static str,
    },
}

impl VariantError {
    /// 返回稳定错误码。
    pub fn code(&self) -> &'static str {
        match self {
            VariantError::NotAString { .. } => codes::VARIANT_TYPE_MISMATCH,
        }
    }
}
