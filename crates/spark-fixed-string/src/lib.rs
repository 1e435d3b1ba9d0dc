#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

//! `spark-fixed-string` 提供占用恒定字节数的内联字符串值，以及与变长字符串逐字节兼容的线格式编解码。
//!
//! # 教案背景（Why）
//! - 记录格式希望把短字符串直接内联在结构体中：无堆分配、偏移固定、对缓存友好；
//! - 同一字段在线上仍需与“普通变长字符串”保持字节兼容，使今天声明为定长的字段明天可被通用解码器读取，
//!   反之亦然，无需升级格式版本；
//! - 内联字节可直接作为排序键使用，集合按值排序等价于按原始存储字节排序，适合索引/有序存储。
//!
//! # 使用概览（How）
//! - [`FixedString`] 以常量泛型 `N` 表示容量，唯一状态是 `[u8; N]`，长度由哨兵字节规则推导；
//! - [`raw`] 模块提供 [`Pack`]/[`Unpack`] 契约，线格式为 `<varint 长度><原始字节>`；
//! - [`stream`] 模块定义 [`ByteSource`]/[`ByteSink`]，并为 `bytes::Buf`/`bytes::BufMut` 与 `std::io` 提供适配；
//! - [`depth`] 模块的 [`DepthBudget`] 与整个二进制格式生态共享递归深度预算；
//! - 启用 `variant` Feature 后可与 `serde_json::Value` 互转，充当标签值桥接层。
//!
//! # 合约说明（What）
//! - 构造永不失败：超长输入静默截断到 `N` 字节，所有构造路径都会先把缓冲整体清零；
//! - 比较运算基于原始 `N` 字节缓冲的字典序，而非推导出的逻辑长度；
//! - 解码遇到声明长度超过容量的负载时，保留前 `N` 字节并以固定大小的临时缓冲丢弃剩余字节，
//!   保证流游标落在下一个字段起点。
//!
//! # 风险提示（Trade-offs）
//! - 长度恰为 `N` 且最后一个内容字节为 `0x00` 的字符串会被推导为更短的长度，这是编码本身的固有歧义；
//! - 字节被视为不透明八位组，不做任何字符集校验。

extern crate alloc;

pub mod depth;
pub mod error;
pub mod fixed;
pub mod raw;
mod serialize;
pub mod stream;
#[cfg(feature = "variant")]
pub mod variant;
pub mod varint;

pub use crate::depth::{DEFAULT_MAX_DEPTH, DepthBudget};
pub use crate::error::{CodecError, StreamError, VariantError, codes};
pub use crate::fixed::{FixedString, FixedString16, FixedString32, FixedString64};
pub use crate::raw::{DISCARD_CHUNK, Pack, Unpack, from_slice, to_bytes, to_vec};
pub use crate::stream::{ByteSink, ByteSource, SizeCounter};
#[cfg(feature = "std")]
pub use crate::stream::{IoSink, IoSource};
pub use crate::varint::UnsignedInt;

/// 常用类型的便捷导入集合。
pub mod prelude {
    pub use crate::depth::DepthBudget;
    pub use crate::fixed::FixedString;
    pub use crate::raw::{Pack, Unpack};
    pub use crate::stream::{ByteSink, ByteSource};
}
