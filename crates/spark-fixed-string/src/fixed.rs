//! 定长内联字符串值。
//!
//! # 布局（What）
//! ```text
//! ┌──────────────────────────── storage: [u8; N] ────────────────────────────┐
//! │ 内容字节 …………………………………… │ 0x00 填充 …………………………………… │ 末字节 │
//! └──────────────────────────────────────────────────────────────────────────┘
//! ```
//! - 末字节非零：值“已满”，逻辑长度恰为 `N`；
//! - 末字节为零：逻辑长度为首个 `0x00` 的下标（`0..N-1`）。
//!
//! 没有独立的长度字段，也没有堆指针；复制值即复制全部 `N` 字节。

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::ops::Add;
use core::str::{FromStr, Utf8Error};

/// 16 字节容量（默认宽度，等同两个 `u64` 拼接的存储）。
pub type FixedString16 = FixedString<16>;
/// 32 字节容量。
pub type FixedString32 = FixedString<32>;
/// 64 字节容量。
pub type FixedString64 = FixedString<64>;

/// 容量为 `N` 字节、无堆分配的内联字符串。
///
/// # 设计动机（Why）
/// - 让记录格式把短字符串内联存放，偏移固定、无需分配；
/// - 线格式与普通变长字符串一致（见 [`crate::raw`]），字段类型可在两者之间切换而无需格式升级；
/// - 原始存储可直接用作排序键。
///
/// # 行为概览（How）
/// - 构造/赋值：先把整个缓冲清零，再复制至多 `N` 字节，超出部分静默丢弃；
/// - 长度：由 [`FixedString::size`] 按哨兵字节规则推导；
/// - 比较：`Eq`/`Ord` 直接派生自 `[u8; N]`，即原始缓冲的逐字节字典序。
///
/// # 契约说明（What）
/// - 排序按**原始存储**而非逻辑长度：`"ab"` 的存储为 `ab\0\0…`，因此 `"ab" < "ab\x01"`，
///   与 `"ab" < "abc"` 同理；
/// - 末字节非零时整个缓冲都是内容，内部的 `0x00` 同样计入长度；末字节为零时，首个 `0x00`
///   之后的字节（来自含内部 `0x00` 的输入或 [`FixedString::from_storage`]）不计入长度却参与比较，
///   此时两个逻辑内容相同的值也可能不相等；
/// - 长度恰为 `N` 且末字节为 `0x00` 的输入会被推导为更短的长度，这是编码固有的歧义，
///   为保持线格式兼容而保留；
/// - 字节不做字符集校验。
///
/// # 风险提示（Trade-offs）
/// - 不提供原地追加/编辑 API：修改只能整体赋值；
/// - 拼接运算产出变长 `Vec<u8>`，不会得到新的定长值。
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct FixedString<const N: usize = 16> {
    storage: [u8; N],
}

impl<const N: usize> FixedString<N> {
    /// 容量（字节）。
    pub const CAPACITY: usize = N;

    // 容量必须非零，且能被 32 位长度前缀表示。
    const VALID_CAPACITY: () = assert!(
        N > 0 && (N as u64) <= u32::MAX as u64,
        "FixedString capacity must be within 1..=u32::MAX bytes"
    );

    /// 空字符串：全部 `N` 字节为零。
    pub const fn new() -> Self {
        let () = Self::VALID_CAPACITY;
        Self { storage: [0u8; N] }
    }

    /// 由原始存储直接构造，不做任何规范化。
    ///
    /// 长度仍按哨兵规则推导：末字节非零时为 `N`，否则为首个 `0x00` 的下标。
    /// 后一种情况下首个 `0x00` 之后的字节原样保留，参与比较但不计入逻辑长度。
    pub const fn from_storage(storage: [u8; N]) -> Self {
        let () = Self::VALID_CAPACITY;
        Self { storage }
    }

    /// 由字节序列构造；超过 `N` 的部分静默截断。
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut value = Self::new();
        value.assign(bytes);
        value
    }

    /// 整体赋值。
    ///
    /// # 教案式说明
    /// - **Why**：若只覆盖前 `L` 字节，旧值残留的尾部会破坏哨兵规则（例如旧值“已满”，
    ///   新值更短却仍被推导为长度 `N`）；
    /// - **How**：先整体清零，再复制 `min(L, N)` 字节；
    /// - **What**：赋值后 `size() == min(L, N)`，除非输入自身含有 `0x00`。
    pub fn assign(&mut self, bytes: &[u8]) {
        self.storage = [0u8; N];
        let copied = bytes.len().min(N);
        self.storage[..copied].copy_from_slice(&bytes[..copied]);
        if bytes.len() > N {
            tracing::trace!(
                input_len = bytes.len(),
                capacity = N,
                "fixed string input truncated to capacity"
            );
        }
    }

    /// 按哨兵字节规则推导的逻辑长度。
    pub fn size(&self) -> usize {
        match self.storage.last() {
            Some(&last) if last != 0 => N,
            _ => self
                .storage
                .iter()
                .position(|&byte| byte == 0)
                .unwrap_or(N),
        }
    }

    /// [`FixedString::size`] 的别名。
    pub fn length(&self) -> usize {
        self.size()
    }

    /// [`FixedString::size`] 的别名，符合 Rust 集合命名习惯。
    pub fn len(&self) -> usize {
        self.size()
    }

    /// 逻辑长度是否为零，与 `size() == 0` 等价。
    ///
    /// 首字节为 `0x00` 但末字节非零的值是“已满”的，不为空。
    pub fn is_empty(&self) -> bool {
        !self.is_full() && self.storage.first().is_none_or(|&first| first == 0)
    }

    /// 末字节（哨兵）是否非零，即值是否占满容量。
    pub fn is_full(&self) -> bool {
        self.storage.last().is_some_and(|&last| last != 0)
    }

    /// 逻辑内容：存储的前 `size()` 字节。
    pub fn as_bytes(&self) -> &[u8] {
        &self.storage[..self.size()]
    }

    /// 完整的原始存储。
    pub const fn storage(&self) -> &[u8; N] {
        &self.storage
    }

    /// 取出原始存储。
    pub const fn into_storage(self) -> [u8; N] {
        self.storage
    }

    /// 逻辑内容的 UTF-8 视图。
    pub fn as_str(&self) -> Result<&str, Utf8Error> {
        core::str::from_utf8(self.as_bytes())
    }

    /// 逻辑内容的有损 UTF-8 视图，非法序列替换为 `U+FFFD`。
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.as_bytes())
    }

    /// 逻辑内容复制为变长字节序列。
    pub fn to_vec(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    /// `self ++ tail`，结果为变长字节序列。
    pub fn concat(&self, tail: &[u8]) -> Vec<u8> {
        let head = self.as_bytes();
        let mut joined = Vec::with_capacity(head.len() + tail.len());
        joined.extend_from_slice(head);
        joined.extend_from_slice(tail);
        joined
    }

    /// `head ++ self`，结果为变长字节序列。
    pub fn prepend(&self, head: &[u8]) -> Vec<u8> {
        let tail = self.as_bytes();
        let mut joined = Vec::with_capacity(head.len() + tail.len());
        joined.extend_from_slice(head);
        joined.extend_from_slice(tail);
        joined
    }
}

impl<const N: usize> Default for FixedString<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> From<&[u8]> for FixedString<N> {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl<const N: usize> From<&str> for FixedString<N> {
    fn from(text: &str) -> Self {
        Self::from_bytes(text.as_bytes())
    }
}

impl<const N: usize> From<&String> for FixedString<N> {
    fn from(text: &String) -> Self {
        Self::from_bytes(text.as_bytes())
    }
}

impl<const N: usize> From<String> for FixedString<N> {
    fn from(text: String) -> Self {
        Self::from_bytes(text.as_bytes())
    }
}

impl<const N: usize> From<Vec<u8>> for FixedString<N> {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_bytes(&bytes)
    }
}

impl<const N: usize> From<[u8; N]> for FixedString<N> {
    fn from(storage: [u8; N]) -> Self {
        Self::from_storage(storage)
    }
}

impl<const N: usize> From<FixedString<N>> for Vec<u8> {
    fn from(value: FixedString<N>) -> Self {
        value.to_vec()
    }
}

impl<const N: usize> FromStr for FixedString<N> {
    type Err = core::convert::Infallible;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(text))
    }
}

impl<const N: usize> AsRef<[u8]> for FixedString<N> {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<const N: usize> Add<&[u8]> for FixedString<N> {
    type Output = Vec<u8>;

    fn add(self, tail: &[u8]) -> Vec<u8> {
        self.concat(tail)
    }
}

impl<const N: usize> Add<FixedString<N>> for &[u8] {
    type Output = Vec<u8>;

    fn add(self, tail: FixedString<N>) -> Vec<u8> {
        tail.prepend(self)
    }
}

impl<const N: usize> fmt::Debug for FixedString<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.as_bytes();
        let printable = bytes
            .iter()
            .all(|&byte| byte.is_ascii_graphic() || byte == b' ');
        match core::str::from_utf8(bytes) {
            Ok(text) if printable => write!(f, "FixedString<{N}>({text:?})"),
            _ => write!(f, "FixedString<{N}>(0x{})", hex::encode(bytes)),
        }
    }
}

impl<const N: usize> fmt::Display for FixedString<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in self.as_bytes().utf8_chunks() {
            f.write_str(chunk.valid())?;
            if !chunk.invalid().is_empty() {
                f.write_str("\u{FFFD}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::ToString;

    #[test]
    fn default_is_empty() {
        let value = FixedString16::default();
        assert_eq!(value.size(), 0);
        assert!(value.is_empty());
        assert!(!value.is_full());
        assert_eq!(value.storage(), &[0u8; 16]);
    }

    #[test]
    fn short_input_is_zero_padded() {
        let value = FixedString16::from("hello");
        assert_eq!(value.size(), 5);
        assert_eq!(value.as_bytes(), b"hello");
        assert!(value.storage()[5..].iter().all(|&byte| byte == 0));
    }

    #[test]
    fn long_input_is_truncated() {
        let value = FixedString16::from("abcdefghijklmnopqrst");
        assert_eq!(value.size(), 16);
        assert!(value.is_full());
        assert_eq!(value.as_bytes(), b"abcdefghijklmnop");
    }

    #[test]
    fn exact_capacity_uses_sentinel() {
        let value = FixedString::<4>::from("abcd");
        assert_eq!(value.size(), 4);
        assert_eq!(value.length(), 4);
    }

    #[test]
    fn trailing_zero_at_capacity_is_misreported() {
        // 固有歧义：末字节为 0x00 时无法区分“已满”与“以 0 结尾”。
        let value = FixedString::<4>::from_bytes(b"ab\0\0");
        assert_eq!(value.size(), 2);
        let value = FixedString::<4>::from_bytes(b"abc\0");
        assert_eq!(value.size(), 3);
    }

    #[test]
    fn interior_zero_cuts_length() {
        let value = FixedString::<8>::from_bytes(b"ab\0cd");
        assert_eq!(value.size(), 2);
        assert_eq!(value.storage()[3..5], *b"cd");
    }

    #[test]
    fn assign_clears_previous_tail() {
        let mut value = FixedString::<8>::from("abcdefgh");
        assert!(value.is_full());
        value.assign(b"xy");
        assert_eq!(value.size(), 2);
        assert_eq!(value.storage(), b"xy\0\0\0\0\0\0");
    }

    #[test]
    fn ordering_follows_raw_storage() {
        let ab = FixedString::<4>::from("ab");
        let abc = FixedString::<4>::from("abc");
        let b = FixedString::<4>::from("b");
        assert!(ab < abc);
        assert!(abc < b);
        assert!(ab <= ab);
        assert!(b > ab);
        assert_ne!(ab, abc);

        // 末字节为零：逻辑内容相同、存储尾部不同的两个值不相等。
        let dirty = FixedString::<5>::from_storage(*b"ab\0z\0");
        let clean = FixedString::<5>::from("ab");
        assert_eq!(dirty.size(), 2);
        assert_eq!(dirty.as_bytes(), clean.as_bytes());
        assert_ne!(dirty, clean);
        assert!(clean < dirty);

        let shifted = FixedString::<4>::from_storage(*b"a\0b\0");
        assert_eq!(shifted.as_bytes(), b"a");
        assert!(shifted < ab);
    }

    #[test]
    fn set_sentinel_keeps_interior_zeros() {
        let full = FixedString::<4>::from_storage(*b"ab\0z");
        assert!(full.is_full());
        assert_eq!(full.size(), 4);
        assert_eq!(full.as_bytes(), b"ab\0z");
    }

    #[test]
    fn leading_zero_with_sentinel_is_not_empty() {
        let value = FixedString::<4>::from_bytes(b"\0\0\0x");
        assert_eq!(value.len(), 4);
        assert!(!value.is_empty());
        assert_eq!(value.as_bytes(), b"\0\0\0x");

        let leading_zero = FixedString::<4>::from_bytes(b"\0ab");
        assert_eq!(leading_zero.len(), 0);
        assert!(leading_zero.is_empty());
    }

    #[test]
    fn concatenation_materializes_bytes() {
        let value = FixedString::<8>::from("mid");
        assert_eq!(value + &b"-tail"[..], b"mid-tail");
        assert_eq!(&b"head-"[..] + value, b"head-mid");
        assert_eq!(value.concat(b""), b"mid");
    }

    #[test]
    fn debug_and_display() {
        let text = FixedString::<8>::from("hi there");
        assert_eq!(format!("{text:?}"), "FixedString<8>(\"hi there\")");
        assert_eq!(text.to_string(), "hi there");

        let binary = FixedString::<4>::from_bytes(&[0xff, 0x01]);
        assert_eq!(format!("{binary:?}"), "FixedString<4>(0xff01)");
        assert_eq!(binary.to_string(), "\u{FFFD}\u{1}");
    }

    #[test]
    fn string_views() {
        let value: FixedString16 = "plain".parse().expect("FromStr 不会失败");
        assert_eq!(value.as_str().expect("ASCII"), "plain");
        assert!(FixedString16::from_bytes(&[0xc3]).as_str().is_err());
        assert_eq!(Vec::from(value), b"plain");
    }
}
