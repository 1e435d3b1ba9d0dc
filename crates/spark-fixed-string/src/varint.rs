//! 紧凑无符号整数（varint）。
//!
//! 线格式：每字节承载 7 个数据位，低位组在前，最高位为 1 表示后续仍有字节。
//! 数值 0 编码为单个 `0x00`，`u32::MAX` 编码为 5 字节。

use core::fmt;

use crate::error::{CodecError, StreamError};
use crate::stream::{ByteSink, ByteSource};

/// 单个 varint 的最大编码长度（`u32` 需要 5 个 7 位组）。
pub const MAX_ENCODED_LEN: usize = 5;

const PAYLOAD_MASK: u8 = 0x7f;
const CONTINUATION: u8 = 0x80;

/// 线格式中用作长度前缀的紧凑无符号整数。
///
/// # 教案式说明
/// - **意图 (Why)**：变长字符串、字节数组、容器元素数都使用同一种长度前缀，
///   定长字符串必须复用它才能与通用解码器互通；
/// - **契约 (What)**：解码最多读取 5 字节；第 5 字节仍带续位或数值超出 `u32` 时返回
///   [`CodecError::LengthPrefixOverflow`]；非最短编码（如 `0x80 0x00`）按数值接受。
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct UnsignedInt(pub u32);

impl UnsignedInt {
    /// 包装数值。
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// 内部数值。
    pub const fn value(self) -> u32 {
        self.0
    }

    /// 转换为本平台 `usize`，用于驱动后续的字节读取。
    pub fn to_usize(self) -> Result<usize, CodecError> {
        usize::try_from(self.0).map_err(|_| CodecError::LengthPrefixOverflow)
    }

    /// 编码后占用的字节数。
    pub const fn encoded_len(self) -> usize {
        let mut value = self.0;
        let mut len = 1;
        while value >= CONTINUATION as u32 {
            value >>= 7;
            len += 1;
        }
        len
    }

    /// 编码到栈上缓冲，返回缓冲与有效长度。
    pub fn encode(self) -> ([u8; MAX_ENCODED_LEN], usize) {
        let mut buf = [0u8; MAX_ENCODED_LEN];
        let mut value = self.0;
        let mut len = 0;
        loop {
            // 截取低 7 位；`as u8` 只会丢弃已被掩码清零的高位。
            let group = (value & u32::from(PAYLOAD_MASK)) as u8;
            value >>= 7;
            if value == 0 {
                buf[len] = group;
                len += 1;
                return (buf, len);
            }
            buf[len] = group | CONTINUATION;
            len += 1;
        }
    }

    /// 写入字节汇。
    pub fn write_to<S: ByteSink + ?Sized>(self, sink: &mut S) -> Result<(), StreamError> {
        let (buf, len) = self.encode();
        sink.write_bytes(&buf[..len])
    }

    /// 从字节源读取。
    pub fn read_from<S: ByteSource + ?Sized>(source: &mut S) -> Result<Self, CodecError> {
        let mut value: u64 = 0;
        for index in 0..MAX_ENCODED_LEN {
            let byte = source.read_byte()?;
            value |= u64::from(byte & PAYLOAD_MASK) << (7 * index);
            if byte & CONTINUATION == 0 {
                return u32::try_from(value)
                    .map(Self)
                    .map_err(|_| CodecError::LengthPrefixOverflow);
            }
        }
        Err(CodecError::LengthPrefixOverflow)
    }
}

impl From<u32> for UnsignedInt {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<UnsignedInt> for u32 {
    fn from(value: UnsignedInt) -> Self {
        value.0
    }
}

impl TryFrom<usize> for UnsignedInt {
    type Error = CodecError;

    fn try_from(len: usize) -> Result<Self, Self::Error> {
        u32::try_from(len)
            .map(Self)
            .map_err(|_| CodecError::LengthPrefixOverflow)
    }
}

impl fmt::Display for UnsignedInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
