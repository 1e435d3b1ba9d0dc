//! 长度前缀二进制线格式。
//!
//! # 设计背景（Why）
//! - 线格式中的变长字符串统一编码为 `<varint 长度><原始字节>`；
//! - [`FixedString`] 使用**完全相同**的形状，因此通用字符串解码器可以读取定长字符串写出的数据，
//!   定长字符串也能读取任意生产者（不同容量的定长字符串、普通变长字符串编码器）写出的数据。
//!
//! # 逻辑解析（How）
//! - [`Pack`]/[`Unpack`] 描述一个类型如何写入 [`ByteSink`]、如何从 [`ByteSource`] 读出；
//! - 每次调用都携带 [`DepthBudget`]，叶子类型在读写任何字节前消费一层；
//! - 定长字符串解码遇到声明长度 `L > N` 时，读入前 `N` 字节，其余 `L - N` 字节以
//!   [`DISCARD_CHUNK`] 大小的栈上临时缓冲分批读出并丢弃，额外内存恒为 O(1)。
//!
//! # 契约说明（What）
//! - 编码从不因内容失败，只会因深度预算耗尽或字节汇失败而失败；
//! - 解码只有在完全成功时才返回新值，失败时不存在“写了一半”的目标值；
//! - 被丢弃的字节不可恢复：这是有意为之的有损解码，用以保持流分帧正确并限制内存占用。

use alloc::string::String;
use alloc::vec::Vec;

use bytes::{Bytes, BytesMut};

use crate::depth::DepthBudget;
use crate::error::CodecError;
use crate::fixed::FixedString;
use crate::stream::{ByteSink, ByteSource, SizeCounter};
use crate::varint::UnsignedInt;

/// 丢弃超长负载及分块读取变长负载时使用的临时缓冲大小。
pub const DISCARD_CHUNK: usize = 1024;

/// 可写入线格式的类型。
pub trait Pack {
    /// 写入字节汇。
    fn pack<S: ByteSink + ?Sized>(&self, sink: &mut S, depth: DepthBudget)
    -> Result<(), CodecError>;

    /// 以默认深度预算计算编码后的字节数。
    fn packed_size(&self) -> Result<usize, CodecError> {
        let mut counter = SizeCounter::new();
        self.pack(&mut counter, DepthBudget::default())?;
        Ok(counter.written())
    }
}

/// 可从线格式读出的类型。
pub trait Unpack: Sized {
    /// 从字节源读出一个完整的值。
    fn unpack<S: ByteSource + ?Sized>(source: &mut S, depth: DepthBudget)
    -> Result<Self, CodecError>;
}

/// 以默认深度预算编码为 `Vec<u8>`。
pub fn to_vec<T: Pack + ?Sized>(value: &T) -> Result<Vec<u8>, CodecError> {
    let mut out = Vec::new();
    value.pack(&mut out, DepthBudget::default())?;
    Ok(out)
}

/// 以默认深度预算编码为不可变的 [`Bytes`]。
pub fn to_bytes<T: Pack + ?Sized>(value: &T) -> Result<Bytes, CodecError> {
    let mut out = BytesMut::new();
    value.pack(&mut out, DepthBudget::default())?;
    Ok(out.freeze())
}

/// 以默认深度预算从字节切片解码；尾部多余字节被忽略。
pub fn from_slice<T: Unpack>(mut input: &[u8]) -> Result<T, CodecError> {
    T::unpack(&mut input, DepthBudget::default())
}

impl Pack for UnsignedInt {
    fn pack<S: ByteSink + ?Sized>(
        &self,
        sink: &mut S,
        _depth: DepthBudget,
    ) -> Result<(), CodecError> {
        self.write_to(sink)?;
        Ok(())
    }
}

impl Unpack for UnsignedInt {
    fn unpack<S: ByteSource + ?Sized>(
        source: &mut S,
        _depth: DepthBudget,
    ) -> Result<Self, CodecError> {
        UnsignedInt::read_from(source)
    }
}

/// 写出 `<varint 长度><payload>`，供所有变长字符串形态共用。
fn pack_prefixed<S: ByteSink + ?Sized>(
    payload: &[u8],
    sink: &mut S,
    depth: DepthBudget,
) -> Result<(), CodecError> {
    let child = depth.descend()?;
    UnsignedInt::try_from(payload.len())?.pack(sink, child)?;
    sink.write_bytes(payload)?;
    Ok(())
}

/// 读出并丢弃 `left` 字节，临时缓冲在各轮之间复用。
fn discard<S: ByteSource + ?Sized>(source: &mut S, mut left: usize) -> Result<(), CodecError> {
    let mut scratch = [0u8; DISCARD_CHUNK];
    while left > 0 {
        let step = left.min(DISCARD_CHUNK);
        source.read_into(&mut scratch[..step])?;
        left -= step;
    }
    Ok(())
}

impl Pack for [u8] {
    fn pack<S: ByteSink + ?Sized>(
        &self,
        sink: &mut S,
        depth: DepthBudget,
    ) -> Result<(), CodecError> {
        pack_prefixed(self, sink, depth)
    }
}

impl Pack for Vec<u8> {
    fn pack<S: ByteSink + ?Sized>(
        &self,
        sink: &mut S,
        depth: DepthBudget,
    ) -> Result<(), CodecError> {
        pack_prefixed(self, sink, depth)
    }
}

impl Pack for str {
    fn pack<S: ByteSink + ?Sized>(
        &self,
        sink: &mut S,
        depth: DepthBudget,
    ) -> Result<(), CodecError> {
        pack_prefixed(self.as_bytes(), sink, depth)
    }
}

impl Pack for String {
    fn pack<S: ByteSink + ?Sized>(
        &self,
        sink: &mut S,
        depth: DepthBudget,
    ) -> Result<(), CodecError> {
        pack_prefixed(self.as_bytes(), sink, depth)
    }
}

impl Unpack for Vec<u8> {
    /// 声明长度由生产者控制，因此按 [`DISCARD_CHUNK`] 分块读取、随实际数据增长，
    /// 而不是按声明长度一次性分配。
    fn unpack<S: ByteSource + ?Sized>(
        source: &mut S,
        depth: DepthBudget,
    ) -> Result<Self, CodecError> {
        let child = depth.descend()?;
        let declared = UnsignedInt::unpack(source, child)?.to_usize()?;
        let mut bytes = Vec::with_capacity(declared.min(DISCARD_CHUNK));
        let mut scratch = [0u8; DISCARD_CHUNK];
        let mut left = declared;
        while left > 0 {
            let step = left.min(DISCARD_CHUNK);
            source.read_into(&mut scratch[..step])?;
            bytes.extend_from_slice(&scratch[..step]);
            left -= step;
        }
        Ok(bytes)
    }
}

impl Unpack for String {
    fn unpack<S: ByteSource + ?Sized>(
        source: &mut S,
        depth: DepthBudget,
    ) -> Result<Self, CodecError> {
        let bytes = Vec::<u8>::unpack(source, depth)?;
        String::from_utf8(bytes).map_err(|err| CodecError::InvalidUtf8(err.utf8_error()))
    }
}

impl<const N: usize> Pack for FixedString<N> {
    /// 写出 `<varint size()><前 size() 字节>`，与同内容的变长字符串逐字节一致。
    fn pack<S: ByteSink + ?Sized>(
        &self,
        sink: &mut S,
        depth: DepthBudget,
    ) -> Result<(), CodecError> {
        pack_prefixed(self.as_bytes(), sink, depth)
    }
}

impl<const N: usize> Unpack for FixedString<N> {
    /// # 教案式说明
    /// - **Why**：声明长度 `L` 由生产者控制，可能来自更大容量的定长字符串或普通变长字符串，
    ///   不要求 `L <= N`；
    /// - **How**：
    ///   1. 消费一层深度预算并读取 varint 长度；
    ///   2. `L == 0` 时不再读取任何字节；
    ///   3. 读入 `min(L, N)` 字节到一块全新的零值存储；
    ///   4. `L > N` 时把剩余 `L - N` 字节分块读出丢弃，使流游标停在负载末尾；
    /// - **What**：返回值总是等价于 `FixedString::from_bytes(&payload)`（截断语义），
    ///   两者都先清零再复制 `min(L, N)` 字节。
    fn unpack<S: ByteSource + ?Sized>(
        source: &mut S,
        depth: DepthBudget,
    ) -> Result<Self, CodecError> {
        let child = depth.descend()?;
        let declared = UnsignedInt::unpack(source, child)?.to_usize()?;
        let mut storage = [0u8; N];
        let kept = declared.min(N);
        source.read_into(&mut storage[..kept])?;
        if declared > N {
            let discarded = declared - N;
            discard(source, discarded)?;
            tracing::debug!(
                declared,
                capacity = N,
                discarded,
                "fixed string payload truncated while decoding"
            );
        }
        Ok(FixedString::from_storage(storage))
    }
}

impl<const N: usize> FixedString<N> {
    /// 以线格式编码为新的 `Vec<u8>`。
    ///
    /// 与 [`Pack::pack`] 不同，此处不经过深度预算与可失败的字节汇，因此不会失败。
    pub fn to_wire(&self) -> Vec<u8> {
        let payload = self.as_bytes();
        // 容量在编译期被限制在 u32 范围内，`payload.len() <= N` 不会截断。
        let prefix = UnsignedInt::new(payload.len() as u32);
        let (buf, prefix_len) = prefix.encode();
        let mut out = Vec::with_capacity(prefix_len + payload.len());
        out.extend_from_slice(&buf[..prefix_len]);
        out.extend_from_slice(payload);
        out
    }

    /// 以默认深度预算从线格式解码。
    pub fn from_wire(bytes: &[u8]) -> Result<Self, CodecError> {
        from_slice(bytes)
    }
}
