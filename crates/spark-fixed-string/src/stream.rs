//! 字节源 / 字节汇契约。
//!
//! # 模块定位（Why）
//! - 编解码函数只需要“读满 n 字节”与“写入一段字节”两种能力，抽象为 [`ByteSource`]/[`ByteSink`]
//!   后即可同时服务内存缓冲、`bytes` 生态与 `std::io` 流；
//! - 与 `bytes::Buf::copy_to_slice` 在数据不足时直接 panic 不同，这里的读写全部返回 `Result`，
//!   由调用方决定如何处理截断的输入。
//!
//! # 设计概要（How）
//! - 为所有 `bytes::Buf` 提供 [`ByteSource`] 覆盖实现（`&[u8]`、`Bytes`、`Cursor` 等）；
//! - 为所有 `bytes::BufMut` 提供 [`ByteSink`] 覆盖实现（`Vec<u8>`、`BytesMut`、`&mut [u8]` 等）；
//! - `std` 下提供 [`IoSource`]/[`IoSink`] 适配任意 `Read`/`Write`；
//! - [`SizeCounter`] 只计数不存储，用于预先计算编码长度。

use bytes::{Buf, BufMut};

use crate::error::StreamError;

/// 可读取字节的来源。
///
/// # 契约说明（What）
/// - `read_into` 要么填满 `dst` 并返回 `Ok(())`，要么返回错误；
/// - 出错时已消费的字节数不作保证，调用方应把整个解码视为失败。
pub trait ByteSource {
    /// 读满 `dst`。
    fn read_into(&mut self, dst: &mut [u8]) -> Result<(), StreamError>;

    /// 读取单个字节。
    fn read_byte(&mut self) -> Result<u8, StreamError> {
        let mut byte = [0u8; 1];
        self.read_into(&mut byte)?;
        Ok(byte[0])
    }
}

/// 可写入字节的去向。
///
/// # 契约说明（What）
/// - `write_bytes` 要么完整写入 `src`，要么返回错误，不产生“部分成功”的返回值。
pub trait ByteSink {
    /// 完整写入 `src`。
    fn write_bytes(&mut self, src: &[u8]) -> Result<(), StreamError>;
}

impl<B: Buf + ?Sized> ByteSource for B {
    fn read_into(&mut self, dst: &mut [u8]) -> Result<(), StreamError> {
        let remaining = self.remaining();
        if dst.len() > remaining {
            return Err(StreamError::UnexpectedEnd {
                requested: dst.len(),
                remaining,
            });
        }
        self.copy_to_slice(dst);
        Ok(())
    }
}

impl<B: BufMut + ?Sized> ByteSink for B {
    fn write_bytes(&mut self, src: &[u8]) -> Result<(), StreamError> {
        let remaining = self.remaining_mut();
        if src.len() > remaining {
            return Err(StreamError::SinkFull {
                requested: src.len(),
                remaining,
            });
        }
        self.put_slice(src);
        Ok(())
    }
}

/// 只统计写入字节数的字节汇。
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SizeCounter {
    written: usize,
}

impl SizeCounter {
    /// 构造计数为零的实例。
    pub const fn new() -> Self {
        Self { written: 0 }
    }

    /// 累计写入的字节数。
    pub const fn written(&self) -> usize {
        self.written
    }
}

impl ByteSink for SizeCounter {
    fn write_bytes(&mut self, src: &[u8]) -> Result<(), StreamError> {
        self.written = self.written.saturating_add(src.len());
        Ok(())
    }
}

/// 将任意 `std::io::Read` 适配为 [`ByteSource`]。
///
/// # 教案式说明
/// - **How**：直接委托 `read_exact`，`UnexpectedEof` 等所有 I/O 错误均包装为 [`StreamError::Io`]；
/// - **Trade-offs**：不做内部缓冲，频繁的小读取应由调用方包一层 `BufReader`。
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct IoSource<R> {
    inner: R,
}

#[cfg(feature = "std")]
impl<R: std::io::Read> IoSource<R> {
    /// 包装读取端。
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// 取回内部读取端。
    pub fn into_inner(self) -> R {
        self.inner
    }
}

#[cfg(feature = "std")]
impl<R: std::io::Read> ByteSource for IoSource<R> {
    fn read_into(&mut self, dst: &mut [u8]) -> Result<(), StreamError> {
        self.inner.read_exact(dst).map_err(StreamError::Io)
    }
}

/// 将任意 `std::io::Write` 适配为 [`ByteSink`]。
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct IoSink<W> {
    inner: W,
}

#[cfg(feature = "std")]
impl<W: std::io::Write> IoSink<W> {
    /// 包装写入端。
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// 取回内部写入端。
    pub fn into_inner(self) -> W {
        self.inner
    }
}

#[cfg(feature = "std")]
impl<W: std::io::Write> ByteSink for IoSink<W> {
    fn write_bytes(&mut self, src: &[u8]) -> Result<(), StreamError> {
        self.inner.write_all(src).map_err(StreamError::Io)
    }
}
