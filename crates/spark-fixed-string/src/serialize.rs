//! `serde` 集成：定长字符串在任意 serde 格式中都表现为普通字符串/字节串。
//!
//! - 人类可读格式（JSON 等）：合法 UTF-8 写为字符串，否则写为字节串；读取时接受字符串、字节串与字节数组；
//! - 二进制格式（postcard、bincode 等）：始终写为字节串，其线格式与字符串相同（长度前缀 + 原始字节），
//!   读取时按字节串解码，从而不会因非 UTF-8 内容失败。
//!
//! 读取端对超长输入同样执行截断，与构造规则一致。

use core::fmt;

use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::fixed::FixedString;

impl<const N: usize> Serialize for FixedString<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable()
            && let Ok(text) = self.as_str()
        {
            return serializer.serialize_str(text);
        }
        serializer.serialize_bytes(self.as_bytes())
    }
}

impl<'de, const N: usize> Deserialize<'de> for FixedString<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            deserializer.deserialize_any(FixedStringVisitor::<N>)
        } else {
            deserializer.deserialize_bytes(FixedStringVisitor::<N>)
        }
    }
}

struct FixedStringVisitor<const N: usize>;

impl<'de, const N: usize> Visitor<'de> for FixedStringVisitor<N> {
    type Value = FixedString<N>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "a string or byte string (inputs longer than {N} bytes are truncated)"
        )
    }

    fn visit_str<E: de::Error>(self, text: &str) -> Result<Self::Value, E> {
        Ok(FixedString::from_bytes(text.as_bytes()))
    }

    fn visit_bytes<E: de::Error>(self, bytes: &[u8]) -> Result<Self::Value, E> {
        Ok(FixedString::from_bytes(bytes))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        // 逐元素收集到栈上缓冲，超出容量的元素照常消费后丢弃。
        let mut storage = [0u8; N];
        let mut len = 0usize;
        while let Some(byte) = seq.next_element::<u8>()? {
            if let Some(slot) = storage.get_mut(len) {
                *slot = byte;
            }
            len = len.saturating_add(1);
        }
        Ok(FixedString::from_bytes(&storage[..len.min(N)]))
    }
}
