//! 标签值（variant）桥接层。
//!
//! # 模块定位（Why）
//! - 通用自描述值树（这里是 `serde_json::Value`）把定长字符串视作普通字符串节点；
//! - 本层只做“读字符串 / 写字符串”两件事，类型判断由值树自身承担。
//!
//! # 契约说明（What）
//! - 写出：逻辑内容转为字符串节点，非 UTF-8 字节以 `U+FFFD` 有损替换，永不失败；
//! - 读入：仅接受字符串节点，按构造规则截断到容量；其余节点返回 [`VariantError::NotAString`]。

use serde_json::Value;

use crate::error::VariantError;
use crate::fixed::FixedString;

impl<const N: usize> FixedString<N> {
    /// 转为字符串节点。
    pub fn to_variant(&self) -> Value {
        Value::String(self.to_string_lossy().into_owned())
    }

    /// 从字符串节点构造。
    pub fn from_variant(value: &Value) -> Result<Self, VariantError> {
        match value {
            Value::String(text) => Ok(Self::from(text)),
            other => Err(VariantError::NotAString {
                found: kind_name(other),
            }),
        }
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl<const N: usize> From<FixedString<N>> for Value {
    fn from(value: FixedString<N>) -> Self {
        value.to_variant()
    }
}

impl<const N: usize> TryFrom<&Value> for FixedString<N> {
    type Error = VariantError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Self::from_variant(value)
    }
}

impl<const N: usize> TryFrom<Value> for FixedString<N> {
    type Error = VariantError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_variant(&value)
    }
}
