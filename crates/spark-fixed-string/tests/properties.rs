//! 定长字符串性质验证
//!
//! # 教案级注释概览
//!
//! - **核心目标 (Why)**：示例测试只能覆盖少数几条输入，长度推导、截断与线格式兼容属于“对所有输入成立”的契约，
//!   适合用 Proptest 随机生成负载进行验证。
//! - **设计手法 (How)**：生成器区分“不含 `0x00` 的负载”与“任意负载”。前者用于精确断言长度，后者只断言上界，
//!   因为内部 `0x00` 会提前终止长度推导。
//!
//! # 合同与边界 (What)
//!
//! - 性质 1：`size() == min(len, N)`（无内部零字节时），且永远 `<= N`；
//! - 性质 2：编码结果与同内容的变长字符串逐字节一致，并可无损解码回原值；
//! - 性质 3：声明长度超出容量时，解码后字节源恰好停在负载末尾；
//! - 性质 4：比较结果与原始存储数组的字典序一致；
//! - 性质 5：任意原始存储都服从哨兵规则，末字节非零时长度为 `N`，否则为首个 `0x00` 的下标。

use proptest::prelude::*;
use spark_fixed_string::{DepthBudget, FixedString, Unpack, from_slice, to_vec};

fn non_zero_payload(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(1u8..=u8::MAX, 0..max_len)
}

fn any_payload(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..max_len)
}

proptest! {
    #[test]
    fn prop_size_is_clamped_to_capacity(payload in non_zero_payload(48)) {
        let value = FixedString::<16>::from_bytes(&payload);
        prop_assert_eq!(value.size(), payload.len().min(16));
        prop_assert_eq!(value.as_bytes(), &payload[..payload.len().min(16)]);
    }

    #[test]
    fn prop_size_never_exceeds_capacity(payload in any_payload(48)) {
        let value = FixedString::<8>::from_bytes(&payload);
        prop_assert!(value.size() <= 8);
        prop_assert!(payload.starts_with(value.as_bytes()));
    }

    #[test]
    fn prop_encoding_matches_generic_bytes(payload in non_zero_payload(40)) {
        let value = FixedString::<24>::from_bytes(&payload);
        let fixed = to_vec(&value).expect("编码定长字符串");
        let generic = to_vec(value.as_bytes()).expect("编码字节串");
        prop_assert_eq!(&fixed, &generic);

        let decoded: FixedString<24> = from_slice(&fixed).expect("解码");
        prop_assert_eq!(decoded, value);
    }

    #[test]
    fn prop_oversized_decode_consumes_whole_payload(
        payload in non_zero_payload(3000),
        trailer in any::<u8>(),
    ) {
        let mut encoded = to_vec(payload.as_slice()).expect("编码");
        encoded.push(trailer);

        let mut cursor: &[u8] = &encoded;
        let decoded = FixedString::<16>::unpack(&mut cursor, DepthBudget::default()).expect("解码");
        prop_assert_eq!(decoded, FixedString::<16>::from_bytes(&payload));
        prop_assert_eq!(cursor, &[trailer][..]);
    }

    #[test]
    fn prop_ordering_follows_raw_storage(
        left in any_payload(10),
        right in any_payload(10),
    ) {
        let a = FixedString::<6>::from_bytes(&left);
        let b = FixedString::<6>::from_bytes(&right);
        prop_assert_eq!(a.cmp(&b), a.storage().cmp(b.storage()));
        prop_assert_eq!(a == b, a.storage() == b.storage());
    }

    #[test]
    fn prop_sentinel_rule(storage in any::<[u8; 8]>()) {
        let value = FixedString::from_storage(storage);
        if storage[7] != 0 {
            prop_assert!(value.is_full());
            prop_assert_eq!(value.size(), 8);
            prop_assert_eq!(value.as_bytes(), &storage[..]);
        } else {
            let first_zero = storage.iter().position(|&byte| byte == 0).unwrap_or(8);
            prop_assert!(!value.is_full());
            prop_assert_eq!(value.size(), first_zero);
        }
        prop_assert_eq!(value.is_empty(), value.size() == 0);
        prop_assert_eq!(value.len(), value.size());
    }
}
