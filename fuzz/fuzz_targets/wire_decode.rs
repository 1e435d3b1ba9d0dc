#![no_main]

//! 线格式解码 Fuzz：任意字节流都不得导致 panic，解码成功的值必须满足容量上界并可稳定再编码。

use libfuzzer_sys::fuzz_target;
use spark_fixed_string::{DepthBudget, FixedString, Unpack, to_vec};

fn check<const N: usize>(data: &[u8]) {
    let mut cursor = data;
    let Ok(value) = FixedString::<N>::unpack(&mut cursor, DepthBudget::default()) else {
        return;
    };
    assert!(value.size() <= N);

    let encoded = to_vec(&value).expect("内存编码不会失败");
    let again = FixedString::<N>::from_wire(&encoded).expect("再编码结果必须可解码");
    // 负载内含 0x00 时存储可能不同，但逻辑内容必须一致。
    assert_eq!(again.as_bytes(), value.as_bytes());
}

fuzz_target!(|data: &[u8]| {
    check::<1>(data);
    check::<8>(data);
    check::<16>(data);

    let mut cursor = data;
    let _ = String::unpack(&mut cursor, DepthBudget::default());
});
