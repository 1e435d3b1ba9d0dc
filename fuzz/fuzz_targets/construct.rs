#![no_main]

//! 构造路径 Fuzz：先赋值长输入再赋值短输入，验证尾部清零与长度推导始终一致。

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use spark_fixed_string::FixedString16;

#[derive(Debug, Arbitrary)]
struct AssignCase {
    first: Vec<u8>,
    second: Vec<u8>,
}

fuzz_target!(|case: AssignCase| {
    let mut value = FixedString16::from_bytes(&case.first);
    value.assign(&case.second);
    assert_eq!(value, FixedString16::from_bytes(&case.second));

    let kept = &case.second[..case.second.len().min(16)];
    assert!(kept.starts_with(value.as_bytes()));
    assert_eq!(&value.storage()[..kept.len()], kept);
    assert!(value.storage()[kept.len()..].iter().all(|byte| *byte == 0));
});
