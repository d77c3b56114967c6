use crate::utils::error::{KataError, Result};

const KATA: &str = "binary";

/// 將以空白分隔的二進位字串解碼為文字
pub fn binary_decode(input: &str) -> Result<String> {
    let mut bytes = Vec::new();

    for group in input.split_whitespace() {
        if group.len() > 8 || !group.bytes().all(|b| b == b'0' || b == b'1') {
            return Err(KataError::invalid_input(
                KATA,
                format!("'{}' is not an 8-bit binary group", group),
            ));
        }
        // 長度與字元都已檢查過，不會溢位
        let byte = u8::from_str_radix(group, 2)
            .map_err(|e| KataError::invalid_input(KATA, e.to_string()))?;
        bytes.push(byte);
    }

    String::from_utf8(bytes)
        .map_err(|e| KataError::invalid_input(KATA, format!("decoded bytes are not UTF-8: {}", e)))
}

pub fn binary_encode(input: &str) -> String {
    input
        .bytes()
        .map(|b| format!("{:08b}", b))
        .collect::<Vec<_>>()
        .join(" ")
}
