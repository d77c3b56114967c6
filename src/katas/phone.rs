use regex::Regex;
use std::sync::OnceLock;

fn us_phone() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(1 ?)?(\(\d{3}\)|\d{3})[ \-]?\d{3}[ \-]?\d{4}$")
            .expect("phone regex is valid")
    })
}

/// 驗證美國電話號碼格式
pub fn is_valid_us_phone(input: &str) -> bool {
    us_phone().is_match(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_formats() {
        for number in [
            "555-555-5555",
            "1 555-555-5555",
            "1 (555) 555-5555",
            "5555555555",
            "(555)555-5555",
            "1(555)555-5555",
            "1 555 555 5555",
            "1 456 789 4444",
        ] {
            assert!(is_valid_us_phone(number), "{} should be valid", number);
        }
    }

    #[test]
    fn test_rejected_formats() {
        for number in [
            "555-5555",
            "5555555",
            "1 555)555-5555",
            "123**&!!asdf#",
            "55555555",
            "(6054756961)",
            "2 (757) 622-7382",
            "0 (757) 622-7382",
            "-1 (757) 622-7382",
            "2 757 622-7382",
            "10 (757) 622-7382",
            "27576227382",
            "(275)76227382",
            "2(757)6227382",
            "2(757)622-7382",
            "555)-555-5555",
            "(555-555-5555",
            "(555)5(55?)-5555",
            "55 55-55-555-5",
            "11 555-555-5555",
            "",
        ] {
            assert!(!is_valid_us_phone(number), "{} should be invalid", number);
        }
    }
}
