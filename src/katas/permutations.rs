use crate::utils::error::{KataError, Result};

const KATA: &str = "no-repeats";

/// 10! 約三百六十萬種排列，再長就不列舉了
pub const MAX_PERMUTATION_LEN: usize = 10;

fn has_adjacent_repeat(chars: &[char]) -> bool {
    chars.windows(2).any(|pair| pair[0] == pair[1])
}

/// 以 Heap's algorithm（非遞迴版本）列舉所有排列，計算沒有相鄰重複字元的數量。
/// 相同字母視為不同個體，所以 "aab" 的結果是 2。
pub fn count_no_repeat_permutations(input: &str) -> Result<u64> {
    let mut chars: Vec<char> = input.chars().collect();
    let n = chars.len();

    if n == 0 {
        return Ok(0);
    }
    if n > MAX_PERMUTATION_LEN {
        return Err(KataError::invalid_input(
            KATA,
            format!(
                "{} characters is too many to enumerate (max {})",
                n, MAX_PERMUTATION_LEN
            ),
        ));
    }

    let mut count = u64::from(!has_adjacent_repeat(&chars));
    let mut counters = vec![0usize; n];
    let mut i = 1;

    while i < n {
        if counters[i] < i {
            if i % 2 == 0 {
                chars.swap(0, i);
            } else {
                chars.swap(counters[i], i);
            }
            if !has_adjacent_repeat(&chars) {
                count += 1;
            }
            counters[i] += 1;
            i = 1;
        } else {
            counters[i] = 0;
            i += 1;
        }
    }

    Ok(count)
}
