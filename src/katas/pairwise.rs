/// 找出和為 `target` 的配對，每個索引只用一次（優先取最小索引），回傳所有配對索引的總和
pub fn pairwise(values: &[i64], target: i64) -> usize {
    let mut used = vec![false; values.len()];
    let mut index_sum = 0;

    for i in 0..values.len() {
        if used[i] {
            continue;
        }
        let partner = (i + 1..values.len())
            .find(|&j| !used[j] && values[i].checked_add(values[j]) == Some(target));
        if let Some(j) = partner {
            used[i] = true;
            used[j] = true;
            index_sum += i + j;
        }
    }

    index_sum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acceptance_cases() {
        assert_eq!(pairwise(&[1, 4, 2, 3, 0, 5], 7), 11);
        assert_eq!(pairwise(&[1, 3, 2, 4], 4), 1);
        assert_eq!(pairwise(&[1, 1, 1], 2), 1);
        assert_eq!(pairwise(&[0, 0, 0, 0, 1, 1], 1), 10);
        assert_eq!(pairwise(&[], 100), 0);
    }

    #[test]
    fn test_negative_and_overflowing_values() {
        assert_eq!(pairwise(&[-3, 5, 3, -5], 0), 6);
        assert_eq!(pairwise(&[i64::MAX, 1, -1], 0), 3);
    }
}
