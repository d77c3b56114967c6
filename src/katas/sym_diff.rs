use std::collections::HashSet;
use std::hash::Hash;

fn dedup_in_order<T: Eq + Hash + Clone>(items: &[T]) -> Vec<T> {
    let mut seen = HashSet::new();
    items
        .iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}

/// 對所有集合依序做對稱差，結果保留首次出現的順序
pub fn sym<T: Eq + Hash + Clone>(sets: &[Vec<T>]) -> Vec<T> {
    sets.iter().fold(Vec::new(), |acc, next| {
        let next = dedup_in_order(next);
        let in_acc: HashSet<&T> = acc.iter().collect();
        let in_next: HashSet<&T> = next.iter().collect();

        let mut result: Vec<T> = acc
            .iter()
            .filter(|item| !in_next.contains(item))
            .cloned()
            .collect();
        result.extend(next.iter().filter(|item| !in_acc.contains(item)).cloned());
        result
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_sets() {
        assert_eq!(sym(&[vec![1, 2, 3], vec![5, 2, 1, 4]]), vec![3, 5, 4]);
    }

    #[test]
    fn test_three_sets() {
        assert_eq!(sym(&[vec![1, 2, 5], vec![2, 3, 5], vec![3, 4, 5]]), vec![1, 4, 5]);
    }

    #[test]
    fn test_duplicates_inside_a_set() {
        assert_eq!(sym(&[vec![1, 2, 3, 3], vec![5, 2, 1, 4]]), vec![3, 5, 4]);
        assert_eq!(
            sym(&[vec![3, 3, 3, 2, 5], vec![2, 1, 5, 7], vec![3, 4, 6, 6], vec![1, 2, 3]]),
            vec![7, 4, 6, 2, 3]
        );
    }

    #[test]
    fn test_empty_inputs() {
        assert!(sym::<i32>(&[]).is_empty());
        assert_eq!(sym(&[vec!["a", "b"]]), vec!["a", "b"]);
        assert!(sym(&[vec![1, 2], vec![2, 1]]).is_empty());
    }
}
