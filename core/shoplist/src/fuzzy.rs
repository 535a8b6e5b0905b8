//! 打ち間違い・聞き間違いに強い品名照合

use crate::domain::Named;

/// これ以下の編集距離なら同じ品目とみなす
pub const MAX_TYPO_DISTANCE: usize = 2;

/// レーベンシュタイン距離（挿入・削除・置換それぞれコスト 1）
///
/// 文字（char）単位。表は (len(b)+1) × (len(a)+1)。結果は max(len(a), len(b)) 以下。
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut matrix = vec![vec![0usize; a.len() + 1]; b.len() + 1];
    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=a.len() {
        matrix[0][j] = j;
    }

    for i in 1..=b.len() {
        for j in 1..=a.len() {
            matrix[i][j] = if b[i - 1] == a[j - 1] {
                matrix[i - 1][j - 1]
            } else {
                1 + matrix[i - 1][j - 1]
                    .min(matrix[i][j - 1])
                    .min(matrix[i - 1][j])
            };
        }
    }

    matrix[b.len()][a.len()]
}

/// 2 つの品名が同じ品目を指していそうか
///
/// どちらかがもう一方を含む（大文字小文字無視）か、編集距離が `MAX_TYPO_DISTANCE` 以下。
pub fn is_similar(query: &str, name: &str) -> bool {
    let query = query.to_lowercase();
    let name = name.to_lowercase();
    name.contains(&query) || query.contains(&name) || levenshtein(&query, &name) <= MAX_TYPO_DISTANCE
}

/// 候補から似た名前のものを元の順序のまま返す
pub fn find_similar<'a, T: Named>(query: &str, candidates: &'a [T]) -> Vec<&'a T> {
    candidates
        .iter()
        .filter(|c| is_similar(query, c.name()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, ListItem};

    #[test]
    fn test_levenshtein_known_values() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("milk", "milk"), 0);
        assert_eq!(levenshtein("", "bread"), 5);
        assert_eq!(levenshtein("tomato", ""), 6);
        assert_eq!(levenshtein("banana", "bananna"), 1);
    }

    #[test]
    fn test_levenshtein_symmetric_and_bounded() {
        let words = ["milk", "silk", "bread", "", "paneer", "panner", "दूध", "chai"];
        for a in words {
            assert_eq!(levenshtein(a, a), 0);
            for b in words {
                let d = levenshtein(a, b);
                assert_eq!(d, levenshtein(b, a), "{} / {}", a, b);
                assert!(d <= a.chars().count().max(b.chars().count()));
            }
        }
    }

    #[test]
    fn test_find_similar_preserves_order() {
        let list = vec![
            ListItem::new("Tomatoes", 1, Category::Produce, 40.0),
            ListItem::new("Bread", 1, Category::Bakery, 35.0),
            ListItem::new("Cherry Tomato", 2, Category::Produce, 90.0),
            ListItem::new("Milk", 1, Category::Dairy, 60.0),
        ];
        let hits = find_similar("tomato", &list);
        let names: Vec<&str> = hits.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Tomatoes", "Cherry Tomato"]);
    }

    #[test]
    fn test_find_similar_typo_tolerance() {
        let names = ["Paneer", "Bread", "Butter"];
        assert_eq!(find_similar("panner", &names), vec![&"Paneer"]);
        assert_eq!(find_similar("bred", &names), vec![&"Bread"]);
        // "butter" と "bread" は距離が 2 を超えるので一致しない
        assert_eq!(find_similar("butter", &names), vec![&"Butter"]);
    }

    #[test]
    fn test_query_containing_candidate_matches() {
        let names = ["Milk", "Rice"];
        assert_eq!(find_similar("organic milk powder", &names), vec![&"Milk"]);
    }
}
