use crate::tables::LanguageTable;

/// Апостроф (звичайний і типографські варіанти) видаляється повністю
const APOSTROPHES: &[char] = &['\'', '\u{2019}', '\u{02BC}'];

/// Приводить слово до нижнього регістру, прибирає апострофи та замінює
/// застарілі літери сучасними відповідниками. Символи поза абеткою не змінюються.
pub fn normalize(raw: &str, table: &LanguageTable) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|c| !APOSTROPHES.contains(c))
        .map(|c| table.fold(c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{RUSSIAN, UKRAINIAN};

    #[test]
    fn test_lowercase_and_apostrophes() {
        assert_eq!(normalize("М'ЯСО", &UKRAINIAN), "мясо");
        assert_eq!(normalize("м’ясо", &UKRAINIAN), "мясо");
        assert_eq!(normalize("мʼясо", &UKRAINIAN), "мясо");
    }

    #[test]
    fn test_legacy_letters() {
        assert_eq!(normalize("Ёлка", &UKRAINIAN), "елка");
        assert_eq!(normalize("обЪєкт", &UKRAINIAN), "обїєкт");
        assert_eq!(normalize("объект", &RUSSIAN), "обьект");
    }

    #[test]
    fn test_passthrough() {
        assert_eq!(normalize("", &UKRAINIAN), "");
        assert_eq!(normalize("Rust-2024", &UKRAINIAN), "rust-2024");
    }
}
