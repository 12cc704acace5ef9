//! Модуль для стемінгу (нормалізації) українських і російських слів
//! Використовується як в пошуку, так і при створенні індексу

use crate::language::Language;
use crate::normalizer::normalize;
use crate::region::split;
use crate::tables::LanguageTable;
use rayon::prelude::*;
use tracing::debug;

/// Стемер для однієї мови. Таблиці незмінні, тож копію можна
/// вільно передавати між потоками.
#[derive(Debug, Clone, Copy)]
pub struct Stemmer {
    table: &'static LanguageTable,
}

impl Default for Stemmer {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

impl Stemmer {
    pub fn new(language: Language) -> Self {
        Self::with_table(language.table())
    }

    pub fn with_table(table: &'static LanguageTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'static LanguageTable {
        self.table
    }

    /// Виконує стемінг слова (приведення до основи)
    pub fn stem(&self, word: &str) -> String {
        let word = normalize(word, self.table);

        // Слова без голосних повертаються як є
        let Some((start, rv)) = split(&word, self.table) else {
            return word;
        };

        let rv = reduce(rv, self.table);
        let mut stem = String::with_capacity(start.len() + rv.len());
        stem.push_str(start);
        stem.push_str(&rv);
        stem
    }

    /// Стемінг набору слів паралельно, порядок результатів відповідає вхідному
    pub fn stem_all<S>(&self, words: &[S]) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        words.par_iter().map(|word| self.stem(word.as_ref())).collect()
    }
}

/// Стемінг українського слова
pub fn stem_word(word: &str) -> String {
    Stemmer::default().stem(word)
}

/// Застосовує чотири кроки алгоритму до області RV
pub fn reduce(rv: &str, table: &LanguageTable) -> String {
    let rv = step_one(rv.to_string(), table);
    let rv = step_two(rv, table);
    let rv = step_three(rv, table);
    let rv = step_four(rv, table);
    debug!(language = table.name, rv = %rv, "RV після всіх кроків");
    rv
}

// Дієприслівник виключає решту класів кроку 1
fn step_one(rv: String, table: &LanguageTable) -> String {
    let (rv, gerund) = table.perfective_gerund.strip(rv);
    if gerund {
        return rv;
    }

    let (rv, _) = table.reflexive.strip(rv);
    let (rv, adjective) = table.adjective.strip(rv);
    if adjective {
        return table.participle.strip(rv).0;
    }

    let (rv, verb) = table.verb.strip(rv);
    if verb {
        rv
    } else {
        table.noun.strip(rv).0
    }
}

fn step_two(rv: String, table: &LanguageTable) -> String {
    table.trailing_i.apply(rv).0
}

fn step_three(rv: String, table: &LanguageTable) -> String {
    if table.is_derivational(&rv) {
        table.abstract_noun.apply(rv).0
    } else {
        rv
    }
}

// Суперлатив і "нн" обробляються лише після видалення м'якого знака
fn step_four(rv: String, table: &LanguageTable) -> String {
    let (rv, soft_sign) = table.soft_sign.apply(rv);
    if !soft_sign {
        return rv;
    }

    let (rv, _) = table.superlative.apply(rv);
    table.double_n.apply(rv).0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::UKRAINIAN;

    #[test]
    fn test_stem_basic() {
        assert_eq!(stem_word("книга"), "книг");
        assert_eq!(stem_word("КНИГА"), "книг");
        assert_eq!(stem_word("хлопцями"), "хлопц");
        assert_eq!(stem_word("м'ясо"), "мяс");
    }

    #[test]
    fn test_reflexive_then_noun() {
        // "ся" знімає зворотний клас, далі іменниковий "ь"
        assert_eq!(stem_word("ручкається"), "ручкаєт");
        assert_eq!(stem_word("сміялися"), "сміял");
    }

    #[test]
    fn test_perfective_gerund() {
        assert_eq!(stem_word("зробивши"), "зроб");
    }

    #[test]
    fn test_adjective_order_dependence() {
        // "а" оголошено раніше за "ова", тому знімається лише "а"
        assert_eq!(stem_word("столова"), "столов");
    }

    #[test]
    fn test_step_four_double_n_is_replaced() {
        assert_eq!(stem_word("ваннье"), "ван");
    }

    #[test]
    fn test_step_four_superlative() {
        assert_eq!(stem_word("добрейшье"), "добр");
    }

    #[test]
    fn test_step_three_derivational() {
        assert_eq!(stem_word("надоростьє"), "надор");
    }

    #[test]
    fn test_no_vowel_fallback() {
        assert_eq!(stem_word("ждб"), "ждб");
        assert_eq!(stem_word("ЖДБ"), "ждб");
        assert_eq!(stem_word(""), "");
        for word in ["ждб", "Брр", "xyz", "123"] {
            assert_eq!(stem_word(word), normalize(word, &UKRAINIAN));
        }
    }

    #[test]
    fn test_prefix_and_determinism() {
        let words = [
            "книга", "ручкається", "зробивши", "столова", "ваннье", "добрейшье", "надоростьє",
            "хлопцями", "Україна", "їжак", "будинку",
        ];
        for word in words {
            let normalized = normalize(word, &UKRAINIAN);
            let (start, _) = split(&normalized, &UKRAINIAN).unwrap();
            let stem = stem_word(word);
            assert!(stem.starts_with(start), "{word} -> {stem}");
            assert_eq!(stem, stem_word(word));
        }
    }

    #[test]
    fn test_reduce_empty_region() {
        assert_eq!(reduce("", &UKRAINIAN), "");
        assert_eq!(stem_word("ї"), "ї");
    }

    #[test]
    fn test_russian_table() {
        let stemmer = Stemmer::new(Language::Russian);
        let cases = [
            ("программистом", "программист"),
            ("книга", "книг"),
            // дієприслівник "вши" після "а" в межах RV
            ("читавши", "чита"),
            // дієслівне "ла" після "а"
            ("читала", "чита"),
            // "но" не проходить перевірку ("н" перед ним), далі спрацьовує "нно"
            ("сделанно", "сдела"),
            // прикметник, потім дієприкметник "ем"/"нн"/"ющ" після "а"
            ("читаемый", "чита"),
            ("сделанный", "сдела"),
            ("читающий", "чита"),
            // перед "ющ" немає символу в RV, перед "щ" стоїть "ю"
            ("поющий", "поющ"),
            // крок 3 знімає "ост" після іменникового "ь"
            ("молодость", "молод"),
            // крок 4 після видалення "ь"
            ("добрейшьой", "добр"),
            ("ванньой", "ван"),
            ("подъезд", "подьезд"),
        ];

        for (word, expected) in cases {
            assert_eq!(stemmer.stem(word), expected, "{word}");
        }
    }

    #[test]
    fn test_stem_all_keeps_order() {
        let stemmer = Stemmer::default();
        let words = vec!["книга", "ждб", "хлопцями"];
        assert_eq!(stemmer.stem_all(&words), vec!["книг", "ждб", "хлопц"]);
        assert!(stemmer.stem_all::<&str>(&[]).is_empty());
    }
}
