//! Таблиці голосних і суфіксів для української та російської мов
use crate::suffix::{Rule, SuffixPattern, pattern};
use once_cell::sync::Lazy;
use regex::Regex;

/// Голосні, з яких починається пошук області RV
pub const UKRAINIAN_VOWELS: &[char] = &['а', 'е', 'и', 'о', 'у', 'ю', 'я', 'і', 'ї', 'є'];
pub const RUSSIAN_VOWELS: &[char] = &['а', 'е', 'и', 'о', 'у', 'ы', 'э', 'ю', 'я'];

const AFTER_A_YA: &[char] = &['а', 'я'];

// Приголосна, голосні, приголосні, голосна, будь-що, і в кінці "ость"/"ост".
// Голосна перед ".*" сама може бути тим "о".
static UKRAINIAN_DERIVATIONAL: Lazy<Regex> = Lazy::new(|| derivational_regex(UKRAINIAN_VOWELS));
static RUSSIAN_DERIVATIONAL: Lazy<Regex> = Lazy::new(|| derivational_regex(RUSSIAN_VOWELS));

fn derivational_regex(vowels: &[char]) -> Regex {
    let v: String = vowels.iter().collect();
    Regex::new(&format!("[^{v}][{v}]+[^{v}]+(?:[{v}].*)?ость?$")).unwrap()
}

/// Повний набір даних для однієї мови. Алгоритм стемінгу спільний.
#[derive(Debug)]
pub struct LanguageTable {
    pub name: &'static str,
    pub vowels: &'static [char],
    /// Застарілі літери та їх сучасні відповідники
    pub folds: &'static [(char, char)],
    pub perfective_gerund: SuffixPattern,
    pub reflexive: SuffixPattern,
    pub adjective: SuffixPattern,
    pub participle: SuffixPattern,
    pub verb: SuffixPattern,
    pub noun: SuffixPattern,
    pub derivational: &'static Lazy<Regex>,
    /// Крок 2
    pub trailing_i: Rule,
    /// Крок 3
    pub abstract_noun: Rule,
    /// Крок 4
    pub soft_sign: Rule,
    pub superlative: Rule,
    pub double_n: Rule,
}

impl LanguageTable {
    pub fn is_vowel(&self, c: char) -> bool {
        self.vowels.contains(&c)
    }

    pub fn fold(&self, c: char) -> char {
        self.folds
            .iter()
            .find(|(from, _)| *from == c)
            .map_or(c, |(_, to)| *to)
    }

    /// Структурна перевірка кроку 3, RV не змінюється
    pub fn is_derivational(&self, rv: &str) -> bool {
        self.derivational.is_match(rv)
    }
}

pub static UKRAINIAN: LanguageTable = LanguageTable {
    name: "ukrainian",
    vowels: UKRAINIAN_VOWELS,
    folds: &[('ё', 'е'), ('ъ', 'ї')],
    // Остання група вимагає [ая] одразу після "ывшись", тож ніколи не спрацьовує
    perfective_gerund: pattern!("perfective_gerund":
        "ив", "ивши", "ившись", "ыв", "ывши";
        "ывшись", AFTER_A_YA => "в", "вши", "вшись"),
    reflexive: pattern!("reflexive": "ся", "сь", "си"),
    adjective: pattern!("adjective":
        "ими", "ій", "ий", "а", "е", "ова", "ове", "ів", "є", "їй", "єє", "еє", "я", "ім", "ем",
        "им", "ім", "их", "іх", "ою", "йми", "іми", "у", "ю", "ого", "ому", "ої"),
    participle: pattern!("participle":
        "ий", "ого", "ому", "им", "ім", "а", "ій", "у", "ою", "ій", "і", "их", "йми", "их"),
    verb: pattern!("verb":
        "сь", "ся", "ив", "ать", "ять", "у", "ю", "ав", "али", "учи", "ячи", "вши", "ши", "е",
        "ме", "ати", "яти", "є"),
    noun: pattern!("noun":
        "а", "ев", "ов", "е", "ями", "ами", "еи", "и", "ей", "ой", "ий", "й", "иям", "ям", "ием",
        "ем", "ам", "ом", "о", "у", "ах", "иях", "ях", "ы", "ь", "ию", "ью", "ю", "ия", "ья", "я",
        "і", "ові", "ї", "ею", "єю", "ою", "є", "еві", "ем", "єм", "ів", "їв", "ю"),
    derivational: &UKRAINIAN_DERIVATIONAL,
    trailing_i: Rule::delete(pattern!("trailing_i": "и")),
    abstract_noun: Rule::delete(pattern!("abstract_noun": "ость")),
    soft_sign: Rule::delete(pattern!("soft_sign": "ь")),
    superlative: Rule::delete(pattern!("superlative": "ейше", "ейш")),
    double_n: Rule::replace(pattern!("double_n": "нн"), "н"),
};

pub static RUSSIAN: LanguageTable = LanguageTable {
    name: "russian",
    vowels: RUSSIAN_VOWELS,
    folds: &[('ё', 'е'), ('ъ', 'ь')],
    perfective_gerund: pattern!("perfective_gerund":
        "ив", "ивши", "ившись", "ыв", "ывши", "ывшись";
        "", AFTER_A_YA => "в", "вши", "вшись"),
    reflexive: pattern!("reflexive": "ся", "сь"),
    adjective: pattern!("adjective":
        "ее", "ие", "ые", "ое", "ими", "ыми", "ей", "ий", "ый", "ой", "ем", "им", "ым", "ом",
        "его", "ого", "ему", "ому", "их", "ых", "ую", "юю", "ая", "яя", "ою", "ею"),
    participle: pattern!("participle":
        "ивш", "ывш", "ующ";
        "", AFTER_A_YA => "ем", "нн", "вш", "ющ", "щ"),
    verb: pattern!("verb":
        "ила", "ыла", "ена", "ейте", "уйте", "ите", "или", "ыли", "ей", "уй", "ил", "ыл", "им",
        "ым", "ен", "ило", "ыло", "ено", "ят", "ует", "уют", "ит", "ыт", "ены", "ить", "ыть",
        "ишь", "ую", "ю";
        "", AFTER_A_YA => "ла", "на", "ете", "йте", "ли", "й", "л", "ем", "н", "ло", "но", "ет",
        "ют", "ны", "ть", "ешь", "нно"),
    noun: pattern!("noun":
        "а", "ев", "ов", "ие", "ье", "е", "иями", "ями", "ами", "еи", "ии", "и", "ией", "ей",
        "ой", "ий", "й", "иям", "ям", "ием", "ем", "ам", "ом", "о", "у", "ах", "иях", "ях", "ы",
        "ь", "ию", "ью", "ю", "ия", "ья", "я"),
    derivational: &RUSSIAN_DERIVATIONAL,
    trailing_i: Rule::delete(pattern!("trailing_i": "и")),
    abstract_noun: Rule::delete(pattern!("abstract_noun": "ость", "ост")),
    soft_sign: Rule::delete(pattern!("soft_sign": "ь")),
    superlative: Rule::delete(pattern!("superlative": "ейше", "ейш")),
    double_n: Rule::replace(pattern!("double_n": "нн"), "н"),
};
