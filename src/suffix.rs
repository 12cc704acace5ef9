//! Суфікси та правила їх видалення з кінця області RV
//!
//! Альтернативи в шаблоні перебираються в порядку оголошення: перемагає перша,
//! що збігається з кінцем RV, навіть якщо далі в списку є довша.
use tracing::trace;

/// Одна альтернатива шаблону суфікса
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suffix {
    /// Звичайний літеральний суфікс
    Plain(&'static str),
    /// Суфікс `lead + tail`, де символ безпосередньо перед `tail` має належати `after`.
    /// Якщо `lead` порожній, перевіряється символ RV перед збігом.
    Guarded {
        lead: &'static str,
        after: &'static [char],
        tail: &'static str,
    },
}

impl Suffix {
    /// Повертає довжину збігу в байтах, якщо суфікс закінчує `rv`
    pub fn match_len(&self, rv: &str) -> Option<usize> {
        match *self {
            Suffix::Plain(text) => rv.ends_with(text).then_some(text.len()),
            Suffix::Guarded { lead, after, tail } => {
                let head = rv.strip_suffix(tail)?;
                // Lookbehind бачить лише RV, тож на початку області умова не виконується
                let before = head.chars().next_back()?;
                if !after.contains(&before) {
                    return None;
                }
                head.strip_suffix(lead)?;
                Some(lead.len() + tail.len())
            }
        }
    }
}

/// Впорядкований список альтернатив, прив'язаний до кінця RV
#[derive(Debug, Clone, Copy)]
pub struct SuffixPattern {
    pub name: &'static str,
    pub alternatives: &'static [Suffix],
}

impl SuffixPattern {
    pub const fn new(name: &'static str, alternatives: &'static [Suffix]) -> Self {
        Self { name, alternatives }
    }

    /// Довжина першої альтернативи (в порядку оголошення), що закінчує `rv`
    pub fn find(&self, rv: &str) -> Option<usize> {
        self.alternatives.iter().find_map(|suffix| suffix.match_len(rv))
    }

    /// Видаляє знайдений суфікс. Повертає нове значення RV і ознаку зміни.
    pub fn strip(&self, rv: String) -> (String, bool) {
        Rule::delete(*self).apply(rv)
    }
}

/// Шаблон разом із рядком заміни (порожнім для звичайного видалення)
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub pattern: SuffixPattern,
    pub replacement: &'static str,
}

impl Rule {
    pub const fn delete(pattern: SuffixPattern) -> Self {
        Self { pattern, replacement: "" }
    }

    pub const fn replace(pattern: SuffixPattern, replacement: &'static str) -> Self {
        Self { pattern, replacement }
    }

    /// Застосовує правило до `rv`. Ознака зміни істинна лише тоді, коли
    /// результат відрізняється від вхідного значення.
    pub fn apply(&self, mut rv: String) -> (String, bool) {
        let Some(len) = self.pattern.find(&rv) else {
            return (rv, false);
        };

        let cut = rv.len() - len;
        let changed = rv[cut..] != *self.replacement;
        if changed {
            trace!(
                pattern = self.pattern.name,
                matched = &rv[cut..],
                replacement = self.replacement,
                "застосовано правило"
            );
            rv.truncate(cut);
            rv.push_str(self.replacement);
        }
        (rv, changed)
    }
}

/// Будує `SuffixPattern` з літералів; після `;` можна додати захищені альтернативи
/// у вигляді `lead, after => tail, tail, ...`.
macro_rules! pattern {
    ($name:literal: $($text:literal),* $(,)? $(; $lead:literal, $after:expr => $($tail:literal),+ )?) => {
        $crate::suffix::SuffixPattern::new(
            $name,
            &[
                $($crate::suffix::Suffix::Plain($text),)*
                $($($crate::suffix::Suffix::Guarded { lead: $lead, after: $after, tail: $tail },)+)?
            ],
        )
    };
}

pub(crate) use pattern;

#[cfg(test)]
mod tests {
    use super::*;

    const AFTER_A: &[char] = &['а', 'я'];

    #[test]
    fn test_first_declared_alternative_wins() {
        let pattern = pattern!("test": "а", "ова");
        assert_eq!(pattern.strip("лова".to_string()), ("лов".to_string(), true));

        let pattern = pattern!("test": "ова", "а");
        assert_eq!(pattern.strip("лова".to_string()), ("л".to_string(), true));
    }

    #[test]
    fn test_no_match_leaves_rv() {
        let pattern = pattern!("test": "ами", "ях");
        assert_eq!(pattern.strip("стол".to_string()), ("стол".to_string(), false));
        assert_eq!(pattern.strip(String::new()), (String::new(), false));
    }

    #[test]
    fn test_guard_checks_char_before_tail() {
        let pattern = pattern!("test": "ив"; "", AFTER_A => "вши");
        assert_eq!(pattern.strip("тавши".to_string()), ("та".to_string(), true));
        assert_eq!(pattern.strip("товши".to_string()), ("товши".to_string(), false));
        // Перед збігом немає символу в межах RV
        assert_eq!(pattern.strip("вши".to_string()), ("вши".to_string(), false));
    }

    #[test]
    fn test_guard_with_lead_uses_lead_last_char() {
        let pattern = pattern!("test": ; "ывшись", AFTER_A => "в");
        assert_eq!(pattern.find("дывшисьв"), None);

        let pattern = pattern!("test": ; "ла", AFTER_A => "в");
        assert_eq!(pattern.find("плав"), Some("лав".len()));
    }

    #[test]
    fn test_replacement_rule() {
        let rule = Rule::replace(pattern!("test": "нн"), "н");
        assert_eq!(rule.apply("ванн".to_string()), ("ван".to_string(), true));
        assert_eq!(rule.apply("ван".to_string()), ("ван".to_string(), false));
    }
}
