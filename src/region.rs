use crate::tables::LanguageTable;

/// Ділить слово після першої голосної на незмінний префікс і область RV.
/// Повертає `None`, якщо голосних немає.
pub fn split<'a>(word: &'a str, table: &LanguageTable) -> Option<(&'a str, &'a str)> {
    let (idx, vowel) = word.char_indices().find(|&(_, c)| table.is_vowel(c))?;
    Some(word.split_at(idx + vowel.len_utf8()))
}
