//! Еталонні списки слів у форматі `[{"val": ..., "result": ...}]`
//! та перевірка стемера на них

use crate::stemmer::Stemmer;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};
use walkdir::WalkDir;

#[derive(Debug, Error)]
pub enum WordListError {
    #[error("Помилка читання файлу {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Помилка парсингу JSON {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
}

impl WordListError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io { path: path.display().to_string(), source }
    }

    fn json(path: &Path, source: serde_json::Error) -> Self {
        Self::Json { path: path.display().to_string(), source }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WordPair {
    pub val: String,
    pub result: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub val: String,
    pub expected: String,
    pub actual: String,
}

#[derive(Serialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub total: usize,
    pub mismatches: Vec<Mismatch>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty()
    }

    pub fn merge(&mut self, other: CheckReport) {
        self.total += other.total;
        self.mismatches.extend(other.mismatches);
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "перевірено {} слів, розбіжностей: {}",
            self.total,
            self.mismatches.len()
        )
    }
}

pub fn load_from_file(path: impl AsRef<Path>) -> Result<Vec<WordPair>, WordListError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "Завантаження списку слів");

    let file = fs::File::open(path).map_err(|e| WordListError::io(path, e))?;
    let reader = BufReader::with_capacity(1024 * 1024, file); // 1MB буфер

    serde_json::from_reader(reader).map_err(|e| WordListError::json(path, e))
}

/// Зберігає список атомарно: спершу у тимчасовий файл, потім перейменування
pub fn save_to_file(path: impl AsRef<Path>, pairs: &[WordPair]) -> Result<(), WordListError> {
    let path = path.as_ref();
    let temp_path = path.with_extension("json.tmp");

    {
        let file = fs::File::create(&temp_path).map_err(|e| WordListError::io(&temp_path, e))?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, pairs).map_err(|e| {
            // Видаляємо пошкоджений тимчасовий файл
            let _ = fs::remove_file(&temp_path);
            WordListError::json(&temp_path, e)
        })?;
    } // writer закривається тут

    fs::rename(&temp_path, path).map_err(|e| WordListError::io(path, e))?;
    info!(path = %path.display(), count = pairs.len(), "Список слів збережено");
    Ok(())
}

/// Будує еталонний список із поточних результатів стемера
pub fn record<S>(stemmer: &Stemmer, words: &[S]) -> Vec<WordPair>
where
    S: AsRef<str> + Sync,
{
    words
        .iter()
        .zip(stemmer.stem_all(words))
        .map(|(word, result)| WordPair { val: word.as_ref().to_string(), result })
        .collect()
}

/// Порівнює результат стемера з очікуваним для кожної пари
pub fn check(stemmer: &Stemmer, pairs: &[WordPair]) -> CheckReport {
    let mismatches = pairs
        .par_iter()
        .filter_map(|pair| {
            let actual = stemmer.stem(&pair.val);
            (actual != pair.result).then(|| Mismatch {
                val: pair.val.clone(),
                expected: pair.result.clone(),
                actual,
            })
        })
        .collect();

    CheckReport { total: pairs.len(), mismatches }
}

/// Завантажує і перевіряє один файл
pub fn check_file(stemmer: &Stemmer, path: impl AsRef<Path>) -> Result<CheckReport, WordListError> {
    let pairs = load_from_file(&path)?;
    let report = check(stemmer, &pairs);
    info!(path = %path.as_ref().display(), "{}", report);
    Ok(report)
}

/// Шукає всі `*.json` у папці, результат відсортовано
pub fn find_word_lists(dir: impl AsRef<Path>) -> Vec<PathBuf> {
    const MAX_DEPTH: usize = 10;

    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .max_depth(MAX_DEPTH)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "json"))
        .map(|e| e.into_path())
        .collect();

    files.sort();
    files
}
