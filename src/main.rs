mod config;
mod web_server;

use config::Config;
use std::env;
use std::io::{self, BufRead};
use std::path::Path;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;
use ukrstem::word_list::{self, CheckReport};
use ukrstem::{Language, LanguageError, Stemmer};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let mut config = Config::from_env();
    let mut args: Vec<String> = env::args().skip(1).collect();

    // --lang перекриває мову з UKRSTEM_LANG
    match take_language(&mut args) {
        Ok(Some(language)) => config.language = language,
        Ok(None) => {}
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    }

    match args.first().map(String::as_str) {
        Some("web") => start_web_mode(config).await,
        Some("check") => match args.get(1) {
            Some(path) => check_mode(&config, Path::new(path)),
            None => usage(),
        },
        Some("record") => match (args.get(1), args.get(2)) {
            (Some(input), Some(output)) => record_mode(&config, Path::new(input), Path::new(output)),
            _ => usage(),
        },
        Some("-h") | Some("--help") => usage(),
        Some(_) => stem_args(&config, &args),
        None => stem_stdin(&config),
    }
}

fn take_language(args: &mut Vec<String>) -> Result<Option<Language>, LanguageError> {
    let Some(pos) = args.iter().position(|a| a == "--lang" || a.starts_with("--lang=")) else {
        return Ok(None);
    };

    let flag = args.remove(pos);
    let tag = match flag.strip_prefix("--lang=") {
        Some(tag) => tag.to_string(),
        None if pos < args.len() => args.remove(pos),
        None => return Err(LanguageError::MissingValue),
    };
    if tag.trim().is_empty() {
        return Err(LanguageError::MissingValue);
    }
    tag.parse().map(Some)
}

fn usage() -> ExitCode {
    println!("Використання:");
    println!("  ukrstem [--lang uk|ru] <слово>...      стемінг слів");
    println!("  ukrstem [--lang uk|ru]                 стемінг рядків зі stdin");
    println!("  ukrstem check <файл.json|папка>         перевірка еталонних списків");
    println!("  ukrstem record <слова.txt> <вихід.json> створення еталонного списку");
    println!("  ukrstem web                            HTTP API (UKRSTEM_ADDR)");
    ExitCode::from(2)
}

fn stem_args(config: &Config, words: &[String]) -> ExitCode {
    let stemmer = Stemmer::new(config.language);
    for (word, stem) in words.iter().zip(stemmer.stem_all(words)) {
        println!("{} → {}", word, stem);
    }
    ExitCode::SUCCESS
}

fn stem_stdin(config: &Config) -> ExitCode {
    let stemmer = Stemmer::new(config.language);
    for line in io::stdin().lock().lines() {
        match line {
            Ok(line) => {
                let word = line.trim();
                if !word.is_empty() {
                    println!("{}", stemmer.stem(word));
                }
            }
            Err(e) => {
                error!("Помилка читання stdin: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}

fn check_mode(config: &Config, path: &Path) -> ExitCode {
    let stemmer = Stemmer::new(config.language);

    let files = if path.is_dir() {
        word_list::find_word_lists(path)
    } else {
        vec![path.to_path_buf()]
    };

    if files.is_empty() {
        println!("⚠️  Не знайдено жодного списку слів у: {}", path.display());
        return ExitCode::FAILURE;
    }

    println!("🔍 Перевірка {} списків ({})", files.len(), config.language);

    let mut total = CheckReport::default();
    for file in &files {
        match word_list::check_file(&stemmer, file) {
            Ok(report) => {
                for m in &report.mismatches {
                    println!("❌ {}: {} → {} (очікувалось {})", file.display(), m.val, m.actual, m.expected);
                }
                total.merge(report);
            }
            Err(e) => {
                error!("{}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    if total.is_clean() {
        println!("✅ Усе збігається: {}", total);
        ExitCode::SUCCESS
    } else {
        println!("❌ Є розбіжності: {}", total);
        ExitCode::FAILURE
    }
}

fn record_mode(config: &Config, input: &Path, output: &Path) -> ExitCode {
    let content = match std::fs::read_to_string(input) {
        Ok(content) => content,
        Err(e) => {
            error!("Помилка читання {}: {}", input.display(), e);
            return ExitCode::FAILURE;
        }
    };

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .collect();

    let pairs = word_list::record(&Stemmer::new(config.language), &words);
    match word_list::save_to_file(output, &pairs) {
        Ok(()) => {
            println!("💾 Збережено {} пар у {}", pairs.len(), output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn start_web_mode(config: Config) -> ExitCode {
    println!("🔥 ukrstem - Web Mode");
    println!("=====================");

    if let Err(e) = web_server::start_web_server(config).await {
        error!("❌ Помилка запуску сервера: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_take_language() {
        let mut a = args(&["--lang", "ru", "книга"]);
        assert_eq!(take_language(&mut a), Ok(Some(Language::Russian)));
        assert_eq!(a, args(&["книга"]));

        let mut a = args(&["check", "--lang=uk", "x.json"]);
        assert_eq!(take_language(&mut a), Ok(Some(Language::Ukrainian)));
        assert_eq!(a, args(&["check", "x.json"]));

        let mut a = args(&["книга"]);
        assert_eq!(take_language(&mut a), Ok(None));

        let mut a = args(&["книга", "--lang"]);
        assert_eq!(take_language(&mut a), Err(LanguageError::MissingValue));

        let mut a = args(&["--lang=", "книга"]);
        assert_eq!(take_language(&mut a), Err(LanguageError::MissingValue));

        let mut a = args(&["--lang", "pl"]);
        assert_eq!(take_language(&mut a), Err(LanguageError::Unknown("pl".to_string())));
    }
}
