use actix_web::{web, App, HttpServer, Result, HttpResponse, middleware::Logger};
use serde::{Deserialize, Serialize};
use tracing::info;
use ukrstem::{Language, LanguageError, Stemmer};
use crate::config::Config;

#[derive(Deserialize)]
pub struct StemQuery {
    pub word: String,
    pub lang: Option<String>,
}

#[derive(Deserialize)]
pub struct BatchRequest {
    pub words: Vec<String>,
    pub lang: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct StemResponse {
    pub word: String,
    pub stem: String,
    pub lang: Language,
}

#[derive(Serialize)]
pub struct BatchResponse {
    pub stems: Vec<String>,
    pub count: usize,
    pub lang: Language,
    pub processing_time_ms: u128,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub struct AppState {
    pub config: Config,
}

// Мова із запиту або мова за замовчуванням з конфігурації
fn resolve_language(tag: Option<&str>, default: Language) -> Result<Language, LanguageError> {
    match tag {
        Some(tag) if !tag.trim().is_empty() => tag.parse(),
        _ => Ok(default),
    }
}

fn bad_request(error: impl ToString) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: error.to_string(),
    })
}

pub async fn stem_handler(
    data: web::Data<AppState>,
    query: web::Query<StemQuery>,
) -> Result<HttpResponse> {
    let language = match resolve_language(query.lang.as_deref(), data.config.language) {
        Ok(language) => language,
        Err(err) => return Ok(bad_request(err)),
    };

    let stem = Stemmer::new(language).stem(&query.word);

    Ok(HttpResponse::Ok().json(StemResponse {
        word: query.word.clone(),
        stem,
        lang: language,
    }))
}

pub async fn stem_batch_handler(
    data: web::Data<AppState>,
    request: web::Json<BatchRequest>,
) -> Result<HttpResponse> {
    let start_time = std::time::Instant::now();

    if request.words.is_empty() {
        return Ok(bad_request("Порожній список слів"));
    }

    if request.words.len() > data.config.max_batch {
        return Ok(bad_request(format!(
            "Забагато слів: {} (максимум {})",
            request.words.len(),
            data.config.max_batch
        )));
    }

    let language = match resolve_language(request.lang.as_deref(), data.config.language) {
        Ok(language) => language,
        Err(err) => return Ok(bad_request(err)),
    };

    // Паралельний стемінг на пулі rayon
    let stems = Stemmer::new(language).stem_all(&request.words);

    Ok(HttpResponse::Ok().json(BatchResponse {
        count: stems.len(),
        stems,
        lang: language,
        processing_time_ms: start_time.elapsed().as_millis(),
    }))
}

pub async fn health_handler() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({ "status": "ok" })))
}

/// Маршрути API, спільні для сервера і тестів
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/stem", web::get().to(stem_handler))
        .route("/api/stem", web::post().to(stem_batch_handler))
        .route("/api/health", web::get().to(health_handler));
}

pub async fn start_web_server(config: Config) -> std::io::Result<()> {
    let addr = config.addr.clone();
    info!(addr = %addr, language = %config.language, "Запуск веб-сервера");

    let app_state = web::Data::new(AppState { config });

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(Logger::default())
            .configure(configure)
    })
        .bind(addr)?
        .run()
        .await
}
