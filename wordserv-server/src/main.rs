use actix_cors::Cors;
use actix_web::http::header::ContentType;
use actix_web::middleware::{Logger, NormalizePath};
use actix_web::{get, web, App, HttpResponse, HttpServer, Responder};
use clap::Parser;
use log::{error, info};
use serde::Deserialize;

use wordserv_core::{Corpus, Sampler};

mod config;

use config::Config;

const INDEX_HTML: &str = include_str!("../static/index.html");

/// Path segment of the `/{kind}/{count}` endpoints
#[derive(Deserialize)]
struct CountPath {
	count: String,
}

impl CountPath {
	/// Parses the requested count.
	///
	/// Only plain ASCII digits are accepted; values too large for `usize`
	/// saturate, the ceilings clamp them anyway.
	fn count(&self) -> Option<usize> {
		if self.count.is_empty() || !self.count.bytes().all(|b| b.is_ascii_digit()) {
			return None;
		}
		Some(self.count.parse().unwrap_or(usize::MAX))
	}
}

/// HTTP GET endpoint `/chapters/{count}`
///
/// Returns a list of chapters, each a list of paragraphs.
#[get("/{count}")]
async fn get_chapters(sampler: web::Data<Sampler>, path: web::Path<CountPath>) -> impl Responder {
	match path.count() {
		Some(count) => HttpResponse::Ok().json(sampler.select_chapters(count)),
		None => HttpResponse::NotFound().finish(),
	}
}

/// HTTP GET endpoint `/paragraphs/{count}`
///
/// Returns a list of paragraphs, each a list of tokens.
#[get("/{count}")]
async fn get_paragraphs(sampler: web::Data<Sampler>, path: web::Path<CountPath>) -> impl Responder {
	match path.count() {
		Some(count) => HttpResponse::Ok().json(sampler.select_paragraphs(count)),
		None => HttpResponse::NotFound().finish(),
	}
}

/// HTTP GET endpoint `/words/{count}`
///
/// Returns a flat list of words and punctuation.
#[get("/{count}")]
async fn get_words(sampler: web::Data<Sampler>, path: web::Path<CountPath>) -> impl Responder {
	match path.count() {
		Some(count) => HttpResponse::Ok().json(sampler.select_words(count)),
		None => HttpResponse::NotFound().finish(),
	}
}

async fn not_found() -> impl Responder {
	HttpResponse::NotFound().finish()
}

/// Landing page, served for every path outside the excerpt endpoints.
async fn index() -> impl Responder {
	HttpResponse::Ok().content_type(ContentType::html()).body(INDEX_HTML)
}

/// Registers the excerpt endpoints and the landing page.
fn routes(cfg: &mut web::ServiceConfig) {
	cfg.service(web::scope("/chapters").service(get_chapters).default_service(web::to(not_found)))
		.service(web::scope("/paragraphs").service(get_paragraphs).default_service(web::to(not_found)))
		.service(web::scope("/words").service(get_words).default_service(web::to(not_found)))
		.default_service(web::to(index));
}

/// Main entry point for the server.
///
/// Loads every book of the configured directory, then serves excerpts
/// on `0.0.0.0:<port>`. A corpus that fails to load stops the process
/// before the port is bound.
#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let config = Config::parse();
	let corpus = match Corpus::load(&config.book_dir) {
		Ok(corpus) => corpus,
		Err(e) => {
			error!("Failed to load books: {e}");
			return Err(e.into());
		}
	};

	let sampler = web::Data::new(Sampler::new(corpus, config.limits()));
	let limits = sampler.limits();
	info!(
		"Serving {} books on port {} (max {} words, {} paragraphs, {} chapters)",
		sampler.corpus().len(),
		config.port,
		limits.max_words,
		limits.max_paragraphs,
		limits.max_chapters
	);

	HttpServer::new(move || {
		App::new()
			.wrap(Cors::default().allow_any_origin().allowed_methods(vec!["GET"]))
			.wrap(NormalizePath::trim())
			.wrap(Logger::default())
			.app_data(sampler.clone())
			.configure(routes)
	})
		.bind(("0.0.0.0", config.port))?
		.run()
		.await?;

	Ok(())
}
