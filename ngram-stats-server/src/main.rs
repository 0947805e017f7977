use std::env;
use std::sync::Mutex;

use actix_cors::Cors;
use actix_web::{delete, get, post, put, web, App, HttpResponse, HttpServer, Responder};
use log::{info, warn};

use serde::Deserialize;
use ngram_stats_core::model::config::parse_top_count;
use ngram_stats_core::{NGramPipeline, PipelineConfig, PipelineError};

/// Largest accepted document body, whole files included.
const MAX_DOCUMENT_BYTES: usize = 64 * 1024 * 1024;

/// Query parameters of the `/v1/report` endpoint
#[derive(Deserialize)]
struct ReportParams {
	top: Option<String>
}

struct SharedData {
	pipeline: NGramPipeline
}

impl SharedData {
	fn new(config: PipelineConfig) -> Result<Self, PipelineError> {
		Ok(Self { pipeline: NGramPipeline::new(config)? })
	}
}

fn error_response(e: PipelineError) -> HttpResponse {
	match e {
		PipelineError::InvalidMaxOrder(_) | PipelineError::InvalidTopCount(_) => HttpResponse::BadRequest().body(e.to_string()),
		PipelineError::AlreadyReported => HttpResponse::Conflict().body(e.to_string()),
		_ => HttpResponse::InternalServerError().body(e.to_string()),
	}
}

/// HTTP POST endpoint `/v1/documents`
///
/// Counts the request body as one document and returns the updated stats.
#[post("/v1/documents")]
async fn post_document(data: web::Data<Mutex<SharedData>>, body: String) -> impl Responder {
	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Pipeline lock failed"),
	};

	match shared_data.pipeline.add_document(&body) {
		Ok(()) => HttpResponse::Ok().json(shared_data.pipeline.stats()),
		Err(e) => error_response(e),
	}
}

/// HTTP GET endpoint `/v1/report`
///
/// Returns a snapshot report; `top` overrides the configured top count.
#[get("/v1/report")]
async fn get_report(data: web::Data<Mutex<SharedData>>, query: web::Query<ReportParams>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Pipeline lock failed"),
	};

	let top = match &query.top {
		None => shared_data.pipeline.config().top_count(),
		Some(s) => match parse_top_count(s) {
			Ok(t) => t,
			Err(e) => return error_response(e),
		},
	};

	HttpResponse::Ok().json(shared_data.pipeline.snapshot_top(top))
}

#[get("/v1/stats")]
async fn get_stats(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	match data.lock() {
		Ok(shared_data) => HttpResponse::Ok().json(shared_data.pipeline.stats()),
		Err(_) => HttpResponse::InternalServerError().body("Pipeline lock failed"),
	}
}

/// HTTP PUT endpoint `/v1/finish`
///
/// Produces the final report; further documents are refused until `/v1/resume`.
#[put("/v1/finish")]
async fn put_finish(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	match data.lock() {
		Ok(mut shared_data) => HttpResponse::Ok().json(shared_data.pipeline.report()),
		Err(_) => HttpResponse::InternalServerError().body("Pipeline lock failed"),
	}
}

#[put("/v1/resume")]
async fn put_resume(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	match data.lock() {
		Ok(mut shared_data) => {
			shared_data.pipeline.resume();
			HttpResponse::Ok().body("Pipeline accepting documents")
		}
		Err(_) => HttpResponse::InternalServerError().body("Pipeline lock failed"),
	}
}

/// HTTP DELETE endpoint `/v1/documents`
///
/// Drops every count and starts a fresh pipeline with the same configuration.
#[delete("/v1/documents")]
async fn delete_documents(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Pipeline lock failed"),
	};

	match NGramPipeline::new(*shared_data.pipeline.config()) {
		Ok(pipeline) => {
			shared_data.pipeline = pipeline;
			HttpResponse::Ok().body("Pipeline reset")
		}
		Err(e) => error_response(e),
	}
}

fn routes(cfg: &mut web::ServiceConfig) {
	cfg.app_data(web::PayloadConfig::new(MAX_DOCUMENT_BYTES))
		.service(post_document)
		.service(get_report)
		.service(get_stats)
		.service(put_finish)
		.service(put_resume)
		.service(delete_documents);
}

/// Main entry point for the server.
///
/// Reads the pipeline configuration from `NGRAM_MAX_ORDER` / `NGRAM_TOP`,
/// wraps the pipeline in a `Mutex` and starts an Actix-web HTTP server.
///
/// # Notes
/// - The server binds to `NGRAM_BIND`, 127.0.0.1:5000 by default.
/// - Documents are limited to `MAX_DOCUMENT_BYTES` (64 MiB) per request.
/// - An invalid configuration stops the server before binding.
#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let max_order = env::var("NGRAM_MAX_ORDER").unwrap_or_else(|_| "3".to_owned());
	let top = env::var("NGRAM_TOP").unwrap_or_else(|_| "10".to_owned());
	let bind = env::var("NGRAM_BIND").unwrap_or_else(|_| "127.0.0.1:5000".to_owned());

	let config = match PipelineConfig::parse(&max_order, &top) {
		Ok(c) => c,
		Err(e) => {
			warn!("Invalid configuration: {e}");
			return Err(e.into());
		}
	};
	let shared_data = web::Data::new(Mutex::new(SharedData::new(config)?));

	info!("Listening on {bind} (max order {}, top {})", config.max_order(), config.top_count());
	HttpServer::new(move || {
		App::new()
			.wrap(Cors::permissive())
			.app_data(shared_data.clone())
			.configure(routes)
	})
		.bind(bind)?
		.run()
		.await?;

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use actix_web::{http::StatusCode, test};
	use ngram_stats_core::model::{PipelineStats, Report};

	fn shared(max_order: usize, top: usize) -> web::Data<Mutex<SharedData>> {
		let config = PipelineConfig::new(max_order, top).unwrap();
		web::Data::new(Mutex::new(SharedData::new(config).unwrap()))
	}

	#[actix_web::test]
	async fn posted_documents_show_up_in_report() {
		let app = test::init_service(App::new().app_data(shared(2, 1)).configure(routes)).await;

		let req = test::TestRequest::post().uri("/v1/documents").set_payload("The cat sat. The cat ran.").to_request();
		let stats: PipelineStats = test::call_and_read_body_json(&app, req).await;
		assert_eq!(stats.documents, 1);
		assert_eq!(stats.sentences, 2);

		let req = test::TestRequest::get().uri("/v1/report").to_request();
		let report: Report = test::call_and_read_body_json(&app, req).await;
		assert_eq!(report.orders.len(), 2);
		assert_eq!(report.orders[1].entries[0].ngram, "the cat");
		assert_eq!(report.orders[1].entries[0].count, 2);
	}

	#[actix_web::test]
	async fn report_top_is_validated() {
		let app = test::init_service(App::new().app_data(shared(1, 1)).configure(routes)).await;

		let req = test::TestRequest::get().uri("/v1/report?top=-3").to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

		let req = test::TestRequest::get().uri("/v1/report?top=4").to_request();
		let report: Report = test::call_and_read_body_json(&app, req).await;
		assert_eq!(report.top_count, 4);
		assert!(report.is_empty());
	}

	#[actix_web::test]
	async fn finished_pipeline_refuses_documents_until_resumed() {
		let app = test::init_service(App::new().app_data(shared(1, 1)).configure(routes)).await;

		let req = test::TestRequest::put().uri("/v1/finish").to_request();
		assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

		let req = test::TestRequest::post().uri("/v1/documents").set_payload("Late.").to_request();
		assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CONFLICT);

		let req = test::TestRequest::put().uri("/v1/resume").to_request();
		assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

		let req = test::TestRequest::post().uri("/v1/documents").set_payload("Late.").to_request();
		assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
	}

	#[actix_web::test]
	async fn delete_resets_counts() {
		let app = test::init_service(App::new().app_data(shared(1, 3)).configure(routes)).await;

		let req = test::TestRequest::post().uri("/v1/documents").set_payload("Hello.").to_request();
		test::call_service(&app, req).await;

		let req = test::TestRequest::delete().uri("/v1/documents").to_request();
		assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

		let req = test::TestRequest::get().uri("/v1/stats").to_request();
		let stats: PipelineStats = test::call_and_read_body_json(&app, req).await;
		assert_eq!(stats, PipelineStats::default());
	}

	#[actix_web::test]
	async fn large_documents_are_accepted() {
		let app = test::init_service(App::new().app_data(shared(1, 1)).configure(routes)).await;

		// Larger than the default 256 KiB payload limit
		let body = "word ".repeat(100_000);
		let req = test::TestRequest::post().uri("/v1/documents").set_payload(body).to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), StatusCode::OK);

		let req = test::TestRequest::get().uri("/v1/report").to_request();
		let report: Report = test::call_and_read_body_json(&app, req).await;
		assert_eq!(report.orders[0].entries[0].count, 100_000);
	}
}
