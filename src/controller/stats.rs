use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use golf_stats_core::model::StatsMode;
use golf_stats_core::stats::{HandicapConfig, load_dashboard};
use log::{error, warn};
use serde_json::json;
use std::collections::HashMap;

use crate::db::SqliteStore;

/// `GET /stats?user=<id>&mode=<9|18|combined>`. Mode defaults to combined.
pub async fn stats(
    query: web::Query<HashMap<String, String>>,
    store: Data<SqliteStore>,
    handicap_config: Data<HandicapConfig>,
) -> impl Responder {
    let user_id: i64 = match query.get("user").and_then(|s| s.trim().parse().ok()) {
        Some(id) => id,
        None => {
            warn!("stats request without a usable user parameter");
            return HttpResponse::BadRequest().json(json!({"error": "user parameter is required"}));
        }
    };

    let mode = match query.get("mode").map(|s| s.trim()) {
        None | Some("") => StatsMode::Combined,
        Some(mode) => match mode.parse::<StatsMode>() {
            Ok(mode) => mode,
            Err(e) => {
                warn!("stats request for user {user_id}: {e}");
                return HttpResponse::BadRequest().json(json!({"error": e.to_string()}));
            }
        },
    };

    match load_dashboard(store.get_ref(), user_id, mode, handicap_config.get_ref()).await {
        Ok(stats) => HttpResponse::Ok().json(stats),
        Err(e) => {
            error!("stats for user {user_id} failed: {e}");
            HttpResponse::InternalServerError().json(json!({"error": e.to_string()}))
        }
    }
}
