use actix_web::web::Data;
use actix_web::{App, HttpResponse, HttpServer, web};
use golf_stats::args;
use golf_stats::controller::{db_prefill::db_prefill, stats::stats};
use golf_stats::db::SqliteStore;
use golf_stats_core::stats::load_dashboard;
use log::info;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = args::args_checks()?;

    let store = SqliteStore::open(&args.db_name)?;
    store.create_tables()?;

    if args.db_startup_script.is_some() {
        store.execute_batch(&args.combined_sql_script)?;
    }

    if let Some(json) = &args.db_populate_json {
        db_prefill(json, &store)?;
    }

    if let Some(user_id) = args.report_user {
        let dashboard = load_dashboard(&store, user_id, args.mode, &args.handicap_config).await?;
        println!("{}", serde_json::to_string_pretty(&dashboard)?);
        return Ok(());
    }

    let handicap_config = args.handicap_config.clone();
    info!("serving stats on {}:{}", args.bind, args.port);
    HttpServer::new(move || {
        App::new()
            .app_data(Data::new(store.clone()))
            .app_data(Data::new(handicap_config.clone()))
            .route("/stats", web::get().to(stats))
            .route("/health", web::get().to(HttpResponse::Ok))
    })
    .bind((args.bind.as_str(), args.port))?
    .run()
    .await?;
    Ok(())
}
