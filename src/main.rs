use actix_multipart::form::MultipartFormConfig;
use actix_web::middleware::from_fn;
use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;

use comparison_center::config::ServerConfig;
use comparison_center::db::{establish_connection_pool, run_pending_migrations};
use comparison_center::ids::UuidGenerator;
use comparison_center::metrics::{RequestMetrics, show_metrics, track_requests};
use comparison_center::repository::DieselRepository;
use comparison_center::routes::bad_request_handler;
use comparison_center::routes::comparisons::{
    add_comparison, edit_comparison, remove_comparison, show_comparison, show_comparisons,
};
use comparison_center::routes::custom_options::{
    add_custom_option, edit_custom_option, remove_custom_option, show_custom_option,
    show_custom_options,
};
use comparison_center::routes::objects::{
    add_object, edit_object, remove_object, show_object, show_object_photo, show_objects,
    upload_object_photo,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let server_config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&server_config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    match pool.get() {
        Ok(mut conn) => {
            if let Err(e) = run_pending_migrations(&mut conn) {
                log::error!("Failed to run migrations: {e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            log::error!("Failed to get database connection: {e}");
            std::process::exit(1);
        }
    }

    if let Err(e) = std::fs::create_dir_all(&server_config.photos_dir) {
        log::error!(
            "Failed to create photos directory {}: {e}",
            server_config.photos_dir.display()
        );
        std::process::exit(1);
    }

    let metrics = match RequestMetrics::new() {
        Ok(metrics) => web::Data::new(metrics),
        Err(e) => {
            log::error!("Failed to register metrics: {e}");
            std::process::exit(1);
        }
    };

    let repo = DieselRepository::new(pool);
    let ids = UuidGenerator::new();
    let upload_limit = server_config.max_upload_size_bytes();
    let bind = (server_config.address.clone(), server_config.port);

    log::info!("Starting metrics server on {}", server_config.metrics_address);

    let metrics_data = metrics.clone();
    let metrics_server = HttpServer::new(move || {
        App::new()
            .app_data(metrics_data.clone())
            .service(show_metrics)
    })
    .workers(1)
    .bind(server_config.metrics_address.as_str())?
    .run();
    let metrics_handle = metrics_server.handle();
    actix_web::rt::spawn(metrics_server);

    log::info!("Starting server on {}:{}", bind.0, bind.1);

    let read_timeout = server_config.read_timeout;
    let write_timeout = server_config.write_timeout;
    let idle_timeout = server_config.idle_timeout;
    let shutdown_timeout = server_config.shutdown_timeout.as_secs();

    let result = HttpServer::new(move || {
        App::new()
            .wrap(from_fn(track_requests))
            .wrap(middleware::Logger::default())
            .app_data(web::JsonConfig::default().error_handler(bad_request_handler))
            .app_data(web::QueryConfig::default().error_handler(bad_request_handler))
            .app_data(
                MultipartFormConfig::default()
                    .total_limit(upload_limit)
                    .memory_limit(upload_limit)
                    .error_handler(bad_request_handler),
            )
            .service(show_comparisons)
            .service(show_comparison)
            .service(add_comparison)
            .service(edit_comparison)
            .service(remove_comparison)
            .service(show_custom_options)
            .service(show_custom_option)
            .service(add_custom_option)
            .service(edit_custom_option)
            .service(remove_custom_option)
            .service(show_objects)
            .service(show_object)
            .service(add_object)
            .service(edit_object)
            .service(remove_object)
            .service(show_object_photo)
            .service(upload_object_photo)
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(ids))
            .app_data(web::Data::new(server_config.clone()))
            .app_data(metrics.clone())
    })
    .client_request_timeout(read_timeout)
    .client_disconnect_timeout(write_timeout)
    .keep_alive(idle_timeout)
    .shutdown_timeout(shutdown_timeout)
    .bind(bind)?
    .run()
    .await;

    metrics_handle.stop(true).await;
    result
}
