use std::path::Path;
use std::process::exit;
use std::sync::Arc;
use av_scan_service::clamav::structs::clamd_client::ClamdClient;
use av_scan_service::common::common::{certificate_arguments, setup_logging};
use av_scan_service::config::structs::configuration::Configuration;
use av_scan_service::http::http::http_service;
use av_scan_service::http::structs::http_service_data::ScanServiceData;
use av_scan_service::scan::structs::scan_orchestrator::ScanOrchestrator;
use av_scan_service::ssl::ssl::{create_certificate_store, generate_self_signed};
use av_scan_service::ssl::structs::certificate_watcher::CertificateWatcher;
use av_scan_service::ssl::structs::watch_target::WatchTarget;
use av_scan_service::stats::structs::stats_atomics::StatsAtomics;
use av_scan_service::structs::Cli;
use clap::Parser;
use log::{error, info};
use sentry::ClientInitGuard;
use tokio::runtime::Builder;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    if args.create_selfsigned {
        return match generate_self_signed(Path::new(&args.selfsigned_certfile), Path::new(&args.selfsigned_keyfile), &args.selfsigned_domain) {
            Ok(_) => Ok(()),
            Err(e) => {
                eprintln!("[CERTGEN] {e}");
                exit(1)
            }
        };
    }

    let mut config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => config,
        Err(_) => exit(101)
    };

    match certificate_arguments(args.certfile.clone(), args.keyfile.clone()) {
        Ok(Some((certfile, keyfile))) => {
            config.http_server.ssl = true;
            config.http_server.ssl_cert = certfile.display().to_string();
            config.http_server.ssl_key = keyfile.display().to_string();
            if let Err(e) = config.validate() {
                eprintln!("[VALIDATE] {e}");
                exit(101)
            }
        }
        Ok(None) => {}
        Err(e) => {
            eprintln!("[VALIDATE] {e}");
            exit(101)
        }
    }
    let config = Arc::new(config);

    if let Err(e) = setup_logging(&config) {
        eprintln!("{e}");
        exit(1)
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    #[warn(unused_variables)]
    let _sentry_guard: ClientInitGuard;
    if config.sentry_config.enabled {
        _sentry_guard = sentry::init((config.sentry_config.dsn.clone(), sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: config.sentry_config.environment.clone().map(Into::into),
            debug: config.sentry_config.debug,
            sample_rate: config.sentry_config.sample_rate,
            max_breadcrumbs: config.sentry_config.max_breadcrumbs,
            attach_stacktrace: config.sentry_config.attach_stacktrace,
            send_default_pii: config.sentry_config.send_default_pii,
            traces_sample_rate: config.sentry_config.traces_sample_rate,
            session_mode: sentry::SessionMode::Request,
            auto_session_tracking: true,
            ..Default::default()
        }));
    }

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let stats = Arc::new(StatsAtomics::new());
            let engine = Arc::new(ClamdClient::new(&config.clamd));
            info!("[BOOT] Using clamd at {}", engine.address());
            let orchestrator = ScanOrchestrator::new(engine, stats.clone());
            let http_server_config = Arc::new(config.http_server.clone());

            let mut certificate_store = None;
            let mut certificate_watcher = None;
            if config.http_server.ssl {
                let target = WatchTarget::new(&config.http_server.ssl_cert, &config.http_server.ssl_key)
                    .map_err(std::io::Error::other)?;
                let store = create_certificate_store();
                let watcher = CertificateWatcher::new(target, store.clone(), stats.clone());
                if let Err(e) = watcher.start() {
                    error!("[BOOT] Unable to load the TLS certificate: {e}");
                    exit(1)
                }
                certificate_store = Some(store);
                certificate_watcher = Some(watcher);
            }

            let data = Arc::new(ScanServiceData {
                orchestrator,
                stats: stats.clone(),
                http_server_config: http_server_config.clone(),
                certificate_store: certificate_store.clone(),
            });

            let address = config.http_server.listen_address().map_err(std::io::Error::other)?;
            let (handle, server) = http_service(address, data, http_server_config, certificate_store).await?;
            let mut server = tokio::spawn(server);

            info!("[BOOT] Service started, press CTRL+C to stop");

            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    info!("[BOOT] Shutdown request received, shutting down...");
                }
                result = &mut server => {
                    error!("[BOOT] HTTP server stopped unexpectedly: {result:?}");
                }
            }

            handle.stop(true).await;
            if let Some(watcher) = certificate_watcher {
                watcher.stop().await;
            }

            info!("[BOOT] Server shutting down completed");
            Ok(())
        })
}
