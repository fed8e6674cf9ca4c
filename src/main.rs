// src/main.rs
//
// Calculatrice RPN — point d’entrée du service HTTP
// -------------------------------------------------
// But:
// - Journal (tracing) : RUST_LOG, sinon niveau choisi par -v
// - Configuration    : défauts -> PORT -> --port
// - Serveur          : axum sur 0.0.0.0:<port>, arrêt propre sur Ctrl+C / SIGTERM

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::EnvFilter;

mod app;
mod noyau;

use app::ConfigServeur;

/// Évalue des expressions arithmétiques envoyées en POST JSON.
#[derive(Parser, Debug)]
#[command(name = "calculatrice_rpn", version)]
struct Cli {
    /// Port d’écoute (prioritaire sur la variable PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Verbosité du journal (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/* ------------------------ Journal ------------------------ */

fn installer_journal(verbose: u8) {
    let defaut = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filtre = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(defaut));
    tracing_subscriber::fmt().with_env_filter(filtre).init();
}

/* ------------------------ Arrêt propre ------------------------ */

async fn attendre_arret() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(%e, "Ctrl+C : installation du gestionnaire impossible");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let sigterm = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut s) => {
                s.recv().await;
            }
            Err(e) => {
                tracing::error!(%e, "SIGTERM : installation du gestionnaire impossible");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Ctrl+C reçu"),
        () = sigterm => tracing::info!("SIGTERM reçu"),
    }
    tracing::info!("arrêt du serveur");
}

/* ------------------------ Entrée ------------------------ */

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    installer_journal(cli.verbose);

    let mut config = ConfigServeur::depuis_env()?;
    if let Some(port) = cli.port {
        config.port = port;
    }

    let adresse = config.adresse();
    let ecoute = TcpListener::bind(adresse)
        .await
        .with_context(|| format!("impossible d’écouter sur {adresse}"))?;
    tracing::info!(port = config.port, "serveur démarré");

    axum::serve(ecoute, app::routeur())
        .with_graceful_shutdown(attendre_arret())
        .await
        .context("serveur HTTP interrompu")?;

    Ok(())
}
