//! src/app/config.rs
//!
//! Configuration du service (sans HTTP, sans noyau).
//!
//! Couches, de la plus faible à la plus forte :
//! - défauts (port 8080)
//! - variable d’environnement `PORT`
//! - option CLI `--port` (appliquée dans main.rs)

use std::net::{Ipv4Addr, SocketAddr};

use anyhow::Context;
use figment::providers::{Env, Serialized};
use figment::Figment;
use serde::{Deserialize, Serialize};

/// Port par défaut si `PORT` est absente.
const PORT_DEFAUT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigServeur {
    pub port: u16,
}

impl Default for ConfigServeur {
    fn default() -> Self {
        Self { port: PORT_DEFAUT }
    }
}

impl ConfigServeur {
    /// Défauts, puis `PORT` si présente.
    pub fn depuis_env() -> anyhow::Result<Self> {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Env::raw().only(&["PORT"]))
            .extract()
            .context("configuration invalide (PORT doit être un entier 0..=65535)")
    }

    /// Écoute sur toutes les interfaces.
    pub fn adresse(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}
