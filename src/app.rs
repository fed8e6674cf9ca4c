// src/app.rs
//
// Calculatrice RPN — module App (racine)
// --------------------------------------
// Rôle:
// - Déclarer les sous-modules (config.rs + reponse.rs + routes.rs)
// - Ré-exporter ce dont main.rs a besoin
//
// Le noyau (src/noyau) ne sait rien de HTTP : tout le “collage” vit ici.

pub mod config;
pub mod reponse;
pub mod routes;

pub use config::ConfigServeur;
pub use routes::routeur;
