//! Enveloppe JSON + correspondance erreurs -> statut HTTP.
//!
//! Les messages utilisateur sont en russe, à l’identique des clients existants.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::noyau::ErreurCalcul;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Requete {
    /// Champ absent => chaîne vide (=> valeurs insuffisantes).
    #[serde(default)]
    pub expression: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReponseCalcul {
    pub result: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReponseErreur {
    pub error: String,
}

const MSG_REQUETE: &str = "Плохой запрос";
const MSG_METHODE: &str = "разрешен только метод POST";
const MSG_INTERNE: &str = "Внутренняя ошибка сервера";

/// Message utilisateur exact pour chaque erreur du noyau.
pub fn message_calcul(e: ErreurCalcul) -> &'static str {
    match e {
        ErreurCalcul::Parentheses => "Неверно. Количество скобок не совпадает",
        ErreurCalcul::Valeurs => "Неверно. Недостаточно значений",
        ErreurCalcul::DivisionParZero => "Неверно. Деление на ноль",
        ErreurCalcul::Caractere => "Недопустимо. Допускаются только числа и ( ) + - * /",
    }
}

#[derive(Debug, Error)]
pub enum ErreurApi {
    #[error("expression refusée: {0}")]
    Calcul(#[from] ErreurCalcul),

    #[error("corps de requête invalide: {0}")]
    RequeteInvalide(String),

    #[error("méthode non autorisée: {0}")]
    MethodeNonAutorisee(String),

    /// Cinquième cas, non classé : ne devrait jamais arriver.
    #[error("erreur interne: {0}")]
    Interne(#[from] anyhow::Error),
}

impl ErreurApi {
    pub fn statut(&self) -> StatusCode {
        match self {
            ErreurApi::Calcul(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ErreurApi::RequeteInvalide(_) => StatusCode::BAD_REQUEST,
            ErreurApi::MethodeNonAutorisee(_) => StatusCode::METHOD_NOT_ALLOWED,
            ErreurApi::Interne(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ErreurApi::Calcul(e) => message_calcul(*e),
            ErreurApi::RequeteInvalide(_) => MSG_REQUETE,
            ErreurApi::MethodeNonAutorisee(_) => MSG_METHODE,
            ErreurApi::Interne(_) => MSG_INTERNE,
        }
    }
}

impl IntoResponse for ErreurApi {
    fn into_response(self) -> Response {
        match &self {
            ErreurApi::Interne(e) => tracing::error!(error = ?e, "erreur interne"),
            ErreurApi::Calcul(e) => tracing::debug!(erreur = %e, "expression refusée"),
            ErreurApi::RequeteInvalide(detail) | ErreurApi::MethodeNonAutorisee(detail) => {
                tracing::warn!(%detail, "{}", self);
            }
        }

        let corps = ReponseErreur {
            error: self.message().to_owned(),
        };
        (self.statut(), Json(corps)).into_response()
    }
}

impl IntoResponse for ReponseCalcul {
    fn into_response(self) -> Response {
        // JSON ne sait pas encoder ±∞ / NaN : serde_json les écrirait `null`.
        if !self.result.is_finite() {
            return ErreurApi::Interne(anyhow::anyhow!(
                "résultat non représentable en JSON: {}",
                self.result
            ))
            .into_response();
        }
        (StatusCode::OK, Json(self)).into_response()
    }
}
