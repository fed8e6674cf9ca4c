//! Point d’entrée HTTP unique.
//!
//! Le corps est lu brut puis décodé par serde_json : pas d’exigence sur `Content-Type`.

use axum::body::Bytes;
use axum::http::Method;
use axum::Router;

use crate::noyau::evaluer;
use crate::noyau::rpn::{format_postfixe, vers_postfixe};

use super::reponse::{ErreurApi, ReponseCalcul, Requete};

/// Toutes les routes, toutes les méthodes : le filtrage se fait dans le handler.
pub fn routeur() -> Router {
    Router::new().fallback(calculer)
}

/// POST `{"expression": "..."}` -> `{"result": n}` ou `{"error": "..."}`.
pub async fn calculer(methode: Method, corps: Bytes) -> Result<ReponseCalcul, ErreurApi> {
    if methode != Method::POST {
        return Err(ErreurApi::MethodeNonAutorisee(methode.to_string()));
    }

    let requete: Requete =
        serde_json::from_slice(&corps).map_err(|e| ErreurApi::RequeteInvalide(e.to_string()))?;

    if tracing::enabled!(tracing::Level::DEBUG) {
        // démarche (journal seulement) : la RPN n’est calculée que si debug actif
        let rpn = vers_postfixe(&requete.expression)
            .map(|r| format_postfixe(&r))
            .unwrap_or_default();
        tracing::debug!(expression = %requete.expression, %rpn, "évaluation");
    }

    let result = evaluer(&requete.expression)?;
    Ok(ReponseCalcul { result })
}
