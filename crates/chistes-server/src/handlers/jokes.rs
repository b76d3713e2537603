//! Joke handlers: upstream fetch plus create/update/delete on the store.

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use chistes_core::{JokeNumber, Provider};

use crate::error::{ApiError, JOKE_NOT_FOUND};
use crate::schema::jokes::{
    FetchedJokeResponse, JokeQuery, JokeTextRequest, MessageResponse, SavedJokeResponse,
};
use crate::state::AppState;

const INVALID_PROVIDER: &str = "Tipo de chiste no válido. Debe ser \"Chuck\" o \"Dad\".";
const TEXT_REQUIRED: &str = "El campo \"texto\" es obligatorio.";
const TEXT_REQUIRED_FOR_UPDATE: &str = "El campo \"texto\" es obligatorio para la actualización.";
const UPDATE_FAILED: &str = "Ocurrió un error al actualizar el chiste.";
const INVALID_NUMBER: &str = "El número de chiste debe ser un entero.";

fn parse_joke_number(raw: &str) -> Result<JokeNumber, ApiError> {
    raw.trim()
        .parse::<i64>()
        .map(JokeNumber)
        .map_err(|_| ApiError::BadRequest(INVALID_NUMBER.to_string()))
}

/// Fetches a joke from the requested provider, or a random one.
///
/// `GET /chistes?tipo={Chuck|Dad}`
pub async fn get_joke(
    State(state): State<AppState>,
    Query(query): Query<JokeQuery>,
) -> Result<Json<FetchedJokeResponse>, ApiError> {
    let provider = match query.tipo.as_deref().filter(|t| !t.is_empty()) {
        None => Provider::random(),
        Some(tipo) => tipo
            .parse::<Provider>()
            .map_err(|_| ApiError::BadRequest(INVALID_PROVIDER.to_string()))?,
    };

    let chiste = state
        .fetcher
        .fetch(provider)
        .await
        .map_err(|e| ApiError::internal("Ocurrió un error al obtener el chiste.", e))?;

    Ok(Json(FetchedJokeResponse { chiste }))
}

/// Stores a new joke under the next available number.
///
/// `POST /chistes`
pub async fn create_joke(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<SavedJokeResponse>), ApiError> {
    let req = JokeTextRequest::from_body(&body);
    let texto = req
        .text()
        .ok_or_else(|| ApiError::BadRequest(TEXT_REQUIRED.to_string()))?;

    let mut store = state.store.lock().await;
    let chiste = store
        .create(texto)
        .map_err(|e| ApiError::from_storage("Ocurrió un error al guardar el chiste.", e))?;
    tracing::info!(numero = %chiste.numero, "joke created");

    Ok((
        StatusCode::CREATED,
        Json(SavedJokeResponse {
            mensaje: "Chiste guardado con éxito".to_string(),
            chiste,
        }),
    ))
}

/// Replaces the text of an existing joke.
///
/// `PUT /chistes/{number}`
pub async fn update_joke(
    State(state): State<AppState>,
    Path(number): Path<String>,
    body: Bytes,
) -> Result<Json<SavedJokeResponse>, ApiError> {
    let req = JokeTextRequest::from_body(&body);
    let texto = req
        .text()
        .ok_or_else(|| ApiError::BadRequest(TEXT_REQUIRED_FOR_UPDATE.to_string()))?;
    let number = parse_joke_number(&number)?;

    let mut store = state.store.lock().await;
    if store
        .find_by_number(number)
        .map_err(|e| ApiError::from_storage(UPDATE_FAILED, e))?
        .is_none()
    {
        return Err(ApiError::NotFound(JOKE_NOT_FOUND.to_string()));
    }
    let chiste = store
        .update_text(number, texto)
        .map_err(|e| ApiError::from_storage(UPDATE_FAILED, e))?;
    tracing::info!(numero = %number, "joke updated");

    Ok(Json(SavedJokeResponse {
        mensaje: "Chiste actualizado con éxito".to_string(),
        chiste,
    }))
}

/// Deletes a joke by number.
///
/// `DELETE /chistes/{number}`
pub async fn delete_joke(
    State(state): State<AppState>,
    Path(number): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let number = parse_joke_number(&number)?;

    let mut store = state.store.lock().await;
    let deleted = store
        .delete(number)
        .map_err(|e| ApiError::from_storage("Ocurrió un error al eliminar el chiste.", e))?;
    if deleted == 0 {
        return Err(ApiError::NotFound(JOKE_NOT_FOUND.to_string()));
    }
    tracing::info!(numero = %number, "joke deleted");

    Ok(Json(MessageResponse {
        mensaje: "Chiste eliminado con éxito".to_string(),
    }))
}
