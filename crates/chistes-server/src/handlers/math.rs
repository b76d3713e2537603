//! LCM and increment handlers. Both are pure and never touch shared state.

use axum::extract::Query;
use axum::Json;

use chistes_core::CoreError;

use crate::error::ApiError;
use crate::schema::math::{IncrementQuery, IncrementResponse, LcmResponse};

const LCM_NEEDS_TWO: &str = "Se requiere una lista de al menos 2 números para calcular el MCM.";
const INCREMENT_NEEDS_NUMBER: &str = "Se requiere un número para incrementar.";

fn math_error(err: CoreError) -> ApiError {
    let message = match err {
        CoreError::NonPositiveOperand { .. } => "Los números deben ser enteros positivos.",
        CoreError::Overflow => "El resultado excede el rango admitido.",
        _ => LCM_NEEDS_TWO,
    };
    ApiError::BadRequest(message.to_string())
}

/// Least common multiple of every `numbers` value.
///
/// `GET /lcm?numbers=a&numbers=b&...`
pub async fn lcm(
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<LcmResponse>, ApiError> {
    let raw: Vec<&str> = pairs
        .iter()
        .filter(|(key, _)| key == "numbers")
        .map(|(_, value)| value.as_str())
        .collect();
    if raw.len() < 2 {
        return Err(ApiError::BadRequest(LCM_NEEDS_TWO.to_string()));
    }

    let numbers = raw
        .iter()
        .map(|v| v.trim().parse::<i64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| {
            ApiError::BadRequest("Los valores de \"numbers\" deben ser enteros.".to_string())
        })?;

    let mcm = chistes_core::lcm_all(&numbers).map_err(math_error)?;
    Ok(Json(LcmResponse { mcm }))
}

/// Returns `number + 1`.
///
/// `GET /increment?number=n`
pub async fn increment(
    Query(query): Query<IncrementQuery>,
) -> Result<Json<IncrementResponse>, ApiError> {
    let raw = query
        .number
        .as_deref()
        .filter(|n| !n.is_empty())
        .ok_or_else(|| ApiError::BadRequest(INCREMENT_NEEDS_NUMBER.to_string()))?;
    let number = raw.trim().parse::<i64>().map_err(|_| {
        ApiError::BadRequest("El parámetro \"number\" debe ser un entero.".to_string())
    })?;

    let numero_incrementado = chistes_core::increment(number).map_err(math_error)?;
    Ok(Json(IncrementResponse {
        numero_incrementado,
    }))
}
