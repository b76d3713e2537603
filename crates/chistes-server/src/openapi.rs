//! OpenAPI 3.0 description of the public API.
//!
//! Served as JSON at `/api-docs/openapi.json`. Kept next to the router so a
//! new route and its description land in the same change.

use serde_json::{json, Value};

pub const DOCS_PATH: &str = "/api-docs/openapi.json";

fn error_response(description: &str) -> Value {
    json!({
        "description": description,
        "content": {
            "application/json": {
                "schema": { "$ref": "#/components/schemas/Error" }
            }
        }
    })
}

fn texto_body() -> Value {
    json!({
        "required": true,
        "content": {
            "application/json": {
                "schema": {
                    "type": "object",
                    "required": ["texto"],
                    "properties": { "texto": { "type": "string" } }
                }
            }
        }
    })
}

fn number_path_param() -> Value {
    json!({
        "in": "path",
        "name": "number",
        "required": true,
        "description": "Número de identificación del chiste.",
        "schema": { "type": "integer" }
    })
}

fn chistes_path() -> Value {
    json!({
        "get": {
            "tags": ["Chistes"],
            "summary": "Obtiene chistes aleatorios o específicos.",
            "parameters": [{
                "in": "query",
                "name": "tipo",
                "required": false,
                "description": "Tipo de chiste (\"Chuck\" o \"Dad\").",
                "schema": { "type": "string", "enum": ["Chuck", "Dad"] }
            }],
            "responses": {
                "200": {
                    "description": "Chiste obtenido con éxito.",
                    "content": {
                        "application/json": {
                            "example": { "chiste": "Chuck Norris Joke" }
                        }
                    }
                },
                "400": error_response("Tipo de chiste no válido."),
                "500": error_response("Error del proveedor externo.")
            }
        },
        "post": {
            "tags": ["Chistes"],
            "summary": "Guarda un nuevo chiste en la base de datos.",
            "requestBody": texto_body(),
            "responses": {
                "201": {
                    "description": "Chiste guardado con éxito.",
                    "content": {
                        "application/json": {
                            "schema": { "$ref": "#/components/schemas/ChisteGuardado" }
                        }
                    }
                },
                "400": error_response("Falta el campo \"texto\"."),
                "500": error_response("Error de almacenamiento.")
            }
        }
    })
}

fn chiste_by_number_path() -> Value {
    json!({
        "put": {
            "tags": ["Chistes"],
            "summary": "Actualiza un chiste por su número de identificación.",
            "parameters": [number_path_param()],
            "requestBody": texto_body(),
            "responses": {
                "200": {
                    "description": "Chiste actualizado con éxito.",
                    "content": {
                        "application/json": {
                            "schema": { "$ref": "#/components/schemas/ChisteGuardado" }
                        }
                    }
                },
                "400": error_response("Falta el campo \"texto\"."),
                "404": error_response("Chiste no encontrado."),
                "500": error_response("Error de almacenamiento.")
            }
        },
        "delete": {
            "tags": ["Chistes"],
            "summary": "Elimina un chiste por su número de identificación.",
            "parameters": [number_path_param()],
            "responses": {
                "200": {
                    "description": "Chiste eliminado con éxito.",
                    "content": {
                        "application/json": {
                            "schema": {
                                "type": "object",
                                "properties": { "mensaje": { "type": "string" } }
                            }
                        }
                    }
                },
                "404": error_response("Chiste no encontrado."),
                "500": error_response("Error de almacenamiento.")
            }
        }
    })
}

fn lcm_path() -> Value {
    json!({
        "get": {
            "tags": ["Matemáticas"],
            "summary": "Calcula el MCM de una lista de números.",
            "parameters": [{
                "in": "query",
                "name": "numbers",
                "required": true,
                "style": "form",
                "explode": true,
                "schema": { "type": "array", "items": { "type": "integer" }, "minItems": 2 }
            }],
            "responses": {
                "200": {
                    "description": "MCM calculado con éxito.",
                    "content": {
                        "application/json": { "example": { "mcm": 24 } }
                    }
                },
                "400": error_response("Se requieren al menos 2 números enteros.")
            }
        }
    })
}

fn increment_path() -> Value {
    json!({
        "get": {
            "tags": ["Matemáticas"],
            "summary": "Incrementa un número en 1.",
            "parameters": [{
                "in": "query",
                "name": "number",
                "required": true,
                "schema": { "type": "integer" }
            }],
            "responses": {
                "200": {
                    "description": "Número incrementado con éxito.",
                    "content": {
                        "application/json": { "example": { "numeroIncrementado": 6 } }
                    }
                },
                "400": error_response("Falta el número.")
            }
        }
    })
}

fn components() -> Value {
    json!({
        "schemas": {
            "Chiste": {
                "type": "object",
                "properties": {
                    "numero": { "type": "integer", "example": 1 },
                    "texto": { "type": "string", "example": "Este es un chiste de ejemplo." }
                }
            },
            "ChisteGuardado": {
                "type": "object",
                "properties": {
                    "mensaje": { "type": "string" },
                    "chiste": { "$ref": "#/components/schemas/Chiste" }
                }
            },
            "Error": {
                "type": "object",
                "properties": { "error": { "type": "string" } }
            }
        }
    })
}

/// Builds the full API document.
pub fn document() -> Value {
    json!({
        "openapi": "3.0.0",
        "info": {
            "title": "API de Chistes y Matemáticas",
            "version": "1.0.0",
            "description": "Una API para chistes y operaciones matemáticas"
        },
        "tags": [
            { "name": "Chistes", "description": "Endpoints relacionados con chistes" },
            { "name": "Matemáticas", "description": "Operaciones matemáticas" }
        ],
        "paths": {
            "/chistes": chistes_path(),
            "/chistes/{number}": chiste_by_number_path(),
            "/lcm": lcm_path(),
            "/increment": increment_path()
        },
        "components": components()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_route() {
        let doc = document();
        let paths = doc["paths"].as_object().unwrap();
        for path in ["/chistes", "/chistes/{number}", "/lcm", "/increment"] {
            assert!(paths.contains_key(path), "missing {}", path);
        }
        assert!(doc["paths"]["/chistes/{number}"]["put"].is_object());
        assert!(doc["paths"]["/chistes/{number}"]["delete"].is_object());
        assert_eq!(doc["info"]["version"], "1.0.0");
    }
}
