//! API Description
//!
//! Hand-written OpenAPI 3 document served at the configured docs path.

use axum::Json;
use serde_json::{Value, json};

/// GET {docs_path}
pub async fn openapi_document() -> Json<Value> {
    Json(document())
}

fn todo_schema_ref() -> Value {
    json!({ "$ref": "#/components/schemas/Todo" })
}

fn id_parameter() -> Value {
    json!({
        "name": "id",
        "in": "path",
        "required": true,
        "schema": { "type": "integer", "format": "int32" }
    })
}

pub fn document() -> Value {
    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "Todo API",
            "version": env!("CARGO_PKG_VERSION")
        },
        "paths": {
            "/todos": {
                "get": {
                    "summary": "List all todos",
                    "responses": {
                        "200": {
                            "description": "All todos in insertion order",
                            "content": {
                                "application/json": {
                                    "schema": { "type": "array", "items": todo_schema_ref() }
                                }
                            }
                        }
                    }
                },
                "post": {
                    "summary": "Create a todo",
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": { "$ref": "#/components/schemas/NewTodo" }
                            }
                        }
                    },
                    "responses": {
                        "201": {
                            "description": "Created; Location header points at the new todo",
                            "content": { "application/json": { "schema": todo_schema_ref() } }
                        },
                        "400": { "description": "Missing title or malformed body" }
                    }
                }
            },
            "/todos/{id}": {
                "parameters": [id_parameter()],
                "get": {
                    "summary": "Get a todo by id",
                    "responses": {
                        "200": {
                            "description": "The todo",
                            "content": { "application/json": { "schema": todo_schema_ref() } }
                        },
                        "404": { "description": "No todo with this id" }
                    }
                },
                "put": {
                    "summary": "Replace a todo",
                    "requestBody": {
                        "required": true,
                        "content": { "application/json": { "schema": todo_schema_ref() } }
                    },
                    "responses": {
                        "200": { "description": "Updated" },
                        "400": { "description": "Body id does not match path id, or malformed body" },
                        "404": { "description": "No todo with this id" }
                    }
                },
                "delete": {
                    "summary": "Delete a todo",
                    "responses": {
                        "200": { "description": "Deleted" },
                        "404": { "description": "No todo with this id" }
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "Todo": {
                    "type": "object",
                    "required": ["id", "title", "isComplete"],
                    "properties": {
                        "id": { "type": "integer", "format": "int32" },
                        "title": { "type": "string", "minLength": 1 },
                        "isComplete": { "type": "boolean" }
                    }
                },
                "NewTodo": {
                    "type": "object",
                    "required": ["title"],
                    "properties": {
                        "title": { "type": "string", "minLength": 1 },
                        "isComplete": { "type": "boolean", "default": false }
                    }
                }
            }
        }
    })
}
