//! Response bodies for the demo endpoints.

use serde::Serialize;

/// Greeting returned by `/v1/hello`.
pub const GREETING: &str = "Hello, World!";

/// Response body for `GET /v1/hello`.
///
/// ```json
/// { "text": "Hello, World!", "status": "Hello, World!" }
/// ```
#[derive(Debug, Serialize)]
pub struct HelloResponse {
    pub text: String,
    pub status: String,
}

impl HelloResponse {
    pub fn greeting() -> Self {
        Self {
            text: GREETING.to_string(),
            status: GREETING.to_string(),
        }
    }
}

/// Response body for `GET /v1/shapes`.
///
/// ```json
/// { "shape": "Circle", "status": "Circle (api key protected)" }
/// ```
#[derive(Debug, Serialize)]
pub struct ShapeResponse {
    pub shape: String,
    pub status: String,
}

impl ShapeResponse {
    pub fn new(shape: &str) -> Self {
        Self {
            shape: shape.to_string(),
            status: protected_status(shape),
        }
    }
}

/// Response body for `GET /v1/forms`.
///
/// ```json
/// { "form": "Cube", "status": "Cube (api key protected)" }
/// ```
#[derive(Debug, Serialize)]
pub struct FormResponse {
    pub form: String,
    pub status: String,
}

impl FormResponse {
    pub fn new(form: &str) -> Self {
        Self {
            form: form.to_string(),
            status: protected_status(form),
        }
    }
}

fn protected_status(value: &str) -> String {
    format!("{value} (api key protected)")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn hello_serializes_greeting_twice() {
        let value = serde_json::to_value(HelloResponse::greeting()).unwrap();
        assert_eq!(
            value,
            json!({ "text": "Hello, World!", "status": "Hello, World!" })
        );
    }

    #[test]
    fn shape_status_marks_protection() {
        let value = serde_json::to_value(ShapeResponse::new("Square")).unwrap();
        assert_eq!(
            value,
            json!({ "shape": "Square", "status": "Square (api key protected)" })
        );
    }

    #[test]
    fn form_uses_form_field_name() {
        let value = serde_json::to_value(FormResponse::new("Sphere")).unwrap();
        assert_eq!(value["form"], "Sphere");
        assert_eq!(value["status"], "Sphere (api key protected)");
        assert!(value.get("shape").is_none());
    }
}
