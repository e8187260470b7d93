// handlers/empleados - employee administration: admin-gated CRUD plus login
pub mod create;
pub mod delete;
pub mod list;
pub mod login;
pub mod update;

pub use create::create;
pub use delete::delete;
pub use list::list;
pub use login::login;
pub use update::update;

use serde_json::Value;

/// `Some` only when `body[field]` is a JSON string.
pub(crate) fn str_field<'a>(body: &'a Value, field: &str) -> Option<&'a str> {
    body.get(field).and_then(Value::as_str)
}

/// `Some` only when `body[field]` is a JSON boolean.
pub(crate) fn bool_field(body: &Value, field: &str) -> Option<bool> {
    body.get(field).and_then(Value::as_bool)
}
