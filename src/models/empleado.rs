use serde::{Deserialize, Serialize};

/// Document-store collection holding employee records.
pub const COLLECTION: &str = "Empleados";

/// One employee record. Keyed in the store by the identity-provider
/// account id that can authenticate as this employee; the two are never
/// independent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Empleado {
    pub email: String,
    pub nombre: String,
    pub is_admin: bool,
    /// Stored as plain text and compared directly; see `auth::password_matches`.
    pub password: String,
}
