pub mod empleado_service;
pub mod identity;
pub mod jwt_identity;
pub mod memory_store;
pub mod store;

pub use empleado_service::{DirectoryError, EmpleadoService};
pub use identity::{IdentityError, IdentityService, NewUser, UserAccount};
pub use jwt_identity::JwtIdentity;
pub use memory_store::MemoryStore;
pub use store::{DocumentStore, StoreError};
