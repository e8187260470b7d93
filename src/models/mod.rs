pub mod empleado;

pub use empleado::{Empleado, COLLECTION};
