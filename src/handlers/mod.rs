pub mod empleados;
