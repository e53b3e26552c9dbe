//! Creation routine description and parameter binding

pub mod binder;
pub mod descriptor;

pub use binder::InitializerBinder;
pub use descriptor::CreationRoutineDescriptor;
