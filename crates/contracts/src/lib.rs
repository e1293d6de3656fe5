pub mod shared;
pub mod usecases;
