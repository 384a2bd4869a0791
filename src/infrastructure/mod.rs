// Infrastructure layer module
// Contains database adapters implementing the domain repository traits

pub mod repositories;
