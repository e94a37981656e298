// Engine configuration: server/simulation settings and exchange credentials.
pub mod settings;
