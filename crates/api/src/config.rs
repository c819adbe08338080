use cellsim_core::error::CoreError;
use cellsim_core::simulation::command::{
    CommandTemplate, DEFAULT_SIMULATOR_PATH, DEFAULT_TEE_PROGRAM,
};

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for running next to the bundled
/// simulator. Override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// Path to the simulator binary.
    pub simulator_path: String,
    /// Program the simulator output is piped through.
    pub tee_program: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var          | Default                             |
    /// |------------------|-------------------------------------|
    /// | `HOST`           | `0.0.0.0`                           |
    /// | `PORT`           | `8080`                              |
    /// | `CORS_ORIGINS`   | `http://localhost:5173`             |
    /// | `SIMULATOR_PATH` | `vendors/CSim-0.4.3-Linux/bin/csim` |
    /// | `TEE_PROGRAM`    | `tee`                               |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        );

        let simulator_path =
            std::env::var("SIMULATOR_PATH").unwrap_or_else(|_| DEFAULT_SIMULATOR_PATH.into());
        let tee_program =
            std::env::var("TEE_PROGRAM").unwrap_or_else(|_| DEFAULT_TEE_PROGRAM.into());

        Self {
            host,
            port,
            cors_origins,
            simulator_path,
            tee_program,
        }
    }

    /// The command template described by this configuration.
    pub fn command_template(&self) -> Result<CommandTemplate, CoreError> {
        CommandTemplate::new(&self.simulator_path, &self.tee_program)
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
