use crate::models::config::Config;
use std::{fs::File, io::ErrorKind, path::Path};
use tally_error::{Error, ErrorType, IoError, Result};
use tracing::{debug, warn};

const CONFIG_FILE: &str = "config.yaml";

/// Read `config.yaml` from the working directory.
pub fn read() -> Result<Config> {
    read_from(CONFIG_FILE)
}

/// Read a configuration file. A missing file gives the default configuration.
pub fn read_from<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(error) if error.kind() == ErrorKind::NotFound => {
            warn!("No {} found, using default configuration.", path.display());
            return Ok(Config::default());
        },
        Err(error) => {
            return Err(Error::new(
                ErrorType::InputOutput(IoError::ReadingError),
                Some(Box::new(error)),
                Some(format!("cannot open {}", path.display())),
            ))
        },
    };

    let config: Config = serde_yaml::from_reader(file).map_err(|error| {
        Error::new(
            ErrorType::InputOutput(IoError::DeserializationError),
            Some(Box::new(error)),
            Some(format!("invalid values in {}", path.display())),
        )
    })?;

    debug!(?config, "Loaded configuration.");

    Ok(config)
}
