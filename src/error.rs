use thiserror::Error;

#[derive(Error, Debug)]
pub enum GadkError {
    #[error("Failed to load workflow definitions: {0}")]
    DefinitionLoad(String),

    #[error("Failed to construct workflow definition `{definition}`: {source}")]
    Construction {
        definition: String,
        #[source]
        source: Box<GadkError>,
    },

    #[error("Unsupported configuration: {0}")]
    UnsupportedConfiguration(String),

    #[error("Duplicate workflow filename `{0}`: every workflow needs its own file")]
    DuplicateFilename(String),

    #[error("{outdated} of {total} workflows are outdated, run `gadk sync` to regenerate them")]
    Outdated { outdated: usize, total: usize },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GadkError>;
