use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlockError {
    #[error("Command '{name}' With Args '{args:?}' Could Not Run:\n\t{e}")]
    CommandError { name: String, args: Vec<String>, e: String },

    #[error("Command Output Was Not UTF-8:\n\t{0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Battery Pattern Could Not Compile:\n\t{0}")]
    Regex(#[from] regex::Error),

    #[error("Cannot Find Battery In:\n{output}")]
    NotFound { output: String },

    #[error("Cannot Find Battery {index} In:\n{output}")]
    IndexNotFound { index: u32, output: String },

    #[error("Battery {index} Reports 0%")]
    EmptyBattery { index: u32 },

    #[error("Battery {index} Reports {percent}%, Outside 0-100")]
    PercentOutOfRange { index: u32, percent: u32 },

    #[error("String '{debug_string}' Could Not Convert To Integer:\n\t{e}")]
    StringParse { debug_string: String, e: std::num::ParseIntError },

    #[error("JSON Serialize Error:\n\t{0}")]
    Json(#[from] serde_json::Error),
}
