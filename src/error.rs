use custom_error::custom_error;

pub type Result<T> = std::result::Result<T, Error>;

custom_error! {pub Error
    Io{source: std::io::Error} = "I/O error",
    Json{serde_json: serde_json::Error} = "JSON error: {serde_json}",
    Survey{msg: String} = "invalid survey record: {msg}"
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Json { serde_json: e }
    }
}
