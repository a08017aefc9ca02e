use std::fmt;

#[derive(Debug)]
pub enum CompileError {
    /// TOML parse / deserialization error.
    ConfigParse(String),
    /// Config validation error (empty year list, non-monotone years, etc.).
    ConfigValidation(String),
    /// A year's source document could not be parsed.
    YearParse { year: i32, message: String },
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigParse(msg) => write!(f, "config parse error: {msg}"),
            Self::ConfigValidation(msg) => write!(f, "config validation error: {msg}"),
            Self::YearParse { year, message } => {
                write!(f, "year {year}: cannot parse source: {message}")
            }
        }
    }
}

impl std::error::Error for CompileError {}
