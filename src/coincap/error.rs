use std::error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// An item of `data` in a 200 response could not be coerced into an `Asset`.
    MalformedAsset {
        index: usize,
        id: Option<String>,
        field: &'static str,
        reason: String,
    },
    /// The API answered with a status other than 200 or 400.
    UnhandledStatus(u16),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ParseError::MalformedAsset {
                index,
                ref id,
                field,
                ref reason,
            } => match id {
                Some(id) => write!(
                    f,
                    "Malformed asset at index {} (id '{}'): field `{}` {}",
                    index, id, field, reason
                ),
                None => write!(
                    f,
                    "Malformed asset at index {}: field `{}` {}",
                    index, field, reason
                ),
            },
            ParseError::UnhandledStatus(status) => {
                write!(f, "Unhandled HTTP status code: {}", status)
            }
        }
    }
}

impl error::Error for ParseError {}

#[derive(Debug)]
pub enum ClientError {
    HttpRequest(reqwest::Error),
    JsonParse(serde_json::Error),
    Parse(ParseError),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ClientError::HttpRequest(ref err) => write!(f, "HTTP Request Error: {}", err),
            ClientError::JsonParse(ref err) => write!(f, "JSON Parse Error: {}", err),
            ClientError::Parse(ref err) => write!(f, "Response Parse Error: {}", err),
        }
    }
}

impl error::Error for ClientError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            ClientError::HttpRequest(ref err) => Some(err),
            ClientError::JsonParse(ref err) => Some(err),
            ClientError::Parse(ref err) => Some(err),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> ClientError {
        ClientError::HttpRequest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> ClientError {
        ClientError::JsonParse(err)
    }
}

impl From<ParseError> for ClientError {
    fn from(err: ParseError) -> ClientError {
        ClientError::Parse(err)
    }
}
