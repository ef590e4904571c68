extern crate reqwest;
extern crate serde_json;
extern crate std;

pub type MetroResult<T> = std::result::Result<T, MetroError>;

#[derive(Debug)]
pub enum MetroError {
    TransportError(reqwest::Error),
    DecodeError(serde_json::Error),
    DeliveryError(u16, String),
    IoError(std::io::Error),
}

impl std::fmt::Display for MetroError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            MetroError::TransportError(ref err) => {
                return write!(f, "Transport Error: {}", err);
            },
            MetroError::DecodeError(ref err) => {
                return write!(f, "Decode Error: {}", err);
            },
            MetroError::DeliveryError(status, ref body) => {
                return write!(f, "Delivery Error: StatusCode: {}, Body: {}", status, body);
            },
            MetroError::IoError(ref err) => {
                return write!(f, "IO Error: {}", err);
            },
        }
    }
}

impl std::error::Error for MetroError {
    fn cause(&self) -> Option<&dyn std::error::Error> {
        return None
    }
}

impl From<reqwest::Error> for MetroError {
    fn from(err: reqwest::Error) -> MetroError {
        return MetroError::TransportError(err);
    }
}

impl From<serde_json::Error> for MetroError {
    fn from(err: serde_json::Error) -> MetroError {
        return MetroError::DecodeError(err);
    }
}

impl From<std::io::Error> for MetroError {
    fn from(err: std::io::Error) -> MetroError {
        return MetroError::IoError(err);
    }
}
