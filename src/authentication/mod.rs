mod access_token;

pub use access_token::{AUTHENTICATION_PATH, AuthError, Credentials, authenticate};
