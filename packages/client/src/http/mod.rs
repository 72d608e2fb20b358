//! HTTP building blocks: verbs, schemes, headers, params, requests and responses

pub mod compression;
pub mod headers;
pub mod method;
pub mod params;
pub mod request;
pub mod response;
pub mod url;

pub use headers::Headers;
pub use method::{IntoMethod, Method};
pub use params::Params;
pub use request::{HttpRequest, RequestOptions};
pub use response::Response;
pub use self::url::{Origin, Scheme};
