pub mod codec;
pub mod digest;
pub mod html;
pub mod url;

pub use codec::{base64_decode, base64_encode};
pub use digest::md5_hex;
pub use html::HtmlEscape;
pub use url::{QueryPair, QueryString, decode_component, encode_component, encode_query};
