//! Domain layer: strong types with validation and invariants (no I/O).

mod list;
mod media;
mod request;
mod response;
mod validation;
mod value;

pub use list::{PipeList, SEPARATOR, normalize_list};
pub(crate) use media::is_remote_url;
pub use media::{Media, MediaReader, MediaReference, MediaStream};
pub use request::{AiFormat, ButtonRows, Hop, Presence, SmsRoute, TelegramButton};
pub use response::RawResult;
pub use validation::ValidationError;
pub use value::{AgentId, AppKey, AuthKey, Coordinates, Credentials, MessageId};
