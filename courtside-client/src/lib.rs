pub mod comments;

mod push;
pub use push::{Permission, PushManager, PushProvider, PushServer, PushStatus};

mod vapid;
pub use vapid::decode_public_key;

pub mod api {
    pub use courtside_api::*;
}
