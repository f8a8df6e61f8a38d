use chrono::Utc;

pub use uuid::{uuid, Uuid};
pub type Time = chrono::DateTime<Utc>;

pub const STUB_UUID: Uuid = uuid!("ffffffff-ffff-ffff-ffff-ffffffffffff");

mod comment;
pub use comment::{Comment, CommentId, CommentableKind, CommentableRef, NewComment};

mod error;
pub use error::{ApiError, ErrorBody, ValidationErrors};

mod game;
pub use game::{Game, GameId, GameStatus, GameTeam, League};

mod news;
pub use news::NewsArticle;

mod player;
pub use player::{PlayerMatch, PlayerSearchResponse, PlayerSummary, TopPlayersResponse};

mod push;
pub use push::{
    PushKeys, PushPayload, PushSubscriptionJson, SubscribeRequest, UnsubscribeRequest,
    VapidKeyResponse,
};

mod standing;
pub use standing::{Conference, StandingRow};

mod team;
pub use team::TeamFollowRequest;

mod user;
pub use user::{Author, UserId};
