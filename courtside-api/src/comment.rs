use crate::{Author, Time, STUB_UUID};

use uuid::Uuid;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct CommentId(pub Uuid);

impl CommentId {
    pub fn stub() -> CommentId {
        CommentId(STUB_UUID)
    }
}

/// The kind of entity a comment thread hangs off of.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentableKind {
    Game,
    Topic,
}

impl CommentableKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommentableKind::Game => "game",
            CommentableKind::Topic => "topic",
        }
    }
}

/// Polymorphic root association of a comment thread. Invariant for the
/// lifetime of every comment attached to it.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct CommentableRef {
    pub kind: CommentableKind,
    pub id: i64,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Comment {
    pub id: CommentId,
    pub author: Author,
    pub content: String,
    pub created_at: Time,

    /// None for a top-level comment. Never changes after creation; the
    /// referenced parent belongs to the same commentable.
    pub parent_id: Option<CommentId>,

    /// Child comments, oldest first as returned by the server. The client
    /// never reorders them. May nest to arbitrary depth.
    #[serde(default)]
    pub replies: Vec<Comment>,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NewComment {
    pub commentable_type: CommentableKind,
    pub commentable_id: i64,
    pub parent_id: Option<CommentId>,
    pub content: String,
}

impl NewComment {
    pub fn on(target: CommentableRef, parent_id: Option<CommentId>, content: String) -> NewComment {
        NewComment {
            commentable_type: target.kind,
            commentable_id: target.id,
            parent_id,
            content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UserId;

    #[test]
    fn replies_default_to_empty() {
        let json = serde_json::json!({
            "id": crate::STUB_UUID,
            "author": { "id": crate::STUB_UUID, "name": "ref" },
            "content": "and one!",
            "created_at": "2024-03-01T19:30:00Z",
            "parent_id": null,
        });
        let c: Comment = serde_json::from_value(json).expect("deserializing comment");
        assert_eq!(c.id, CommentId::stub());
        assert_eq!(c.author.id, UserId::stub());
        assert!(c.replies.is_empty());
        assert_eq!(c.parent_id, None);
    }

    #[test]
    fn new_comment_wire_names_are_snake_case() {
        let body = NewComment::on(
            CommentableRef {
                kind: CommentableKind::Game,
                id: 42,
            },
            None,
            String::from("great game"),
        );
        let json = serde_json::to_value(&body).expect("serializing new comment");
        assert_eq!(json["commentable_type"], "game");
        assert_eq!(json["commentable_id"], 42);
        assert_eq!(json["parent_id"], serde_json::Value::Null);
        assert_eq!(json["content"], "great game");
    }
}
