//! Operations over the comment forest of a single commentable entity.
//!
//! The forest is the `Vec<Comment>` root list as materialized by the server,
//! each node carrying its own `replies`. Depth is shallow in practice but
//! nothing here bounds it.

use crate::api::{Comment, CommentId, UserId};

/// Depth-first traversal, visiting every node exactly once. Roots are at
/// depth 0, each nesting level adds exactly 1.
pub fn walk<F>(roots: &[Comment], f: &mut F)
where
    F: FnMut(&Comment, usize),
{
    walk_at(roots, 0, f)
}

fn walk_at<F>(comments: &[Comment], depth: usize, f: &mut F)
where
    F: FnMut(&Comment, usize),
{
    for c in comments {
        f(c, depth);
        walk_at(&c.replies, depth + 1, f);
    }
}

pub fn find(roots: &[Comment], id: CommentId) -> Option<&Comment> {
    for c in roots {
        if c.id == id {
            return Some(c);
        }
        if let Some(found) = find(&c.replies, id) {
            return Some(found);
        }
    }
    None
}

pub fn find_mut(roots: &mut [Comment], id: CommentId) -> Option<&mut Comment> {
    for c in roots {
        if c.id == id {
            return Some(c);
        }
        if let Some(found) = find_mut(&mut c.replies, id) {
            return Some(found);
        }
    }
    None
}

/// Number of comments in the whole forest, replies included.
pub fn total_count(roots: &[Comment]) -> usize {
    let mut n = 0;
    walk(roots, &mut |_, _| n += 1);
    n
}

/// Header label for a root list of length `n`. The header deliberately
/// counts top-level comments only, not nested replies.
pub fn count_label(n: usize) -> String {
    match n {
        1 => String::from("1 comment"),
        n => format!("{} comments", n),
    }
}

/// A comment body can be submitted once it has visible content and no
/// submission is already in flight. Whitespace-only text never reaches the
/// network.
pub fn submittable(content: &str, in_flight: bool) -> bool {
    !in_flight && !content.trim().is_empty()
}

/// Whether `viewer` authored `comment`. Gates the delete affordance.
pub fn is_author(viewer: Option<UserId>, comment: &Comment) -> bool {
    viewer == Some(comment.author.id)
}

/// Appends `reply` to its parent's reply list, preserving insertion order.
/// Returns false when the parent is not in the forest.
pub fn insert_reply(roots: &mut Vec<Comment>, parent_id: CommentId, reply: Comment) -> bool {
    match find_mut(roots, parent_id) {
        Some(parent) => {
            parent.replies.push(reply);
            true
        }
        None => false,
    }
}

/// Removes the comment and its whole subtree, mirroring the server-side
/// cascading delete. Returns false when the id is not in the forest.
pub fn remove(roots: &mut Vec<Comment>, id: CommentId) -> bool {
    if let Some(at) = roots.iter().position(|c| c.id == id) {
        roots.remove(at);
        return true;
    }
    for c in roots {
        if remove(&mut c.replies, id) {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Author, Comment, CommentId, UserId, Uuid};

    fn comment(tag: &str, replies: Vec<Comment>) -> Comment {
        Comment {
            id: CommentId(Uuid::new_v4()),
            author: Author {
                id: UserId::stub(),
                name: String::from("fan"),
            },
            content: String::from(tag),
            created_at: chrono::Utc::now(),
            parent_id: None,
            replies,
        }
    }

    /// Three roots, one nested chain three levels deep:
    /// a, b(c(d(e)), f), g
    fn forest() -> Vec<Comment> {
        vec![
            comment("a", vec![]),
            comment(
                "b",
                vec![
                    comment("c", vec![comment("d", vec![comment("e", vec![])])]),
                    comment("f", vec![]),
                ],
            ),
            comment("g", vec![]),
        ]
    }

    #[test]
    fn walk_visits_every_node_once_with_incrementing_depth() {
        let mut visited = Vec::new();
        walk(&forest(), &mut |c, depth| {
            visited.push((c.content.clone(), depth))
        });
        assert_eq!(
            visited,
            vec![
                (String::from("a"), 0),
                (String::from("b"), 0),
                (String::from("c"), 1),
                (String::from("d"), 2),
                (String::from("e"), 3),
                (String::from("f"), 1),
                (String::from("g"), 0),
            ],
        );
    }

    #[test]
    fn total_count_includes_nested_replies() {
        let roots = forest();
        assert_eq!(roots.len(), 3);
        assert_eq!(total_count(&roots), 7);
    }

    #[test]
    fn find_reaches_arbitrary_depth() {
        let roots = forest();
        let deep = roots[1].replies[0].replies[0].replies[0].id;
        assert_eq!(find(&roots, deep).map(|c| &c.content as &str), Some("e"));
        assert!(find(&roots, CommentId(Uuid::new_v4())).is_none());
    }

    #[test]
    fn insert_reply_appends_after_existing_siblings() {
        let mut roots = forest();
        let parent = roots[1].id;
        let reply = comment("h", vec![]);
        assert!(insert_reply(&mut roots, parent, reply));
        let siblings: Vec<&str> = roots[1].replies.iter().map(|c| &c.content as &str).collect();
        assert_eq!(siblings, vec!["c", "f", "h"]);
    }

    #[test]
    fn insert_reply_reports_missing_parent() {
        let mut roots = forest();
        assert!(!insert_reply(
            &mut roots,
            CommentId(Uuid::new_v4()),
            comment("orphan", vec![]),
        ));
        assert_eq!(total_count(&roots), 7);
    }

    #[test]
    fn remove_cascades_to_the_subtree() {
        let mut roots = forest();
        let nested = roots[1].replies[0].id;
        assert!(remove(&mut roots, nested));
        // c, d and e are gone together
        assert_eq!(total_count(&roots), 4);
        assert!(find(&roots, nested).is_none());
    }

    #[test]
    fn remove_root_keeps_siblings() {
        let mut roots = forest();
        let first = roots[0].id;
        assert!(remove(&mut roots, first));
        assert_eq!(roots.len(), 2);
        assert_eq!(roots[0].content, "b");
    }

    #[test]
    fn whitespace_only_content_is_not_submittable() {
        assert!(!submittable("", false));
        assert!(!submittable("   \n\t", false));
        assert!(submittable("great game", false));
    }

    #[test]
    fn in_flight_submission_blocks_another() {
        assert!(!submittable("great game", true));
    }

    #[test]
    fn delete_affordance_requires_matching_author() {
        let c = comment("a", vec![]);
        assert!(is_author(Some(UserId::stub()), &c));
        assert!(!is_author(Some(UserId(Uuid::new_v4())), &c));
        assert!(!is_author(None, &c));
    }

    #[test]
    fn count_label_pluralizes() {
        assert_eq!(count_label(0), "0 comments");
        assert_eq!(count_label(1), "1 comment");
        assert_eq!(count_label(2), "2 comments");
    }
}
