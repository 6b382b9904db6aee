//! Joins posts onto their owning users.

use shared::domain::{Post, User};

/// Replaces each user's `posts` with the posts whose `user_id` matches, in
/// source order. Posts with no matching user are dropped.
pub fn attach_posts(users: Vec<User>, posts: &[Post]) -> Vec<User> {
    users
        .into_iter()
        .map(|mut user| {
            user.posts = posts
                .iter()
                .filter(|post| post.user_id == user.id)
                .cloned()
                .collect();
            user
        })
        .collect()
}
