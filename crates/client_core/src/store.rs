//! Page-lifetime user collection. Append-only.

use std::collections::HashSet;

use shared::domain::{User, UserDraft, UserId};
use tracing::debug;

#[derive(Default, Debug, Clone)]
pub struct UserStore {
    users: Vec<User>,
}

impl UserStore {
    /// Seeds the store from loader output; `None` gives an empty store.
    pub fn new(initial: Option<Vec<User>>) -> Self {
        Self {
            users: initial.unwrap_or_default(),
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn get(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    /// Id the next added user will receive: one past the current maximum, or
    /// 1 when the store is empty. If the maximum is `i64::MAX`, the smallest
    /// unused positive id is used instead.
    pub fn next_id(&self) -> UserId {
        self.users
            .iter()
            .map(|user| user.id)
            .max()
            .map_or(UserId(1), |UserId(max)| match max.checked_add(1) {
                Some(next) => UserId(next),
                None => self.smallest_unused_id(),
            })
    }

    // Only reached when the maximum id is `i64::MAX`.
    fn smallest_unused_id(&self) -> UserId {
        let taken: HashSet<i64> = self.users.iter().map(|user| user.id.0).collect();
        (1..=i64::MAX)
            .find(|id| !taken.contains(id))
            .map_or(UserId(1), UserId)
    }

    /// Completes `draft` and appends it. Existing entries are left untouched.
    pub fn add_user(&mut self, draft: UserDraft) -> &User {
        let id = self.next_id();
        let user = draft.into_user(id);
        debug!(user_id = id.0, username = %user.username, "added user to local store");

        let index = self.users.len();
        self.users.push(user);
        &self.users[index]
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
