//! State owned by the users page: the store, the expanded card and the
//! add-user form visibility.

use shared::domain::{User, UserDraft, UserId};

use crate::{expansion::ExpansionState, store::UserStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserCard<'a> {
    pub user: &'a User,
    pub expanded: bool,
    pub show_posts: bool,
}

#[derive(Default, Debug, Clone)]
pub struct UsersPage {
    store: UserStore,
    expansion: ExpansionState,
    add_user_form_open: bool,
}

impl UsersPage {
    pub fn new(users: Option<Vec<User>>) -> Self {
        Self {
            store: UserStore::new(users),
            expansion: ExpansionState::default(),
            add_user_form_open: false,
        }
    }

    pub fn store(&self) -> &UserStore {
        &self.store
    }

    pub fn expansion(&self) -> ExpansionState {
        self.expansion
    }

    pub fn toggle_user(&mut self, id: UserId) {
        self.expansion.toggle(id);
    }

    pub fn open_add_user_form(&mut self) {
        self.add_user_form_open = true;
    }

    pub fn close_add_user_form(&mut self) {
        self.add_user_form_open = false;
    }

    pub fn is_add_user_form_open(&self) -> bool {
        self.add_user_form_open
    }

    /// Adds the submitted user and dismisses the form.
    pub fn submit_add_user(&mut self, draft: UserDraft) -> UserId {
        let id = self.store.add_user(draft).id;
        self.add_user_form_open = false;
        id
    }

    pub fn cards(&self) -> impl Iterator<Item = UserCard<'_>> + '_ {
        self.store.users().iter().map(|user| UserCard {
            user,
            expanded: self.expansion.is_expanded(user.id),
            show_posts: !user.posts.is_empty(),
        })
    }
}

#[cfg(test)]
#[path = "tests/page_tests.rs"]
mod tests;
