use shared::domain::{Post, PostId, UserDraft, UserId};

use super::*;

fn loaded_users() -> Vec<User> {
    (1..=3)
        .map(|id| {
            let mut user = UserDraft {
                name: Some(format!("User {id}")),
                ..UserDraft::default()
            }
            .into_user(UserId(id));
            if id != 2 {
                user.posts.push(Post {
                    user_id: UserId(id),
                    id: PostId(id * 10),
                    title: format!("post by {id}"),
                    body: String::new(),
                });
            }
            user
        })
        .collect()
}

fn expanded_flags(page: &UsersPage) -> Vec<(i64, bool)> {
    page.cards()
        .map(|card| (card.user.id.0, card.expanded))
        .collect()
}

#[test]
fn page_without_users_renders_no_cards() {
    let page = UsersPage::new(None);
    assert_eq!(page.cards().count(), 0);
    assert!(!page.is_add_user_form_open());
}

#[test]
fn toggling_a_then_b_only_changes_those_two_cards() {
    let mut page = UsersPage::new(Some(loaded_users()));

    page.toggle_user(UserId(1));
    assert_eq!(
        expanded_flags(&page),
        vec![(1, true), (2, false), (3, false)]
    );

    page.toggle_user(UserId(2));
    assert_eq!(
        expanded_flags(&page),
        vec![(1, false), (2, true), (3, false)]
    );

    page.toggle_user(UserId(2));
    assert_eq!(page.expansion().expanded(), None);
}

#[test]
fn posts_section_only_shown_for_users_with_posts() {
    let page = UsersPage::new(Some(loaded_users()));
    let shown: Vec<bool> = page.cards().map(|card| card.show_posts).collect();
    assert_eq!(shown, vec![true, false, true]);
}

#[test]
fn submitting_form_appends_user_and_closes_form() {
    let mut page = UsersPage::new(Some(loaded_users()));
    page.open_add_user_form();
    assert!(page.is_add_user_form_open());

    let id = page.submit_add_user(UserDraft {
        name: Some("Ada".into()),
        ..UserDraft::default()
    });

    assert_eq!(id, UserId(4));
    assert!(!page.is_add_user_form_open());
    let last = page.cards().last().expect("new card");
    assert_eq!(last.user.name, "Ada");
    assert!(!last.show_posts);
    assert!(!last.expanded);
}

#[test]
fn closing_form_does_not_add_user() {
    let mut page = UsersPage::new(None);
    page.open_add_user_form();
    page.close_add_user_form();

    assert!(!page.is_add_user_form_open());
    assert!(page.store().is_empty());
}
