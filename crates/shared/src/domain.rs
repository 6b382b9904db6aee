use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(UserId);
id_newtype!(PostId);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    pub geo: Geo,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub catch_phrase: String,
    pub bs: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub user_id: UserId,
    pub id: PostId,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub username: String,
    pub email: String,
    pub address: Address,
    pub phone: String,
    pub website: String,
    pub company: Company,
    /// Posts authored by this user, in the order the API returned them.
    #[serde(default)]
    pub posts: Vec<Post>,
}

/// Add-user form payload: every [`User`] field except `id` and `posts`.
///
/// Anything the form leaves out is filled with an empty value by
/// [`UserDraft::into_user`]. `id` and `posts` keys on the wire are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserDraft {
    pub name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub address: Option<Address>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub company: Option<Company>,
}

impl UserDraft {
    /// Completes the draft into a [`User`] with the given id and no posts.
    ///
    /// Values supplied by the caller always take precedence over defaults.
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            name: self.name.unwrap_or_default(),
            username: self.username.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            address: self.address.unwrap_or_else(|| Address {
                street: String::new(),
                suite: String::new(),
                city: String::new(),
                zipcode: String::new(),
                geo: Geo {
                    lat: String::new(),
                    lng: String::new(),
                },
            }),
            phone: self.phone.unwrap_or_default(),
            website: self.website.unwrap_or_default(),
            company: self.company.unwrap_or_else(|| Company {
                name: String::new(),
                catch_phrase: String::new(),
                bs: String::new(),
            }),
            posts: Vec::new(),
        }
    }
}
