//! Core data types shared by every blog source
//!
//! Sources convert whatever they read into `Blog`; the aggregation helpers
//! and renderers only ever see these types.

use serde::{Deserialize, Deserializer, Serialize};

/// Owner of a blog post as populated by the blog-list API
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        alias = "_id",
        deserialize_with = "de_object_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
}

/// A single blog record. Read-only to the aggregation helpers.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blog {
    #[serde(
        default,
        alias = "_id",
        deserialize_with = "de_object_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Empty when the record has no author
    #[serde(default, deserialize_with = "de_null_as_default")]
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Missing or null likes count as zero
    #[serde(default, deserialize_with = "de_null_as_default")]
    pub likes: u64,
    #[serde(
        default,
        deserialize_with = "de_user_refs",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub user: Vec<UserRef>,
}

impl Blog {
    pub fn new(author: &str, likes: u64) -> Self {
        Blog {
            author: author.to_string(),
            likes,
            ..Blog::default()
        }
    }

    /// Username of the owning user, if the record carries a populated one
    pub fn username(&self) -> Option<&str> {
        self.user.iter().find_map(|u| u.username.as_deref())
    }
}

/// Author with the most blogs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorBlogs {
    pub author: String,
    pub blogs: u64,
}

/// Author with the most likes summed over all their blogs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorLikes {
    pub author: String,
    pub likes: u64,
}

/// One author group: number of blogs and their like total
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorStats {
    pub author: String,
    pub blogs: u64,
    pub likes: u64,
}

/// Record filter applied while loading
#[derive(Debug, Clone, Default)]
pub struct BlogFilter {
    pub author: Option<String>,
    pub username: Option<String>,
    pub min_likes: Option<u64>,
}

impl BlogFilter {
    pub fn is_empty(&self) -> bool {
        self.author.is_none() && self.username.is_none() && self.min_likes.is_none()
    }

    pub fn matches(&self, blog: &Blog) -> bool {
        if let Some(author) = &self.author
            && blog.author != *author
        {
            return false;
        }
        if let Some(username) = &self.username
            && blog.username() != Some(username.as_str())
        {
            return false;
        }
        if let Some(min) = self.min_likes
            && blog.likes < min
        {
            return false;
        }
        true
    }
}

fn de_null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Either a plain id string or MongoDB extended JSON (`{"$oid": "..."}`)
#[derive(Deserialize)]
#[serde(untagged)]
enum RawObjectId {
    Plain(String),
    Oid {
        #[serde(rename = "$oid")]
        oid: String,
    },
}

fn de_object_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawObjectId>::deserialize(deserializer)?.map(RawObjectId::into_id))
}

impl RawObjectId {
    fn into_id(self) -> String {
        match self {
            RawObjectId::Plain(id) | RawObjectId::Oid { oid: id } => id,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawUserField {
    Many(Vec<RawUserField>),
    // Tried before `Populated`, which would accept `{"$oid": ..}` with every field empty
    Id(RawObjectId),
    Populated(UserRef),
}

impl RawUserField {
    fn flatten_into(self, out: &mut Vec<UserRef>) {
        match self {
            RawUserField::Many(items) => {
                for item in items {
                    item.flatten_into(out);
                }
            }
            RawUserField::Populated(user) => out.push(user),
            RawUserField::Id(id) => out.push(UserRef {
                id: Some(id.into_id()),
                ..UserRef::default()
            }),
        }
    }
}

fn de_user_refs<'de, D>(deserializer: D) -> Result<Vec<UserRef>, D::Error>
where
    D: Deserializer<'de>,
{
    let mut users = Vec::new();
    if let Some(raw) = Option::<RawUserField>::deserialize(deserializer)? {
        raw.flatten_into(&mut users);
    }
    Ok(users)
}
