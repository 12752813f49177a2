//! Typed records for the two collections, with their create inputs and
//! partial updates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{ValidationError, ValidationIssue, ValidationResult};
use crate::store::StoreData;
use crate::types::Model;
use crate::validators::is_valid_url;

/// A highlighted anime scene shared to the feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimeMoment {
    pub id: String,
    pub created_date: DateTime<Utc>,
    pub title: String,
    pub anime_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episode: Option<String>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Emails of users who liked the moment, in like order. Duplicate
    /// suppression is caller convention, not enforced here.
    #[serde(default)]
    pub likes: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Caller-supplied fields for creating an [`AnimeMoment`].
#[derive(Debug, Clone, Default)]
pub struct NewAnimeMoment {
    pub title: String,
    pub anime_name: String,
    pub episode: Option<String>,
    pub description: String,
    pub image_url: Option<String>,
    pub likes: Vec<String>,
    pub tags: Vec<String>,
}

impl NewAnimeMoment {
    /// Starts a new moment from its required fields.
    pub fn new(title: impl Into<String>, anime_name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            anime_name: anime_name.into(),
            description: description.into(),
            ..Self::default()
        }
    }
}

/// Shallow partial update for an [`AnimeMoment`].
///
/// `None` leaves a field untouched. For the optional fields, the outer
/// `Option` says whether the patch touches the field and the inner one is
/// the new value, so `Some(None)` clears it.
#[derive(Debug, Clone, Default)]
pub struct AnimeMomentPatch {
    pub title: Option<String>,
    pub anime_name: Option<String>,
    pub episode: Option<Option<String>>,
    pub description: Option<String>,
    pub image_url: Option<Option<String>>,
    pub likes: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
}

impl AnimeMomentPatch {
    /// Patch replacing the full like sequence.
    pub fn likes(likes: Vec<String>) -> Self {
        Self {
            likes: Some(likes),
            ..Self::default()
        }
    }
}

impl Model for AnimeMoment {
    const COLLECTION: &'static str = "AnimeMoment";

    type Create = NewAnimeMoment;
    type Patch = AnimeMomentPatch;

    fn assemble(id: String, created_date: DateTime<Utc>, input: NewAnimeMoment) -> Self {
        Self {
            id,
            created_date,
            title: input.title,
            anime_name: input.anime_name,
            episode: input.episode,
            description: input.description,
            image_url: input.image_url,
            likes: input.likes,
            tags: input.tags,
        }
    }

    fn apply_patch(&mut self, patch: AnimeMomentPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(anime_name) = patch.anime_name {
            self.anime_name = anime_name;
        }
        if let Some(episode) = patch.episode {
            self.episode = episode;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = image_url;
        }
        if let Some(likes) = patch.likes {
            self.likes = likes;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
    }

    fn validate_create(input: &NewAnimeMoment) -> ValidationResult<()> {
        let mut issues = Vec::new();
        require_nonempty("title", &input.title, &mut issues);
        require_nonempty("anime_name", &input.anime_name, &mut issues);
        require_nonempty("description", &input.description, &mut issues);
        if let Some(image_url) = &input.image_url {
            check_url("image_url", image_url, &mut issues);
        }
        finish(issues)
    }

    fn validate_patch(patch: &AnimeMomentPatch) -> ValidationResult<()> {
        let mut issues = Vec::new();
        if let Some(title) = &patch.title {
            require_nonempty("title", title, &mut issues);
        }
        if let Some(anime_name) = &patch.anime_name {
            require_nonempty("anime_name", anime_name, &mut issues);
        }
        if let Some(description) = &patch.description {
            require_nonempty("description", description, &mut issues);
        }
        if let Some(Some(image_url)) = &patch.image_url {
            check_url("image_url", image_url, &mut issues);
        }
        finish(issues)
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn collection(data: &StoreData) -> &Vec<Self> {
        &data.anime_moments
    }

    fn collection_mut(data: &mut StoreData) -> &mut Vec<Self> {
        &mut data.anime_moments
    }
}

/// A comment on an [`AnimeMoment`].
///
/// `moment_id` is never checked against existing moment ids; dangling
/// references are tolerated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub created_date: DateTime<Utc>,
    pub moment_id: String,
    pub content: String,
    #[serde(default)]
    pub likes: Vec<String>,
}

/// Caller-supplied fields for creating a [`Comment`].
#[derive(Debug, Clone, Default)]
pub struct NewComment {
    pub moment_id: String,
    pub content: String,
    pub likes: Vec<String>,
}

impl NewComment {
    pub fn new(moment_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            moment_id: moment_id.into(),
            content: content.into(),
            likes: Vec::new(),
        }
    }
}

/// Shallow partial update for a [`Comment`].
#[derive(Debug, Clone, Default)]
pub struct CommentPatch {
    pub moment_id: Option<String>,
    pub content: Option<String>,
    pub likes: Option<Vec<String>>,
}

impl CommentPatch {
    /// Patch replacing the full like sequence.
    pub fn likes(likes: Vec<String>) -> Self {
        Self {
            likes: Some(likes),
            ..Self::default()
        }
    }
}

impl Model for Comment {
    const COLLECTION: &'static str = "Comment";

    type Create = NewComment;
    type Patch = CommentPatch;

    fn assemble(id: String, created_date: DateTime<Utc>, input: NewComment) -> Self {
        Self {
            id,
            created_date,
            moment_id: input.moment_id,
            content: input.content,
            likes: input.likes,
        }
    }

    fn apply_patch(&mut self, patch: CommentPatch) {
        if let Some(moment_id) = patch.moment_id {
            self.moment_id = moment_id;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(likes) = patch.likes {
            self.likes = likes;
        }
    }

    fn validate_create(input: &NewComment) -> ValidationResult<()> {
        let mut issues = Vec::new();
        require_nonempty("moment_id", &input.moment_id, &mut issues);
        require_nonempty("content", &input.content, &mut issues);
        finish(issues)
    }

    fn validate_patch(patch: &CommentPatch) -> ValidationResult<()> {
        let mut issues = Vec::new();
        if let Some(moment_id) = &patch.moment_id {
            require_nonempty("moment_id", moment_id, &mut issues);
        }
        if let Some(content) = &patch.content {
            require_nonempty("content", content, &mut issues);
        }
        finish(issues)
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn collection(data: &StoreData) -> &Vec<Self> {
        &data.comments
    }

    fn collection_mut(data: &mut StoreData) -> &mut Vec<Self> {
        &mut data.comments
    }
}

fn require_nonempty(field: &str, value: &str, issues: &mut Vec<ValidationIssue>) {
    if value.trim().is_empty() {
        issues.push(ValidationIssue::new(field, "validation.required", "field must not be empty"));
    }
}

fn check_url(field: &str, value: &str, issues: &mut Vec<ValidationIssue>) {
    if !is_valid_url(value) {
        issues.push(ValidationIssue::new(field, "validation.url", "value must be a valid URL"));
    }
}

fn finish(issues: Vec<ValidationIssue>) -> ValidationResult<()> {
    if issues.is_empty() { Ok(()) } else { Err(ValidationError::new(issues)) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_distinguishes_clear_from_untouched() {
        let mut moment = AnimeMoment::assemble(
            "m1".to_string(),
            Utc::now(),
            NewAnimeMoment {
                episode: Some("Episode 12".to_string()),
                ..NewAnimeMoment::new("Saitama vs Boros", "One Punch Man", "Serious series")
            },
        );

        moment.apply_patch(AnimeMomentPatch {
            title: Some("Saitama vs Boros, again".to_string()),
            ..AnimeMomentPatch::default()
        });
        assert_eq!(moment.episode.as_deref(), Some("Episode 12"));

        moment.apply_patch(AnimeMomentPatch {
            episode: Some(None),
            ..AnimeMomentPatch::default()
        });
        assert_eq!(moment.episode, None);
        assert_eq!(moment.title, "Saitama vs Boros, again");
    }

    #[test]
    fn create_validation_requires_core_fields() {
        let err = AnimeMoment::validate_create(&NewAnimeMoment::new("", "", "")).expect_err("must fail");
        let fields: Vec<_> = err.issues.iter().map(|issue| issue.field.as_str()).collect();
        assert_eq!(fields, ["title", "anime_name", "description"]);
    }

    #[test]
    fn create_validation_rejects_bad_image_url() {
        let input = NewAnimeMoment {
            image_url: Some("not a url".to_string()),
            ..NewAnimeMoment::new("Title", "Anime", "Desc")
        };
        let err = AnimeMoment::validate_create(&input).expect_err("must fail");
        assert_eq!(err.issues[0].code, "validation.url");
    }
}
