//! # Comment Commands

use binaa_core::validation::validate_comment;
use binaa_core::{new_id, Comment, CoreError};
use binaa_db::SlotStore;
use chrono::Utc;
use tracing::info;

use super::require_session;
use crate::error::ApiResult;
use crate::state::AppState;

/// Appends a comment under a post, on the post's store.
pub async fn add_comment<S: SlotStore>(
    state: &mut AppState<S>,
    post_id: &str,
    content: &str,
) -> ApiResult<Comment> {
    let author = require_session(state, "comment")?;
    let content = validate_comment(content)?;
    let store_id = state
        .posts()
        .iter()
        .find(|p| p.id == post_id)
        .map(|p| p.store_id.clone())
        .ok_or_else(|| CoreError::PostNotFound(post_id.to_string()))?;

    let comment = Comment {
        id: new_id(),
        post_id: Some(post_id.to_string()),
        store_id: Some(store_id),
        author_id: author.id,
        author_name: author.username,
        author_avatar: author.avatar,
        content,
        created_at: Utc::now(),
        parent_id: None,
    };

    let mut comments = state.comments().to_vec();
    comments.push(comment.clone());
    state.set_comments(comments).await?;

    info!(comment_id = %comment.id, post_id, "Comment added");
    Ok(comment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{post, testing};
    use crate::error::ErrorCode;
    use binaa_core::search::comments_for_post;
    use binaa_core::validation::PostForm;

    #[tokio::test]
    async fn test_comments_append_in_order() {
        let mut state = testing::member_state("samir").await;
        let topic = post::submit_post(
            &mut state,
            "1",
            &PostForm {
                content: "سعر الطن؟".to_string(),
                image_url: None,
            },
        )
        .await
        .unwrap();

        add_comment(&mut state, &topic.id, "أول").await.unwrap();
        let second = add_comment(&mut state, &topic.id, " ثاني ").await.unwrap();

        assert_eq!(second.content, "ثاني");
        assert_eq!(second.store_id.as_deref(), Some("1"));
        let thread = comments_for_post(state.comments(), &topic.id);
        assert_eq!(thread.len(), 2);
        assert_eq!(thread[1], &second);
    }

    #[tokio::test]
    async fn test_comment_takes_store_from_post() {
        let mut state = testing::member_state("samir").await;
        let topic = post::submit_post(
            &mut state,
            "2",
            &PostForm {
                content: "هل يوجد توصيل؟".to_string(),
                image_url: None,
            },
        )
        .await
        .unwrap();

        let comment = add_comment(&mut state, &topic.id, "نعم").await.unwrap();
        assert_eq!(comment.store_id.as_deref(), Some("2"));
        assert_eq!(state.comments()[0].store_id.as_deref(), Some(topic.store_id.as_str()));
    }

    #[tokio::test]
    async fn test_comment_on_missing_post() {
        let mut state = testing::member_state("samir").await;
        let err = add_comment(&mut state, "ghost", "مرحبا").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_blank_comment_rejected() {
        let mut state = testing::member_state("samir").await;
        let err = add_comment(&mut state, "p", "   ").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(state.comments().is_empty());
    }

    #[tokio::test]
    async fn test_comment_requires_session() {
        let mut state = testing::state().await;
        let err = add_comment(&mut state, "p", "مرحبا").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::Unauthenticated);
    }
}
