//! # Post Commands
//!
//! Topics members post on a store page, and their moderation.
//!
//! With `autoApprovePosts` on, a new post is public immediately and a
//! notification goes out; otherwise it waits as pending, visible only to its
//! author until staff approve it.

use binaa_core::validation::PostForm;
use binaa_core::{new_id, CoreError, PostStatus, StorePost};
use binaa_db::SlotStore;
use chrono::Utc;
use tracing::info;

use super::store::get_store;
use super::{require_session, require_staff};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn submit_post<S: SlotStore>(
    state: &mut AppState<S>,
    store_id: &str,
    form: &PostForm,
) -> ApiResult<StorePost> {
    let author = require_session(state, "post a topic")?;
    let draft = form.parse()?;
    let store = get_store(state, store_id)?;
    let auto_approve = state.settings().auto_approve_posts;

    let post = StorePost {
        id: new_id(),
        store_id: store.id.clone(),
        author_id: author.id,
        author_name: author.username.clone(),
        author_avatar: author.avatar,
        content: draft.content,
        image_url: draft.image_url,
        status: if auto_approve {
            PostStatus::Approved
        } else {
            PostStatus::Pending
        },
        ratings: Vec::new(),
        created_at: Utc::now(),
    };

    let mut posts = Vec::with_capacity(state.posts().len() + 1);
    posts.push(post.clone());
    posts.extend_from_slice(state.posts());
    state.set_posts(posts).await?;

    if auto_approve {
        state.notify(
            "موضوع جديد!",
            &format!("{} قام بنشر موضوع في متجر {}", author.username, store.name),
        );
    }

    info!(post_id = %post.id, store_id, status = ?post.status, "Post submitted");
    Ok(post)
}

/// Flips a post between pending and approved.
pub async fn toggle_post_approval<S: SlotStore>(
    state: &mut AppState<S>,
    post_id: &str,
) -> ApiResult<StorePost> {
    require_staff(state, "moderate posts")?;
    let mut post = state
        .posts()
        .iter()
        .find(|p| p.id == post_id)
        .cloned()
        .ok_or_else(|| CoreError::PostNotFound(post_id.to_string()))?;
    post.status = post.status.toggled();

    let posts = state
        .posts()
        .iter()
        .map(|p| if p.id == post_id { post.clone() } else { p.clone() })
        .collect();
    state.set_posts(posts).await?;

    info!(post_id, status = ?post.status, "Post moderated");
    Ok(post)
}

/// Removes a post immediately. Its comments stay.
///
/// Open to the post's author and to staff.
pub async fn delete_post<S: SlotStore>(state: &mut AppState<S>, post_id: &str) -> ApiResult<()> {
    let user = require_session(state, "delete posts")?;
    let post = state
        .posts()
        .iter()
        .find(|p| p.id == post_id)
        .ok_or_else(|| CoreError::PostNotFound(post_id.to_string()))?;
    if post.author_id != user.id && !user.role.is_staff() {
        return Err(CoreError::forbidden("delete posts").into());
    }

    let posts = state
        .posts()
        .iter()
        .filter(|p| p.id != post_id)
        .cloned()
        .collect();
    state.set_posts(posts).await?;

    info!(post_id, "Post deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{auth, settings, testing};
    use crate::state::RegistrationPolicy;
    use binaa_core::validation::RegisterForm;
    use crate::error::ErrorCode;
    use crate::platform::encode_data_url;
    use binaa_core::search::visible_posts_for_store;
    use binaa_core::validation::ContactForm;

    fn text(content: &str) -> PostForm {
        PostForm {
            content: content.to_string(),
            image_url: None,
        }
    }

    #[tokio::test]
    async fn test_submit_post_auto_approved_goes_first() {
        let mut state = testing::member_state("samir").await;
        let first = submit_post(&mut state, "1", &text("أول")).await.unwrap();
        let second = submit_post(&mut state, "1", &text("ثاني")).await.unwrap();

        assert_eq!(second.status, PostStatus::Approved);
        assert_eq!(second.author_name, "samir");
        assert_eq!(state.posts()[0], second);
        assert_eq!(state.posts()[1], first);
    }

    #[tokio::test]
    async fn test_pending_post_visible_to_author_only() {
        let mut state = testing::admin_state().await;
        let contact = ContactForm {
            owner_whatsapp: state.settings().owner_whatsapp.clone(),
            admin_email: state.settings().admin_email.clone(),
            admin_phone: state.settings().admin_phone.clone(),
            hero_title: state.settings().hero_title.clone(),
            hero_subtitle: state.settings().hero_subtitle.clone(),
            currency: state.settings().currency,
            exchange_rate: state.settings().exchange_rate,
            auto_approve_posts: false,
        };
        settings::update_contact_info(&mut state, &contact).await.unwrap();

        let post = submit_post(&mut state, "2", &text("سؤال")).await.unwrap();
        assert_eq!(post.status, PostStatus::Pending);

        let author = state.current_user().map(|u| u.id.clone());
        assert_eq!(
            visible_posts_for_store(state.posts(), "2", author.as_deref()).len(),
            1
        );
        assert!(visible_posts_for_store(state.posts(), "2", None).is_empty());

        let approved = toggle_post_approval(&mut state, &post.id).await.unwrap();
        assert_eq!(approved.status, PostStatus::Approved);
        assert_eq!(visible_posts_for_store(state.posts(), "2", None).len(), 1);
    }

    #[tokio::test]
    async fn test_image_only_post() {
        let mut state = testing::member_state("samir").await;
        let form = PostForm {
            content: String::new(),
            image_url: Some(encode_data_url("image/png", &[0x89, b'P', b'N', b'G'])),
        };
        let post = submit_post(&mut state, "1", &form).await.unwrap();
        assert!(post.image_url.unwrap().starts_with("data:image/png;base64,"));
    }

    #[tokio::test]
    async fn test_submit_post_guards() {
        let mut state = testing::state().await;
        let err = submit_post(&mut state, "1", &text("x")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::Unauthenticated);

        let mut state = testing::member_state("samir").await;
        let err = submit_post(&mut state, "nope", &text("x")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        let err = submit_post(&mut state, "1", &text("  ")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[tokio::test]
    async fn test_author_deletes_own_post() {
        let mut state = testing::member_state("Ali").await;
        let post = submit_post(&mut state, "1", &text("x")).await.unwrap();

        delete_post(&mut state, &post.id).await.unwrap();
        assert!(state.posts().is_empty());
    }

    #[tokio::test]
    async fn test_delete_post_by_other_member_forbidden() {
        let mut state = testing::member_state("samir").await;
        let post = submit_post(&mut state, "1", &text("x")).await.unwrap();

        let form = RegisterForm {
            username: "Ali".to_string(),
            email: "ali@x.com".to_string(),
            password: "pw123".to_string(),
        };
        auth::register(&mut state, &form, RegistrationPolicy::AutoApprove)
            .await
            .unwrap();
        auth::login(&mut state, "Ali", "pw123").await.unwrap();
        let err = delete_post(&mut state, &post.id).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);
        assert_eq!(state.posts().len(), 1);

        auth::logout(&mut state).await.unwrap();
        auth::login(&mut state, "admin", "123").await.unwrap();
        delete_post(&mut state, &post.id).await.unwrap();
        assert!(state.posts().is_empty());
    }

    #[tokio::test]
    async fn test_delete_post_requires_session() {
        let mut state = testing::state().await;
        let err = delete_post(&mut state, "p").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::Unauthenticated);
    }
}
