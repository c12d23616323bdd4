//! Tweet HTTP Handlers
//!
//! `GET /tweets` is public. The `/tweet` routes sit behind the auth
//! middleware and take the caller from `AuthUser`.

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use crate::backend::error::BackendError;
use crate::backend::middleware::{ApiJson, ApiPath, AuthUser};
use crate::backend::tweets::db::TweetId;
use crate::backend::tweets::service::TweetService;
use crate::shared::{
    CreateTweetRequest, MessageResponse, TweetPostedResponse, TweetView, UpdateTweetRequest,
};

/// List all tweets, newest first
pub async fn list_tweets(
    State(tweets): State<TweetService>,
) -> Result<Json<Vec<TweetView>>, BackendError> {
    let views = tweets.list().await?.into_iter().map(TweetView::from).collect();
    Ok(Json(views))
}

/// Post a tweet as the authenticated user
pub async fn post_tweet(
    State(tweets): State<TweetService>,
    AuthUser(user): AuthUser,
    ApiJson(request): ApiJson<CreateTweetRequest>,
) -> Result<(StatusCode, Json<TweetPostedResponse>), BackendError> {
    let tweet_id = tweets.create(&user.identity, &request.content).await?;

    Ok((
        StatusCode::CREATED,
        Json(TweetPostedResponse {
            message: "Tweet posted successfully".to_string(),
            tweet_id,
        }),
    ))
}

/// Replace the content of one of the caller's tweets
pub async fn update_tweet(
    State(tweets): State<TweetService>,
    AuthUser(user): AuthUser,
    ApiPath(id): ApiPath<TweetId>,
    ApiJson(request): ApiJson<UpdateTweetRequest>,
) -> Result<Json<MessageResponse>, BackendError> {
    tweets.update(id, &request.content, &user.identity).await?;
    Ok(Json(MessageResponse::new("Tweet updated successfully")))
}

/// Delete one of the caller's tweets
pub async fn delete_tweet(
    State(tweets): State<TweetService>,
    AuthUser(user): AuthUser,
    ApiPath(id): ApiPath<TweetId>,
) -> Result<Json<MessageResponse>, BackendError> {
    tweets.delete(id, &user.identity).await?;
    Ok(Json(MessageResponse::new("Tweet deleted successfully")))
}
