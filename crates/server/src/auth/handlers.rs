//! # Session Handlers
//!
//! HTTP request handlers for session lifecycle endpoints.

use access::AuthUser;
use axum::Json;
use chrono::Utc;
use entity::users::{Column as UserColumn, Entity as UsersEntity};
use error::{AppError, Result};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use tracing::info;
use validator::Validate;

use crate::{
    dto::auth::{LoginRequest, RegisterRequest, SessionResponse},
    dto::SuccessResponse,
    notify::{Notification, Notifier},
    AppState,
};

/// Sign an existing user in and establish the session identity.
pub async fn login_handler(state: &AppState, req: LoginRequest) -> Result<Json<SessionResponse>> {
    req.validate().map_err(AppError::from)?;

    let email = req.email.trim().to_lowercase();
    let profile = UsersEntity::find()
        .filter(UserColumn::Email.eq(&email))
        .one(&state.db)
        .await?;

    let Some(profile) = profile.filter(|p| p.active) else {
        logging::log_access_event!("login", email, false);
        state
            .notifications
            .notify(Notification::error("Sign-in failed: unknown or inactive user"));
        return Err(AppError::unauthorized("Unknown or inactive user"));
    };

    let user = AuthUser::from_profile(&profile);
    state.session.init(user.clone());
    logging::log_access_event!("login", email, true);

    Ok(Json(SessionResponse {
        success: true,
        user,
    }))
}

/// Self-register a new identity and establish the session.
///
/// The access policy decides the level; self-registration can never yield
/// the agente tier, which is provisioned by an administrator.
pub async fn register_handler(state: &AppState, req: RegisterRequest) -> Result<Json<SessionResponse>> {
    req.validate().map_err(AppError::from)?;

    let email = req.email.trim().to_lowercase();
    let existing = UsersEntity::find()
        .filter(UserColumn::Email.eq(&email))
        .one(&state.db)
        .await?;
    if existing.is_some() {
        return Err(AppError::conflict("User with this email already exists"));
    }

    let access_level = state.policy.determine_access_level(&email);
    let profile = entity::users::ActiveModel {
        email: Set(email.clone()),
        name: Set(req.name.trim().to_string()),
        role: Set(req.role.trim().to_string()),
        access_level: Set(access_level),
        active: Set(true),
        external_id: Set(None),
        created_at: Set(Utc::now()),
        ..Default::default()
    };
    let created = profile.insert(&state.db).await?;

    let user = AuthUser::from_profile(&created);
    state.session.init(user.clone());
    info!(user_id = %created.id, level = %created.access_level, "User self-registered");
    logging::log_access_event!("register", email, true);

    Ok(Json(SessionResponse {
        success: true,
        user,
    }))
}

/// Clear the session identity.
pub async fn logout_handler(state: &AppState) -> Result<Json<SuccessResponse>> {
    let email = state
        .session
        .current()
        .map(|u| u.email)
        .unwrap_or_default();
    state.session.clear();
    logging::log_access_event!("logout", email, true);
    state
        .notifications
        .notify(Notification::info("Signed out"));

    Ok(Json(SuccessResponse {
        success: true,
        message: "Signed out".to_string(),
    }))
}

/// Current session identity, or the access-denied state when signed out.
pub async fn me_handler(state: &AppState) -> Result<Json<SessionResponse>> {
    let user = state
        .session
        .current()
        .ok_or_else(|| AppError::unauthorized("Access denied"))?;

    Ok(Json(SessionResponse {
        success: true,
        user,
    }))
}
