//! # User Management Handlers
//!
//! HTTP request handlers for the admin user panel, plus the core two-step
//! delete operation.

use access::{require_level, AccessLevel, AuthUser};
use axum::Json;
use chrono::Utc;
use entity::users::{Column as UserColumn, Entity as UsersEntity, Model as UserProfile};
use error::{AppError, Result};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use tracing::{debug, info, warn};

use crate::{
    admin::forms::{validate_user_form, FormErrors, UserForm},
    dto::users::{CreateUserRequest, UserListResponse, UserResponse},
    dto::SuccessResponse,
    notify::{Notification, Notifier},
    store::identity::IdentityStore,
    AppState,
};

/// Delete a user and its locality-access associations.
///
/// Two dependent deletions run strictly in sequence and are deliberately not
/// a transaction:
///
/// 1. association rows for `external_id`: best effort, a failure is logged
///    and does not abort the operation;
/// 2. the profile row: required, a failure surfaces to the caller and the
///    operation reports failure regardless of step 1's outcome.
///
/// A missing identity key fails immediately with `Ok(false)` and no store
/// call. Exactly one notification describes the outcome.
pub async fn delete_user<S: IdentityStore>(
    store: &S,
    notifier: &dyn Notifier,
    user_id: i32,
    external_id: Option<&str>,
) -> Result<bool> {
    let Some(external_id) = external_id.filter(|id| !id.is_empty()) else {
        warn!(user_id = %user_id, "Delete refused: user has no identity key");
        notifier.notify(Notification::error(
            "User cannot be removed: missing identity key",
        ));
        return Ok(false);
    };

    match store.delete_locality_links(external_id).await {
        Ok(removed) => {
            debug!(user_id = %user_id, removed = %removed, "Locality associations removed");
        },
        Err(e) => {
            // A dangling association is less harmful than blocking removal.
            warn!(user_id = %user_id, error = %e, "Locality association cleanup failed; continuing");
        },
    }

    if let Err(e) = store.delete_profile(user_id).await {
        notifier.notify(Notification::error("Failed to remove user"));
        return Err(e.context("deleting user profile"));
    }

    info!(user_id = %user_id, "User removed");
    notifier.notify(Notification::success("User removed"));
    Ok(true)
}

/// Create a new user with its locality assignments (administrador only).
///
/// This is the provisioning path: unlike self-registration it may assign any
/// access level, including agente.
pub async fn create_user_handler(
    state: &AppState,
    user: AuthUser,
    req: CreateUserRequest,
) -> Result<(http::StatusCode, Json<SuccessResponse>)> {
    require_level(user.access_level, AccessLevel::Administrador)?;

    let form = UserForm {
        name:         req.name.clone(),
        email:        req.email.clone(),
        role:         req.role.clone(),
        access_level: req.parsed_access_level(),
    };
    let mut errors = FormErrors::new();
    if !validate_user_form(&form, &mut errors) {
        let message = errors.current().unwrap_or("Invalid form").to_string();
        state.notifications.notify(Notification::error(&message));
        return Err(AppError::validation(message));
    }

    let existing = UsersEntity::find()
        .filter(UserColumn::Email.eq(&req.email))
        .one(&state.db)
        .await?;
    if existing.is_some() {
        return Err(AppError::conflict(
            "User with this email already exists",
        ));
    }

    let new_user = entity::users::ActiveModel {
        email: Set(req.email.trim().to_lowercase()),
        name: Set(req.name.trim().to_string()),
        role: Set(req.role.trim().to_string()),
        access_level: Set(form.access_level.unwrap_or(AccessLevel::Desconhecido)),
        active: Set(true),
        external_id: Set(req.external_id.clone()),
        created_at: Set(Utc::now()),
        ..Default::default()
    };
    let created = new_user.insert(&state.db).await?;

    if let Some(ref external_id) = created.external_id {
        for locality in &req.localities {
            let link = entity::user_localities::ActiveModel {
                external_id: Set(external_id.clone()),
                locality: Set(locality.clone()),
                ..Default::default()
            };
            link.insert(&state.db).await?;
        }
    }
    else if !req.localities.is_empty() {
        debug!(user_id = %created.id, "Locality assignments skipped: no identity key");
    }

    info!(user_id = %created.id, email = %created.email, "User created");
    state
        .notifications
        .notify(Notification::success("User created"));

    Ok((
        http::StatusCode::CREATED,
        Json(SuccessResponse {
            success: true,
            message: "User created successfully".to_string(),
        }),
    ))
}

/// List users with their locality assignments (supervisor or above).
pub async fn list_users_handler(state: &AppState, user: AuthUser) -> Result<Json<UserListResponse>> {
    require_level(user.access_level, AccessLevel::Supervisor)?;

    let users = UsersEntity::find()
        .order_by_asc(UserColumn::Id)
        .all(&state.db)
        .await?;

    let identities = state.identities();
    let mut responses = Vec::with_capacity(users.len());
    for profile in &users {
        let localities = match profile.external_id {
            Some(ref external_id) => identities.localities_for(external_id).await?,
            None => Vec::new(),
        };
        responses.push(user_model_to_response(profile, localities));
    }

    Ok(Json(UserListResponse {
        success: true,
        users:   responses,
    }))
}

/// Remove a user (administrador only).
///
/// A second click on the same control while the delete runs is suppressed
/// with an info notification instead of a second store operation.
pub async fn delete_user_handler(
    state: &AppState,
    user: AuthUser,
    user_id: i32,
) -> Result<Json<SuccessResponse>> {
    require_level(user.access_level, AccessLevel::Administrador)?;

    let Some(_guard) = state.inflight.begin(&format!("delete_user:{}", user_id)) else {
        state
            .notifications
            .notify(Notification::info("Removal already in progress"));
        return Ok(Json(SuccessResponse {
            success: false,
            message: "Removal already in progress".to_string(),
        }));
    };

    let profile = UsersEntity::find_by_id(user_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found(format!("User {} not found", user_id)))?;

    let identities = state.identities();
    let removed = delete_user(
        &identities,
        state.notifications.as_ref(),
        profile.id,
        profile.external_id.as_deref(),
    )
    .await?;

    Ok(Json(SuccessResponse {
        success: removed,
        message: if removed {
            "User removed".to_string()
        }
        else {
            "User cannot be removed: missing identity key".to_string()
        },
    }))
}

/// Convert a profile row to its response DTO.
fn user_model_to_response(profile: &UserProfile, localities: Vec<String>) -> UserResponse {
    UserResponse {
        id: profile.id,
        name: profile.name.clone(),
        email: profile.email.clone(),
        role: profile.role.clone(),
        access_level: profile.access_level.to_string(),
        active: profile.active,
        external_id: profile.external_id.clone(),
        localities,
    }
}
