use axum::{extract::State, Json};
use axum_extra::extract::cookie::SignedCookieJar;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::dtos::{CheckAuthResponseDto, LoginRequestDto, LoginResponseDto};
use crate::features::auth::AuthState;
use crate::shared::types::ApiResponse;

/// Login with username and password
///
/// On success the session token is set as a signed, HttpOnly cookie.
#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = ApiResponse<LoginResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<AuthState>,
    jar: SignedCookieJar,
    AppJson(dto): AppJson<LoginRequestDto>,
) -> Result<(SignedCookieJar, Json<ApiResponse<LoginResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let username = dto.username.clone();
    let session = state.service.login(dto).await?;
    let jar = jar.add(state.cookies.issue(&session.token));

    Ok((
        jar,
        Json(ApiResponse::success(
            Some(LoginResponseDto { username }),
            Some("Login successful".to_string()),
            None,
        )),
    ))
}

/// Logout and destroy the current session
#[utoipa::path(
    post,
    path = "/api/logout",
    responses(
        (status = 200, description = "Logout successful"),
        (status = 500, description = "Session could not be destroyed")
    ),
    tag = "auth"
)]
pub async fn logout(
    State(state): State<AuthState>,
    jar: SignedCookieJar,
) -> Result<(SignedCookieJar, Json<ApiResponse<()>>)> {
    let token = state.cookies.token(&jar);

    state.service.logout(token.as_deref()).await.map_err(|e| {
        tracing::error!("Logout failed: {}", e);
        AppError::Internal("Could not log out".to_string())
    })?;

    let jar = jar.remove(state.cookies.removal());
    Ok((jar, Json(ApiResponse::message("Logout successful"))))
}

/// Report whether the caller holds a valid session
///
/// Never fails: a store error is logged and reported as unauthenticated.
#[utoipa::path(
    get,
    path = "/api/check-auth",
    responses(
        (status = 200, description = "Authentication status", body = ApiResponse<CheckAuthResponseDto>)
    ),
    tag = "auth"
)]
pub async fn check_auth(
    State(state): State<AuthState>,
    jar: SignedCookieJar,
) -> Json<ApiResponse<CheckAuthResponseDto>> {
    let authenticated = match state.cookies.token(&jar) {
        Some(token) => match state.service.authenticate(&token).await {
            Ok(user) => user.is_some(),
            Err(e) => {
                tracing::warn!("Session lookup failed during auth check: {}", e);
                false
            }
        },
        None => false,
    };

    Json(ApiResponse::success(
        Some(CheckAuthResponseDto { authenticated }),
        None,
        None,
    ))
}
