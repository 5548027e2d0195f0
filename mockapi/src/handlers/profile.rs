use actix_web::{get, web, HttpResponse};
use contracts::ProfileResponse;

use crate::{
    directory::AccountDirectory,
    error::{ApiError, Result},
    token::TokenClaims,
};

/// Returns the profile of the user the verified access token belongs to.
/// The token itself was checked by the middleware; this only re-resolves
/// the account, which can vanish if the directory was reseeded.
#[get("/me")]
pub async fn me(
    claims: web::ReqData<TokenClaims>,
    directory: web::Data<AccountDirectory>,
) -> Result<HttpResponse> {
    let user = directory
        .find_by_id(&claims.user_id)
        .ok_or(ApiError::InvalidToken)?;

    log::debug!("Profile lookup for user {}", user.id);

    Ok(HttpResponse::Ok().json(ProfileResponse { user }))
}
