//! Validating form extractor - rejects invalid input before a handler runs.

use std::future::Future;
use std::pin::Pin;

use actix_web::{FromRequest, HttpRequest, dev::Payload, web};

use postboard_shared::CreatePostForm;

use crate::middleware::error::AppError;

/// A create-post form that has passed the required-field check.
#[derive(Debug, Clone)]
pub struct ValidatedPostForm(pub CreatePostForm);

impl ValidatedPostForm {
    pub fn into_inner(self) -> CreatePostForm {
        self.0
    }
}

impl FromRequest for ValidatedPostForm {
    type Error = AppError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let form = web::Form::<CreatePostForm>::from_request(req, payload);

        Box::pin(async move {
            let form = form
                .await
                .map_err(|e| AppError::Validation(vec![e.to_string()]))?
                .into_inner();

            if let Err(errors) = form.validate() {
                tracing::debug!(?errors, "Rejected create-post form");
                return Err(AppError::Validation(errors));
            }

            Ok(ValidatedPostForm(form))
        })
    }
}
