//! Path identifier parsing helpers.

use salvo::{oapi::extract::PathParam, prelude::StatusError};

use trolley_app::ids::TypedId;

pub(crate) trait PathIdExt {
    /// Convert into a typed id, rejecting zero and negative values.
    fn into_id<T>(self, name: &str) -> Result<TypedId<T>, StatusError>;
}

impl PathIdExt for PathParam<i64> {
    fn into_id<T>(self, name: &str) -> Result<TypedId<T>, StatusError> {
        let id = TypedId::new(self.into_inner());

        if id.is_valid() {
            Ok(id)
        } else {
            Err(StatusError::bad_request().brief(format!("{name} must be a positive integer")))
        }
    }
}
