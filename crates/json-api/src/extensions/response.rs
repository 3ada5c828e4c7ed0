//! Response helper extensions.

use salvo::{
    http::{StatusCode, header::LOCATION},
    prelude::{Response, StatusError},
};
use tracing::error;

/// Mark a response as `201 Created` pointing at the new resource.
pub(crate) trait CreatedExt {
    fn created_at(&mut self, location: String) -> Result<(), StatusError>;
}

impl CreatedExt for Response {
    fn created_at(&mut self, location: String) -> Result<(), StatusError> {
        self.add_header(LOCATION, location, true)
            .map_err(|source| {
                error!("failed to set location header: {source}");

                StatusError::internal_server_error()
            })?
            .status_code(StatusCode::CREATED);

        Ok(())
    }
}
