use std::future::Future;
use std::panic::AssertUnwindSafe;

use actix_web::body::{BoxBody, MessageBody};
use actix_web::dev::{Service, ServiceRequest, ServiceResponse};
use actix_web::{Error, ResponseError};
use futures_util::FutureExt;

use crate::error::AppError;

/// `wrap_fn` middleware that turns a panicking handler into the generic 500 response.
pub fn catch_panic<S, B>(
    req: ServiceRequest,
    srv: &S,
) -> impl Future<Output = Result<ServiceResponse<BoxBody>, Error>>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody + 'static,
{
    let request = req.request().clone();
    let fut = srv.call(req);

    async move {
        match AssertUnwindSafe(fut).catch_unwind().await {
            Ok(result) => result.map(ServiceResponse::map_into_boxed_body),
            Err(panic) => {
                let error = AppError::InternalError(anyhow::anyhow!(
                    "request handler panicked: {}",
                    panic_message(panic.as_ref())
                ));
                Ok(ServiceResponse::new(request, error.error_response()))
            }
        }
    }
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> &str {
    panic
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| panic.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("non-string panic payload")
}
