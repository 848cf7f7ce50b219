use crate::{error, jwt::Claims};
use axum::{
    http::Request,
    response::{IntoResponse, Response},
};
use entity::users::Role;
use futures::{future::BoxFuture, Future};
use std::{
    convert::Infallible,
    task::{Context, Poll},
};
use tower::{Layer, Service};

type RoleList = &'static [Role];

#[derive(Debug, Clone)]
pub struct RoleLayer {
    roles: RoleList,
}

impl RoleLayer {
    pub fn new(roles: RoleList) -> Self {
        Self { roles }
    }
}

impl<S> Layer<S> for RoleLayer {
    type Service = RoleCheck<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RoleCheck::new(inner, self.roles)
    }
}

#[derive(Debug, Clone)]
pub struct RoleCheck<S> {
    inner: S,
    roles: RoleList,
}

impl<S> RoleCheck<S> {
    fn new(inner: S, roles: RoleList) -> Self {
        Self { inner, roles }
    }
}

impl<S, B> Service<Request<B>> for RoleCheck<S>
where
    S: Service<Request<B>, Error = Infallible, Response = Response> + Send,
    S::Future: Future + Send + 'static,
    B: Send + 'static,
{
    type Response = Response;
    type Error = Infallible;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<B>) -> Self::Future {
        let Some(claims) = req.extensions().get::<Claims>() else {
            return Box::pin(async { Ok(error::COULD_NOT_GET_CLAIMS.into_response()) });
        };

        if !self.roles.contains(&claims.role) {
            return Box::pin(async { Ok(error::NOT_ENOUGH_PERMISSIONS.into_response()) });
        }

        let future = self.inner.call(req);

        Box::pin(async move { future.await })
    }
}
