//! Turns protobuf query service descriptors into typed RPC stubs.
//!
//! The wire path of a method is `/{service full name}/{method name}`. Generated
//! message types do not carry the full path of the methods using them, so the
//! path is always rebuilt from the descriptor by [`method_path`], and nowhere
//! else.

use core::fmt;
use core::marker::PhantomData;

use prost::Message;
use tracing::{debug, trace};

use crate::client::{QueryClient, QueryMode, Unverified};
use crate::error::QueryError;

/// A protobuf query service, e.g. `ibc.channel.Query`.
pub trait QueryService {
    /// The fully-qualified service name, package included.
    const FULL_NAME: &'static str;
}

/// One method of a [`QueryService`], with its request and response messages.
pub trait QueryMethod {
    type Service: QueryService;
    type Request: Message;
    type Response: Message + Default;

    /// The short method name, e.g. `Channel`.
    const NAME: &'static str;
}

/// Builds the wire path routing to `method` of the service named `service`.
pub fn service_path(service: &str, method: &str) -> String {
    format!("/{service}/{method}")
}

/// Builds the wire path of the query method `M`.
pub fn method_path<M: QueryMethod>() -> String {
    service_path(<M::Service as QueryService>::FULL_NAME, M::NAME)
}

/// An RPC stub for the query service `S`, dispatching through the base client
/// `C` in the query mode `M`.
///
/// Each call encodes the request, performs exactly one round trip and decodes
/// the response. Failures of the transport or of the decoding are returned as
/// they happened; nothing is retried or cached.
pub struct RpcService<'a, C: ?Sized, S, M = Unverified> {
    client: &'a C,
    mode: M,
    service: PhantomData<fn() -> S>,
}

impl<'a, C, S, M> RpcService<'a, C, S, M>
where
    C: QueryClient + ?Sized,
    S: QueryService,
    M: QueryMode,
{
    pub fn new(client: &'a C, mode: M) -> Self {
        Self {
            client,
            mode,
            service: PhantomData,
        }
    }

    pub fn client(&self) -> &'a C {
        self.client
    }

    pub fn mode(&self) -> M {
        self.mode
    }

    /// Calls the method `T` of this service with an already shaped request.
    pub async fn call<T>(&self, request: T::Request) -> Result<T::Response, QueryError>
    where
        T: QueryMethod<Service = S>,
    {
        let path = method_path::<T>();
        let data = request.encode_to_vec();

        debug!(
            "{} query {} with {} request bytes",
            M::NAME,
            path,
            data.len()
        );

        let response = self.mode.query(self.client, &path, data).await?;

        trace!("received {} response bytes from {}", response.len(), path);

        T::Response::decode(response.as_slice()).map_err(|e| QueryError::decode(path, e))
    }
}

impl<C: ?Sized, S, M: Copy> Clone for RpcService<'_, C, S, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ?Sized, S, M: Copy> Copy for RpcService<'_, C, S, M> {}

impl<C: ?Sized, S: QueryService, M: QueryMode> fmt::Debug for RpcService<'_, C, S, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RpcService")
            .field("service", &S::FULL_NAME)
            .field("mode", &M::NAME)
            .finish()
    }
}

/// Declares a query service descriptor and the descriptors of its methods.
///
/// The method markers are placed in their own module, as they share their
/// short names with the messages of the service package.
macro_rules! define_query_service {
    (
        $(#[$meta:meta])*
        pub struct $service:ident = $full_name:literal;

        $(#[$mod_meta:meta])*
        pub mod $methods:ident {
            $(
                $(#[$method_meta:meta])*
                $method:ident($request:ty) -> $response:ty;
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
        pub struct $service;

        impl $crate::rpc::QueryService for $service {
            const FULL_NAME: &'static str = $full_name;
        }

        $(#[$mod_meta])*
        pub mod $methods {
            use super::*;

            $(
                $(#[$method_meta])*
                #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
                pub struct $method;

                impl $crate::rpc::QueryMethod for $method {
                    type Service = $service;
                    type Request = $request;
                    type Response = $response;

                    const NAME: &'static str = stringify!($method);
                }
            )*
        }
    };
}

pub(crate) use define_query_service;
