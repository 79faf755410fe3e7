// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod endpoint;
pub mod query_client;
pub mod reqwest_transport;
pub mod status;
pub mod traits;

pub use endpoint::{Endpoint, EndpointError, ParamValue};
pub use query_client::{ErrorKind, QueryClient, QueryFailure, QueryResult};
pub use reqwest_transport::ReqwestTransport;
pub use status::StatusCategory;
pub use traits::{HttpTransport, RawResponse, TransportError};
